//! # Steganography Errors
//!
//! [`StegoError`] covers every failure of an encode or decode pass, from a
//! missing carrier file to a scan that never finds a terminator byte.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while hiding or recovering a message.
#[derive(Debug, Error)]
pub enum StegoError {
    /// The input path does not resolve to a readable file.
    #[error("unable to find file: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Message plus terminator does not fit in the carrier's bit-slots.
    #[error("message needs {required_bits} bits but the image only has {available_bits}")]
    CapacityExceeded {
        required_bits: u64,
        available_bits: u64,
    },

    /// The derived output path is the input itself.
    #[error("output path {} would overwrite the input image", .0.display())]
    OutputOverwritesInput(PathBuf),

    /// A full raster scan completed without an all-zero byte.
    #[error("no hidden message found after scanning {scanned_bits} bits")]
    NoHiddenMessage { scanned_bits: u64 },

    /// The image codec failed to read or write the carrier.
    #[error("image codec failure: {0}")]
    Codec(#[from] image::ImageError),

    /// The character cannot be stored as a single 8-bit code unit.
    #[error("character {character:?} at position {position} does not fit in one byte")]
    UnsupportedCharacter { character: char, position: usize },

    /// A zero byte inside the message would end decoding early.
    #[error("message contains a zero byte at position {position}")]
    EmbeddedTerminator { position: usize },
}

pub type Result<T> = std::result::Result<T, StegoError>;
