//! # LSB Steganography Entry Points
//!
//! File and in-memory wrappers around the [`encoder`](super::encoder) and
//! [`decoder`](super::decoder). This is the boundary where the `image` crate
//! loads and saves carriers; the core passes only ever see a [`PixelGrid`].
//!
//! ### Encoding Process
//! 1. Check the input file exists
//! 2. Decode it into an RGBA buffer
//! 3. Hide the message bits and the terminator byte in the RGB LSBs
//! 4. Save the carrier as a lossless image next to the input
//!    (`photo.jpg` -> `encrypted_photo.png` with the default config)
//!
//! ### Decoding Process
//! 1. Load the carrier the same way
//! 2. Read LSBs until an all-zero byte appears
//!
//! ### Capacity
//! An image holds `width * height * 3` bits; one byte of that goes to the
//! terminator, so an 800x600 image fits 179,999 message bytes.
//!
//! Nothing is written to disk unless every step succeeds.
//!
//! [`PixelGrid`]: super::grid::PixelGrid

use image::RgbaImage;
use log::{debug, info, warn};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::decoder::decode_with_order;
use super::encoder::{encode_with_order, EncodeReport};
use super::error::{Result, StegoError};
use super::grid::PixelGrid;
use super::message::Message;
use crate::common::config::{OutputConfig, StegoConfig};

/// Result of hiding a message in a carrier file.
#[derive(Debug, Clone)]
pub struct EncodeOutcome {
    pub output_path: PathBuf,
    pub report: EncodeReport,
}

/// Derive where the encoded carrier for `input` is written.
///
/// The file lands in the same directory as `input`, named
/// `<prefix><stem>.<extension>`.
pub fn output_path_for(input: &Path, output: &OutputConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!("{}{}.{}", output.prefix, stem, output.format.extension());
    input.with_file_name(file_name)
}

/// Number of message bytes that fit in `capacity_bits`, after the terminator.
pub fn message_capacity(capacity_bits: u64) -> u64 {
    (capacity_bits / 8).saturating_sub(1)
}

/// Hide `message` in the image at `input` and save the result.
///
/// # Errors
/// - [`StegoError::FileNotFound`] if `input` is not a file
/// - [`StegoError::Codec`] if the image cannot be read or written
/// - [`StegoError::CapacityExceeded`] if the message does not fit
/// - [`StegoError::OutputOverwritesInput`] if the output name equals `input`
pub fn encode_file(input: &Path, message: &Message, config: &StegoConfig) -> Result<EncodeOutcome> {
    let output_path = output_path_for(input, &config.output);
    if output_path == input {
        return Err(StegoError::OutputOverwritesInput(output_path));
    }

    let mut carrier = open_carrier(input)?;

    info!(
        "📷 Hiding {} bytes in {} ({}x{})",
        message.len(),
        input.display(),
        carrier.width(),
        carrier.height()
    );

    let report = encode_with_order(&mut carrier, message, config.scan.order)?;

    carrier.save_with_format(&output_path, config.output.format.image_format())?;

    info!("✅ Encoded carrier saved to {}", output_path.display());

    Ok(EncodeOutcome {
        output_path,
        report,
    })
}

/// Recover the message hidden in the image at `input`.
pub fn decode_file(input: &Path, config: &StegoConfig) -> Result<Message> {
    let carrier = open_carrier(input)?;

    match decode_with_order(&carrier, config.scan.order) {
        Ok(message) => {
            info!("🔓 Recovered {} bytes from {}", message.len(), input.display());
            Ok(message)
        }
        Err(e) => {
            warn!("No terminator found in {}", input.display());
            Err(e)
        }
    }
}

/// How many message bytes the image at `input` can hold.
pub fn capacity_file(input: &Path) -> Result<u64> {
    let carrier = open_carrier(input)?;
    Ok(message_capacity(carrier.capacity_bits()))
}

/// Hide `text` in an in-memory image and return the encoded carrier bytes.
///
/// # Arguments
/// - `image_bytes`: Raw bytes of the input image (any format supported by `image` crate)
/// - `text`: Text to hide, one byte per character
/// - `config`: Scan order and output format
///
/// # Example
/// ```ignore
/// let image_data = std::fs::read("input.jpg")?;
/// let encoded = embed_text_bytes(&image_data, "Secret message", &StegoConfig::default())?;
/// std::fs::write("output.png", encoded)?;
/// ```
pub fn embed_text_bytes(image_bytes: &[u8], text: &str, config: &StegoConfig) -> Result<Vec<u8>> {
    let message = Message::from_text(text)?;
    let mut carrier = image::load_from_memory(image_bytes)?.to_rgba8();

    encode_with_order(&mut carrier, &message, config.scan.order)?;

    let mut output_bytes = Vec::new();
    carrier.write_to(
        &mut Cursor::new(&mut output_bytes),
        config.output.format.image_format(),
    )?;

    Ok(output_bytes)
}

/// Recover the text hidden in an in-memory image.
pub fn extract_text_bytes(image_bytes: &[u8], config: &StegoConfig) -> Result<String> {
    let carrier = image::load_from_memory(image_bytes)?.to_rgba8();
    let message = decode_with_order(&carrier, config.scan.order)?;
    Ok(message.to_text())
}

fn open_carrier(path: &Path) -> Result<RgbaImage> {
    if !path.is_file() {
        return Err(StegoError::FileNotFound(path.to_path_buf()));
    }
    let carrier = image::open(path)?.to_rgba8();
    debug!(
        "Loaded {} ({} bits of capacity)",
        path.display(),
        carrier.capacity_bits()
    );
    Ok(carrier)
}
