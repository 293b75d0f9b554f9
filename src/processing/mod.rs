//! # Image Processing and Steganography
//!
//! This module hides text in, and recovers it from, the least significant bits
//! of an image's RGB channels.
//!
//! - [`grid`]: pixel access and the shared scan/channel order
//! - [`encoder`] / [`decoder`]: the bit packing and unpacking passes
//! - [`steganography`]: file and in-memory entry points

pub mod bits;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod grid;
pub mod message;
pub mod steganography;

// Re-export main functions for convenience
pub use decoder::{decode, decode_with_order};
pub use encoder::{encode, encode_with_order, EncodeReport, EncodeState};
pub use error::StegoError;
pub use grid::{Channel, PixelGrid, ScanOrder};
pub use message::Message;
pub use steganography::{decode_file, embed_text_bytes, encode_file, extract_text_bytes};
