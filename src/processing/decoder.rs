//! # LSB Decoder
//!
//! Recovers a [`Message`] hidden by the encoder. Bits are read in the same
//! scan and channel order, accumulated with `byte = byte * 2 + bit`, and each
//! completed byte is passed through [`reverse8`] to undo the LSB-first layout.
//! The first zero byte ends the message.

use log::debug;

use super::bits::reverse8;
use super::error::{Result, StegoError};
use super::grid::{Channel, PixelGrid, ScanOrder};
use super::message::Message;

/// Recover the message hidden in `grid` using the default [`ScanOrder`].
pub fn decode<G: PixelGrid>(grid: &G) -> Result<Message> {
    decode_with_order(grid, ScanOrder::default())
}

/// Recover the message hidden in `grid`, visiting pixels in `order`.
///
/// # Errors
/// - [`StegoError::NoHiddenMessage`] if the scan ends without a terminator
pub fn decode_with_order<G: PixelGrid>(grid: &G, order: ScanOrder) -> Result<Message> {
    let mut bytes = Vec::new();
    let mut accumulator = 0u8;
    let mut bits_read = 0u64;

    for (x, y) in order.positions(grid.width(), grid.height()) {
        let rgb = grid.get_rgb(x, y);

        for channel in Channel::ALL {
            accumulator = (accumulator << 1) | (rgb[channel.index()] & 1);
            bits_read += 1;

            if bits_read % 8 == 0 {
                let byte = reverse8(accumulator);
                accumulator = 0;

                if byte == 0 {
                    debug!("Terminator found after {} bits", bits_read);
                    // Zero bytes never enter `bytes`, so this cannot fail.
                    return Message::from_bytes(bytes);
                }
                bytes.push(byte);
            }
        }
    }

    Err(StegoError::NoHiddenMessage {
        scanned_bits: bits_read,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::encoder::{encode, encode_with_order};
    use image::{Rgb, RgbImage};

    #[test]
    fn test_round_trip() {
        let mut img = RgbImage::from_pixel(10, 10, Rgb([128, 64, 32]));
        let message = Message::from_text("Hello, World!").unwrap();
        encode(&mut img, &message).unwrap();
        assert_eq!(decode(&img).unwrap(), message);
    }

    #[test]
    fn test_empty_message_round_trip() {
        let mut img = RgbImage::from_pixel(3, 3, Rgb([255, 255, 255]));
        encode(&mut img, &Message::default()).unwrap();
        let decoded = decode(&img).unwrap();
        assert!(decoded.is_empty());
    }

    #[test]
    fn test_zero_lsbs_decode_as_empty_message() {
        let img = RgbImage::from_pixel(3, 3, Rgb([2, 4, 6]));
        assert!(decode(&img).unwrap().is_empty());
    }

    #[test]
    fn test_no_terminator_reported() {
        let img = RgbImage::from_pixel(4, 4, Rgb([255, 255, 255]));
        let err = decode(&img).unwrap_err();
        assert!(matches!(
            err,
            StegoError::NoHiddenMessage { scanned_bits: 48 }
        ));
    }

    #[test]
    fn test_empty_grid_has_no_message() {
        let img = RgbImage::new(0, 0);
        assert!(matches!(
            decode(&img),
            Err(StegoError::NoHiddenMessage { scanned_bits: 0 })
        ));
    }

    #[test]
    fn test_reads_literal_bit_layout() {
        // 'A' = 0b0100_0001 stored LSB first, then a zero byte.
        let bits = [1u8, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        let mut img = RgbImage::new(6, 1);
        for (i, chunk) in bits.chunks(3).enumerate() {
            img.put_pixel(i as u32, 0, Rgb([chunk[0], chunk[1], chunk[2]]));
        }
        assert_eq!(decode(&img).unwrap().to_text(), "A");
    }

    #[test]
    fn test_scan_order_must_match() {
        let mut img = RgbImage::from_pixel(7, 5, Rgb([100, 100, 100]));
        let message = Message::from_text("row").unwrap();
        encode_with_order(&mut img, &message, ScanOrder::RowMajor).unwrap();

        assert_eq!(decode_with_order(&img, ScanOrder::RowMajor).unwrap(), message);
        assert_ne!(
            decode_with_order(&img, ScanOrder::ColumnMajor).ok(),
            Some(message)
        );
    }
}
