//! # Pixel Grid Abstraction
//!
//! The encoder and decoder only need per-pixel RGB access over a fixed-size
//! grid. [`PixelGrid`] captures that capability; it is implemented for the
//! `image` crate's 8-bit RGB and RGBA buffers. Alpha is carried through
//! untouched.
//!
//! ## Traversal
//!
//! Both directions walk the grid in the same [`ScanOrder`] and, inside each
//! pixel, visit channels in the fixed [`Channel::ALL`] order (R, G, B).
//! Three bit-slots per pixel give a capacity of `width * height * 3` bits.

use image::{ImageBuffer, Rgb, RgbImage, Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

/// Rectangular grid of pixels with three 8-bit color channels.
pub trait PixelGrid {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Read the `[r, g, b]` values at `(x, y)`.
    fn get_rgb(&self, x: u32, y: u32) -> [u8; 3];

    /// Overwrite the `[r, g, b]` values at `(x, y)`.
    fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]);

    /// Total number of LSB slots available for hidden bits.
    fn capacity_bits(&self) -> u64 {
        u64::from(self.width()) * u64::from(self.height()) * 3
    }
}

impl PixelGrid for RgbImage {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn get_rgb(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }

    fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.put_pixel(x, y, Rgb(rgb));
    }
}

impl PixelGrid for RgbaImage {
    fn width(&self) -> u32 {
        ImageBuffer::width(self)
    }

    fn height(&self) -> u32 {
        ImageBuffer::height(self)
    }

    fn get_rgb(&self, x: u32, y: u32) -> [u8; 3] {
        let [r, g, b, _] = self.get_pixel(x, y).0;
        [r, g, b]
    }

    fn set_rgb(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let alpha = self.get_pixel(x, y).0[3];
        self.put_pixel(x, y, Rgba([rgb[0], rgb[1], rgb[2], alpha]));
    }
}

/// One of the three color channels that carry hidden bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Channels in the order bits are written and read within a pixel.
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Position of this channel inside an `[r, g, b]` triple.
    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }
}

/// Raster traversal shared by encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    /// Outer loop over columns (x), inner loop over rows (y).
    #[default]
    ColumnMajor,
    /// Outer loop over rows (y), inner loop over columns (x).
    RowMajor,
}

impl ScanOrder {
    /// Every `(x, y)` coordinate of a `width` x `height` grid, in scan order.
    pub fn positions(self, width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
        let (outer, inner) = match self {
            ScanOrder::ColumnMajor => (width, height),
            ScanOrder::RowMajor => (height, width),
        };
        (0..outer).flat_map(move |o| {
            (0..inner).map(move |i| match self {
                ScanOrder::ColumnMajor => (o, i),
                ScanOrder::RowMajor => (i, o),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_major_positions() {
        let positions: Vec<_> = ScanOrder::ColumnMajor.positions(2, 3).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]
        );
    }

    #[test]
    fn test_row_major_positions() {
        let positions: Vec<_> = ScanOrder::RowMajor.positions(2, 3).collect();
        assert_eq!(
            positions,
            vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]
        );
    }

    #[test]
    fn test_empty_grid_has_no_positions() {
        assert_eq!(ScanOrder::ColumnMajor.positions(0, 5).count(), 0);
        assert_eq!(ScanOrder::RowMajor.positions(5, 0).count(), 0);
    }

    #[test]
    fn test_channel_order() {
        assert_eq!(Channel::ALL, [Channel::Red, Channel::Green, Channel::Blue]);
        let indices: Vec<_> = Channel::ALL.iter().map(|c| c.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_rgba_grid_keeps_alpha() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 77]));
        img.set_rgb(0, 0, [9, 8, 7]);
        assert_eq!(img.get_pixel(0, 0).0, [9, 8, 7, 77]);
        assert_eq!(img.get_rgb(0, 0), [9, 8, 7]);
    }

    #[test]
    fn test_capacity_bits() {
        let img = RgbImage::new(4, 5);
        assert_eq!(img.capacity_bits(), 60);
    }
}
