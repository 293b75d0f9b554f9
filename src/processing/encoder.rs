//! # LSB Encoder
//!
//! Hides a [`Message`] in the least significant bits of a [`PixelGrid`].
//!
//! ## Bit Layout
//!
//! Pixels are visited in [`ScanOrder`], channels in R, G, B order, one bit per
//! channel. Each message byte is emitted least-significant bit first and the
//! message is followed by one all-zero terminator byte. Every visited pixel has
//! all three LSBs cleared before its bits are OR'd in, including the pixel
//! holding the last terminator bit. Pixels after that one keep their original
//! values.
//!
//! ## State Machine
//!
//! [`BitCursor`] tracks which bit comes next:
//!
//! ```text
//! Hiding ──(byte boundary, message exhausted)──> Terminating ──(8 zero bits)──> Done
//!   ^  │
//!   └──┘ (byte boundary, bytes left)
//! ```

use log::debug;
use serde::Serialize;

use super::error::{Result, StegoError};
use super::grid::{Channel, PixelGrid, ScanOrder};
use super::message::Message;

/// What the next emitted bit belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeState {
    /// Bits of a message byte.
    Hiding,
    /// Bits of the zero terminator byte.
    Terminating,
    /// Terminator fully emitted; no more bits.
    Done,
}

/// Produces the bit stream for one message: its bytes LSB first, then a
/// zero byte.
#[derive(Debug)]
pub struct BitCursor<'a> {
    message: &'a [u8],
    next_byte: usize,
    current: u8,
    bits_emitted: u64,
    state: EncodeState,
}

impl<'a> BitCursor<'a> {
    pub fn new(message: &'a [u8]) -> Self {
        let mut cursor = Self {
            message,
            next_byte: 0,
            current: 0,
            bits_emitted: 0,
            state: EncodeState::Terminating,
        };
        cursor.state = cursor.load_next_byte();
        cursor
    }

    pub fn state(&self) -> EncodeState {
        self.state
    }

    pub fn bits_emitted(&self) -> u64 {
        self.bits_emitted
    }

    /// Next bit to store, or `None` once the terminator has been emitted.
    pub fn next_bit(&mut self) -> Option<u8> {
        let bit = match self.state {
            EncodeState::Done => return None,
            EncodeState::Hiding => {
                let bit = self.current & 1;
                self.current >>= 1;
                bit
            }
            EncodeState::Terminating => 0,
        };

        self.bits_emitted += 1;
        if self.bits_emitted % 8 == 0 {
            self.state = match self.state {
                EncodeState::Terminating => EncodeState::Done,
                _ => self.load_next_byte(),
            };
        }

        Some(bit)
    }

    fn load_next_byte(&mut self) -> EncodeState {
        match self.message.get(self.next_byte) {
            Some(&byte) => {
                self.current = byte;
                self.next_byte += 1;
                EncodeState::Hiding
            }
            None => EncodeState::Terminating,
        }
    }
}

/// Summary of a completed encode pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodeReport {
    pub message_bytes: usize,
    /// Message bits plus the 8 terminator bits.
    pub bits_written: u64,
    pub pixels_touched: u64,
    pub capacity_bits: u64,
}

/// Number of bit-slots needed for a message of `message_len` bytes plus its
/// terminator.
pub fn required_bits(message_len: usize) -> u64 {
    (message_len as u64 + 1) * 8
}

/// Hide `message` in `grid` using the default [`ScanOrder`].
pub fn encode<G: PixelGrid>(grid: &mut G, message: &Message) -> Result<EncodeReport> {
    encode_with_order(grid, message, ScanOrder::default())
}

/// Hide `message` in `grid`, visiting pixels in `order`.
///
/// The capacity check happens before any pixel is touched, so on
/// [`StegoError::CapacityExceeded`] the grid is unchanged.
pub fn encode_with_order<G: PixelGrid>(
    grid: &mut G,
    message: &Message,
    order: ScanOrder,
) -> Result<EncodeReport> {
    let available_bits = grid.capacity_bits();
    let required_bits = required_bits(message.len());
    if required_bits > available_bits {
        return Err(StegoError::CapacityExceeded {
            required_bits,
            available_bits,
        });
    }

    let mut cursor = BitCursor::new(message.as_bytes());
    let mut pixels_touched = 0u64;

    for (x, y) in order.positions(grid.width(), grid.height()) {
        if cursor.state() == EncodeState::Done {
            break;
        }

        let mut rgb = grid.get_rgb(x, y);
        for value in rgb.iter_mut() {
            *value -= *value & 1;
        }
        for channel in Channel::ALL {
            let Some(bit) = cursor.next_bit() else {
                break;
            };
            rgb[channel.index()] |= bit;
        }
        grid.set_rgb(x, y, rgb);
        pixels_touched += 1;
    }

    if cursor.state() != EncodeState::Done {
        return Err(StegoError::CapacityExceeded {
            required_bits,
            available_bits,
        });
    }

    debug!(
        "Hid {} bytes in {} bits across {} pixels ({} bits available)",
        message.len(),
        cursor.bits_emitted(),
        pixels_touched,
        available_bits
    );

    Ok(EncodeReport {
        message_bytes: message.len(),
        bits_written: cursor.bits_emitted(),
        pixels_touched,
        capacity_bits: available_bits,
    })
}
