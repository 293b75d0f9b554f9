//! Bit-order helpers shared by the decoder.

/// Reverse the order of the 8 bits in `value`.
///
/// The encoder emits each byte least-significant bit first, while the decoder
/// accumulates bits with `acc = acc * 2 + bit`, which leaves the first bit read
/// in the most significant position. Reversing the accumulated byte restores
/// the original value.
pub fn reverse8(value: u8) -> u8 {
    let mut value = value;
    let mut reversed = 0u8;
    for _ in 0..8 {
        reversed = reversed * 2 + (value & 1);
        value >>= 1;
    }
    reversed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse8_known_values() {
        assert_eq!(reverse8(0b0000_0001), 0b1000_0000);
        assert_eq!(reverse8(0b1100_0000), 0b0000_0011);
        assert_eq!(reverse8(0b1010_0000), 0b0000_0101);
        assert_eq!(reverse8(0x00), 0x00);
        assert_eq!(reverse8(0xFF), 0xFF);
        assert_eq!(reverse8(0x41), 0x82);
    }

    #[test]
    fn test_reverse8_is_involution() {
        for x in 0..=u8::MAX {
            assert_eq!(reverse8(reverse8(x)), x);
        }
    }

    #[test]
    fn test_reverse8_matches_std() {
        for x in 0..=u8::MAX {
            assert_eq!(reverse8(x), x.reverse_bits());
        }
    }
}
