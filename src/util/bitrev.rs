//! # Bit Reversal Utilities
//!
//! This module provides the per-octet bit reversal that maps a canonical
//! (MSB-first) MAC address onto its non-canonical rendering and back.
//!
//! ## Background
//!
//! Ethernet transmits each octet least-significant bit first, Token Ring most
//! significant bit first. Tools that display addresses in Token Ring order show
//! every octet with its bits mirrored, so `40:00:...` appears as `02:00:...`.
//!
//! ## Usage
//!
//! ```rust
//! use regmac_rs::util::bitrev::{rev8, byte_to_bits};
//!
//! assert_eq!(rev8(0x40), 0x02); // canonical LAA lead octet
//! assert_eq!(byte_to_bits(0x37), "00110111");
//! ```

use crate::constants::OCTET_BITS;
use crate::error::{RegMacError, Result};

/// Reverse bits in a byte (MSB-first to LSB-first conversion)
///
/// # Examples
///
/// ```rust
/// use regmac_rs::util::bitrev::rev8;
///
/// assert_eq!(rev8(0b10000000), 0b00000001);
/// assert_eq!(rev8(0b10101010), 0b01010101);
/// assert_eq!(rev8(0x37), 0xEC);
/// ```
#[inline]
pub fn rev8(mut byte: u8) -> u8 {
    // Swap nibbles (4-bit groups)
    byte = (byte & 0xF0) >> 4 | (byte & 0x0F) << 4;

    // Swap pairs within nibbles (2-bit groups)
    byte = (byte & 0xCC) >> 2 | (byte & 0x33) << 2;

    // Swap individual bits within pairs (1-bit groups)
    byte = (byte & 0xAA) >> 1 | (byte & 0x55) << 1;

    byte
}

/// Reverse a slice of bytes in-place
pub fn rev8_slice(data: &mut [u8]) {
    for byte in data.iter_mut() {
        *byte = rev8(*byte);
    }
}

/// Render a byte as its 8-character binary string, MSB first.
pub fn byte_to_bits(byte: u8) -> String {
    (0..OCTET_BITS)
        .rev()
        .map(|i| if (byte >> i) & 1 == 1 { '1' } else { '0' })
        .collect()
}

/// Parse an 8-character binary string (MSB first) back into a byte.
///
/// Any length other than 8 is rejected with `InvalidBitWidth`, any character
/// other than `0`/`1` with `InvalidBitPattern`.
pub fn bits_to_byte(bits: &str) -> Result<u8> {
    let width = bits.chars().count();
    if width != OCTET_BITS {
        return Err(RegMacError::InvalidBitWidth(width));
    }

    bits.chars().try_fold(0u8, |acc, c| match c {
        '0' => Ok(acc << 1),
        '1' => Ok(acc << 1 | 1),
        _ => Err(RegMacError::InvalidBitPattern(bits.to_string())),
    })
}

/// Reverse an 8-character binary string.
///
/// Validation matches `bits_to_byte`; the reversal itself goes through `rev8`.
pub fn reverse_bit_string(bits: &str) -> Result<String> {
    bits_to_byte(bits).map(|byte| byte_to_bits(rev8(byte)))
}

/// Whether a byte reads the same with its bits reversed.
#[inline]
pub fn is_bit_palindrome(byte: u8) -> bool {
    rev8(byte) == byte
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rev8_basic() {
        // Test with all zeros and all ones
        assert_eq!(rev8(0b00000000), 0b00000000);
        assert_eq!(rev8(0b11111111), 0b11111111);

        // Test single bit positions
        for i in 0..8 {
            assert_eq!(rev8(1 << i), 1 << (7 - i));
        }
    }

    #[test]
    fn test_rev8_address_octets() {
        assert_eq!(rev8(0x40), 0x02);
        assert_eq!(rev8(0x02), 0x40);
        assert_eq!(rev8(0x01), 0x80);
        assert_eq!(rev8(0x37), 0xEC);
        assert_eq!(rev8(0x04), 0x20);
        assert_eq!(rev8(0x20), 0x04);
    }

    #[test]
    fn test_rev8_invertible() {
        for i in 0..=255u8 {
            assert_eq!(rev8(rev8(i)), i);
        }
    }

    #[test]
    fn test_fixed_points_are_palindromes() {
        let fixed: Vec<u8> = (0..=255u8).filter(|&b| is_bit_palindrome(b)).collect();
        assert_eq!(fixed.len(), 16);
        for b in [0x00, 0xFF, 0x18, 0x24, 0x3C, 0x42, 0x5A, 0x66, 0x7E, 0x81, 0x99, 0xA5, 0xBD, 0xC3, 0xDB, 0xE7] {
            assert!(fixed.contains(&b), "{b:02X} should be a fixed point");
        }
    }

    #[test]
    fn test_rev8_slice() {
        let mut data = [0x40, 0x00, 0x01, 0x37, 0x04, 0x20];
        rev8_slice(&mut data);
        assert_eq!(data, [0x02, 0x00, 0x80, 0xEC, 0x20, 0x04]);
    }

    #[test]
    fn test_bits_roundtrip_all_bytes() {
        for b in 0..=255u8 {
            let bits = byte_to_bits(b);
            assert_eq!(bits.len(), 8);
            let reversed = reverse_bit_string(&bits).unwrap();
            assert_eq!(bits_to_byte(&reversed).unwrap(), rev8(b));
            assert_eq!(bits_to_byte(&bits).unwrap(), b);
        }
    }

    #[test]
    fn test_bit_width_errors() {
        assert_eq!(bits_to_byte(""), Err(RegMacError::InvalidBitWidth(0)));
        assert_eq!(bits_to_byte("1010"), Err(RegMacError::InvalidBitWidth(4)));
        assert_eq!(
            reverse_bit_string("101010101"),
            Err(RegMacError::InvalidBitWidth(9))
        );
    }

    #[test]
    fn test_bit_pattern_errors() {
        assert_eq!(
            bits_to_byte("0101x101"),
            Err(RegMacError::InvalidBitPattern("0101x101".to_string()))
        );
    }
}
