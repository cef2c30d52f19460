//! # Utility Modules
//!
//! Bit manipulation and hex octet helpers shared by the encode and decode
//! paths of the register codec.

pub mod bitrev;
pub mod hex;

// Re-export commonly used functions
pub use self::bitrev::{bits_to_byte, byte_to_bits, rev8, rev8_slice, reverse_bit_string};
pub use self::hex::{byte_to_octet, join_octets, normalize_hex, octet_to_byte, split_octets};
