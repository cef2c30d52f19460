//! Register MAC Constants
//!
//! Prefixes, field widths and bounds for the register/site address layout.

/// Number of octets in a MAC address
pub const MAC_OCTETS: usize = 6;

/// Number of hex digits in a MAC address
pub const MAC_HEX_DIGITS: usize = MAC_OCTETS * 2;

/// Bits in one octet
pub const OCTET_BITS: usize = 8;

/// Constant lead-in of every canonical hex string (`40:00:0`)
pub const CANONICAL_LAYOUT_PREFIX: &str = "40000";

/// Prefix used to classify decode input as canonical
pub const CANONICAL_PREFIX: &str = "4000";

/// Prefix used to classify decode input as non-canonical (LAA bit reversed)
pub const NON_CANONICAL_PREFIX: &str = "02";

/// First octet of a canonical address
pub const CANONICAL_FIRST_OCTET: u8 = 0x40;

/// First octet of a non-canonical address
pub const NON_CANONICAL_FIRST_OCTET: u8 = 0x02;

/// Decimal digits of a register number
pub const REGISTER_DIGITS: usize = 3;

/// Decimal digits of a site identifier
pub const SITE_DIGITS: usize = 4;

/// Highest encodable register number
pub const REGISTER_MAX: u16 = 999;

/// Highest encodable site identifier
pub const SITE_MAX: u16 = 9999;
