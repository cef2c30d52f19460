//! # Hex Octet Utilities
//!
//! Conversions between two-hex-digit octet strings and bytes, plus the
//! normalisation applied to any MAC-like text before it is classified.
//!
//! ## Usage
//!
//! ```rust
//! use regmac_rs::util::hex::{octet_to_byte, byte_to_octet, normalize_hex};
//!
//! assert_eq!(octet_to_byte("EC").unwrap(), 0xEC);
//! assert_eq!(byte_to_octet(0x02), "02");
//! assert_eq!(normalize_hex("40:00-01.37 04:20"), "400001370420");
//! ```

use crate::error::{RegMacError, Result};

/// Convert a single two-digit hex octet to a byte.
///
/// Accepts upper- and lowercase digits. Anything that is not exactly two hex
/// digits (signs, whitespace, a single digit) is a `MalformedOctet`.
pub fn octet_to_byte(octet: &str) -> Result<u8> {
    let mut byte = [0u8; 1];
    hex::decode_to_slice(octet, &mut byte)
        .map_err(|_| RegMacError::MalformedOctet(octet.to_string()))?;
    Ok(byte[0])
}

/// Convert a byte to its two-digit lowercase hex octet.
pub fn byte_to_octet(byte: u8) -> String {
    hex::encode([byte])
}

/// Strip every non-hex character and lowercase the remainder.
pub fn normalize_hex(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_hexdigit())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Split hex text into two-digit octets and convert each to a byte.
///
/// A trailing half octet is reported as `MalformedOctet`.
pub fn split_octets(hex_str: &str) -> Result<Vec<u8>> {
    hex_str
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let octet = std::str::from_utf8(pair)
                .map_err(|_| RegMacError::MalformedOctet(String::from_utf8_lossy(pair).into_owned()))?;
            octet_to_byte(octet)
        })
        .collect()
}

/// Render bytes as lowercase octets joined by `separator`.
pub fn join_octets(data: &[u8], separator: &str) -> String {
    data.iter()
        .map(|&b| byte_to_octet(b))
        .collect::<Vec<_>>()
        .join(separator)
}
