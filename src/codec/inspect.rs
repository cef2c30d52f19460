//! Per-octet bit view of a MAC address.
//!
//! Shows each octet next to its binary pattern and the bit-reversed pattern,
//! which is how the canonical and non-canonical forms relate.

use serde::Serialize;

use crate::error::Result;
use crate::mac::{MacAddress, MacForm};
use crate::util::{bits_to_byte, byte_to_bits, byte_to_octet, reverse_bit_string};

/// One row of the bit view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OctetBits {
    pub octet: String,
    pub bits: String,
    pub reversed_bits: String,
    pub reversed_octet: String,
}

/// Bit view of a whole address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitView {
    pub mac: MacAddress,
    pub reversed: MacAddress,
    pub form: Option<MacForm>,
    pub octets: Vec<OctetBits>,
}

/// Build the bit view of any MAC-like string (12 hex digits, any separators).
pub fn inspect(mac: &str) -> Result<BitView> {
    let mac: MacAddress = mac.parse()?;

    let octets = mac
        .octets()
        .iter()
        .map(|&byte| -> Result<OctetBits> {
            let bits = byte_to_bits(byte);
            let reversed_bits = reverse_bit_string(&bits)?;
            let reversed_octet = byte_to_octet(bits_to_byte(&reversed_bits)?);
            Ok(OctetBits {
                octet: byte_to_octet(byte),
                bits,
                reversed_bits,
                reversed_octet,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(BitView {
        mac,
        reversed: mac.bit_reversed(),
        form: mac.form(),
        octets,
    })
}
