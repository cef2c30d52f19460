//! MAC address value type and its textual renderings.
//!
//! A [`MacAddress`] is six octets. It parses leniently (any separators, any
//! case) and renders lowercase with a chosen [`Separator`].

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Serialize, Serializer};

use crate::constants::{
    CANONICAL_FIRST_OCTET, MAC_HEX_DIGITS, MAC_OCTETS, NON_CANONICAL_FIRST_OCTET,
};
use crate::error::{RegMacError, Result};
use crate::util::{join_octets, normalize_hex, rev8_slice, split_octets};

/// Separator placed between octets when rendering an address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Separator {
    /// `40:00:01:37:04:20`
    #[default]
    Colon,
    /// `40-00-01-37-04-20`
    Dash,
    /// `400001370420`
    None,
}

impl Separator {
    pub fn as_str(self) -> &'static str {
        match self {
            Separator::Colon => ":",
            Separator::Dash => "-",
            Separator::None => "",
        }
    }
}

/// Bit order an address is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MacForm {
    /// Standard Ethernet order, MSB first per octet
    Canonical,
    /// Every octet bit-reversed
    NonCanonical,
}

impl fmt::Display for MacForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MacForm::Canonical => f.write_str("canonical"),
            MacForm::NonCanonical => f.write_str("non-canonical"),
        }
    }
}

/// Six-octet hardware address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MacAddress([u8; MAC_OCTETS]);

impl MacAddress {
    pub const fn new(octets: [u8; MAC_OCTETS]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; MAC_OCTETS] {
        self.0
    }

    /// Parse exactly 12 hex digits with no separators.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        if hex_str.len() != MAC_HEX_DIGITS {
            return Err(RegMacError::LayoutMismatch(hex_str.to_string()));
        }

        let mut octets = [0u8; MAC_OCTETS];
        octets.copy_from_slice(&split_octets(hex_str)?);
        Ok(Self(octets))
    }

    /// Lowercase hex digits without separators
    pub fn to_hex(&self) -> String {
        join_octets(&self.0, Separator::None.as_str())
    }

    /// Lowercase hex digits joined by `separator`
    pub fn format(&self, separator: Separator) -> String {
        join_octets(&self.0, separator.as_str())
    }

    /// The same address with the bits of every octet reversed.
    ///
    /// Octet order is kept. Applying this twice yields the original address.
    pub fn bit_reversed(&self) -> Self {
        let mut octets = self.0;
        rev8_slice(&mut octets);
        Self(octets)
    }

    /// Bit order implied by the lead octets, if recognised.
    pub fn form(&self) -> Option<MacForm> {
        match self.0 {
            [CANONICAL_FIRST_OCTET, 0x00, ..] => Some(MacForm::Canonical),
            [NON_CANONICAL_FIRST_OCTET, ..] => Some(MacForm::NonCanonical),
            _ => None,
        }
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Separator::Colon))
    }
}

impl FromStr for MacAddress {
    type Err = RegMacError;

    /// Lenient parse: separators are dropped, case is ignored.
    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(&normalize_hex(s))
    }
}

impl Serialize for MacAddress {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
