//! # Register MAC Error Handling
//!
//! This module defines the RegMacError enum, which represents the different error
//! types that can occur in the regmac-rs crate.

use std::fmt;
use thiserror::Error;

/// Identifies which input field an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Register,
    Site,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Register => f.write_str("register"),
            Field::Site => f.write_str("site"),
        }
    }
}

/// Represents the different error types that can occur in the codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegMacError {
    /// A register or site value lies outside its declared bounds.
    #[error("{field} {value} out of range (0-{max})")]
    OutOfRange {
        field: Field,
        value: String,
        max: u16,
    },

    /// A register or site argument is not a plain decimal number.
    #[error("{field} '{value}' is not a decimal number")]
    InvalidInput { field: Field, value: String },

    /// A two-character octet failed to parse as hex.
    #[error("Malformed octet: '{0}'")]
    MalformedOctet(String),

    /// Bit reversal was handed something other than 8 bits.
    #[error("Invalid bit width: expected 8, got {0}")]
    InvalidBitWidth(usize),

    /// A bit string contained a character other than 0 or 1.
    #[error("Invalid bit pattern: '{0}'")]
    InvalidBitPattern(String),

    /// Decode input starts with neither the canonical nor the non-canonical prefix.
    #[error("Invalid register LAA prefix: '{0}'")]
    InvalidPrefix(String),

    /// Decode input has a known prefix but does not fit the field layout.
    #[error("MAC layout mismatch: '{0}'")]
    LayoutMismatch(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, RegMacError>;
