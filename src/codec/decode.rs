//! MAC address to register/site decoding.
//!
//! Decoding runs in a single pass:
//!
//! ```text
//! Start -> Normalized -> {Canonical, NonCanonical}
//!       -> BitReversedToCanonical (non-canonical only)
//!       -> LayoutParsed -> Done
//! ```
//!
//! Any step may stop with `InvalidPrefix`, `MalformedOctet` or
//! `LayoutMismatch`.

use log::{debug, trace};
use serde::Serialize;

use crate::codec::layout::{self, RegisterId, SiteId};
use crate::constants::{CANONICAL_PREFIX, MAC_HEX_DIGITS, NON_CANONICAL_PREFIX};
use crate::error::{RegMacError, Result};
use crate::mac::MacForm;
use crate::util::{byte_to_bits, byte_to_octet, normalize_hex, rev8, split_octets};

/// Register/site pair recovered from a MAC address
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedMac {
    pub register: RegisterId,
    pub site: SiteId,
    /// Bit order the input was written in
    pub form: MacForm,
    /// Input with separators stripped, lowercased
    pub normalized: String,
}

/// Classify normalised hex text by its prefix.
pub fn classify(normalized: &str) -> Result<MacForm> {
    if normalized.starts_with(CANONICAL_PREFIX) {
        Ok(MacForm::Canonical)
    } else if normalized.starts_with(NON_CANONICAL_PREFIX) {
        Ok(MacForm::NonCanonical)
    } else {
        Err(RegMacError::InvalidPrefix(normalized.to_string()))
    }
}

/// Reverse the bits of every octet of 12 hex digits, keeping octet order.
///
/// The operation is its own inverse, so it maps non-canonical text to
/// canonical text and back.
pub fn reverse_octets(hex_str: &str) -> Result<String> {
    if hex_str.len() != MAC_HEX_DIGITS {
        return Err(RegMacError::LayoutMismatch(hex_str.to_string()));
    }

    Ok(split_octets(hex_str)?
        .into_iter()
        .map(|byte| {
            let reversed = rev8(byte);
            trace!(
                "octet {:02x} {} -> {} {:02x}",
                byte,
                byte_to_bits(byte),
                byte_to_bits(reversed),
                reversed
            );
            byte_to_octet(reversed)
        })
        .collect())
}

/// Decode a MAC-like string into its register and site.
///
/// Separators and case are ignored. Canonical (`40:00:...`) and non-canonical
/// (`02:00:...`) input decode to the same pair.
///
/// # Examples
///
/// ```rust
/// use regmac_rs::decode;
///
/// let decoded = decode("02-00-80-EC-20-04").unwrap();
/// assert_eq!(decoded.register.value(), 42);
/// assert_eq!(decoded.site.value(), 137);
/// ```
pub fn decode(mac: &str) -> Result<DecodedMac> {
    let normalized = normalize_hex(mac);
    debug!("Normalized '{mac}' to '{normalized}'");

    let form = classify(&normalized)?;
    debug!("Classified {normalized} as {form}");

    if normalized.len() != MAC_HEX_DIGITS {
        return Err(RegMacError::LayoutMismatch(normalized));
    }

    let canonical = match form {
        MacForm::Canonical => normalized.clone(),
        MacForm::NonCanonical => {
            let canonical = reverse_octets(&normalized)?;
            debug!("Bit-reversed {normalized} to canonical {canonical}");
            canonical
        }
    };

    let (register, site) = layout::unpack(&canonical)?;
    debug!("Parsed {canonical}: register {register} site {site}");

    Ok(DecodedMac {
        register,
        site,
        form,
        normalized,
    })
}
