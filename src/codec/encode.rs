//! Register/site to MAC address encoding.

use log::debug;
use serde::Serialize;

use crate::codec::layout::{self, RegisterId, SiteId};
use crate::error::Result;
use crate::mac::MacAddress;

/// Both renderings of one register/site pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EncodedMac {
    pub register: RegisterId,
    pub site: SiteId,
    /// Standard bit order, always `40:00:0...`
    pub canonical: MacAddress,
    /// Every octet of `canonical` bit-reversed, always `02:00:...`
    pub non_canonical: MacAddress,
}

/// Encode a register number (0-999) and site identifier (0-9999).
///
/// # Examples
///
/// ```rust
/// use regmac_rs::encode;
///
/// let mac = encode(42, 137).unwrap();
/// assert_eq!(mac.canonical.to_string(), "40:00:01:37:04:20");
/// assert_eq!(mac.non_canonical.to_string(), "02:00:80:ec:20:04");
/// ```
pub fn encode(register: u16, site: u16) -> Result<EncodedMac> {
    Ok(encode_ids(RegisterId::new(register)?, SiteId::new(site)?))
}

/// Encode an already validated register/site pair.
pub fn encode_ids(register: RegisterId, site: SiteId) -> EncodedMac {
    let canonical = layout::pack(register, site);
    let non_canonical = canonical.bit_reversed();

    debug!(
        "Encoded register {register} site {site}: canonical={canonical} non_canonical={non_canonical}"
    );

    EncodedMac {
        register,
        site,
        canonical,
        non_canonical,
    }
}
