//! # regmac-rs - Register/Site Identifiers in Locally Administered MAC Addresses
//!
//! The regmac-rs crate packs a three-digit register number and a four-digit site
//! identifier into a locally administered MAC address, and recovers them from
//! either the canonical (`40:00:...`) or the bit-reversed non-canonical
//! (`02:00:...`) rendering of that address.
//!
//! ## Features
//!
//! - Encode a register/site pair into canonical and non-canonical MACs
//! - Decode either form, with any separators and any case
//! - Per-octet bit view for inspecting the canonical/non-canonical relation
//! - Support for logging and error handling
//!
//! ## Usage
//!
//! ```rust
//! use regmac_rs::{decode, encode};
//!
//! let mac = encode(42, 137).unwrap();
//! assert_eq!(mac.canonical.to_string(), "40:00:01:37:04:20");
//!
//! let decoded = decode(&mac.non_canonical.to_string()).unwrap();
//! assert_eq!((decoded.register.value(), decoded.site.value()), (42, 137));
//! ```

pub mod codec;
pub mod constants;
pub mod error;
pub mod logging;
pub mod mac;
pub mod util;

pub use crate::error::{Field, RegMacError, Result};
pub use crate::logging::{init_logger, log_info};

pub use codec::{decode, encode, inspect, BitView, DecodedMac, EncodedMac, RegisterId, SiteId};
pub use mac::{MacAddress, MacForm, Separator};
