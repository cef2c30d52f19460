//! # Register MAC Codec
//!
//! Encoding packs a register number and site identifier into a canonical
//! locally administered MAC address and derives its bit-reversed
//! (non-canonical) twin. Decoding accepts either form and recovers the pair.

pub mod decode;
pub mod encode;
pub mod inspect;
pub mod layout;

pub use decode::{classify, decode, reverse_octets, DecodedMac};
pub use encode::{encode, encode_ids, EncodedMac};
pub use inspect::{inspect, BitView, OctetBits};
pub use layout::{pack, unpack, RegisterId, SiteId};
