//! Register/site field layout inside a canonical MAC address.
//!
//! The twelve hex digits of a canonical address are laid out as
//!
//! ```text
//! 4 0 0 0 0 s1 s2 s3 r0 r1 r2 s0
//! ```
//!
//! where `r0..r2` are the zero-padded decimal digits of the register and
//! `s0..s3` those of the site. Each decimal digit occupies one nibble.

use std::fmt;
use std::str::FromStr;

use nom::{
    bytes::complete::{tag, take_while_m_n},
    combinator::all_consuming,
    sequence::{preceded, tuple},
    IResult,
};
use serde::Serialize;

use crate::constants::{
    CANONICAL_LAYOUT_PREFIX, MAC_HEX_DIGITS, MAC_OCTETS, REGISTER_DIGITS, REGISTER_MAX,
    SITE_DIGITS, SITE_MAX,
};
use crate::error::{Field, RegMacError, Result};
use crate::mac::MacAddress;

/// Register number, 0-999
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RegisterId(u16);

/// Site identifier, 0-9999
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SiteId(u16);

impl RegisterId {
    pub const MAX: u16 = REGISTER_MAX;

    pub fn new(value: u16) -> Result<Self> {
        check_range(value, Field::Register, Self::MAX).map(Self)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Zero-padded decimal digits, most significant first
    pub fn digits(self) -> [u8; REGISTER_DIGITS] {
        let v = self.0;
        [(v / 100) as u8, (v / 10 % 10) as u8, (v % 10) as u8]
    }
}

impl SiteId {
    pub const MAX: u16 = SITE_MAX;

    pub fn new(value: u16) -> Result<Self> {
        check_range(value, Field::Site, Self::MAX).map(Self)
    }

    pub const fn value(self) -> u16 {
        self.0
    }

    /// Zero-padded decimal digits, most significant first
    pub fn digits(self) -> [u8; SITE_DIGITS] {
        let v = self.0;
        [
            (v / 1000) as u8,
            (v / 100 % 10) as u8,
            (v / 10 % 10) as u8,
            (v % 10) as u8,
        ]
    }
}

impl FromStr for RegisterId {
    type Err = RegMacError;

    fn from_str(s: &str) -> Result<Self> {
        parse_decimal(s, Field::Register, Self::MAX).map(Self)
    }
}

impl FromStr for SiteId {
    type Err = RegMacError;

    fn from_str(s: &str) -> Result<Self> {
        parse_decimal(s, Field::Site, Self::MAX).map(Self)
    }
}

impl fmt::Display for RegisterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn check_range(value: u16, field: Field, max: u16) -> Result<u16> {
    if value > max {
        return Err(RegMacError::OutOfRange {
            field,
            value: value.to_string(),
            max,
        });
    }
    Ok(value)
}

/// Parse free-form decimal text: surrounding whitespace is ignored, leading
/// zeros are allowed, anything else non-numeric is `InvalidInput`.
fn parse_decimal(text: &str, field: Field, max: u16) -> Result<u16> {
    let digits = text.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(RegMacError::InvalidInput {
            field,
            value: text.to_string(),
        });
    }

    let significant = digits.trim_start_matches('0');
    let out_of_range = || RegMacError::OutOfRange {
        field,
        value: digits.to_string(),
        max,
    };
    if significant.len() > SITE_DIGITS {
        return Err(out_of_range());
    }

    let value = if significant.is_empty() {
        0
    } else {
        significant.parse::<u16>().map_err(|_| out_of_range())?
    };
    if value > max {
        return Err(out_of_range());
    }
    Ok(value)
}

/// One nibble position of the canonical layout
#[derive(Debug, Clone, Copy)]
enum Slot {
    Fixed(u8),
    Site(usize),
    Register(usize),
}

const LAYOUT: [Slot; MAC_HEX_DIGITS] = [
    Slot::Fixed(4),
    Slot::Fixed(0),
    Slot::Fixed(0),
    Slot::Fixed(0),
    Slot::Fixed(0),
    Slot::Site(1),
    Slot::Site(2),
    Slot::Site(3),
    Slot::Register(0),
    Slot::Register(1),
    Slot::Register(2),
    Slot::Site(0),
];

/// Pack a register/site pair into its canonical MAC address.
pub fn pack(register: RegisterId, site: SiteId) -> MacAddress {
    let register = register.digits();
    let site = site.digits();

    let nibbles = LAYOUT.map(|slot| match slot {
        Slot::Fixed(n) => n,
        Slot::Site(i) => site[i],
        Slot::Register(i) => register[i],
    });

    let mut octets = [0u8; MAC_OCTETS];
    for (octet, pair) in octets.iter_mut().zip(nibbles.chunks_exact(2)) {
        *octet = pair[0] << 4 | pair[1];
    }
    MacAddress::new(octets)
}

fn is_decimal(c: char) -> bool {
    c.is_ascii_digit()
}

/// Uses `nom` to split canonical hex text into its three digit groups:
/// `site[1..4]`, `register[0..3]` and `site[0]`.
pub fn parse_canonical_layout(input: &str) -> IResult<&str, (&str, &str, &str)> {
    preceded(
        tag(CANONICAL_LAYOUT_PREFIX),
        tuple((
            take_while_m_n(SITE_DIGITS - 1, SITE_DIGITS - 1, is_decimal),
            take_while_m_n(REGISTER_DIGITS, REGISTER_DIGITS, is_decimal),
            take_while_m_n(1, 1, is_decimal),
        )),
    )(input)
}

/// Recover the register/site pair from 12 lowercase canonical hex digits.
pub fn unpack(canonical: &str) -> Result<(RegisterId, SiteId)> {
    let mismatch = || RegMacError::LayoutMismatch(canonical.to_string());

    let (_, (site_tail, register, site_head)) =
        all_consuming(parse_canonical_layout)(canonical).map_err(|_| mismatch())?;

    let register = register.parse::<u16>().map_err(|_| mismatch())?;
    let site = format!("{site_head}{site_tail}")
        .parse::<u16>()
        .map_err(|_| mismatch())?;

    Ok((RegisterId::new(register)?, SiteId::new(site)?))
}
