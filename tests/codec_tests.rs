//! Integration tests for encoding and decoding register MAC addresses.

use proptest::prelude::*;
use regmac_rs::codec::{classify, reverse_octets};
use regmac_rs::util::rev8;
use regmac_rs::{decode, encode, Field, MacForm, RegMacError, Separator};

/// Every register round-trips through both forms for a spread of sites.
#[test]
fn test_roundtrip_every_register() {
    for register in 0..=999u16 {
        for site in [0u16, 1, 9, 10, 137, 999, 1000, 4567, 9000, 9999] {
            let mac = encode(register, site).unwrap();

            let canonical = decode(&mac.canonical.to_string()).unwrap();
            assert_eq!((canonical.register.value(), canonical.site.value()), (register, site));
            assert_eq!(canonical.form, MacForm::Canonical);

            let non_canonical = decode(&mac.non_canonical.to_string()).unwrap();
            assert_eq!(
                (non_canonical.register.value(), non_canonical.site.value()),
                (register, site)
            );
            assert_eq!(non_canonical.form, MacForm::NonCanonical);
        }
    }
}

/// Every site round-trips through both forms for a spread of registers.
#[test]
fn test_roundtrip_every_site() {
    for site in 0..=9999u16 {
        for register in [0u16, 7, 42, 500, 999] {
            let mac = encode(register, site).unwrap();
            let decoded = decode(&mac.non_canonical.format(Separator::None)).unwrap();
            assert_eq!((decoded.register.value(), decoded.site.value()), (register, site));
        }
    }
}

/// The worked example: register 42 at site 137.
#[test]
fn test_register_42_site_137() {
    let mac = encode(42, 137).unwrap();
    assert_eq!(mac.canonical.to_string(), "40:00:01:37:04:20");
    assert_eq!(mac.non_canonical.to_string(), "02:00:80:ec:20:04");

    let decoded = decode("400001370420").unwrap();
    assert_eq!(decoded.register.value(), 42);
    assert_eq!(decoded.site.value(), 137);

    let reversed = reverse_octets("400001370420").unwrap();
    assert!(reversed.starts_with("02"));
    let decoded = decode(&reversed).unwrap();
    assert_eq!((decoded.register.value(), decoded.site.value()), (42, 137));
}

#[test]
fn test_boundaries() {
    for (register, site) in [(0, 0), (999, 9999)] {
        let mac = encode(register, site).unwrap();
        let decoded = decode(&mac.canonical.to_hex()).unwrap();
        assert_eq!((decoded.register.value(), decoded.site.value()), (register, site));
    }

    assert!(matches!(
        encode(1000, 0),
        Err(RegMacError::OutOfRange { field: Field::Register, .. })
    ));
    assert!(matches!(
        encode(0, 10000),
        Err(RegMacError::OutOfRange { field: Field::Site, .. })
    ));
}

#[test]
fn test_separator_tolerance() {
    let inputs = [
        "40:00:01:37:04:20",
        "40-00-01-37-04-20",
        "400001370420",
        "4000.0137.0420",
        "40 00 01 37 04 20",
        "02:00:80:EC:20:04",
        "02-00-80-ec-20-04",
        "020080Ec2004",
    ];
    for input in inputs {
        let decoded = decode(input).unwrap();
        assert_eq!(
            (decoded.register.value(), decoded.site.value()),
            (42, 137),
            "{input}"
        );
    }
}

#[test]
fn test_vendor_mac_is_rejected() {
    assert!(matches!(
        decode("00:1B:21:3A:4F:5E"),
        Err(RegMacError::InvalidPrefix(_))
    ));
    assert!(matches!(classify("ac:de:48"), Err(RegMacError::InvalidPrefix(_))));
}

#[test]
fn test_bit_reversal_fixed_points() {
    for b in 0..=255u8 {
        let bits = format!("{b:08b}");
        let palindrome = bits.chars().rev().collect::<String>() == bits;
        assert_eq!(rev8(b) == b, palindrome, "{b:02X}");
    }
}

proptest! {
    #[test]
    fn prop_roundtrip(register in 0u16..=999, site in 0u16..=9999) {
        let mac = encode(register, site).unwrap();
        for form in [mac.canonical, mac.non_canonical] {
            for separator in [Separator::Colon, Separator::Dash, Separator::None] {
                let decoded = decode(&form.format(separator)).unwrap();
                prop_assert_eq!(decoded.register.value(), register);
                prop_assert_eq!(decoded.site.value(), site);
            }
        }
    }

    #[test]
    fn prop_canonical_prefix(register in 0u16..=999, site in 0u16..=9999) {
        let mac = encode(register, site).unwrap();
        let hex = mac.canonical.to_hex();
        prop_assert!(hex.starts_with("40000"));
        prop_assert_eq!(hex.len(), 12);
        prop_assert!(hex[5..].bytes().all(|b| b.is_ascii_digit()));
        prop_assert!(mac.non_canonical.to_hex().starts_with("02"));
    }

    #[test]
    fn prop_rev8_involution(b in any::<u8>()) {
        prop_assert_eq!(rev8(rev8(b)), b);
    }

    #[test]
    fn prop_decode_never_panics(input in ".{0,40}") {
        let _ = decode(&input);
    }

    #[test]
    fn prop_out_of_range_register(register in 1000u16.., site in 0u16..=9999) {
        let is_register_error = matches!(
            encode(register, site),
            Err(RegMacError::OutOfRange { field: Field::Register, .. })
        );
        prop_assert!(is_register_error);
    }
}
