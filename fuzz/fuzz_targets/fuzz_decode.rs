#![no_main]

use libfuzzer_sys::fuzz_target;
use regmac_rs::{decode, encode, inspect, MacForm};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Arbitrary text must decode or fail cleanly
    if let Ok(decoded) = decode(text) {
        // Anything that decodes re-encodes to the same normalized digits
        let mac = encode(decoded.register.value(), decoded.site.value())
            .expect("decoded values are in range");
        let expected = match decoded.form {
            MacForm::Canonical => mac.canonical.to_hex(),
            MacForm::NonCanonical => mac.non_canonical.to_hex(),
        };
        assert_eq!(expected, decoded.normalized);
    }

    let _ = inspect(text);
});
