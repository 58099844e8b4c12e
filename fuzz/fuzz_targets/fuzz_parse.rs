#![no_main]

use libfuzzer_sys::fuzz_target;

use bigfib_core::BigInt;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let ours = text.parse::<BigInt>();
    let reference = text.parse::<num_bigint::BigInt>();
    match (ours, reference) {
        (Ok(a), Ok(b)) => {
            assert_eq!(a.to_string(), b.to_string(), "canonical form differs for {text:?}");
            let a2 = &a * &a;
            assert_eq!(a2.to_string(), (&b * &b).to_string());
        }
        (Err(_), Err(_)) => {}
        (ours, reference) => {
            // num-bigint accepts '_' separators; only our acceptance must imply theirs.
            assert!(ours.is_err() || reference.is_ok(), "accepted {text:?}");
        }
    }
});
