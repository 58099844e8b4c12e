#![no_main]

use libfuzzer_sys::fuzz_target;
use std::sync::Arc;

use bigfib_core::calculator::{Calculator, FibCalculator};
use bigfib_core::fastdoubling::FastDoubling;
use bigfib_core::matrix::MatrixExponentiation;
use bigfib_core::BigInt;

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Use first 4 bytes as n, capped at 10000 for speed
    let n = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) % 10_000;
    let n = BigInt::from(n);

    let fast: Arc<dyn Calculator> = Arc::new(FibCalculator::new(Arc::new(FastDoubling::new())));
    let matrix: Arc<dyn Calculator> =
        Arc::new(FibCalculator::new(Arc::new(MatrixExponentiation::new())));

    let f = fast.calculate(&n).expect("fast doubling failed");
    let m = matrix.calculate(&n).expect("matrix failed");
    assert_eq!(f, m, "FastDoubling != Matrix at n={n}");
});
