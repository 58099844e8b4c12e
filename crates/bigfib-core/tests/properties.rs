//! Property-based tests for the arithmetic core and both engines.
//!
//! `num-bigint` serves as the reference implementation for arithmetic.

use std::cmp::Ordering;

use num_bigint::BigInt as RefInt;
use proptest::prelude::*;

use bigfib_core::calculator::CoreCalculator;
use bigfib_core::fastdoubling::{fibonacci_via_fast_doubling, FastDoubling};
use bigfib_core::matrix::{fibonacci_via_matrix, MatrixExponentiation};
use bigfib_core::BigInt;

fn to_ref(value: &BigInt) -> RefInt {
    value.to_string().parse().unwrap()
}

/// Signed decimal numerals up to ~600 digits, with optional leading zeros.
fn numeral() -> impl Strategy<Value = String> {
    ("[-+]?", "0{0,3}", "[1-9][0-9]{0,600}|0").prop_map(|(s, z, d)| format!("{s}{z}{d}"))
}

fn big_int() -> impl Strategy<Value = BigInt> {
    numeral().prop_map(|s| s.parse().unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Parsing then formatting yields the canonical form.
    #[test]
    fn decimal_round_trip_is_canonical(s in numeral()) {
        let parsed: BigInt = s.parse().unwrap();
        let reference: RefInt = s.parse().unwrap();
        prop_assert_eq!(parsed.to_decimal_string(), reference.to_string());
    }

    /// Addition, subtraction and multiplication agree with num-bigint.
    #[test]
    fn arithmetic_matches_reference(a in big_int(), b in big_int()) {
        let (ra, rb) = (to_ref(&a), to_ref(&b));
        prop_assert_eq!(to_ref(&(&a + &b)), &ra + &rb);
        prop_assert_eq!(to_ref(&(&a - &b)), &ra - &rb);
        prop_assert_eq!(to_ref(&(&a * &b)), &ra * &rb);
    }

    /// Comparison is antisymmetric, reflexive and matches num-bigint.
    #[test]
    fn compare_is_total_order(a in big_int(), b in big_int()) {
        prop_assert_eq!(a.compare(&a), Ordering::Equal);
        prop_assert_eq!(a.compare(&b), b.compare(&a).reverse());
        prop_assert_eq!(a.compare(&b), to_ref(&a).cmp(&to_ref(&b)));
    }

    /// Halving truncates toward zero and parity matches the reference.
    #[test]
    fn halving_and_parity(a in big_int()) {
        let ra = to_ref(&a);
        prop_assert_eq!(to_ref(&a.shift_right_one_bit()), &ra / 2);
        prop_assert_eq!(a.is_odd(), &ra % 2 != RefInt::from(0));
    }

    /// Digit and bit counts match the reference.
    #[test]
    fn magnitude_report(a in big_int()) {
        let ra = to_ref(&a);
        let expected_digits = ra.magnitude().to_string().len();
        prop_assert_eq!(a.digit_count(), expected_digits);
        prop_assert_eq!(a.bit_length(), ra.bits());
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Wide operands exercise the Karatsuba path.
    #[test]
    fn wide_multiplication_matches_reference(
        a in "[1-9][0-9]{300,3000}",
        b in "[1-9][0-9]{300,3000}",
    ) {
        let product = &a.parse::<BigInt>().unwrap() * &b.parse::<BigInt>().unwrap();
        let reference = a.parse::<RefInt>().unwrap() * b.parse::<RefInt>().unwrap();
        prop_assert_eq!(product.to_string(), reference.to_string());
    }

    /// Fast Doubling and Matrix produce the same result for random n.
    #[test]
    fn fast_equals_matrix(n in 0u64..3000) {
        let fast = fibonacci_via_fast_doubling(n);
        let matrix = fibonacci_via_matrix(&BigInt::from(n)).unwrap();
        prop_assert_eq!(fast, matrix, "F({}) fast != matrix", n);
    }

    /// F(n) + F(n+1) == F(n+2) for random n.
    #[test]
    fn fibonacci_recurrence(n in 0u64..2000) {
        let mx = MatrixExponentiation::new();
        let f0 = mx.calculate_core(&BigInt::from(n)).unwrap();
        let f1 = mx.calculate_core(&BigInt::from(n + 1)).unwrap();
        let f2 = mx.calculate_core(&BigInt::from(n + 2)).unwrap();
        prop_assert_eq!(&f0 + &f1, f2, "F({}) + F({}) != F({})", n, n + 1, n + 2);
    }

    /// The BigInt-driven fast doubling entry agrees with the native one.
    #[test]
    fn core_calculators_agree(n in 0u64..5000) {
        let n = BigInt::from(n);
        let fd = FastDoubling::new().calculate_core(&n).unwrap();
        let mx = MatrixExponentiation::new().calculate_core(&n).unwrap();
        prop_assert_eq!(fd, mx);
    }
}

#[test]
fn parse_rejects_embedded_letter() {
    assert!("12a3".parse::<BigInt>().is_err());
}

#[test]
fn f_one_million_both_engines() {
    let f = fibonacci_via_fast_doubling(1_000_000);
    assert_eq!(f.digit_count(), 208_988);
    assert_eq!(f.bit_length(), 694_241);
    assert!(f.to_string().starts_with("1953282128707757731632014947596256332443"));
    assert_eq!(fibonacci_via_matrix(&BigInt::from(1_000_000u64)).unwrap(), f);
}
