//! Fast Doubling algorithm for Fibonacci computation.
//!
//! Uses the doubling identities:
//!   F(2k)   = F(k) * (2*F(k+1) - F(k))
//!   F(2k+1) = F(k)^2 + F(k+1)^2
//!
//! Native-width indices recurse on k/2 (depth at most 64). Larger indices
//! run the same step iteratively over the bits of k, most significant first.

use tracing::debug;

use crate::bigint::BigInt;
use crate::bits;
use crate::calculator::CoreCalculator;
use crate::error::FibError;

/// One doubling step: from (F(k), F(k+1)) to (F(2k), F(2k+1)).
fn doubling_step(fk: &BigInt, fk1: &BigInt) -> (BigInt, BigInt) {
    let t = &(fk1 + fk1) - fk;
    let f2k = fk * &t;
    let f2k1 = fk.square() + fk1.square();
    (f2k, f2k1)
}

/// Shift (F(2k), F(2k+1)) to (F(2k+1), F(2k+2)) when the current bit is set.
fn advance(pair: (BigInt, BigInt), odd: bool) -> (BigInt, BigInt) {
    let (c, d) = pair;
    if odd {
        let next = &c + &d;
        (d, next)
    } else {
        (c, d)
    }
}

/// Compute (F(k), F(k+1)).
#[must_use]
pub fn fast_double(k: u64) -> (BigInt, BigInt) {
    if k == 0 {
        return (BigInt::zero(), BigInt::one());
    }
    let (a, b) = fast_double(k / 2);
    advance(doubling_step(&a, &b), k % 2 == 1)
}

/// Compute (F(k), F(k+1)) for an arbitrary-precision `k`.
pub fn fast_double_big(k: &BigInt) -> Result<(BigInt, BigInt), FibError> {
    let start = (BigInt::zero(), BigInt::one());
    Ok(bits::msb_first(k)?
        .into_iter()
        .fold(start, |(a, b), bit| advance(doubling_step(&a, &b), bit)))
}

/// Compute F(n) for a native-width index.
///
/// # Example
/// ```
/// use bigfib_core::fastdoubling::fibonacci_via_fast_doubling;
///
/// assert_eq!(fibonacci_via_fast_doubling(40).to_string(), "102334155");
/// ```
#[must_use]
pub fn fibonacci_via_fast_doubling(n: u64) -> BigInt {
    fast_double(n).0
}

/// Compute F(n) for an arbitrary-precision index.
pub fn fibonacci_via_fast_doubling_big(n: &BigInt) -> Result<BigInt, FibError> {
    if n.is_negative() {
        return Err(FibError::negative_index(n));
    }
    match n.to_u64() {
        Some(native) => Ok(fibonacci_via_fast_doubling(native)),
        None => Ok(fast_double_big(n)?.0),
    }
}

/// Fast Doubling calculator.
///
/// # Example
/// ```
/// use bigfib_core::calculator::CoreCalculator;
/// use bigfib_core::fastdoubling::FastDoubling;
/// use bigfib_core::BigInt;
///
/// let calc = FastDoubling::new();
/// let result = calc.calculate_core(&BigInt::from(100u32)).unwrap();
/// assert_eq!(result.to_string(), "354224848179261915075");
/// ```
pub struct FastDoubling;

impl FastDoubling {
    /// Create a new `FastDoubling` calculator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FastDoubling {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for FastDoubling {
    fn calculate_core(&self, n: &BigInt) -> Result<BigInt, FibError> {
        debug!(n_digits = n.digit_count(), "fast doubling");
        fibonacci_via_fast_doubling_big(n)
    }

    fn name(&self) -> &'static str {
        "FastDoubling"
    }
}
