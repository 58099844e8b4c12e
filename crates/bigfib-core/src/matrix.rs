//! Matrix Exponentiation algorithm for Fibonacci computation.
//!
//! Computes F(n) via Q^n where Q = [[1,1],[1,0]]:
//!
//! ```text
//! Q^n = [[F(n+1), F(n)  ],
//!        [F(n),   F(n-1)]]
//! ```

use tracing::debug;

use crate::bigint::BigInt;
use crate::calculator::CoreCalculator;
use crate::error::FibError;
use crate::matrix_ops::matrix_power;
use crate::matrix_types::Matrix;

/// Compute F(n) as entry (0,1) of Q^n.
///
/// # Example
/// ```
/// use bigfib_core::{matrix::fibonacci_via_matrix, BigInt};
///
/// let f = fibonacci_via_matrix(&BigInt::from(100u32)).unwrap();
/// assert_eq!(f.to_string(), "354224848179261915075");
/// ```
pub fn fibonacci_via_matrix(n: &BigInt) -> Result<BigInt, FibError> {
    if n.is_negative() {
        return Err(FibError::negative_index(n));
    }
    if *n <= BigInt::one() {
        return Ok(n.clone());
    }

    debug!(n_digits = n.digit_count(), "matrix exponentiation");
    let power = matrix_power(&Matrix::fibonacci_q(), n)?;
    Ok(power.b)
}

/// Matrix Exponentiation calculator.
pub struct MatrixExponentiation;

impl MatrixExponentiation {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for MatrixExponentiation {
    fn default() -> Self {
        Self::new()
    }
}

impl CoreCalculator for MatrixExponentiation {
    fn calculate_core(&self, n: &BigInt) -> Result<BigInt, FibError> {
        fibonacci_via_matrix(n)
    }

    fn name(&self) -> &'static str {
        "MatrixExponentiation"
    }
}
