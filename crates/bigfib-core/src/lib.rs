//! # bigfib-core
//!
//! Core library for the bigfib Fibonacci calculator: a self-contained
//! arbitrary-precision integer and two engines built on it, Fast Doubling
//! and Matrix Exponentiation.

pub mod bigint;
pub mod bits;
pub mod calculator;
pub mod constants;
pub mod error;
pub mod fastdoubling;
pub mod matrix;
pub mod matrix_ops;
pub mod matrix_types;
pub mod registry;

// Re-exports
pub use bigint::{BigInt, Sign};
pub use calculator::{Calculator, CoreCalculator, FibCalculator};
pub use constants::{exit_codes, FIB_TABLE, MAX_FIB_U64};
pub use error::{FibError, ParseBigIntError};
pub use fastdoubling::{fibonacci_via_fast_doubling, fibonacci_via_fast_doubling_big};
pub use matrix::fibonacci_via_matrix;
pub use registry::{get_calculators_to_run, lookup, CalculatorFactory, DefaultFactory, ENGINES};

/// Compute F(n) using the fast doubling algorithm.
///
/// This is a convenience function for simple use cases. For engine
/// selection by name and the table fast path, use a `CalculatorFactory`.
///
/// # Example
/// ```
/// assert_eq!(bigfib_core::fibonacci(10).to_string(), "55");
/// assert_eq!(bigfib_core::fibonacci(0).to_string(), "0");
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> BigInt {
    fibonacci_via_fast_doubling(n)
}
