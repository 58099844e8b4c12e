//! Calculator traits and the `FibCalculator` decorator.
//!
//! `Calculator` is the public trait consumed by the CLI.
//! `CoreCalculator` is the internal trait implemented by algorithms.
//! `FibCalculator` is a decorator that validates the index and adds the
//! fast path (n <= 93).

use std::sync::Arc;

use tracing::debug;

use crate::bigint::BigInt;
use crate::constants::{FIB_TABLE, MAX_FIB_U64};
use crate::error::FibError;

/// Public trait for Fibonacci calculators.
pub trait Calculator: Send + Sync {
    /// Calculate F(n).
    fn calculate(&self, n: &BigInt) -> Result<BigInt, FibError>;

    /// Get the name of this calculator.
    fn name(&self) -> &str;
}

/// Internal trait for algorithm implementations.
/// Wrapped by `FibCalculator` which adds validation and the fast path.
pub trait CoreCalculator: Send + Sync {
    /// Perform the core calculation.
    fn calculate_core(&self, n: &BigInt) -> Result<BigInt, FibError>;

    /// Get the name of this algorithm.
    fn name(&self) -> &str;
}

/// Decorator that wraps a `CoreCalculator` with validation and a fast path.
pub struct FibCalculator {
    inner: Arc<dyn CoreCalculator>,
}

impl FibCalculator {
    /// Create a new `FibCalculator` wrapping the given core calculator.
    #[must_use]
    pub fn new(inner: Arc<dyn CoreCalculator>) -> Self {
        Self { inner }
    }

    /// Fast path for small n (n <= 93) using precomputed table.
    #[allow(clippy::cast_possible_truncation)]
    fn calculate_small(n: u64) -> BigInt {
        BigInt::from(FIB_TABLE[n as usize])
    }
}

impl Calculator for FibCalculator {
    fn calculate(&self, n: &BigInt) -> Result<BigInt, FibError> {
        if n.is_negative() {
            return Err(FibError::negative_index(n));
        }

        if let Some(small) = n.to_u64().filter(|&v| v <= MAX_FIB_U64) {
            debug!(algorithm = self.inner.name(), n = small, "table lookup");
            return Ok(Self::calculate_small(small));
        }

        debug!(algorithm = self.inner.name(), n_digits = n.digit_count(), "dispatch");
        self.inner.calculate_core(n)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}
