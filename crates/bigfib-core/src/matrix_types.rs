//! Matrix types for the Matrix Exponentiation algorithm.

use crate::bigint::BigInt;

/// 2x2 matrix of `BigInt` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    pub a: BigInt, // [0][0]
    pub b: BigInt, // [0][1]
    pub c: BigInt, // [1][0]
    pub d: BigInt, // [1][1]
}

impl Matrix {
    /// Create a matrix from its rows.
    #[must_use]
    pub fn new(a: BigInt, b: BigInt, c: BigInt, d: BigInt) -> Self {
        Self { a, b, c, d }
    }

    /// Create the identity matrix.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(BigInt::one(), BigInt::zero(), BigInt::zero(), BigInt::one())
    }

    /// Create the Fibonacci Q matrix [[1,1],[1,0]].
    #[must_use]
    pub fn fibonacci_q() -> Self {
        Self::new(BigInt::one(), BigInt::one(), BigInt::one(), BigInt::zero())
    }

    /// Check if this is the identity matrix.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }

    /// Cell at `(row, col)`; both indices must be 0 or 1.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> &BigInt {
        match (row, col) {
            (0, 0) => &self.a,
            (0, 1) => &self.b,
            (1, 0) => &self.c,
            (1, 1) => &self.d,
            _ => panic!("2x2 matrix index out of range: ({row}, {col})"),
        }
    }
}
