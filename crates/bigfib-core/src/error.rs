//! Error types shared by the arithmetic core and the engines.

/// Failure to read a decimal numeral.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseBigIntError {
    /// The input string was empty.
    #[error("cannot parse integer from empty string")]
    Empty,

    /// A sign was given without any digits after it.
    #[error("no digits after sign")]
    NoDigits,

    /// A character other than an ASCII digit was found.
    #[error("invalid digit {found:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        found: char,
        /// Byte offset of the offending character.
        position: usize,
    },
}

/// Error type for Fibonacci calculations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FibError {
    /// The index text was not a valid decimal numeral.
    #[error("parse error: {0}")]
    Parse(#[from] ParseBigIntError),

    /// A domain precondition was violated (negative index).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Results from different algorithms don't match.
    #[error("result mismatch between algorithms")]
    Mismatch,
}

impl FibError {
    /// Build the error returned for a negative Fibonacci index.
    #[must_use]
    pub fn negative_index(n: &crate::BigInt) -> Self {
        Self::InvalidArgument(format!("index must be non-negative, got {n}"))
    }
}
