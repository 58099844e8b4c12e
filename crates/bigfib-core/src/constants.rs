//! Constants for digit representation, fast paths and exit codes.

/// Radix of one `BigInt` digit.
pub const DIGIT_BASE: u32 = 1_000_000_000;

/// Number of decimal digits packed into one `BigInt` digit.
pub const DIGIT_WIDTH: usize = 9;

/// Operand length (in digits) from which multiplication switches to Karatsuba.
pub const KARATSUBA_THRESHOLD: usize = 32;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Precomputed Fibonacci values for n = 0..=93 (fast path).
///
/// F(93) = 12,200,160,415,121,876,738 is the largest Fibonacci number
/// that fits in `u64`. F(94) = 19,740,274,219,868,223,167 overflows
/// `u64::MAX` (18,446,744,073,709,551,615).
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[0] = 0;
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes used by the `bigfib` binary.
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Malformed index text or a negative index.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// Algorithm results did not match during cross-validation.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[40], 102_334_155);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
    }

    #[test]
    fn fib_table_consistency() {
        for i in 2..94 {
            assert_eq!(FIB_TABLE[i], FIB_TABLE[i - 1] + FIB_TABLE[i - 2]);
        }
    }

    #[test]
    fn digit_width_matches_base() {
        assert_eq!(10u64.pow(DIGIT_WIDTH as u32), u64::from(DIGIT_BASE));
    }
}
