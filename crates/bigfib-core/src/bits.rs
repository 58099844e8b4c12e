//! Bit iteration over non-negative exponents.
//!
//! `BigInt` stores decimal-radix digits, so its binary expansion is produced
//! with the parity test and the one-bit right shift.

use crate::bigint::BigInt;
use crate::error::FibError;

/// Lazy least-significant-first bit iterator over a non-negative `BigInt`.
#[derive(Debug, Clone)]
pub struct ExponentBits {
    remaining: BigInt,
}

impl Iterator for ExponentBits {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.remaining.is_zero() {
            return None;
        }
        let bit = self.remaining.is_odd();
        self.remaining = self.remaining.shift_right_one_bit();
        Some(bit)
    }
}

/// Bits of `exponent`, least significant first. Zero yields no bits.
pub fn lsb_first(exponent: &BigInt) -> Result<ExponentBits, FibError> {
    if exponent.is_negative() {
        return Err(FibError::negative_index(exponent));
    }
    Ok(ExponentBits {
        remaining: exponent.clone(),
    })
}

/// Bits of `exponent`, most significant first. Zero yields no bits.
pub fn msb_first(exponent: &BigInt) -> Result<Vec<bool>, FibError> {
    let mut bits: Vec<bool> = lsb_first(exponent)?.collect();
    bits.reverse();
    Ok(bits)
}

/// Bits of a native exponent, most significant first.
pub fn msb_first_u64(exponent: u64) -> impl Iterator<Item = bool> {
    let len = u64::BITS - exponent.leading_zeros();
    (0..len).rev().map(move |i| (exponent >> i) & 1 == 1)
}
