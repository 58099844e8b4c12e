//! Arbitrary-precision signed integer.
//!
//! A `BigInt` is a sign plus a magnitude of base-10^9 digits, least
//! significant first. The magnitude never has high zero digits and zero is
//! the empty magnitude with [`Sign::Zero`], so derived equality and hashing
//! are value equality.

mod digits;
mod ops;

use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::bits;
use crate::constants::{DIGIT_BASE, DIGIT_WIDTH};
use crate::error::ParseBigIntError;

/// Sign of a [`BigInt`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Sign {
    Negative,
    #[default]
    Zero,
    Positive,
}

impl Sign {
    fn flip(self) -> Self {
        match self {
            Self::Negative => Self::Positive,
            Self::Zero => Self::Zero,
            Self::Positive => Self::Negative,
        }
    }

    fn times(self, other: Self) -> Self {
        match (self, other) {
            (Self::Zero, _) | (_, Self::Zero) => Self::Zero,
            (a, b) if a == b => Self::Positive,
            _ => Self::Negative,
        }
    }
}

/// Arbitrary-precision signed integer in canonical form.
#[derive(Clone, PartialEq, Eq, Hash, Default)]
pub struct BigInt {
    sign: Sign,
    mag: Vec<u32>,
}

impl BigInt {
    /// The value 0.
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            sign: Sign::Zero,
            mag: Vec::new(),
        }
    }

    /// The value 1.
    #[must_use]
    pub fn one() -> Self {
        Self::from(1u32)
    }

    /// Build a canonical value from a sign and a raw magnitude.
    fn from_parts(sign: Sign, mut mag: Vec<u32>) -> Self {
        digits::trim(&mut mag);
        if mag.is_empty() || sign == Sign::Zero {
            return Self::zero();
        }
        Self { sign, mag }
    }

    /// Parse an optionally signed decimal numeral.
    ///
    /// Leading zeros are accepted; whitespace is not.
    ///
    /// ```
    /// use bigfib_core::BigInt;
    /// assert_eq!(BigInt::from_decimal_string("-0042").unwrap().to_string(), "-42");
    /// assert!(BigInt::from_decimal_string("12a3").is_err());
    /// ```
    pub fn from_decimal_string(s: &str) -> Result<Self, ParseBigIntError> {
        if s.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let (sign, body, offset) = match s.as_bytes()[0] {
            b'-' => (Sign::Negative, &s[1..], 1),
            b'+' => (Sign::Positive, &s[1..], 1),
            _ => (Sign::Positive, s, 0),
        };
        if body.is_empty() {
            return Err(ParseBigIntError::NoDigits);
        }
        if let Some((position, found)) = body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit {
                found,
                position: position + offset,
            });
        }

        // All ASCII digits from here on, so byte chunks are valid digit runs.
        let bytes = body.as_bytes();
        let mut mag = Vec::with_capacity(bytes.len() / DIGIT_WIDTH + 1);
        for chunk in bytes.rchunks(DIGIT_WIDTH) {
            let digit = chunk
                .iter()
                .fold(0u32, |acc, &b| acc * 10 + u32::from(b - b'0'));
            mag.push(digit);
        }
        Ok(Self::from_parts(sign, mag))
    }

    /// Canonical decimal representation.
    #[must_use]
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }

    /// Sign of this value.
    #[must_use]
    pub fn sign(&self) -> Sign {
        self.sign
    }

    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive
    }

    /// Parity of the magnitude. The digit base is even, so the lowest digit decides.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.mag.first().is_some_and(|&d| d % 2 == 1)
    }

    /// Additive inverse.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self {
            sign: self.sign.flip(),
            mag: self.mag.clone(),
        }
    }

    /// Absolute value.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self::from_parts(Sign::Positive, self.mag.clone())
    }

    /// `self + other`.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => other.clone(),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => Self::from_parts(a, digits::add(&self.mag, &other.mag)),
            _ => match digits::cmp(&self.mag, &other.mag) {
                Ordering::Equal => Self::zero(),
                Ordering::Greater => {
                    Self::from_parts(self.sign, digits::sub(&self.mag, &other.mag))
                }
                Ordering::Less => Self::from_parts(other.sign, digits::sub(&other.mag, &self.mag)),
            },
        }
    }

    /// `self - other`, defined as `self + (-other)`.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        self.add(&other.negate())
    }

    /// `self * other`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        let sign = self.sign.times(other.sign);
        if sign == Sign::Zero {
            return Self::zero();
        }
        Self::from_parts(sign, digits::mul(&self.mag, &other.mag))
    }

    /// `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        self.multiply(self)
    }

    /// Sign first, then magnitude length, then digits from the most significant.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        self.sign.cmp(&other.sign).then_with(|| match self.sign {
            Sign::Zero => Ordering::Equal,
            Sign::Positive => digits::cmp(&self.mag, &other.mag),
            Sign::Negative => digits::cmp(&other.mag, &self.mag),
        })
    }

    /// Division by two, rounding toward zero.
    #[must_use]
    pub fn shift_right_one_bit(&self) -> Self {
        Self::from_parts(self.sign, digits::halve(&self.mag))
    }

    /// `2^exp`, by square-and-multiply over the bits of `exp`.
    #[must_use]
    pub fn pow2(exp: u64) -> Self {
        let two = Self::from(2u32);
        bits::msb_first_u64(exp).fold(Self::one(), |acc, bit| {
            let sq = acc.square();
            if bit {
                &sq * &two
            } else {
                sq
            }
        })
    }

    /// Number of decimal digits of `|self|`; 1 for zero.
    #[must_use]
    pub fn digit_count(&self) -> usize {
        match self.mag.last() {
            None => 1,
            Some(&top) => (self.mag.len() - 1) * DIGIT_WIDTH + decimal_len(top),
        }
    }

    /// Number of bits of `|self|`; 0 for zero.
    ///
    /// Estimated from the leading digits in floating point, then corrected
    /// against exact powers of two.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn bit_length(&self) -> u64 {
        if let Some(v) = self.abs().to_u64() {
            return u64::from(64 - v.leading_zeros());
        }

        let len = self.mag.len();
        let lead = self.mag[len - 3..]
            .iter()
            .rev()
            .fold(0f64, |acc, &d| acc * f64::from(DIGIT_BASE) + f64::from(d));
        let scale = ((len - 3) * DIGIT_WIDTH) as f64;
        let estimate = lead.log2() + scale * std::f64::consts::LOG2_10;
        let mut bits = estimate.floor() as u64 + 1;

        // Invariant after correction: 2^(bits-1) <= |self| < 2^bits.
        let magnitude = self.abs();
        let mut low = Self::pow2(bits - 1);
        while low > magnitude {
            bits -= 1;
            low = low.shift_right_one_bit();
        }
        loop {
            let high = &low + &low;
            if high > magnitude {
                break;
            }
            bits += 1;
            low = high;
        }
        bits
    }

    /// Value as `u64`, if non-negative and in range.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if self.is_negative() || self.mag.len() > 3 {
            return None;
        }
        self.mag.iter().rev().try_fold(0u64, |acc, &d| {
            acc.checked_mul(u64::from(DIGIT_BASE))?
                .checked_add(u64::from(d))
        })
    }
}

fn decimal_len(digit: u32) -> usize {
    digit.checked_ilog10().map_or(1, |l| l as usize + 1)
}

impl From<u64> for BigInt {
    #[allow(clippy::cast_possible_truncation)]
    fn from(mut v: u64) -> Self {
        let base = u64::from(DIGIT_BASE);
        let mut mag = Vec::with_capacity(3);
        while v > 0 {
            mag.push((v % base) as u32);
            v /= base;
        }
        Self::from_parts(Sign::Positive, mag)
    }
}

impl From<u32> for BigInt {
    fn from(v: u32) -> Self {
        Self::from(u64::from(v))
    }
}

impl From<i64> for BigInt {
    fn from(v: i64) -> Self {
        let magnitude = Self::from(v.unsigned_abs());
        if v < 0 {
            magnitude.negate()
        } else {
            magnitude
        }
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_decimal_string(s)
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::with_capacity(self.digit_count());
        match self.mag.split_last() {
            None => buf.push('0'),
            Some((top, rest)) => {
                write!(buf, "{top}")?;
                for d in rest.iter().rev() {
                    write!(buf, "{d:0width$}", width = DIGIT_WIDTH)?;
                }
            }
        }
        f.pad_integral(!self.is_negative(), "", &buf)
    }
}

impl fmt::Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({self})")
    }
}
