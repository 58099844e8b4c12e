//! Magnitude arithmetic on little-endian base-10^9 digit slices.
//!
//! Inputs may carry high zero digits (Karatsuba splits produce them);
//! every returned `Vec` is trimmed.

use std::cmp::Ordering;

use crate::constants::{DIGIT_BASE, KARATSUBA_THRESHOLD};

const BASE: u64 = DIGIT_BASE as u64;

/// Drop high zero digits.
pub(crate) fn trim(digits: &mut Vec<u32>) {
    while digits.last() == Some(&0) {
        digits.pop();
    }
}

/// Compare two trimmed magnitudes.
pub(crate) fn cmp(a: &[u32], b: &[u32]) -> Ordering {
    a.len()
        .cmp(&b.len())
        .then_with(|| a.iter().rev().cmp(b.iter().rev()))
}

/// `a + b`.
pub(crate) fn add(a: &[u32], b: &[u32]) -> Vec<u32> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u32;
    for (i, &x) in long.iter().enumerate() {
        let sum = x + short.get(i).copied().unwrap_or(0) + carry;
        if sum >= DIGIT_BASE {
            out.push(sum - DIGIT_BASE);
            carry = 1;
        } else {
            out.push(sum);
            carry = 0;
        }
    }
    if carry > 0 {
        out.push(carry);
    }
    trim(&mut out);
    out
}

/// `a - b`. Requires `a >= b`.
pub(crate) fn sub(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let mut borrow = 0u32;
    for (i, &x) in a.iter().enumerate() {
        let y = b.get(i).copied().unwrap_or(0) + borrow;
        if x >= y {
            out.push(x - y);
            borrow = 0;
        } else {
            out.push(x + DIGIT_BASE - y);
            borrow = 1;
        }
    }
    debug_assert_eq!(borrow, 0, "magnitude subtraction underflow");
    debug_assert!(b.iter().skip(a.len()).all(|&d| d == 0));
    trim(&mut out);
    out
}

/// Add `x * BASE^offset` into `acc` in place.
///
/// The caller sizes `acc` so that the final sum fits.
fn add_into(acc: &mut [u32], x: &[u32], offset: usize) {
    let mut carry = 0u32;
    let mut i = offset;
    for &d in x {
        let sum = acc[i] + d + carry;
        if sum >= DIGIT_BASE {
            acc[i] = sum - DIGIT_BASE;
            carry = 1;
        } else {
            acc[i] = sum;
            carry = 0;
        }
        i += 1;
    }
    while carry > 0 && i < acc.len() {
        let sum = acc[i] + carry;
        if sum >= DIGIT_BASE {
            acc[i] = sum - DIGIT_BASE;
        } else {
            acc[i] = sum;
            carry = 0;
        }
        i += 1;
    }
    debug_assert_eq!(carry, 0, "accumulator too short");
}

/// `a * b`, dispatching between schoolbook and Karatsuba.
pub(crate) fn mul(a: &[u32], b: &[u32]) -> Vec<u32> {
    if a.is_empty() || b.is_empty() {
        return Vec::new();
    }
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.len() < KARATSUBA_THRESHOLD {
        return schoolbook(long, short);
    }

    if 2 * short.len() <= long.len() {
        // Unbalanced: slice the long operand into short-sized chunks.
        let mut out = vec![0u32; long.len() + short.len()];
        for (i, chunk) in long.chunks(short.len()).enumerate() {
            let partial = mul(chunk, short);
            add_into(&mut out, &partial, i * short.len());
        }
        trim(&mut out);
        return out;
    }

    karatsuba(long, short)
}

/// Schoolbook O(len(a) * len(b)) product.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn schoolbook(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len() + b.len()];
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let x = u64::from(x);
        let mut carry = 0u64;
        for (j, &y) in b.iter().enumerate() {
            let t = u64::from(out[i + j]) + x * u64::from(y) + carry;
            out[i + j] = (t % BASE) as u32;
            carry = t / BASE;
        }
        let mut k = i + b.len();
        while carry > 0 {
            let t = u64::from(out[k]) + carry;
            out[k] = (t % BASE) as u32;
            carry = t / BASE;
            k += 1;
        }
    }
    trim(&mut out);
    out
}

/// Karatsuba product. Requires `a.len() >= b.len() > a.len() / 2`.
fn karatsuba(a: &[u32], b: &[u32]) -> Vec<u32> {
    let m = a.len() / 2;
    let (a0, a1) = a.split_at(m);
    let (b0, b1) = b.split_at(m);

    let z0 = mul(a0, b0);
    let z2 = mul(a1, b1);
    let cross = mul(&add(a0, a1), &add(b0, b1));
    let z1 = sub(&sub(&cross, &z0), &z2);

    let mut out = vec![0u32; a.len() + b.len()];
    add_into(&mut out, &z0, 0);
    add_into(&mut out, &z1, m);
    add_into(&mut out, &z2, 2 * m);
    trim(&mut out);
    out
}

/// Floor division by two.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn halve(a: &[u32]) -> Vec<u32> {
    let mut out = vec![0u32; a.len()];
    let mut rem = 0u64;
    for (i, &d) in a.iter().enumerate().rev() {
        let cur = rem * BASE + u64::from(d);
        out[i] = (cur / 2) as u32;
        rem = cur % 2;
    }
    trim(&mut out);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pseudo_random_digits(len: usize, seed: u64) -> Vec<u32> {
        let mut state = seed;
        let mut out: Vec<u32> = (0..len)
            .map(|_| {
                state = state
                    .wrapping_mul(6_364_136_223_846_793_005)
                    .wrapping_add(1_442_695_040_888_963_407);
                ((state >> 33) % BASE) as u32
            })
            .collect();
        if let Some(last) = out.last_mut() {
            *last = (*last).max(1);
        }
        out
    }

    #[test]
    fn add_carries_across_digits() {
        let a = vec![DIGIT_BASE - 1, DIGIT_BASE - 1];
        assert_eq!(add(&a, &[1]), vec![0, 0, 1]);
    }

    #[test]
    fn sub_borrows_across_digits() {
        assert_eq!(sub(&[0, 0, 1], &[1]), vec![DIGIT_BASE - 1, DIGIT_BASE - 1]);
        assert!(sub(&[5, 7], &[5, 7]).is_empty());
    }

    #[test]
    fn cmp_orders_by_length_then_digits() {
        assert_eq!(cmp(&[1, 2], &[9]), Ordering::Greater);
        assert_eq!(cmp(&[1, 2], &[0, 3]), Ordering::Less);
        assert_eq!(cmp(&[4, 2], &[4, 2]), Ordering::Equal);
    }

    #[test]
    fn schoolbook_small_product() {
        // (10^9 - 1)^2 = 999999998000000001
        let a = [DIGIT_BASE - 1];
        assert_eq!(schoolbook(&a, &a), vec![1, 999_999_998]);
    }

    #[test]
    fn mul_with_zero_is_empty() {
        assert!(mul(&[], &[1, 2, 3]).is_empty());
        assert!(mul(&[0], &[7]).is_empty());
    }

    #[test]
    fn karatsuba_matches_schoolbook_balanced() {
        let a = pseudo_random_digits(150, 1);
        let b = pseudo_random_digits(131, 2);
        assert_eq!(mul(&a, &b), schoolbook(&a, &b));
    }

    #[test]
    fn karatsuba_matches_schoolbook_unbalanced() {
        let a = pseudo_random_digits(400, 3);
        let b = pseudo_random_digits(45, 4);
        assert_eq!(mul(&a, &b), schoolbook(&a, &b));
        assert_eq!(mul(&b, &a), schoolbook(&a, &b));
    }

    #[test]
    fn karatsuba_square_with_zero_runs() {
        let mut a = vec![0u32; 90];
        a[0] = 7;
        a[89] = DIGIT_BASE - 1;
        assert_eq!(mul(&a, &a), schoolbook(&a, &a));
    }

    #[test]
    fn halve_propagates_remainder() {
        // 1_000_000_000 / 2 = 500_000_000
        assert_eq!(halve(&[0, 1]), vec![500_000_000]);
        // 3 / 2 = 1
        assert_eq!(halve(&[3]), vec![1]);
        assert!(halve(&[1]).is_empty());
    }
}
