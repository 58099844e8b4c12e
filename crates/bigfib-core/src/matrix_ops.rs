//! Matrix multiplication and binary exponentiation.

use tracing::trace;

use crate::bigint::BigInt;
use crate::bits;
use crate::error::FibError;
use crate::matrix_types::Matrix;

/// Multiply two 2x2 matrices: 8 multiplications and 4 additions.
#[must_use]
pub fn matrix_multiply(x: &Matrix, y: &Matrix) -> Matrix {
    Matrix {
        a: &x.a * &y.a + &x.b * &y.c,
        b: &x.a * &y.b + &x.b * &y.d,
        c: &x.c * &y.a + &x.d * &y.c,
        d: &x.c * &y.b + &x.d * &y.d,
    }
}

/// Square a 2x2 matrix.
#[must_use]
pub fn matrix_square(m: &Matrix) -> Matrix {
    matrix_multiply(m, m)
}

/// Raise `base` to a non-negative `exponent` by square-and-multiply.
///
/// Bits are consumed from least significant; the accumulator absorbs the
/// current power of `base` on every set bit. The squaring after the top bit
/// is skipped since its result is never read.
pub fn matrix_power(base: &Matrix, exponent: &BigInt) -> Result<Matrix, FibError> {
    let mut result = Matrix::identity();
    let mut power = base.clone();
    let mut bits = bits::lsb_first(exponent)?.peekable();
    let mut steps = 0u64;

    while let Some(bit) = bits.next() {
        steps += 1;
        if bit {
            result = matrix_multiply(&result, &power);
        }
        if bits.peek().is_some() {
            power = matrix_square(&power);
        }
    }

    trace!(steps, "matrix power");
    Ok(result)
}
