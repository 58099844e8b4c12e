//! Operator overloads forwarding to the named `BigInt` operations.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::BigInt;

macro_rules! forward_binop {
    ($trait:ident, $method:ident, $assign_trait:ident, $assign_method:ident, $op:ident) => {
        impl $trait<&BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$op(self, rhs)
            }
        }

        impl $trait<BigInt> for &BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$op(self, &rhs)
            }
        }

        impl $trait<&BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: &BigInt) -> BigInt {
                BigInt::$op(&self, rhs)
            }
        }

        impl $trait<BigInt> for BigInt {
            type Output = BigInt;

            fn $method(self, rhs: BigInt) -> BigInt {
                BigInt::$op(&self, &rhs)
            }
        }

        impl $assign_trait<&BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: &BigInt) {
                *self = BigInt::$op(self, rhs);
            }
        }

        impl $assign_trait<BigInt> for BigInt {
            fn $assign_method(&mut self, rhs: BigInt) {
                *self = BigInt::$op(self, &rhs);
            }
        }
    };
}

forward_binop!(Add, add, AddAssign, add_assign, add);
forward_binop!(Sub, sub, SubAssign, sub_assign, subtract);
forward_binop!(Mul, mul, MulAssign, mul_assign, multiply);

impl Neg for BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> BigInt {
        self.negate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operators_match_named_methods() {
        let a: BigInt = "123456789012345678901".parse().unwrap();
        let b: BigInt = "-98765432109876543210".parse().unwrap();

        assert_eq!(&a + &b, BigInt::add(&a, &b));
        assert_eq!(&a - &b, BigInt::subtract(&a, &b));
        assert_eq!(&a * &b, BigInt::multiply(&a, &b));
        assert_eq!(-&a, a.negate());
        assert_eq!(a.clone() + b.clone(), BigInt::add(&a, &b));
    }

    #[test]
    fn assign_operators() {
        let mut x = BigInt::from(10u32);
        x += &BigInt::from(5u32);
        assert_eq!(x, BigInt::from(15u32));
        x -= BigInt::from(20u32);
        assert_eq!(x, BigInt::from(-5i64));
        x *= &BigInt::from(-3i64);
        assert_eq!(x, BigInt::from(15u32));
    }
}
