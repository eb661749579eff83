//! # Wrapping existing methods
//!
//! Field operations on `Rational`, simply wrapping the operations already defined on the inner
//! type.
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num::{One, Zero};

use crate::data::number_types::rational::Rational;

macro_rules! wrap_operation {
    ($operation:ident, $method:ident, $op:tt, $assign:ident, $assign_method:ident, $assign_op:tt) => {
        impl $operation for Rational {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self::Output {
                Self(self.0 $op rhs.0)
            }
        }

        impl $operation<&Rational> for Rational {
            type Output = Self;

            fn $method(self, rhs: &Self) -> Self::Output {
                Self(self.0 $op &rhs.0)
            }
        }

        impl $operation<Rational> for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Rational) -> Self::Output {
                Rational(&self.0 $op rhs.0)
            }
        }

        impl $operation for &Rational {
            type Output = Rational;

            fn $method(self, rhs: Self) -> Self::Output {
                Rational(&self.0 $op &rhs.0)
            }
        }

        impl $assign for Rational {
            fn $assign_method(&mut self, rhs: Self) {
                self.0 $assign_op rhs.0;
            }
        }

        impl $assign<&Rational> for Rational {
            fn $assign_method(&mut self, rhs: &Self) {
                self.0 $assign_op &rhs.0;
            }
        }
    }
}

wrap_operation!(Add, add, +, AddAssign, add_assign, +=);
wrap_operation!(Sub, sub, -, SubAssign, sub_assign, -=);
wrap_operation!(Mul, mul, *, MulAssign, mul_assign, *=);
wrap_operation!(Div, div, /, DivAssign, div_assign, /=);

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Self::Output {
        Rational(-&self.0)
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Self(num::BigRational::zero())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Self(num::BigRational::one())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item=Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}

impl<'a> Sum<&'a Rational> for Rational {
    fn sum<I: Iterator<Item=&'a Rational>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, value| total + value)
    }
}
