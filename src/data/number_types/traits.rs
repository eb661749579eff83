//! # Traits
//!
//! All algorithms in this crate are written once, against the `Number` trait. The exact rational
//! type and `f64` both implement it, so that both kernels run through the same control flow.
//!
//! Sign tests are exact in both kernels: a float is zero only when it compares equal to `0.0`.
//! Algorithms that accept a tolerance test with `is_negligible` instead, which the exact kernel
//! answers exactly regardless.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use enum_map::Enum;
use num_traits::{One, Zero};
use serde::{Deserialize, Serialize};

use crate::io::error::{PolyError, Result};

/// Sign of a number, or of a ray evaluated against a constraint row.
#[allow(missing_docs)]
#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Sign {
    Negative,
    Zero,
    Positive,
}

/// Which kernel a number type belongs to.
///
/// Stored in persisted records, such that a record written with one kernel is not silently read
/// with the other.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum NumberKind {
    Rational,
    Float,
}

/// Basic field operations with `Self` and with references to `Self`, plus the few conversions
/// and tests that the algorithms need.
pub trait Number:
    PartialEq +
    PartialOrd +
    Zero + // Additive identity
    Neg<Output=Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output=Self> +
    for<'r> Add<&'r Self, Output=Self> +
    AddAssign<Self> +
    for<'r> AddAssign<&'r Self> +
    Sum +
    // First operation inverse
    Sub<Self, Output=Self> +
    for<'r> Sub<&'r Self, Output=Self> +
    SubAssign<Self> +
    for<'r> SubAssign<&'r Self> +
    // Second operation
    Mul<Self, Output=Self> +
    for<'r> Mul<&'r Self, Output=Self> +
    MulAssign<Self> +
    for<'r> MulAssign<&'r Self> +
    // Second operation inverse
    Div<Self, Output=Self> +
    for<'r> Div<&'r Self, Output=Self> +
    DivAssign<Self> +
    for<'r> DivAssign<&'r Self> +
    // Practicalities
    Clone +
    Display +
    Debug +
    Send +
    Sync +
    'static
{
    /// Kernel tag written to persisted records.
    const KIND: NumberKind;

    /// Exact sign of this number.
    fn sign(&self) -> Sign;

    /// Closest double to this number.
    fn to_f64(&self) -> f64;

    /// Convert a double into this type.
    ///
    /// # Return value
    ///
    /// `None` if the value is not finite. The exact kernel converts without rounding.
    fn from_f64(value: f64) -> Option<Self>;

    /// Convert an integer into this type.
    fn from_i64(value: i64) -> Self;

    /// Textual form used in persisted records.
    fn to_record(&self) -> String;

    /// Parse the textual form produced by `to_record`.
    fn from_record(text: &str) -> Result<Self>;

    /// Multiply all values by one positive factor that keeps them small.
    ///
    /// The scaling is exact, such that zero tests on the scaled values give the same answers.
    fn rescale(values: &mut [Self]);

    /// Whether this number is zero, counting values within `tolerance` of zero as zero.
    ///
    /// Exact numbers ignore the tolerance.
    fn is_negligible(&self, _tolerance: f64) -> bool {
        self.is_zero()
    }

    /// Whether this number is strictly larger than zero.
    fn is_positive(&self) -> bool {
        self.sign() == Sign::Positive
    }

    /// Whether this number is strictly smaller than zero.
    fn is_negative(&self) -> bool {
        self.sign() == Sign::Negative
    }

    /// Absolute value.
    fn abs(&self) -> Self {
        if self.is_negative() {
            -self.clone()
        } else {
            self.clone()
        }
    }

    /// Division that reports a zero divisor instead of panicking.
    fn checked_div(&self, rhs: &Self) -> Result<Self> {
        if rhs.is_zero() {
            Err(PolyError::DivisionByZero)
        } else {
            Ok(self.clone() / rhs)
        }
    }

    /// Multiplicative inverse, failing on zero.
    fn recip(&self) -> Result<Self> {
        Self::one().checked_div(self)
    }

    /// Create the number `numer / denom`.
    fn from_ratio(numer: i64, denom: i64) -> Result<Self> {
        Self::from_i64(numer).checked_div(&Self::from_i64(denom))
    }
}

/// Inner product of two equally long slices.
pub(crate) fn inner_product<N: Number>(left: &[N], right: &[N]) -> N {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).fold(N::zero(), |mut total, (a, b)| {
        if !a.is_zero() && !b.is_zero() {
            total += a.clone() * b;
        }
        total
    })
}
