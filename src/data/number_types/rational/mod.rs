//! # An arbitrary precision rational type
//!
//! At the moment, this is just wrapping the `num::BigRational` type, following the newtype pattern.
//! This is needed because the kernel contract of this crate is not provided by `num`, and because
//! construction and parsing should report errors instead of panicking.
use std::fmt;
use std::str::FromStr;

use num::{BigInt, BigRational, Integer, One, Signed, ToPrimitive, Zero};
use num::bigint::Sign as BigSign;

use crate::data::number_types::traits::{Number, NumberKind, Sign};
use crate::io::error::{PolyError, Result};

mod wrapping;
pub mod macros;

/// An exact rational number, always reduced and with a positive denominator.
#[derive(
    Clone,
    Ord, PartialOrd, Eq, PartialEq,
    Hash,
    Debug,
)]
pub struct Rational(BigRational);

impl Rational {
    /// Create a new instance by converting the two provided numbers into arbitrary size ints.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `denom` is zero.
    pub fn new(numer: i64, denom: i64) -> Result<Self> {
        Self::from_big(numer.into(), denom.into())
    }

    /// Create a new instance from arbitrary size ints.
    ///
    /// # Errors
    ///
    /// `DivisionByZero` when `denom` is zero.
    pub fn from_big(numer: BigInt, denom: BigInt) -> Result<Self> {
        if denom.is_zero() {
            Err(PolyError::DivisionByZero)
        } else {
            Ok(Self(BigRational::new(numer, denom)))
        }
    }

    /// Numerator of the reduced fraction, carrying the sign.
    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    /// Denominator of the reduced fraction, always positive.
    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Borrow the wrapped `num::BigRational`.
    pub fn inner(&self) -> &BigRational {
        &self.0
    }

    /// Whether the denominator is one.
    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self(BigRational::from_integer(value.into()))
    }
}

impl FromStr for Rational {
    type Err = PolyError;

    fn from_str(input: &str) -> Result<Self> {
        BigRational::from_str(input.trim())
            .map(Self)
            .map_err(|error| PolyError::Record(format!("invalid rational \"{input}\": {error}")))
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl Number for Rational {
    const KIND: NumberKind = NumberKind::Rational;

    fn sign(&self) -> Sign {
        match self.0.numer().sign() {
            BigSign::Minus => Sign::Negative,
            BigSign::NoSign => Sign::Zero,
            BigSign::Plus => Sign::Positive,
        }
    }

    fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or(if self.0.is_negative() { f64::NEG_INFINITY } else { f64::INFINITY })
    }

    fn from_f64(value: f64) -> Option<Self> {
        BigRational::from_float(value).map(Self)
    }

    fn from_i64(value: i64) -> Self {
        Self::from(value)
    }

    fn to_record(&self) -> String {
        self.0.to_string()
    }

    fn from_record(text: &str) -> Result<Self> {
        text.parse()
    }

    /// Scale to the primitive integer vector with the same direction.
    fn rescale(values: &mut [Self]) {
        let denominator = values.iter()
            .filter(|value| !value.0.is_zero())
            .fold(BigInt::one(), |lcm, value| lcm.lcm(value.0.denom()));
        let integers = values.iter()
            .map(|value| value.0.numer() * (&denominator / value.0.denom()))
            .collect::<Vec<_>>();
        let divisor = integers.iter().fold(BigInt::zero(), |gcd, value| gcd.gcd(value));
        if divisor.is_zero() {
            return;
        }

        for (value, integer) in values.iter_mut().zip(integers) {
            *value = Self(BigRational::from_integer(integer / &divisor));
        }
    }

    fn abs(&self) -> Self {
        Self(self.0.abs())
    }
}
