//! # Floating point numbers
//!
//! Plain `f64` is the floating kernel. It shares every algorithm with the exact kernel, but
//! correctness guarantees are harder (impossible?) to give due to accumulating rounding errors.
//! Comparisons against zero are exact, unless an algorithm is explicitly given a tolerance.
use crate::data::number_types::traits::{Number, NumberKind, Sign};
use crate::io::error::{PolyError, Result};


impl Number for f64 {
    const KIND: NumberKind = NumberKind::Float;

    fn sign(&self) -> Sign {
        if *self > 0_f64 {
            Sign::Positive
        } else if *self < 0_f64 {
            Sign::Negative
        } else {
            Sign::Zero
        }
    }

    fn is_negligible(&self, tolerance: f64) -> bool {
        f64::abs(*self) <= tolerance
    }

    fn to_f64(&self) -> f64 {
        *self
    }

    fn from_f64(value: f64) -> Option<Self> {
        value.is_finite().then_some(value)
    }

    fn from_i64(value: i64) -> Self {
        value as f64
    }

    fn to_record(&self) -> String {
        self.to_string()
    }

    fn from_record(text: &str) -> Result<Self> {
        text.trim()
            .parse::<f64>()
            .map_err(|error| PolyError::Record(format!("invalid float \"{text}\": {error}")))
    }

    /// Scale by a power of two, which only changes exponents.
    fn rescale(values: &mut [Self]) {
        let largest = values.iter().fold(0_f64, |largest, value| largest.max(value.abs()));
        if largest == 0_f64 || !largest.is_finite() {
            return;
        }

        // For subnormal values the factor itself exceeds the range of `f64`, so apply it in two
        // halves.
        let exponent = largest.log2().floor() as i32;
        let half = exponent / 2;
        let (first, second) = (2_f64.powi(-half), 2_f64.powi(half - exponent));
        for value in values.iter_mut() {
            *value = *value * first * second;
        }
    }
}
