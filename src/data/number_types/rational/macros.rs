//! # Test shorthands
//!
//! Macros for writing rational literals compactly.

/// Shorthand for creating a rational number in tests.
///
/// A single argument is converted exactly from its double value, two arguments form a fraction.
#[macro_export]
macro_rules! R {
    ($value:expr) => {
        <$crate::data::number_types::rational::Rational as $crate::data::number_types::traits::Number>::from_f64($value as f64).unwrap()
    };
    ($numer:expr, $denom:expr) => {
        $crate::data::number_types::rational::Rational::new($numer, $denom).unwrap()
    };
}
