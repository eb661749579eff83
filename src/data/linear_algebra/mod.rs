//! # Linear algebra primitives
//!
//! Dense rows, row sets and the Gaussian elimination shared by the rank computation and the
//! initialization of the double description method.
use crate::data::number_types::traits::Number;

pub mod matrix;
pub mod row_set;
pub(crate) mod basis;

/// Subtract `factor` times `source` from `target`.
pub(crate) fn subtract_multiple<N: Number>(target: &mut [N], factor: &N, source: &[N]) {
    debug_assert_eq!(target.len(), source.len());

    if factor.is_zero() {
        return;
    }
    for (value, other) in target.iter_mut().zip(source) {
        if !other.is_zero() {
            *value -= factor.clone() * other;
        }
    }
}

/// Divide all values by the smallest absolute nonzero value.
///
/// A zero row is left as it is.
pub(crate) fn normalize_by_min_abs<N: Number>(row: &mut [N]) {
    let smallest = row.iter()
        .filter(|value| !value.is_zero())
        .map(N::abs)
        .fold(None, |smallest: Option<N>, value| match smallest {
            Some(current) if current <= value => Some(current),
            _ => Some(value),
        });

    if let Some(smallest) = smallest {
        for value in row.iter_mut() {
            if !value.is_zero() {
                *value /= &smallest;
            }
        }
    }
}

/// Largest absolute value of a row, as a float.
pub(crate) fn largest_magnitude<N: Number>(row: &[N]) -> f64 {
    row.iter().fold(0_f64, |largest, value| largest.max(value.to_f64().abs()))
}

/// Replace the values within `tolerance` of zero by zero.
pub(crate) fn snap_to_zero<N: Number>(row: &mut [N], tolerance: f64) {
    for value in row.iter_mut() {
        if !value.is_zero() && value.is_negligible(tolerance) {
            *value = N::zero();
        }
    }
}

/// Whether all values are zero.
pub(crate) fn is_zero_row<N: Number>(row: &[N]) -> bool {
    row.iter().all(N::is_zero)
}

#[cfg(test)]
mod test {
    use crate::data::linear_algebra::{
        is_zero_row, largest_magnitude, normalize_by_min_abs, snap_to_zero, subtract_multiple,
    };
    use crate::R;

    #[test]
    fn normalize() {
        let mut row = vec![R!(0), R!(-3), R!(6), R!(3, 2)];
        normalize_by_min_abs(&mut row);
        assert_eq!(row, vec![R!(0), R!(-2), R!(4), R!(1)]);

        let mut zero = vec![0_f64; 3];
        normalize_by_min_abs(&mut zero);
        assert!(is_zero_row(&zero));
    }

    #[test]
    fn subtract() {
        let mut target = vec![R!(1), R!(2), R!(3)];
        subtract_multiple(&mut target, &R!(1, 2), &[R!(2), R!(4), R!(0)]);
        assert_eq!(target, vec![R!(0), R!(0), R!(3)]);
    }

    #[test]
    fn snap() {
        let mut row = vec![1e-12_f64, -0.5, -3e-10, 2.];
        assert_eq!(largest_magnitude(&row), 2.);
        snap_to_zero(&mut row, 1e-9);
        assert_eq!(row, vec![0., -0.5, 0., 2.]);

        let mut exact = vec![R!(1, 1_000_000_000_000), R!(-3)];
        snap_to_zero(&mut exact, 1e-9);
        assert_eq!(exact, vec![R!(1, 1_000_000_000_000), R!(-3)]);
        assert_eq!(largest_magnitude(&exact), 3.);
    }
}
