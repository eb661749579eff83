//! # Row bases
//!
//! Greedy selection of linearly independent rows, and the Gauss-Jordan reduction of a selected
//! basis. The rank of a matrix, the lineality space of a cone and the initial rays of the double
//! description method are all read off from these.
use crate::data::linear_algebra::{is_zero_row, largest_magnitude, subtract_multiple};
use crate::data::number_types::traits::Number;
use crate::io::error::{PolyError, Result};

/// A maximal set of linearly independent rows, with one pivot column per row.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct RowBasis {
    /// Selected rows, in order of selection.
    pub rows: Vec<usize>,
    /// Pivot column of each selected row.
    pub columns: Vec<usize>,
}

impl RowBasis {
    pub fn rank(&self) -> usize {
        self.rows.len()
    }
}

/// Select rows greedily in the given order.
///
/// A row is selected when it is not in the span of the rows selected before it. Its pivot column
/// is the lowest column in which the row, reduced against the earlier selected rows, is not
/// negligible. A value is negligible when its absolute value is at most `tolerance` times the
/// largest absolute value of the original row. With `tolerance` zero only exact zeros are.
///
/// Selection stops once there are as many rows as columns.
pub(crate) fn select_row_basis<N: Number>(
    rows: &[Vec<N>],
    order: impl IntoIterator<Item=usize>,
    tolerance: f64,
) -> RowBasis {
    let width = rows.first().map_or(0, Vec::len);
    let mut basis = RowBasis { rows: Vec::new(), columns: Vec::new() };
    let mut reduced: Vec<Vec<N>> = Vec::new();

    for row in order {
        if basis.rank() == width {
            break;
        }

        let mut candidate = rows[row].clone();
        for (earlier, &column) in reduced.iter().zip(&basis.columns) {
            if !candidate[column].is_zero() {
                let factor = candidate[column].clone() / &earlier[column];
                subtract_multiple(&mut candidate, &factor, earlier);
                candidate[column] = N::zero();
            }
        }

        let threshold = if tolerance > 0_f64 {
            tolerance * largest_magnitude(&rows[row])
        } else {
            0_f64
        };
        let pivot = candidate.iter()
            .enumerate()
            .position(|(column, value)| {
                !basis.columns.contains(&column) && !value.is_negligible(threshold)
            });
        if let Some(column) = pivot {
            basis.rows.push(row);
            basis.columns.push(column);
            reduced.push(candidate);
        }
    }

    basis
}

/// Gauss-Jordan form of the rows of a `RowBasis`.
///
/// `reduced = transform * B` where `B` holds the selected rows, and `reduced` is the identity on the
/// pivot columns.
pub(crate) struct Reduced<N> {
    reduced: Vec<Vec<N>>,
    transform: Vec<Vec<N>>,
}

impl<N: Number> Reduced<N> {
    /// # Errors
    ///
    /// `NumericalInconsistency` naming a basis row whose pivot vanishes after rounding. Exact
    /// numbers never fail.
    pub fn new(rows: &[Vec<N>], basis: &RowBasis) -> Result<Self> {
        let rank = basis.rank();
        let mut reduced: Vec<Vec<N>> = basis.rows.iter().map(|&row| rows[row].clone()).collect();
        let mut transform: Vec<Vec<N>> = (0..rank)
            .map(|i| (0..rank).map(|j| if i == j { N::one() } else { N::zero() }).collect())
            .collect();

        for i in 0..rank {
            for earlier in 0..i {
                let factor = reduced[i][basis.columns[earlier]].clone();
                if !factor.is_zero() {
                    let (done, rest) = reduced.split_at_mut(i);
                    subtract_multiple(&mut rest[0], &factor, &done[earlier]);
                    let (done, rest) = transform.split_at_mut(i);
                    subtract_multiple(&mut rest[0], &factor, &done[earlier]);
                    reduced[i][basis.columns[earlier]] = N::zero();
                }
            }

            let pivot = reduced[i][basis.columns[i]].clone();
            if pivot.is_zero() {
                return Err(PolyError::NumericalInconsistency { row: basis.rows[i] });
            }
            for value in reduced[i].iter_mut().chain(transform[i].iter_mut()) {
                *value /= &pivot;
            }

            for earlier in 0..i {
                let factor = reduced[earlier][basis.columns[i]].clone();
                if !factor.is_zero() {
                    let (done, rest) = reduced.split_at_mut(i);
                    subtract_multiple(&mut done[earlier], &factor, &rest[0]);
                    let (done, rest) = transform.split_at_mut(i);
                    subtract_multiple(&mut done[earlier], &factor, &rest[0]);
                    reduced[earlier][basis.columns[i]] = N::zero();
                }
            }
        }

        Ok(Self { reduced, transform })
    }

    /// A basis of the vectors `x` with `B x = 0`, one vector per non pivot column.
    pub fn null_space(&self, basis: &RowBasis, width: usize) -> Vec<Vec<N>> {
        (0..width)
            .filter(|column| !basis.columns.contains(column))
            .map(|free| {
                let mut vector = vec![N::zero(); width];
                vector[free] = N::one();
                for (row, &pivot) in self.reduced.iter().zip(&basis.columns) {
                    vector[pivot] = -row[free].clone();
                }
                vector
            })
            .collect()
    }

    /// Vectors `r_j` with `B r_j = e_j`, supported on the pivot columns.
    pub fn right_inverse(&self, basis: &RowBasis, width: usize) -> Vec<Vec<N>> {
        (0..basis.rank())
            .map(|j| {
                let mut vector = vec![N::zero(); width];
                for (row, &pivot) in self.transform.iter().zip(&basis.columns) {
                    vector[pivot] = row[j].clone();
                }
                debug_assert!(!is_zero_row(&vector));
                vector
            })
            .collect()
    }
}
