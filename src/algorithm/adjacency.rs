//! # Adjacency of input rows
//!
//! Two facets (or two vertices) are adjacent when they share a face of one dimension lower. This
//! is decided either from the output of a conversion, by comparing incidence sets, or directly on
//! a matrix, with one round of redundancy tests per row.
use std::collections::BTreeSet;

use tracing::debug;

use crate::algorithm::redundancy::remove_redundant;
use crate::data::elements::Representation;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::row_set::RowSet;
use crate::data::number_types::traits::Number;
use crate::io::error::{PolyError, Result};

/// Adjacency of the rows of a matrix.
///
/// Row `i` is adjacent to the rows that are not redundant once row `i` is made an equality, apart
/// from the linearity rows.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn matrix_adjacency<N: Number>(matrix: &Matrix<N>) -> Result<Vec<BTreeSet<usize>>> {
    adjacency_by_redundancy(matrix, false)
}

/// Weak adjacency of the rows of a matrix.
///
/// As `matrix_adjacency`, but only strongly redundant rows are left out. Rows that meet row `i`
/// in a face of any dimension are included.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn matrix_weak_adjacency<N: Number>(matrix: &Matrix<N>) -> Result<Vec<BTreeSet<usize>>> {
    adjacency_by_redundancy(matrix, true)
}

fn adjacency_by_redundancy<N: Number>(matrix: &Matrix<N>, strong: bool) -> Result<Vec<BTreeSet<usize>>> {
    if matrix.rep() == Representation::Unspecified {
        return Err(PolyError::UnspecifiedRepresentation);
    }

    (0..matrix.row_count())
        .map(|row| {
            let mut linearity = matrix.lin_set().clone();
            linearity.insert(row);
            let restricted = matrix.with_rows(matrix.rows().to_vec(), linearity.clone());

            let (removed, _) = remove_redundant(&restricted, strong)?;
            debug!(row, removed = removed.len(), strong, "adjacency row");
            Ok((0..matrix.row_count())
                .filter(|other| !linearity.contains(other) && !removed.contains(other))
                .collect())
        })
        .collect()
}

/// Adjacency of input rows, from the incidence of each input row with the extreme rays.
///
/// Rows in the linearity set, rows incident with no ray, rows incident with every ray and rows
/// whose incidence is strictly contained in the incidence of another row take no part. Two of the
/// remaining rows are adjacent when no third remaining row is incident with all rays they share.
///
/// # Arguments
///
/// * `incidence`: For every input row, the extreme rays it is incident with.
/// * `rays`: Number of extreme rays.
/// * `linearity`: Input rows in the linearity set.
pub(crate) fn input_adjacency(incidence: &[RowSet], rays: usize, linearity: &RowSet) -> Vec<BTreeSet<usize>> {
    let candidate = incidence.iter()
        .enumerate()
        .map(|(row, incident)| {
            !linearity.contains(row) && !incident.is_empty() && incident.cardinality() < rays
        })
        .collect::<Vec<_>>();
    let usable = (0..incidence.len())
        .map(|row| candidate[row] && !(0..incidence.len()).any(|other| {
            other != row
                && candidate[other]
                && incidence[row] != incidence[other]
                && incidence[row].is_subset(&incidence[other])
        }))
        .collect::<Vec<_>>();

    (0..incidence.len())
        .map(|row| {
            if !usable[row] {
                return BTreeSet::new();
            }
            (0..incidence.len())
                .filter(|&other| other != row && usable[other])
                .filter(|&other| {
                    let common = incidence[row].intersection(&incidence[other]);
                    !(0..incidence.len()).any(|third| {
                        third != row && third != other && usable[third] && common.is_subset(&incidence[third])
                    })
                })
                .collect()
        })
        .collect()
}
