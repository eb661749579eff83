//! # Canonical form
//!
//! A matrix is canonical when every implicit linearity is in the linearity set, the linearity rows
//! are linearly independent and come first, and no other row is redundant.
use std::collections::BTreeSet;

use tracing::debug;

use crate::algorithm::redundancy::{implicit_linearity_rows, remove_redundant};
use crate::data::elements::Representation;
use crate::data::linear_algebra::basis::select_row_basis;
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Number;
use crate::io::error::{PolyError, Result};


/// What `canonicalize` changed.
///
/// All row indices refer to the matrix as it was before the call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Canonicalization {
    /// Rows that were not in the linearity set but hold with equality.
    pub implicit_linearity: BTreeSet<usize>,
    /// Rows removed because the other rows imply them.
    pub redundant: BTreeSet<usize>,
    /// New index of every row, `None` for removed rows.
    ///
    /// Linearity rows that depend on other linearity rows are removed as well, without being
    /// reported as redundant.
    pub row_map: Vec<Option<usize>>,
}

/// Bring a matrix in canonical form.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn canonicalize<N: Number>(matrix: &mut Matrix<N>) -> Result<Canonicalization> {
    let (implicit_linearity, linearity_map) = canonicalize_linearity(matrix)?;
    let (removed, redundancy_map) = redundancy_remove(matrix)?;

    let redundant = linearity_map.iter()
        .enumerate()
        .filter_map(|(row, new)| new.filter(|new| removed.contains(new)).map(|_| row))
        .collect::<BTreeSet<_>>();
    let row_map = linearity_map.into_iter()
        .map(|new| new.and_then(|new| redundancy_map[new]))
        .collect();
    debug!(implicit = implicit_linearity.len(), redundant = redundant.len(), "canonicalized");

    Ok(Canonicalization { implicit_linearity, redundant, row_map })
}

/// Detect implicit linearities and reduce the linearity set to independent rows, placed first.
///
/// Other rows keep their relative order.
///
/// # Return value
///
/// The implicit linearity rows, and the new index of every row.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn canonicalize_linearity<N: Number>(matrix: &mut Matrix<N>) -> Result<(BTreeSet<usize>, Vec<Option<usize>>)> {
    if matrix.rep() == Representation::Unspecified {
        return Err(PolyError::UnspecifiedRepresentation);
    }

    let implicit = implicit_linearity_rows(matrix)?;
    let linearity = matrix.lin_set().union(&implicit).copied().collect::<BTreeSet<_>>();
    let independent = select_row_basis(matrix.rows(), linearity.iter().copied(), 0_f64).rows;

    let order = independent.iter()
        .copied()
        .chain((0..matrix.row_count()).filter(|row| !linearity.contains(row)))
        .collect::<Vec<_>>();
    let mut row_map = vec![None; matrix.row_count()];
    for (new, &old) in order.iter().enumerate() {
        row_map[old] = Some(new);
    }

    let rows = order.iter().map(|&row| matrix.row(row).to_vec()).collect();
    *matrix = matrix.with_rows(rows, (0..independent.len()).collect());
    debug!(
        implicit = implicit.len(),
        dependent = linearity.len() - independent.len(),
        "linearity canonicalized",
    );

    Ok((implicit, row_map))
}

/// Remove redundant rows, from the last row to the first.
///
/// # Return value
///
/// The removed rows, and the new index of every row.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn redundancy_remove<N: Number>(matrix: &mut Matrix<N>) -> Result<(BTreeSet<usize>, Vec<Option<usize>>)> {
    let (removed, reduced) = remove_redundant(matrix, false)?;

    let mut kept = 0;
    let row_map = (0..matrix.row_count())
        .map(|row| if removed.contains(&row) {
            None
        } else {
            kept += 1;
            Some(kept - 1)
        })
        .collect();
    *matrix = reduced;

    Ok((removed, row_map))
}
