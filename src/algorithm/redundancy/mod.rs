//! # Redundancy
//!
//! Tests of single rows, each decided by a linear program over the rows of the matrix.
//!
//! An inequality row is redundant when the other rows imply it. The test minimizes the row over
//! the system in which the row itself is relaxed by one: the row is redundant exactly when that
//! minimum is not negative, and otherwise the minimizer is a point violating only this row.
//!
//! A generator is redundant when it lies in the cone (or hull) of the other generators. The test
//! looks for a vector `z` with `g_j z >= 0` for the other generators and `g_i z < 0`, which
//! separates the tested generator from the others.
use std::collections::BTreeSet;
use std::iter::once;

use tracing::{debug, trace};

use crate::algorithm::linear_program::LinProg;
use crate::data::elements::{LpSolver, LpStatus, ObjectiveType, Representation};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Number;
use crate::io::error::{PolyError, Result};


/// Whether a row is redundant.
///
/// # Return value
///
/// The answer, and a certificate: for inequalities a point `x` violating only this row, for
/// generators a vector `z` separating this generator from the others. The certificate is only
/// meaningful when the row is not redundant.
///
/// # Errors
///
/// `RowOutOfRange`, `UnspecifiedRepresentation`, or `LinearityRow` when the row is in the
/// linearity set.
pub fn redundant<N: Number>(matrix: &Matrix<N>, row: usize) -> Result<(bool, Vec<N>)> {
    matrix.check_testable_row(row)?;

    let lp = solve_relaxed(matrix, row)?;
    let redundant = match lp.status() {
        LpStatus::Optimal => !lp.obj_value().is_negative(),
        LpStatus::Inconsistent | LpStatus::StrucInconsistent => true,
        _ => false,
    };
    trace!(row, redundant, status = ?lp.status(), "redundancy test");

    Ok((redundant, lp.primal_solution().to_vec()))
}

/// Whether a row is strongly redundant.
///
/// An inequality is strongly redundant when it holds strictly on the whole polyhedron, a
/// generator when it lies in the relative interior of the cone of the other generators. Rows of
/// an infeasible system are never strongly redundant.
///
/// # Return value
///
/// The answer and a certificate, as for `redundant`.
///
/// # Errors
///
/// As `redundant`.
pub fn s_redundant<N: Number>(matrix: &Matrix<N>, row: usize) -> Result<(bool, Vec<N>)> {
    matrix.check_testable_row(row)?;

    let lp = solve_relaxed(matrix, row)?;
    let certificate = lp.primal_solution().to_vec();
    let strong = match matrix.rep() {
        Representation::Generator => {
            let redundant = lp.status() == LpStatus::Optimal && !lp.obj_value().is_negative();
            if redundant {
                let mut support = supporting_hyperplane_program(matrix, row)?;
                support.solve(LpSolver::DualSimplex);
                if support.status() == LpStatus::Optimal && support.obj_value().is_positive() {
                    trace!(row, "generator on the boundary");
                    return Ok((false, support.primal_solution().to_vec()));
                }
            }
            redundant
        },
        _ => lp.status() == LpStatus::Optimal && lp.obj_value().is_positive(),
    };
    trace!(row, strong, status = ?lp.status(), "strong redundancy test");

    Ok((strong, certificate))
}

/// Whether a row holds with equality on the whole polyhedron, without being in the linearity
/// set.
///
/// For generators: whether the negation of the generator is in the cone of all generators.
///
/// # Return value
///
/// The answer and, when the row is not an implicit linearity, a point (or vector `z`) at which the
/// row is strictly positive.
///
/// # Errors
///
/// As `redundant`.
pub fn implicit_linearity<N: Number>(matrix: &Matrix<N>, row: usize) -> Result<(bool, Vec<N>)> {
    matrix.check_testable_row(row)?;

    let mut rows = program_rows(matrix);
    let objective = rows[row].clone();
    if matrix.rep() == Representation::Generator {
        // Keep the cone bounded with g_i z <= 1.
        rows.push(once(N::one()).chain(objective.iter().skip(1).map(|value| -value.clone())).collect());
    }
    let mut lp = LinProg::from_parts(&rows, matrix.lin_set(), objective, ObjectiveType::Max)?;
    lp.solve(LpSolver::DualSimplex);

    let implicit = lp.status() == LpStatus::Optimal && lp.obj_value().is_zero();
    trace!(row, implicit, status = ?lp.status(), "implicit linearity test");

    Ok((implicit, lp.primal_solution().to_vec()))
}

/// All rows that are redundant, removing each one as it is found, from the last row to the first.
///
/// The remaining rows have no redundant row left, and describe the same polyhedron.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn redundant_rows<N: Number>(matrix: &Matrix<N>) -> Result<BTreeSet<usize>> {
    remove_redundant(matrix, false).map(|(removed, _)| removed)
}

/// All rows that are strongly redundant, removing each one as it is found.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn s_redundant_rows<N: Number>(matrix: &Matrix<N>) -> Result<BTreeSet<usize>> {
    remove_redundant(matrix, true).map(|(removed, _)| removed)
}

/// All rows outside the linearity set that are implicit linearities.
///
/// # Errors
///
/// `UnspecifiedRepresentation`.
pub fn implicit_linearity_rows<N: Number>(matrix: &Matrix<N>) -> Result<BTreeSet<usize>> {
    if matrix.rep() == Representation::Unspecified {
        return Err(PolyError::UnspecifiedRepresentation);
    }

    let mut implicit = BTreeSet::new();
    for row in (0..matrix.row_count()).filter(|&row| !matrix.is_linearity(row)) {
        if implicit_linearity(matrix, row)?.0 {
            implicit.insert(row);
        }
    }
    debug!(rows = matrix.row_count(), implicit = implicit.len(), "implicit linearity rows");
    Ok(implicit)
}

/// Remove redundant rows from the last row to the first.
///
/// Removing a row only shifts the rows after it, which were already tested, such that every
/// tested index is also an index of the original matrix.
///
/// # Return value
///
/// The removed rows and the matrix without them.
pub(crate) fn remove_redundant<N: Number>(matrix: &Matrix<N>, strong: bool) -> Result<(BTreeSet<usize>, Matrix<N>)> {
    if matrix.rep() == Representation::Unspecified {
        return Err(PolyError::UnspecifiedRepresentation);
    }

    let mut current = matrix.clone();
    let mut removed = BTreeSet::new();
    for row in (0..matrix.row_count()).rev() {
        if current.is_linearity(row) {
            continue;
        }
        let (redundant, _) = if strong {
            s_redundant(&current, row)?
        } else {
            redundant(&current, row)?
        };
        if redundant {
            current.remove_row(row);
            removed.insert(row);
            debug!(row, remaining = current.row_count(), strong, "redundant row removed");
        }
    }

    Ok((removed, current))
}

/// Rows of the linear programs.
///
/// Inequalities are used as they are, with the variables `x`. Generators become homogeneous rows
/// `[0, g]` in the variables `z`.
fn program_rows<N: Number>(matrix: &Matrix<N>) -> Vec<Vec<N>> {
    match matrix.rep() {
        Representation::Generator => matrix.rows()
            .iter()
            .map(|row| once(N::zero()).chain(row.iter().cloned()).collect())
            .collect(),
        _ => matrix.rows().to_vec(),
    }
}

/// Minimize the tested row over the system with that row relaxed by one.
fn solve_relaxed<N: Number>(matrix: &Matrix<N>, row: usize) -> Result<LinProg<N>> {
    let mut rows = program_rows(matrix);
    let objective = rows[row].clone();
    rows[row][0] += N::one();

    let mut lp = LinProg::from_parts(&rows, matrix.lin_set(), objective, ObjectiveType::Min)?;
    lp.solve(LpSolver::DualSimplex);
    Ok(lp)
}

/// Look for a hyperplane through the tested generator that is not tight on all other generators.
///
/// Maximize the sum of `g_j z` over the other generators, subject to `0 <= g_j z <= 1` and
/// `g_i z = 0`.
fn supporting_hyperplane_program<N: Number>(matrix: &Matrix<N>, tested: usize) -> Result<LinProg<N>> {
    let homogeneous = program_rows(matrix);
    let width = matrix.column_count() + 1;

    let mut rows = Vec::new();
    let mut equalities = BTreeSet::new();
    let mut objective = vec![N::zero(); width];
    for (row, values) in homogeneous.into_iter().enumerate() {
        if row == tested || matrix.is_linearity(row) {
            equalities.insert(rows.len());
            rows.push(values);
            continue;
        }

        for (total, value) in objective.iter_mut().zip(&values) {
            *total += value;
        }
        let upper = once(N::one()).chain(values.iter().skip(1).map(|value| -value.clone())).collect();
        rows.push(values);
        rows.push(upper);
    }

    LinProg::from_parts(&rows, &equalities, objective, ObjectiveType::Max)
}
