//! # Elimination of variables
//!
//! Projection of a polyhedron given by inequalities onto a subset of its variables.
//!
//! Fourier-Motzkin elimination removes the last variable by combining every pair of rows in which
//! it has opposite signs. Block elimination removes any set of variables at once: the valid
//! combinations `y` of the rows are the cone `{y : y B = 0, y_i >= 0 for inequalities}` where `B`
//! holds the eliminated columns, and the extreme rays of that cone give the projection.
use std::collections::BTreeSet;

use tracing::debug;

use crate::algorithm::double_description::{DdOptions, enumerate};
use crate::data::elements::Representation;
use crate::data::linear_algebra::{is_zero_row, normalize_by_min_abs};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::row_set::RowSet;
use crate::data::number_types::traits::{Number, Sign};
use crate::io::error::{PolyError, Result};


/// Eliminate the last variable.
///
/// Rows in which the variable has coefficient zero are kept first, followed by one row for every
/// pair of a row with a positive and a row with a negative coefficient. New rows are divided by
/// their smallest absolute nonzero entry. The result is not free of redundancy.
///
/// # Errors
///
/// `CannotHandleLinearity` if the linearity set is not empty, `WrongRepresentation` for
/// generators and `ColumnOutOfRange` if there is no variable to eliminate.
pub fn fourier_elimination<N: Number>(matrix: &Matrix<N>) -> Result<Matrix<N>> {
    check_inequalities(matrix)?;
    if !matrix.lin_set().is_empty() {
        return Err(PolyError::CannotHandleLinearity);
    }
    let columns = matrix.column_count();
    if columns < 2 {
        return Err(PolyError::ColumnOutOfRange { column: columns.saturating_sub(1), columns });
    }
    let last = columns - 1;

    let mut by_sign = [Vec::new(), Vec::new(), Vec::new()];
    for (index, row) in matrix.rows().iter().enumerate() {
        let bucket = match row[last].sign() {
            Sign::Zero => 0,
            Sign::Positive => 1,
            Sign::Negative => 2,
        };
        by_sign[bucket].push(index);
    }
    let [zero, positive, negative] = by_sign;

    let mut rows = zero.iter()
        .map(|&row| matrix.row(row)[..last].to_vec())
        .collect::<Vec<_>>();
    for &p in &positive {
        for &n in &negative {
            let (positive_row, negative_row) = (matrix.row(p), matrix.row(n));
            let mut combined = (0..last)
                .map(|column| {
                    positive_row[last].clone() * &negative_row[column]
                        - negative_row[last].clone() * &positive_row[column]
                })
                .collect::<Vec<_>>();
            normalize_by_min_abs(&mut combined);
            rows.push(combined);
        }
    }
    debug!(
        zero = zero.len(),
        positive = positive.len(),
        negative = negative.len(),
        rows = rows.len(),
        "fourier elimination",
    );

    let mut result = Matrix::empty(last);
    result.extend(rows, false)?;
    result.set_rep(Representation::Inequality);
    Ok(result)
}

/// Eliminate a set of variables.
///
/// # Arguments
///
/// * `columns`: Columns of the variables to eliminate, each in `1..column_count`.
///
/// # Return value
///
/// Inequalities over the remaining columns, in their original order, describing the projection.
/// Rows that are implied by the equality rows of the input may appear as equality rows.
///
/// # Errors
///
/// `ColumnOutOfRange` for the constant column or a column beyond the matrix, `WrongRepresentation`
/// for generators.
pub fn block_elimination<N: Number>(matrix: &Matrix<N>, columns: &BTreeSet<usize>) -> Result<Matrix<N>> {
    check_inequalities(matrix)?;
    let width = matrix.column_count();
    if let Some(&column) = columns.iter().find(|&&column| column == 0 || column >= width) {
        return Err(PolyError::ColumnOutOfRange { column, columns: width });
    }
    let kept = (0..width).filter(|column| !columns.contains(column)).collect::<Vec<_>>();

    let mut result = Matrix::empty(kept.len());
    result.set_rep(Representation::Inequality);
    let row_count = matrix.row_count();
    if row_count == 0 {
        return Ok(result);
    }

    // The cone of multipliers: y B = 0, and y_i >= 0 for every inequality row i.
    let mut cone = columns.iter()
        .map(|&column| matrix.rows().iter().map(|row| row[column].clone()).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    let equalities = (0..cone.len()).collect::<RowSet>();
    cone.extend((0..row_count).filter(|&row| !matrix.is_linearity(row)).map(|row| {
        let mut unit = vec![N::zero(); row_count];
        unit[row] = N::one();
        unit
    }));

    let output = enumerate(&cone, row_count, &equalities, &DdOptions::default())?;
    let combine = |multipliers: &[N]| {
        let mut multipliers = multipliers.to_vec();
        normalize_by_min_abs(&mut multipliers);
        kept.iter()
            .map(|&column| {
                multipliers.iter()
                    .zip(matrix.rows())
                    .filter(|(multiplier, _)| !multiplier.is_zero())
                    .map(|(multiplier, row)| multiplier.clone() * &row[column])
                    .sum::<N>()
            })
            .collect::<Vec<_>>()
    };

    let inequalities = output.rays.iter()
        .map(|ray| combine(&ray.vector))
        .filter(|row| !is_zero_row(row))
        .collect::<Vec<_>>();
    let equalities = output.lineality.iter()
        .map(|vector| combine(vector))
        .filter(|row| !is_zero_row(row))
        .collect::<Vec<_>>();
    debug!(
        eliminated = columns.len(),
        inequalities = inequalities.len(),
        equalities = equalities.len(),
        "block elimination",
    );

    result.extend(inequalities, false)?;
    result.extend(equalities, true)?;
    Ok(result)
}

fn check_inequalities<N: Number>(matrix: &Matrix<N>) -> Result<()> {
    match matrix.rep() {
        Representation::Generator => Err(PolyError::WrongRepresentation),
        _ => Ok(()),
    }
}
