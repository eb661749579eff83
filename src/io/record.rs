//! # Persisted records
//!
//! Flat, versioned records of matrices and linear programs. Every number is stored in its
//! textual form together with the kernel it came from, so that exact values survive the round
//! trip and a record is never read back with the other kernel.
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::algorithm::linear_program::LinProg;
use crate::data::elements::{LpSolver, LpStatus, ObjectiveType, Representation, RowOrder};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::{Number, NumberKind};
use crate::io::error::{PolyError, Result};

/// Version written into every record.
pub const RECORD_VERSION: u32 = 1;

/// All attributes of a `Matrix`.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct MatrixRecord {
    pub version: u32,
    pub number_type: NumberKind,
    pub columns: usize,
    pub rows: Vec<Vec<String>>,
    pub rep: Representation,
    pub lin_set: BTreeSet<usize>,
    pub obj_type: ObjectiveType,
    pub obj_func: Vec<String>,
    pub row_order: RowOrder,
}

/// A `LinProg` including the result of its last solve.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Clone, Debug, Eq, PartialEq)]
pub struct LinProgRecord {
    pub version: u32,
    pub number_type: NumberKind,
    /// The working array: constraints, negated equalities and the objective row.
    pub array: Vec<Vec<String>>,
    pub equalities: BTreeSet<usize>,
    pub obj_type: ObjectiveType,
    pub solver: LpSolver,
    pub status: LpStatus,
    pub obj_value: String,
    pub primal_solution: Vec<String>,
    pub dual_solution: Vec<(usize, String)>,
}

fn to_texts<N: Number>(values: &[N]) -> Vec<String> {
    values.iter().map(N::to_record).collect()
}

fn from_texts<N: Number>(texts: &[String]) -> Result<Vec<N>> {
    texts.iter().map(|text| N::from_record(text)).collect()
}

fn check_header<N: Number>(version: u32, number_type: NumberKind) -> Result<()> {
    if version != RECORD_VERSION {
        return Err(PolyError::Record(format!("unsupported record version {version}")));
    }
    if number_type != N::KIND {
        return Err(PolyError::Record(format!(
            "record holds {number_type:?} numbers, expected {:?}", N::KIND,
        )));
    }
    Ok(())
}

impl MatrixRecord {
    /// Capture a matrix.
    pub fn from_matrix<N: Number>(matrix: &Matrix<N>) -> Self {
        Self {
            version: RECORD_VERSION,
            number_type: N::KIND,
            columns: matrix.column_count(),
            rows: matrix.rows().iter().map(|row| to_texts(row)).collect(),
            rep: matrix.rep(),
            lin_set: matrix.lin_set().clone(),
            obj_type: matrix.obj_type(),
            obj_func: to_texts(matrix.obj_func()),
            row_order: matrix.row_order(),
        }
    }

    /// Rebuild the matrix.
    ///
    /// # Errors
    ///
    /// `Record` for another version or kernel and for numbers that don't parse, and the
    /// validation errors of `Matrix` for inconsistent attributes.
    pub fn to_matrix<N: Number>(&self) -> Result<Matrix<N>> {
        check_header::<N>(self.version, self.number_type)?;

        let rows = self.rows.iter().map(|row| from_texts(row)).collect::<Result<Vec<_>>>()?;
        let mut matrix = Matrix::empty(self.columns);
        matrix.extend(rows, false)?;
        matrix.set_lin_set(self.lin_set.iter().copied())?;
        matrix.set_rep(self.rep);
        matrix.set_obj_type(self.obj_type);
        matrix.set_obj_func(from_texts(&self.obj_func)?)?;
        matrix.set_row_order(self.row_order);
        Ok(matrix)
    }
}

impl LinProgRecord {
    /// Capture a linear program in its current state.
    pub fn from_linprog<N: Number>(lp: &LinProg<N>) -> Self {
        Self {
            version: RECORD_VERSION,
            number_type: N::KIND,
            array: lp.array().iter().map(|row| to_texts(row)).collect(),
            equalities: lp.equalities().clone(),
            obj_type: lp.obj_type(),
            solver: lp.solver(),
            status: lp.status(),
            obj_value: lp.obj_value().to_record(),
            primal_solution: to_texts(lp.primal_solution()),
            dual_solution: lp.dual_solution()
                .iter()
                .map(|(row, value)| (*row, value.to_record()))
                .collect(),
        }
    }

    /// Rebuild the linear program, solved state included.
    ///
    /// # Errors
    ///
    /// `Record` for another version or kernel, for numbers that don't parse and for an array
    /// that is not consistent with its equalities, `RaggedRow` for rows of different widths.
    pub fn to_linprog<N: Number>(&self) -> Result<LinProg<N>> {
        check_header::<N>(self.version, self.number_type)?;

        let array = self.array.iter().map(|row| from_texts(row)).collect::<Result<Vec<Vec<N>>>>()?;
        let width = array.first().map(Vec::len).ok_or(PolyError::EmptyRepresentation)?;
        if let Some(row) = array.iter().position(|row| row.len() != width) {
            return Err(PolyError::RaggedRow { row, expected: width, actual: array[row].len() });
        }
        let constraints = array.len() - 1;
        if self.equalities.len() > constraints
            || self.equalities.iter().any(|&row| row >= constraints - self.equalities.len()) {
            return Err(PolyError::Record("equality rows outside of the constraint rows".into()));
        }
        let primal_solution = from_texts::<N>(&self.primal_solution)?;
        if primal_solution.len() + 1 != width {
            return Err(PolyError::Record(format!(
                "primal solution has {} entries, expected {}", primal_solution.len(), width - 1,
            )));
        }
        let dual_solution = self.dual_solution.iter()
            .map(|(row, text)| N::from_record(text).map(|value| (*row, value)))
            .collect::<Result<Vec<_>>>()?;

        Ok(LinProg::from_record_parts(
            array,
            self.equalities.clone(),
            self.obj_type,
            self.solver,
            self.status,
            N::from_record(&self.obj_value)?,
            primal_solution,
            dual_solution,
        ))
    }
}

/// Serialize a matrix.
///
/// # Errors
///
/// `Record` if serialization fails.
pub fn matrix_to_bytes<N: Number>(matrix: &Matrix<N>) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&MatrixRecord::from_matrix(matrix))?)
}

/// Deserialize a matrix written by `matrix_to_bytes`.
///
/// # Errors
///
/// `Record` for malformed input, another version or another kernel.
pub fn matrix_from_bytes<N: Number>(bytes: &[u8]) -> Result<Matrix<N>> {
    serde_json::from_slice::<MatrixRecord>(bytes)?.to_matrix()
}

/// Serialize a linear program, solved state included.
///
/// # Errors
///
/// `Record` if serialization fails.
pub fn linprog_to_bytes<N: Number>(lp: &LinProg<N>) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(&LinProgRecord::from_linprog(lp))?)
}

/// Deserialize a linear program written by `linprog_to_bytes`.
///
/// # Errors
///
/// `Record` for malformed input, another version or another kernel.
pub fn linprog_from_bytes<N: Number>(bytes: &[u8]) -> Result<LinProg<N>> {
    serde_json::from_slice::<LinProgRecord>(bytes)?.to_linprog()
}
