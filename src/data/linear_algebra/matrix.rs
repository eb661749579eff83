//! # Matrices
//!
//! The row oriented matrix that describes a polyhedron, either by inequalities or by generators.
//! Column 0 holds the constant term (H) or the vertex/ray flag (V).
use std::collections::BTreeSet;

use crate::data::elements::{ObjectiveType, Representation, RowOrder};
use crate::data::linear_algebra::basis::select_row_basis;
use crate::data::number_types::rational::Rational;
use crate::data::number_types::traits::Number;
use crate::io::error::{PolyError, Result};

/// Ordered rows of a fixed width, with the attributes that say how to read them.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix<N> {
    rows: Vec<Vec<N>>,
    columns: usize,
    rep: Representation,
    lin_set: BTreeSet<usize>,
    obj_type: ObjectiveType,
    obj_func: Vec<N>,
    row_order: RowOrder,
}

/// Result of `Matrix::rank`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MatrixRank {
    /// Independent rows, chosen greedily in row order.
    pub basis_rows: BTreeSet<usize>,
    /// The pivot column of each basis row.
    pub basis_columns: BTreeSet<usize>,
    #[allow(missing_docs)]
    pub rank: usize,
}

impl<N: Number> Matrix<N> {
    /// Create a matrix from rows.
    ///
    /// The representation is unspecified, the linearity set empty and there is no objective.
    ///
    /// # Errors
    ///
    /// `RaggedRow` if not all rows are as wide as the first.
    pub fn new(rows: Vec<Vec<N>>) -> Result<Self> {
        let columns = rows.first().map_or(0, Vec::len);
        Self::check_widths(&rows, columns, 0)?;

        Ok(Self {
            rows,
            columns,
            rep: Representation::Unspecified,
            lin_set: BTreeSet::new(),
            obj_type: ObjectiveType::None,
            obj_func: vec![N::zero(); columns],
            row_order: RowOrder::default(),
        })
    }

    /// A matrix without rows but with a known width.
    pub fn empty(columns: usize) -> Self {
        Self {
            rows: Vec::new(),
            columns,
            rep: Representation::Unspecified,
            lin_set: BTreeSet::new(),
            obj_type: ObjectiveType::None,
            obj_func: vec![N::zero(); columns],
            row_order: RowOrder::default(),
        }
    }

    /// Create a matrix from integer rows.
    pub fn from_integers<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| row.as_ref().iter().map(|&value| N::from_i64(value)).collect())
                .collect(),
        )
    }

    fn check_widths(rows: &[Vec<N>], expected: usize, offset: usize) -> Result<()> {
        match rows.iter().position(|row| row.len() != expected) {
            Some(row) => Err(PolyError::RaggedRow {
                row: offset + row,
                expected,
                actual: rows[row].len(),
            }),
            None => Ok(()),
        }
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row < self.rows.len() {
            Ok(())
        } else {
            Err(PolyError::RowOutOfRange { row, rows: self.rows.len() })
        }
    }

    /// Builder variant of `set_rep`.
    #[must_use]
    pub fn with_rep(mut self, rep: Representation) -> Self {
        self.rep = rep;
        self
    }

    /// Builder variant of `set_lin_set`.
    pub fn with_lin_set(mut self, lin_set: impl IntoIterator<Item=usize>) -> Result<Self> {
        self.set_lin_set(lin_set)?;
        Ok(self)
    }

    /// Builder variant of setting both the objective type and the objective function.
    pub fn with_objective(mut self, obj_type: ObjectiveType, obj_func: Vec<N>) -> Result<Self> {
        self.set_obj_func(obj_func)?;
        self.obj_type = obj_type;
        Ok(self)
    }

    /// Builder variant of `set_row_order`.
    #[must_use]
    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    #[allow(missing_docs)]
    pub fn set_rep(&mut self, rep: Representation) {
        self.rep = rep;
    }

    /// Replace the linearity set.
    ///
    /// # Errors
    ///
    /// `RowOutOfRange` if an index doesn't refer to a row.
    pub fn set_lin_set(&mut self, lin_set: impl IntoIterator<Item=usize>) -> Result<()> {
        let lin_set = lin_set.into_iter().collect::<BTreeSet<_>>();
        if let Some(&row) = lin_set.iter().find(|&&row| row >= self.rows.len()) {
            return Err(PolyError::RowOutOfRange { row, rows: self.rows.len() });
        }
        self.lin_set = lin_set;
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn set_obj_type(&mut self, obj_type: ObjectiveType) {
        self.obj_type = obj_type;
    }

    /// Replace the objective function.
    ///
    /// # Errors
    ///
    /// `ObjectiveWidth` if the vector is not as wide as the matrix.
    pub fn set_obj_func(&mut self, obj_func: Vec<N>) -> Result<()> {
        if obj_func.len() != self.columns {
            return Err(PolyError::ObjectiveWidth { expected: self.columns, actual: obj_func.len() });
        }
        self.obj_func = obj_func;
        Ok(())
    }

    #[allow(missing_docs)]
    pub fn set_row_order(&mut self, row_order: RowOrder) {
        self.row_order = row_order;
    }

    #[allow(missing_docs)]
    pub fn rows(&self) -> &[Vec<N>] {
        &self.rows
    }

    #[allow(missing_docs)]
    pub fn row(&self, row: usize) -> &[N] {
        &self.rows[row]
    }

    #[allow(missing_docs)]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Width `d` of the rows, including the constant column.
    pub fn column_count(&self) -> usize {
        self.columns
    }

    #[allow(missing_docs)]
    pub fn rep(&self) -> Representation {
        self.rep
    }

    #[allow(missing_docs)]
    pub fn lin_set(&self) -> &BTreeSet<usize> {
        &self.lin_set
    }

    #[allow(missing_docs)]
    pub fn is_linearity(&self, row: usize) -> bool {
        self.lin_set.contains(&row)
    }

    #[allow(missing_docs)]
    pub fn obj_type(&self) -> ObjectiveType {
        self.obj_type
    }

    #[allow(missing_docs)]
    pub fn obj_func(&self) -> &[N] {
        &self.obj_func
    }

    #[allow(missing_docs)]
    pub fn row_order(&self) -> RowOrder {
        self.row_order
    }

    /// Append the rows of `other`, keeping the attributes of `self`.
    ///
    /// Linearity rows of `other` stay linearity rows, shifted past the rows of `self`.
    ///
    /// # Errors
    ///
    /// `ColumnMismatch` if the widths differ.
    pub fn append(&mut self, other: &Matrix<N>) -> Result<()> {
        if other.columns != self.columns {
            return Err(PolyError::ColumnMismatch { expected: self.columns, actual: other.columns });
        }

        let offset = self.rows.len();
        self.rows.extend(other.rows.iter().cloned());
        self.lin_set.extend(other.lin_set.iter().map(|row| row + offset));
        Ok(())
    }

    /// Append rows, all of them linearity rows if `linear` is set.
    ///
    /// # Errors
    ///
    /// `RaggedRow` if a row has the wrong width.
    pub fn extend(&mut self, rows: Vec<Vec<N>>, linear: bool) -> Result<()> {
        let offset = self.rows.len();
        Self::check_widths(&rows, self.columns, offset)?;

        let added = rows.len();
        self.rows.extend(rows);
        if linear {
            self.lin_set.extend(offset..offset + added);
        }
        Ok(())
    }

    /// Rank of the matrix, with the rows chosen greedily in row order.
    pub fn rank(&self) -> MatrixRank {
        let basis = select_row_basis(&self.rows, 0..self.rows.len(), 0_f64);

        MatrixRank {
            rank: basis.rank(),
            basis_rows: basis.rows.into_iter().collect(),
            basis_columns: basis.columns.into_iter().collect(),
        }
    }

    /// Check that `row` may be tested for redundancy.
    pub(crate) fn check_testable_row(&self, row: usize) -> Result<()> {
        self.check_row(row)?;
        if self.rep == Representation::Unspecified {
            return Err(PolyError::UnspecifiedRepresentation);
        }
        if self.is_linearity(row) {
            return Err(PolyError::LinearityRow { row });
        }
        Ok(())
    }

    /// Same attributes, other rows.
    ///
    /// The linearity set is given in terms of the new rows.
    pub(crate) fn with_rows(&self, rows: Vec<Vec<N>>, lin_set: BTreeSet<usize>) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == self.columns));
        debug_assert!(lin_set.iter().all(|&row| row < rows.len()));

        Self {
            rows,
            columns: self.columns,
            rep: self.rep,
            lin_set,
            obj_type: self.obj_type,
            obj_func: self.obj_func.clone(),
            row_order: self.row_order,
        }
    }

    /// Remove a single row, shifting the linearity set.
    pub(crate) fn remove_row(&mut self, row: usize) {
        debug_assert!(row < self.rows.len());

        self.rows.remove(row);
        self.lin_set = self.lin_set.iter()
            .filter(|&&index| index != row)
            .map(|&index| if index > row { index - 1 } else { index })
            .collect();
    }

    /// Convert every entry to another number type.
    fn convert<M: Number>(&self, convert: impl Fn(&N) -> Result<M>) -> Result<Matrix<M>> {
        let convert_row = |row: &Vec<N>| row.iter().map(&convert).collect::<Result<Vec<M>>>();

        Ok(Matrix {
            rows: self.rows.iter().map(convert_row).collect::<Result<_>>()?,
            columns: self.columns,
            rep: self.rep,
            lin_set: self.lin_set.clone(),
            obj_type: self.obj_type,
            obj_func: convert_row(&self.obj_func)?,
            row_order: self.row_order,
        })
    }
}

impl Matrix<f64> {
    /// Exact copy of a float matrix, every double converted without rounding.
    ///
    /// # Errors
    ///
    /// `Record` if an entry is not finite.
    pub fn to_exact(&self) -> Result<Matrix<Rational>> {
        self.convert(|&value| {
            Rational::from_f64(value)
                .ok_or_else(|| PolyError::Record(format!("{value} has no exact value")))
        })
    }
}

impl Matrix<Rational> {
    /// Float copy of an exact matrix, every entry rounded to the nearest double.
    pub fn to_float(&self) -> Matrix<f64> {
        let rows = self.rows.iter()
            .map(|row| row.iter().map(Number::to_f64).collect())
            .collect();
        Matrix {
            rows,
            columns: self.columns,
            rep: self.rep,
            lin_set: self.lin_set.clone(),
            obj_type: self.obj_type,
            obj_func: self.obj_func.iter().map(Number::to_f64).collect(),
            row_order: self.row_order,
        }
    }
}
