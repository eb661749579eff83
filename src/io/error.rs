//! # Error reporting
//!
//! One error type for the whole crate. Validation errors carry the offending index and, where it
//! applies, the expected and actual dimensions.
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PolyError>;

/// Everything that can go wrong when building, converting or solving.
///
/// An infeasible or unbounded linear program is not an error; that is reported through the
/// status of the `LinProg`.
#[derive(Error, Clone, Debug, Eq, PartialEq)]
pub enum PolyError {
    /// A row of the input has a different width than the first row.
    #[error("row {row} has {actual} columns, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        actual: usize,
    },
    /// Two matrices or a matrix and a vector don't have the same number of columns.
    #[error("column count mismatch: expected {expected}, got {actual}")]
    ColumnMismatch {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        actual: usize,
    },
    /// A row index is not smaller than the number of rows.
    #[error("row index {row} out of range for a matrix with {rows} rows")]
    RowOutOfRange {
        #[allow(missing_docs)]
        row: usize,
        #[allow(missing_docs)]
        rows: usize,
    },
    /// A column index is out of range or refers to the constant column.
    #[error("column index {column} cannot be used with {columns} columns")]
    ColumnOutOfRange {
        #[allow(missing_docs)]
        column: usize,
        #[allow(missing_docs)]
        columns: usize,
    },
    /// The operation is not defined for rows in the linearity set.
    #[error("row {row} is in the linearity set")]
    LinearityRow {
        #[allow(missing_docs)]
        row: usize,
    },
    /// The matrix doesn't say whether it holds inequalities or generators.
    #[error("the matrix representation is unspecified")]
    UnspecifiedRepresentation,
    /// The operation needs the other representation.
    #[error("the operation is not available for this representation")]
    WrongRepresentation,
    /// A linear program needs an objective direction.
    #[error("the objective type is none")]
    ObjectiveMissing,
    /// The objective function is not as wide as the matrix.
    #[error("objective function has {actual} entries, expected {expected}")]
    ObjectiveWidth {
        #[allow(missing_docs)]
        expected: usize,
        #[allow(missing_docs)]
        actual: usize,
    },
    /// Elimination with equality constraints present.
    #[error("cannot handle linearity")]
    CannotHandleLinearity,
    /// An operation needs at least one row or column.
    #[error("the matrix is empty")]
    EmptyRepresentation,
    /// A newly created ray was found infeasible for a constraint that was already processed.
    #[error("numerical inconsistency: a computed ray violates row {row}")]
    NumericalInconsistency {
        /// Row of the cone that the computed ray violates.
        row: usize,
    },
    /// Division by zero outside of pivoting.
    #[error("division by zero")]
    DivisionByZero,
    /// The solver hit the configured pivot limit before deciding.
    #[error("pivot limit of {limit} reached")]
    PivotLimit {
        #[allow(missing_docs)]
        limit: usize,
    },
    /// A persisted record could not be written or read back.
    #[error("record error: {0}")]
    Record(String),
}

impl From<serde_json::Error> for PolyError {
    fn from(error: serde_json::Error) -> Self {
        PolyError::Record(error.to_string())
    }
}
