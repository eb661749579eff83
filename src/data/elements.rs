//! # Building blocks to describe polyhedra and linear programs.
use serde::{Deserialize, Serialize};

/// What the rows of a matrix describe.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Representation {
    /// Not yet decided; most operations refuse such a matrix.
    #[default]
    Unspecified,
    /// Rows `[b, a]` describe `b + a x >= 0`, or `b + a x = 0` for rows in the linearity set.
    Inequality,
    /// Rows `[1, v]` are vertices, rows `[0, r]` are rays, rows in the linearity set are lines.
    Generator,
}

impl Representation {
    /// The representation that the double description method computes from this one.
    ///
    /// # Return value
    ///
    /// `None` for `Unspecified`.
    #[must_use]
    pub fn dual(self) -> Option<Self> {
        match self {
            Representation::Unspecified => None,
            Representation::Inequality => Some(Representation::Generator),
            Representation::Generator => Some(Representation::Inequality),
        }
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ObjectiveType {
    #[default]
    None,
    Max,
    Min,
}

/// Order in which the double description method adds constraints.
///
/// The order influences the running time and the order of the output rows, never the set of
/// output rows.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RowOrder {
    /// Largest index first.
    MaxIndex,
    /// Smallest index first.
    MinIndex,
    /// Next is the row that cuts off the fewest current rays.
    MinCutoff,
    /// Next is the row that cuts off the most current rays.
    MaxCutoff,
    /// Next is the row with the most lopsided split of the current rays.
    MixCutoff,
    /// Rows sorted lexicographically, smallest first.
    #[default]
    LexMin,
    /// Rows sorted lexicographically, largest first.
    LexMax,
}

/// Algorithm used to solve a linear program.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LpSolver {
    /// Least index criss-cross method; needs no feasible starting basis.
    CrissCross,
    /// Dual simplex method with Bland's rule, after an artificial bound makes the start dual
    /// feasible.
    #[default]
    DualSimplex,
}

/// Outcome of solving a linear program.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, Eq, PartialEq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum LpStatus {
    /// Not solved yet.
    #[default]
    Undecided,
    /// A finite optimum was found.
    Optimal,
    /// The constraints have no common solution.
    Inconsistent,
    /// The dual problem is infeasible; the objective grows without bound if the primal is
    /// feasible.
    DualInconsistent,
    /// The equality constraints alone are contradictory.
    StrucInconsistent,
    /// The objective depends on a direction that no constraint restricts.
    StrucDualInconsistent,
    /// The problem is feasible and unbounded.
    ///
    /// Kept for records written by other tools; the solvers in this crate report unboundedness as
    /// `DualInconsistent`.
    Unbounded,
}
