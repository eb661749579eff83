//! # Linear programs
//!
//! Maximize or minimize `c_0 + c x` subject to `b + A x >= 0`, with some rows holding as
//! equalities. The problem is kept as one working array: the constraint rows, then the negation
//! of every equality row, then the objective row. Dual values refer to rows of this array.
//!
//! Two solvers share one tableau: the dual simplex method (default) and the criss-cross method.
use std::collections::BTreeSet;

use tracing::debug;

use crate::algorithm::linear_program::strategy::{DualBland, LeastIndex, PivotRule, Step};
use crate::algorithm::linear_program::tableau::Tableau;
use crate::data::elements::{LpSolver, LpStatus, ObjectiveType, Representation};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::traits::Number;
use crate::io::error::{PolyError, Result};

pub(crate) mod strategy;
pub(crate) mod tableau;

/// Settings for `LinProg::solve_with`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct LpOptions {
    /// Algorithm to use.
    pub solver: LpSolver,
    /// Give up after this many pivots of the solver, leaving the status undecided.
    pub max_pivots: Option<usize>,
}

impl LpOptions {
    /// Options with the given solver and no pivot limit.
    #[must_use]
    pub fn with_solver(solver: LpSolver) -> Self {
        Self { solver, max_pivots: None }
    }

    /// Builder style pivot limit.
    #[must_use]
    pub fn with_max_pivots(mut self, max_pivots: usize) -> Self {
        self.max_pivots = Some(max_pivots);
        self
    }
}

/// A linear program together with the state of its last solve.
#[derive(Clone, Debug, PartialEq)]
pub struct LinProg<N> {
    /// Constraint rows, negated equality rows, objective row.
    array: Vec<Vec<N>>,
    /// Rows of `array` that hold with equality.
    equalities: BTreeSet<usize>,
    obj_type: ObjectiveType,
    solver: LpSolver,
    status: LpStatus,
    obj_value: N,
    primal_solution: Vec<N>,
    dual_solution: Vec<(usize, N)>,
    pivots: usize,
}

impl<N: Number> LinProg<N> {
    /// Create a linear program from an inequality matrix and its objective.
    ///
    /// # Errors
    ///
    /// `ObjectiveMissing` when the objective type is `None`, `WrongRepresentation` for a generator
    /// matrix and `EmptyRepresentation` for a matrix without columns.
    pub fn from_matrix(matrix: &Matrix<N>) -> Result<Self> {
        if matrix.rep() == Representation::Generator {
            return Err(PolyError::WrongRepresentation);
        }
        Self::from_parts(
            matrix.rows(),
            matrix.lin_set(),
            matrix.obj_func().to_vec(),
            matrix.obj_type(),
        )
    }

    /// Create a linear program from an array whose last row is the objective.
    ///
    /// # Errors
    ///
    /// `EmptyRepresentation` without rows, `RaggedRow` for rows of different widths and
    /// `ObjectiveMissing` when the objective type is `None`.
    pub fn from_array(mut rows: Vec<Vec<N>>, obj_type: ObjectiveType) -> Result<Self> {
        let objective = rows.pop().ok_or(PolyError::EmptyRepresentation)?;
        if let Some(row) = rows.iter().position(|row| row.len() != objective.len()) {
            return Err(PolyError::RaggedRow {
                row,
                expected: objective.len(),
                actual: rows[row].len(),
            });
        }
        Self::from_parts(&rows, &BTreeSet::new(), objective, obj_type)
    }

    /// Assemble the working array.
    pub(crate) fn from_parts(
        rows: &[Vec<N>],
        equalities: &BTreeSet<usize>,
        objective: Vec<N>,
        obj_type: ObjectiveType,
    ) -> Result<Self> {
        if obj_type == ObjectiveType::None {
            return Err(PolyError::ObjectiveMissing);
        }
        if objective.is_empty() {
            return Err(PolyError::EmptyRepresentation);
        }
        debug_assert!(rows.iter().all(|row| row.len() == objective.len()));

        let variables = objective.len() - 1;
        let mut array = rows.to_vec();
        array.extend(equalities.iter().map(|&row| rows[row].iter().map(|value| -value.clone()).collect()));
        array.push(objective);

        Ok(Self {
            array,
            equalities: equalities.clone(),
            obj_type,
            solver: LpSolver::default(),
            status: LpStatus::Undecided,
            obj_value: N::zero(),
            primal_solution: vec![N::zero(); variables],
            dual_solution: Vec::new(),
            pivots: 0,
        })
    }

    /// Rebuild from persisted parts, see `io::record`.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_record_parts(
        array: Vec<Vec<N>>,
        equalities: BTreeSet<usize>,
        obj_type: ObjectiveType,
        solver: LpSolver,
        status: LpStatus,
        obj_value: N,
        primal_solution: Vec<N>,
        dual_solution: Vec<(usize, N)>,
    ) -> Self {
        Self {
            array,
            equalities,
            obj_type,
            solver,
            status,
            obj_value,
            primal_solution,
            dual_solution,
            pivots: 0,
        }
    }

    /// Solve with the given algorithm and no pivot limit.
    ///
    /// Any earlier result is discarded first, so solving twice gives the same result.
    pub fn solve(&mut self, solver: LpSolver) {
        // `PivotLimit` is the only error, and there is no limit.
        let result = self.solve_with(&LpOptions::with_solver(solver));
        debug_assert!(result.is_ok(), "{result:?}");
    }

    /// Solve with explicit options.
    ///
    /// # Errors
    ///
    /// `PivotLimit` when the solver needs more pivots than allowed. The status is then
    /// `Undecided`.
    pub fn solve_with(&mut self, options: &LpOptions) -> Result<()> {
        self.reset();
        self.solver = options.solver;

        let constraints = &self.array[..self.array.len() - 1];
        let objective = match self.obj_type {
            ObjectiveType::Min => self.objective().iter().map(|value| -value.clone()).collect(),
            _ => self.objective().to_vec(),
        };
        let mut tableau = Tableau::new(constraints, self.equalities.iter().copied().collect(), objective);

        let (basis_pivots, decided) = tableau.find_basis();
        self.pivots = basis_pivots;
        let status = match decided {
            Some(status) => status,
            None => match options.solver {
                LpSolver::DualSimplex => {
                    tableau.add_bound_row();
                    let status = run(&mut tableau, &mut DualBland, options.max_pivots, &mut self.pivots)?;
                    if status == LpStatus::Optimal && tableau.objective_big_m().is_positive() {
                        LpStatus::DualInconsistent
                    } else {
                        status
                    }
                },
                LpSolver::CrissCross => run(&mut tableau, &mut LeastIndex, options.max_pivots, &mut self.pivots)?,
            },
        };

        let (value, primal, costs) = tableau.solution();
        self.obj_value = match self.obj_type {
            ObjectiveType::Min => -value,
            _ => value,
        };
        self.primal_solution = primal;
        if status == LpStatus::Optimal {
            self.dual_solution = costs.into_iter()
                .map(|(row, cost)| match self.obj_type {
                    ObjectiveType::Min => (row, cost),
                    _ => (row, -cost),
                })
                .collect();
        }
        self.status = status;

        debug!(solver = ?options.solver, status = ?status, pivots = self.pivots, "linear program solved");
        Ok(())
    }

    fn reset(&mut self) {
        self.status = LpStatus::Undecided;
        self.obj_value = N::zero();
        self.primal_solution = vec![N::zero(); self.column_count() - 1];
        self.dual_solution.clear();
        self.pivots = 0;
    }

    /// Constraint rows, negated equality rows and the objective row.
    pub fn array(&self) -> &[Vec<N>] {
        &self.array
    }

    /// The objective row `[c_0, c]`.
    pub fn objective(&self) -> &[N] {
        &self.array[self.array.len() - 1]
    }

    /// Rows of the working array that hold with equality.
    pub fn equalities(&self) -> &BTreeSet<usize> {
        &self.equalities
    }

    /// Number of constraint rows in the working array.
    pub fn row_count(&self) -> usize {
        self.array.len() - 1
    }

    /// Width `d`, the constant column included.
    pub fn column_count(&self) -> usize {
        self.objective().len()
    }

    #[allow(missing_docs)]
    pub fn obj_type(&self) -> ObjectiveType {
        self.obj_type
    }

    /// Solver used by the last solve, dual simplex before the first.
    pub fn solver(&self) -> LpSolver {
        self.solver
    }

    #[allow(missing_docs)]
    pub fn status(&self) -> LpStatus {
        self.status
    }

    /// Objective value of the last basic solution.
    pub fn obj_value(&self) -> &N {
        &self.obj_value
    }

    /// Values of `x`, width `d - 1`.
    pub fn primal_solution(&self) -> &[N] {
        &self.primal_solution
    }

    /// Dual values `(row of the working array, value)`, only for optimal problems.
    ///
    /// For maximization, `c = -sum_i y_i a_i` with `y >= 0`; for minimization `y <= 0`.
    pub fn dual_solution(&self) -> &[(usize, N)] {
        &self.dual_solution
    }

    /// Pivots used by the last solve, the basis search included.
    pub fn pivots(&self) -> usize {
        self.pivots
    }
}

/// Pivot until the rule decides.
fn run<N: Number, R: PivotRule<N>>(
    tableau: &mut Tableau<N>,
    rule: &mut R,
    max_pivots: Option<usize>,
    pivots: &mut usize,
) -> Result<LpStatus> {
    let mut solver_pivots = 0;
    loop {
        match rule.next(tableau) {
            Step::Pivot { row, column } => {
                if let Some(limit) = max_pivots {
                    if solver_pivots >= limit {
                        debug!(limit, "pivot limit reached");
                        return Err(PolyError::PivotLimit { limit });
                    }
                }
                tableau.pivot(row, column);
                solver_pivots += 1;
                *pivots += 1;
            },
            Step::Done(status) => break Ok(status),
        }
    }
}
