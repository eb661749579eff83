//! # Dictionary tableau
//!
//! Every constraint row `b_i + a_i x >= 0` gets a slack `s_i`. The tableau expresses all slacks,
//! the objective and the structural variables `x` as affine functions of the nonbasic variables.
//! Initially the `x` are nonbasic; `find_basis` pivots them out.
//!
//! The right hand side has a second "big M" coefficient, used only by the artificial bound row of
//! the dual simplex method. It is compared lexicographically: `beta + m M` with `M` arbitrarily
//! large.
use std::cmp::Ordering;

use tracing::trace;

use crate::data::elements::LpStatus;
use crate::data::number_types::traits::Number;

/// Tableau over the constraint rows of a linear program.
#[derive(Clone, Debug)]
pub(crate) struct Tableau<N> {
    /// Row `i` is `[beta_i, alpha_i1, ..., alpha_in]`: `s_i = beta_i + sum_j alpha_ij t_j` where
    /// `t_j` is the variable nonbasic in column `j`.
    rows: Vec<Vec<N>>,
    /// Big M coefficient of each `beta_i`.
    big_m: Vec<N>,
    /// `[z_0, gamma_1, ..., gamma_n]`, the objective to maximize.
    objective: Vec<N>,
    objective_big_m: N,
    /// Structural variables in terms of the nonbasic variables, same layout as `rows`.
    primal: Vec<Vec<N>>,
    primal_big_m: Vec<N>,
    /// Row nonbasic in each column `1..=n`, `None` while the structural variable is still there.
    nonbasic: Vec<Option<usize>>,
    /// Column in which each row is nonbasic.
    position: Vec<Option<usize>>,
    /// Rows that must hold with equality.
    equalities: Vec<usize>,
    /// Number of rows that come from the linear program, the artificial bound row comes after.
    constraint_rows: usize,
}

impl<N: Number> Tableau<N> {
    /// Create the tableau with all structural variables nonbasic.
    ///
    /// # Arguments
    ///
    /// * `constraints`: Rows `[b_i, a_i]`, all of width `n + 1`.
    /// * `equalities`: Indices of rows that hold with equality.
    /// * `objective`: `[c_0, c]` to be maximized.
    pub fn new(constraints: &[Vec<N>], equalities: Vec<usize>, objective: Vec<N>) -> Self {
        let width = objective.len();
        debug_assert!(constraints.iter().all(|row| row.len() == width));
        let variables = width - 1;

        let primal = (0..variables)
            .map(|j| {
                let mut row = vec![N::zero(); width];
                row[j + 1] = N::one();
                row
            })
            .collect();

        Self {
            rows: constraints.to_vec(),
            big_m: vec![N::zero(); constraints.len()],
            objective,
            objective_big_m: N::zero(),
            primal,
            primal_big_m: vec![N::zero(); variables],
            nonbasic: vec![None; variables],
            position: vec![None; constraints.len()],
            equalities,
            constraint_rows: constraints.len(),
        }
    }

    /// Number of structural variables, which is also the number of nonbasic columns.
    pub fn variables(&self) -> usize {
        self.nonbasic.len()
    }

    /// Number of rows, including the artificial row once it is added.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn constraint_rows(&self) -> usize {
        self.constraint_rows
    }

    pub fn is_basic(&self, row: usize) -> bool {
        self.position[row].is_none()
    }

    /// Row nonbasic in column `column` (1-based), if any.
    pub fn nonbasic_row(&self, column: usize) -> Option<usize> {
        self.nonbasic[column - 1]
    }

    pub fn entry(&self, row: usize, column: usize) -> &N {
        &self.rows[row][column]
    }

    /// Reduced cost of column `column` (1-based).
    pub fn cost(&self, column: usize) -> &N {
        &self.objective[column]
    }

    /// Columns in which a slack is nonbasic, the only columns the pivot rules may use.
    pub fn slack_columns(&self) -> impl Iterator<Item=usize> + '_ {
        (1..=self.variables()).filter(|&column| self.nonbasic_row(column).is_some())
    }

    /// Compare the value `beta + m M` of a basic row with zero, for arbitrarily large `M`.
    pub fn value_sign(&self, row: usize) -> Ordering {
        match self.big_m[row].partial_cmp(&N::zero()) {
            Some(Ordering::Equal) | None => self.rows[row][0]
                .partial_cmp(&N::zero())
                .unwrap_or(Ordering::Equal),
            Some(ordering) => ordering,
        }
    }

    /// Exchange the basic row `row` with the variable nonbasic in `column`.
    pub fn pivot(&mut self, row: usize, column: usize) {
        debug_assert!(self.is_basic(row));
        debug_assert!(!self.rows[row][column].is_zero());
        trace!(row, column, "pivot");

        let pivot = self.rows[row][column].clone();
        let pivot_row = self.rows[row].clone();
        let pivot_big_m = self.big_m[row].clone();

        let update = |target: &mut Vec<N>, target_big_m: &mut N| {
            if target[column].is_zero() {
                return;
            }
            let ratio = target[column].clone() / &pivot;
            for (k, value) in target.iter_mut().enumerate() {
                if k == column {
                    *value = ratio.clone();
                } else if !pivot_row[k].is_zero() {
                    *value -= ratio.clone() * &pivot_row[k];
                }
            }
            if !pivot_big_m.is_zero() {
                *target_big_m -= ratio * &pivot_big_m;
            }
        };

        for (target, target_big_m) in self.rows.iter_mut().zip(self.big_m.iter_mut()) {
            update(target, target_big_m);
        }
        update(&mut self.objective, &mut self.objective_big_m);
        for (target, target_big_m) in self.primal.iter_mut().zip(self.primal_big_m.iter_mut()) {
            update(target, target_big_m);
        }

        if let Some(leaving) = self.nonbasic[column - 1] {
            self.position[leaving] = None;
        }
        self.nonbasic[column - 1] = Some(row);
        self.position[row] = Some(column);
    }

    /// Pivot the structural variables out of the nonbasic columns, equality rows first.
    ///
    /// # Return value
    ///
    /// The number of pivots, and a status if the structure of the problem already decides it.
    pub fn find_basis(&mut self) -> (usize, Option<LpStatus>) {
        let mut pivots = 0;
        let equalities = self.equalities.clone();

        for &row in &equalities {
            let column = (1..=self.variables())
                .find(|&column| self.nonbasic_row(column).is_none() && !self.rows[row][column].is_zero());
            if let Some(column) = column {
                self.pivot(row, column);
                pivots += 1;
            }
        }

        for column in 1..=self.variables() {
            if self.nonbasic_row(column).is_some() {
                continue;
            }
            let row = (0..self.constraint_rows)
                .find(|&row| self.is_basic(row) && !self.rows[row][column].is_zero());
            if let Some(row) = row {
                self.pivot(row, column);
                pivots += 1;
            }
        }

        let inconsistent = equalities.iter()
            .any(|&row| self.is_basic(row) && !self.rows[row][0].is_zero());
        if inconsistent {
            return (pivots, Some(LpStatus::StrucInconsistent));
        }
        let unrestricted = (1..=self.variables())
            .any(|column| self.nonbasic_row(column).is_none() && !self.objective[column].is_zero());
        if unrestricted {
            return (pivots, Some(LpStatus::StrucDualInconsistent));
        }

        (pivots, None)
    }

    /// Make the tableau dual feasible by adding the artificial row
    /// `s = M - sum_{gamma_j > 0} t_j` and pivoting it into the column with the largest cost.
    ///
    /// # Return value
    ///
    /// Whether a row was added.
    pub fn add_bound_row(&mut self) -> bool {
        let positive = self.slack_columns()
            .filter(|&column| self.objective[column].is_positive())
            .collect::<Vec<_>>();
        let entering = positive.iter().copied().fold(None, |best: Option<usize>, column| match best {
            Some(best) if self.objective[best] >= self.objective[column] => Some(best),
            _ => Some(column),
        });

        match entering {
            None => false,
            Some(entering) => {
                let mut row = vec![N::zero(); self.variables() + 1];
                for &column in &positive {
                    row[column] = -N::one();
                }
                self.rows.push(row);
                self.big_m.push(N::one());
                self.position.push(None);

                let artificial = self.rows.len() - 1;
                self.pivot(artificial, entering);
                true
            },
        }
    }

    /// The smallest `M` for which the current basis is primal feasible, raised far enough that the
    /// objective exceeds one when its big M coefficient is positive.
    fn concrete_big_m(&self) -> N {
        let mut value = N::zero();
        for row in (0..self.rows.len()).filter(|&row| self.is_basic(row)) {
            if self.big_m[row].is_positive() {
                let needed = -self.rows[row][0].clone() / &self.big_m[row];
                if needed > value {
                    value = needed;
                }
            }
        }
        if self.objective_big_m.is_positive() {
            let needed = (self.objective[0].abs() + N::one()) / &self.objective_big_m;
            if needed > value {
                value = needed;
            }
        }
        value
    }

    /// Big M coefficient of the objective value.
    pub fn objective_big_m(&self) -> &N {
        &self.objective_big_m
    }

    /// Read the current basic solution.
    ///
    /// # Return value
    ///
    /// The objective value `z_0`, the structural variables and the reduced cost of every column
    /// in which one of the original constraint rows is nonbasic.
    pub fn solution(&self) -> (N, Vec<N>, Vec<(usize, N)>) {
        let big_m = self.concrete_big_m();
        let evaluate = |row: &[N], coefficient: &N| {
            if coefficient.is_zero() {
                row[0].clone()
            } else {
                row[0].clone() + coefficient.clone() * &big_m
            }
        };

        let value = evaluate(&self.objective, &self.objective_big_m);
        let primal = self.primal.iter()
            .zip(&self.primal_big_m)
            .map(|(row, coefficient)| evaluate(row, coefficient))
            .collect();
        let costs = (1..=self.variables())
            .filter_map(|column| match self.nonbasic_row(column) {
                Some(row) if row < self.constraint_rows => Some((row, self.objective[column].clone())),
                _ => None,
            })
            .collect();

        (value, primal, costs)
    }
}
