//! # Pivot rules
//!
//! Strategies for moving from basis to basis. Both rules only ever look at the columns in which a
//! slack is nonbasic; ties are broken by the lowest row index, which makes both of them finite.
use std::cmp::Ordering;

use crate::algorithm::linear_program::tableau::Tableau;
use crate::data::elements::LpStatus;
use crate::data::number_types::traits::Number;

/// What a pivot rule decided for the current tableau.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Step {
    /// Exchange the basic row with the variable nonbasic in the column.
    Pivot {
        row: usize,
        column: usize,
    },
    /// The current tableau decides the problem.
    Done(LpStatus),
}

/// Deciding how to pivot.
pub(crate) trait PivotRule<N> {
    /// Next step from the current tableau.
    fn next(&mut self, tableau: &Tableau<N>) -> Step;
}

/// Dual simplex with Bland's rule.
///
/// Requires a dual feasible tableau. The leaving row is the lowest primal infeasible row, the
/// entering column the one that keeps the tableau dual feasible, ties going to the lowest
/// nonbasic row.
pub(crate) struct DualBland;

impl<N: Number> PivotRule<N> for DualBland {
    fn next(&mut self, tableau: &Tableau<N>) -> Step {
        let leaving = (0..tableau.row_count())
            .find(|&row| tableau.is_basic(row) && tableau.value_sign(row) == Ordering::Less);
        let Some(row) = leaving else {
            return Step::Done(LpStatus::Optimal);
        };

        let mut best: Option<(usize, N)> = None;
        for column in tableau.slack_columns() {
            let alpha = tableau.entry(row, column);
            if !alpha.is_positive() {
                continue;
            }
            let ratio = tableau.cost(column).clone() / alpha;
            let better = match &best {
                None => true,
                Some((current, current_ratio)) => ratio > *current_ratio || (
                    ratio == *current_ratio && tableau.nonbasic_row(column) < tableau.nonbasic_row(*current)
                ),
            };
            if better {
                best = Some((column, ratio));
            }
        }

        match best {
            Some((column, _)) => Step::Pivot { row, column },
            None => Step::Done(LpStatus::Inconsistent),
        }
    }
}

/// Least index criss-cross method.
///
/// Needs neither a primal nor a dual feasible start. The variable with the lowest index that is
/// primal infeasible (basic and negative) or dual infeasible (nonbasic with a positive cost)
/// determines the pivot.
pub(crate) struct LeastIndex;

impl<N: Number> PivotRule<N> for LeastIndex {
    fn next(&mut self, tableau: &Tableau<N>) -> Step {
        let columns = tableau.slack_columns().collect::<Vec<_>>();
        let column_of = |row: usize| columns.iter()
            .copied()
            .find(|&column| tableau.nonbasic_row(column) == Some(row));

        for row in 0..tableau.constraint_rows() {
            if tableau.is_basic(row) {
                if !tableau.entry(row, 0).is_negative() {
                    continue;
                }
                let entering = columns.iter()
                    .copied()
                    .filter(|&column| tableau.entry(row, column).is_positive())
                    .min_by_key(|&column| tableau.nonbasic_row(column));
                return match entering {
                    Some(column) => Step::Pivot { row, column },
                    None => Step::Done(LpStatus::Inconsistent),
                };
            } else if let Some(column) = column_of(row) {
                if !tableau.cost(column).is_positive() {
                    continue;
                }
                let leaving = (0..tableau.constraint_rows())
                    .find(|&other| tableau.is_basic(other) && tableau.entry(other, column).is_negative());
                return match leaving {
                    Some(other) => Step::Pivot { row: other, column },
                    None => Step::Done(LpStatus::DualInconsistent),
                };
            }
        }

        Step::Done(LpStatus::Optimal)
    }
}
