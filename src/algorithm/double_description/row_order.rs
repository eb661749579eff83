//! # Row orders
//!
//! The order in which the rows of a cone are added. The static orders fix the sequence up front;
//! the cutoff orders choose the next row by looking at the current rays.
use std::cmp::Ordering;

use crate::algorithm::double_description::engine::Engine;
use crate::data::elements::RowOrder;
use crate::data::linear_algebra::row_set::RowSet;
use crate::data::number_types::traits::Number;

/// Whether the next row depends on the rays computed so far.
pub(crate) fn is_dynamic(order: RowOrder) -> bool {
    matches!(order, RowOrder::MinCutoff | RowOrder::MaxCutoff | RowOrder::MixCutoff)
}

/// All rows, equality rows first, each group in the static sequence of `order`.
///
/// The cutoff orders start from increasing index.
pub(crate) fn initial_sequence<N: Number>(rows: &[Vec<N>], equalities: &RowSet, order: RowOrder) -> Vec<usize> {
    let mut sequence = (0..rows.len()).collect::<Vec<_>>();
    match order {
        RowOrder::MaxIndex => sequence.reverse(),
        RowOrder::LexMin => sequence.sort_by(|&a, &b| lexicographic(&rows[a], &rows[b]).then(a.cmp(&b))),
        RowOrder::LexMax => sequence.sort_by(|&a, &b| lexicographic(&rows[b], &rows[a]).then(a.cmp(&b))),
        RowOrder::MinIndex | RowOrder::MinCutoff | RowOrder::MaxCutoff | RowOrder::MixCutoff => (),
    }

    let (mut first, rest): (Vec<_>, Vec<_>) = sequence.into_iter().partition(|&row| equalities.contains(row));
    first.extend(rest);
    first
}

fn lexicographic<N: Number>(left: &[N], right: &[N]) -> Ordering {
    left.iter()
        .zip(right)
        .map(|(a, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Position in `remaining` of the row to add next.
///
/// Equality rows are at the front of `remaining` and always go first. Ties between cutoff scores
/// go to the earliest candidate.
pub(crate) fn select_next<N: Number>(
    engine: &Engine<'_, N>,
    remaining: &[usize],
    equalities: &RowSet,
    order: RowOrder,
) -> usize {
    debug_assert!(!remaining.is_empty());

    if !is_dynamic(order) || equalities.contains(remaining[0]) {
        return 0;
    }

    let score = |row: usize| {
        let (feasible, infeasible) = engine.feasibility_indices(row);
        match order {
            RowOrder::MinCutoff => usize::MAX - infeasible,
            RowOrder::MaxCutoff => infeasible,
            _ => feasible.max(infeasible),
        }
    };

    let mut best = (0, score(remaining[0]));
    for (position, &row) in remaining.iter().enumerate().skip(1) {
        let value = score(row);
        if value > best.1 {
            best = (position, value);
        }
    }
    best.0
}
