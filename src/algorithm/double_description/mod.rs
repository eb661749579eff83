//! # Double description
//!
//! Computes the extreme rays of the polyhedral cone `{x : a_i x >= 0 for all i, a_j x = 0 for j
//! in E}` from its rows `a_i`.
//!
//! The lineality space of the cone is split off first: a basis of the rows is selected and its
//! null space is the lineality space. The basis rows define a simplicial cone in a complement of
//! that space, from which the remaining rows are added one at a time. Every row partitions the
//! current rays by sign; adjacent pairs of a positive and a negative ray produce a new ray on the
//! hyperplane of the row, after which the negative rays are dropped.
use tracing::debug;

use crate::algorithm::double_description::engine::Engine;
use crate::data::elements::RowOrder;
use crate::data::linear_algebra::basis::{Reduced, select_row_basis};
use crate::data::linear_algebra::snap_to_zero;
use crate::data::linear_algebra::row_set::RowSet;
use crate::data::number_types::traits::Number;
use crate::io::error::Result;

mod engine;
mod row_order;

/// Settings for the double description method.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DdOptions {
    /// Order in which the rows are added. Only affects the order of the output.
    pub row_order: RowOrder,
    /// Relative tolerance of the sign tests of the float kernel.
    ///
    /// A row evaluates to zero on a ray when the value is at most `tolerance` times the largest
    /// absolute entry of the row; rays are scaled to a largest entry in `[1, 2)`. Zero, the
    /// default, compares exactly. Exact numbers ignore this setting.
    pub tolerance: f64,
}

impl Default for DdOptions {
    fn default() -> Self {
        Self { row_order: RowOrder::default(), tolerance: 0_f64 }
    }
}

impl DdOptions {
    /// Builder style row order.
    #[must_use]
    pub fn with_row_order(mut self, row_order: RowOrder) -> Self {
        self.row_order = row_order;
        self
    }

    /// Builder style tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl From<RowOrder> for DdOptions {
    fn from(row_order: RowOrder) -> Self {
        Self { row_order, ..Self::default() }
    }
}

/// An extreme ray together with the rows on which it vanishes.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct Ray<N> {
    pub vector: Vec<N>,
    pub zero_set: RowSet,
}

/// Extreme rays and lineality space of a cone.
#[derive(Clone, Debug)]
pub(crate) struct ConeOutput<N> {
    /// Extreme rays of the pointed part, with zero sets over all rows.
    pub rays: Vec<Ray<N>>,
    /// A basis of the lineality space.
    pub lineality: Vec<Vec<N>>,
    /// Rank of the rows.
    pub rank: usize,
}

impl<N> ConeOutput<N> {
    /// Whether two of the extreme rays span a two dimensional face.
    pub fn adjacent(&self, first: usize, second: usize) -> bool {
        engine::adjacent(&self.rays, self.rank, first, second)
    }
}

/// Enumerate the extreme rays and the lineality space of a cone.
///
/// # Arguments
///
/// * `rows`: Rows `a_i`, all of length `width`.
/// * `equalities`: Rows that hold with equality.
///
/// # Errors
///
/// `NumericalInconsistency` if rounding makes a computed ray violate a row, or makes a basis row
/// dependent. This only happens for the float kernel.
pub(crate) fn enumerate<N: Number>(
    rows: &[Vec<N>],
    width: usize,
    equalities: &RowSet,
    options: &DdOptions,
) -> Result<ConeOutput<N>> {
    debug_assert!(rows.iter().all(|row| row.len() == width));

    let sequence = row_order::initial_sequence(rows, equalities, options.row_order);
    let basis = select_row_basis(rows, sequence.iter().copied(), options.tolerance);
    let reduced = Reduced::new(rows, &basis)?;
    let lineality = reduced.null_space(&basis, width)
        .into_iter()
        .map(|mut vector| {
            N::rescale(&mut vector);
            snap_to_zero(&mut vector, options.tolerance);
            vector
        })
        .collect::<Vec<_>>();

    let mut engine = Engine::new(rows, equalities, &basis, &reduced, width, options.tolerance);
    let in_basis = basis.rows.iter().collect::<RowSet>();
    let mut remaining = sequence.into_iter()
        .filter(|&row| !in_basis.contains(row))
        .collect::<Vec<_>>();
    while !remaining.is_empty() {
        let position = row_order::select_next(&engine, &remaining, equalities, options.row_order);
        let row = remaining.remove(position);
        engine.add_row(row)?;
        debug!(row, rays = engine.ray_count(), remaining = remaining.len(), "row added to cone");
    }

    let rank = engine.rank();
    let rays = engine.finish();
    debug!(rays = rays.len(), lineality = lineality.len(), rank, "cone enumerated");

    Ok(ConeOutput { rays, lineality, rank })
}
