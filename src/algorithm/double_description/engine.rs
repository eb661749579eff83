//! # Incremental step
//!
//! The running state of the double description method: the extreme rays of the cone cut out by
//! the rows added so far, each with the set of added rows on which it vanishes.
use enum_map::EnumMap;
use itertools::Itertools;
use tracing::trace;

use crate::algorithm::double_description::Ray;
use crate::data::linear_algebra::basis::{Reduced, RowBasis};
use crate::data::linear_algebra::row_set::RowSet;
use crate::data::linear_algebra::{largest_magnitude, snap_to_zero};
use crate::data::number_types::traits::{inner_product, Number, Sign};
use crate::io::error::{PolyError, Result};

pub(crate) struct Engine<'a, N> {
    rows: &'a [Vec<N>],
    equalities: &'a RowSet,
    /// Rank of the full row system, the dimension of the pointed part of the cone.
    rank: usize,
    rays: Vec<Ray<N>>,
    added: RowSet,
    /// Absolute values up to which a row evaluates to zero, per row.
    thresholds: Vec<f64>,
    tolerance: f64,
}

impl<'a, N: Number> Engine<'a, N> {
    /// Start from the simplicial cone of the basis rows.
    ///
    /// Each inequality row of the basis contributes the ray that is positive on it and vanishes on
    /// all other basis rows. Equality rows of the basis contribute no ray.
    pub fn new(
        rows: &'a [Vec<N>],
        equalities: &'a RowSet,
        basis: &RowBasis,
        reduced: &Reduced<N>,
        width: usize,
        tolerance: f64,
    ) -> Self {
        let thresholds = rows.iter()
            .map(|row| if tolerance > 0_f64 { tolerance * largest_magnitude(row) } else { 0_f64 })
            .collect();
        let added = basis.rows.iter().collect::<RowSet>();
        let rays = basis.rows.iter()
            .zip(reduced.right_inverse(basis, width))
            .filter(|(row, _)| !equalities.contains(**row))
            .map(|(&row, mut vector)| {
                N::rescale(&mut vector);
                snap_to_zero(&mut vector, tolerance);
                let mut zero_set = added.clone();
                zero_set.remove(row);
                Ray { vector, zero_set }
            })
            .collect();

        Self { rows, equalities, rank: basis.rank(), rays, added, thresholds, tolerance }
    }

    pub fn rank(&self) -> usize {
        self.rank
    }

    pub fn ray_count(&self) -> usize {
        self.rays.len()
    }

    /// Value of `row` on `vector`, with negligible values replaced by zero.
    fn evaluate(&self, row: usize, vector: &[N]) -> N {
        let value = inner_product(&self.rows[row], vector);
        if value.is_negligible(self.thresholds[row]) { N::zero() } else { value }
    }

    /// Number of current rays that satisfy and that violate `row`.
    pub fn feasibility_indices(&self, row: usize) -> (usize, usize) {
        let infeasible = self.rays.iter()
            .filter(|ray| self.evaluate(row, &ray.vector).is_negative())
            .count();
        (self.rays.len() - infeasible, infeasible)
    }

    /// Intersect the current cone with the halfspace (or hyperplane) of `row`.
    ///
    /// # Errors
    ///
    /// `NumericalInconsistency` if a newly created ray violates a row that was added before.
    pub fn add_row(&mut self, row: usize) -> Result<()> {
        debug_assert!(!self.added.contains(row));

        let equality = self.equalities.contains(row);
        let values = self.rays.iter().map(|ray| self.evaluate(row, &ray.vector)).collect::<Vec<_>>();
        let mut partition: EnumMap<Sign, Vec<usize>> = EnumMap::default();
        for (index, value) in values.iter().enumerate() {
            partition[value.sign()].push(index);
        }

        for &index in &partition[Sign::Zero] {
            self.rays[index].zero_set.insert(row);
        }

        let mut created = Vec::new();
        for (&positive, &negative) in partition[Sign::Positive].iter().cartesian_product(&partition[Sign::Negative]) {
            if self.check_adjacency(positive, negative) {
                created.push(self.create_new_ray(positive, negative, &values, row)?);
            }
        }

        let keep_positive = !equality;
        let mut rays = std::mem::take(&mut self.rays).into_iter()
            .zip(values)
            .filter(|(_, value)| value.is_zero() || (keep_positive && value.is_positive()))
            .map(|(ray, _)| ray)
            .collect::<Vec<_>>();
        rays.extend(created);
        self.rays = rays;
        self.added.insert(row);

        trace!(
            row,
            equality,
            positive = partition[Sign::Positive].len(),
            negative = partition[Sign::Negative].len(),
            zero = partition[Sign::Zero].len(),
            rays = self.rays.len(),
            "row added",
        );
        Ok(())
    }

    /// Combinatorial adjacency test of two rays of the current cone.
    ///
    /// Two extreme rays are adjacent when their common zero set is large enough to span a two
    /// dimensional face, and no third ray vanishes on all of it.
    pub fn check_adjacency(&self, first: usize, second: usize) -> bool {
        adjacent(&self.rays, self.rank, first, second)
    }

    /// The ray on the hyperplane of `row` between a ray on its positive and one on its negative
    /// side.
    fn create_new_ray(&self, positive: usize, negative: usize, values: &[N], row: usize) -> Result<Ray<N>> {
        let (first, second) = (&self.rays[positive], &self.rays[negative]);
        let (positive_value, negative_value) = (&values[positive], &values[negative]);

        let mut vector = first.vector.iter()
            .zip(&second.vector)
            .map(|(p, n)| positive_value.clone() * n - negative_value.clone() * p)
            .collect::<Vec<_>>();
        N::rescale(&mut vector);
        snap_to_zero(&mut vector, self.tolerance);

        let mut zero_set = RowSet::new();
        zero_set.insert(row);
        for other in self.added.iter() {
            match self.evaluate(other, &vector).sign() {
                Sign::Zero => zero_set.insert(other),
                Sign::Positive if !self.equalities.contains(other) => (),
                _ => return Err(PolyError::NumericalInconsistency { row: other }),
            }
        }

        Ok(Ray { vector, zero_set })
    }

    pub fn finish(self) -> Vec<Ray<N>> {
        self.rays
    }
}

/// Adjacency of two rays among a set of extreme rays of a cone whose pointed part has dimension
/// `rank`.
pub(crate) fn adjacent<N>(rays: &[Ray<N>], rank: usize, first: usize, second: usize) -> bool {
    let common = rays[first].zero_set.intersection(&rays[second].zero_set);
    if common.cardinality() + 2 < rank {
        return false;
    }

    !rays.iter()
        .enumerate()
        .any(|(index, ray)| index != first && index != second && common.is_subset(&ray.zero_set))
}
