//! # Polyhedra
//!
//! A polyhedron holds the matrix it was created from, the input, and the other representation
//! computed from it with the double description method, the output.
//!
//! Inequalities `b + A x >= 0` are read as the cone `{(x_0, x) : b x_0 + A x >= 0, x_0 >= 0}`, the
//! last row being added to the input rows. Its extreme rays with `x_0 > 0` are vertices, those
//! with `x_0 = 0` are rays of the polyhedron. Generators `g_i` are read as the cone of valid
//! inequalities `{h : g_i h >= 0}`, of which the extreme rays are the facets.
use std::collections::BTreeSet;
use std::sync::OnceLock;

use tracing::debug;

use crate::algorithm::adjacency::input_adjacency;
use crate::algorithm::double_description::{ConeOutput, DdOptions, enumerate};
use crate::data::elements::{Representation, RowOrder};
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::linear_algebra::normalize_by_min_abs;
use crate::data::linear_algebra::row_set::RowSet;
use crate::data::number_types::traits::Number;
use crate::io::error::{PolyError, Result};

/// A polyhedron in both representations.
///
/// Both representations are computed when the polyhedron is created. Adjacency is computed on
/// first use and kept.
#[derive(Clone, Debug)]
pub struct Polyhedron<N> {
    input: Matrix<N>,
    output: Matrix<N>,
    options: DdOptions,
    /// Number of rows of the cone, which includes the row `x_0 >= 0` for inequality input.
    cone_rows: usize,
    /// Extreme rays of the cone, one for each output row that is not a lineality row.
    cone: ConeOutput<N>,
    /// For every output row, the cone rows it is incident with.
    incidence: Vec<RowSet>,
    adjacency: OnceLock<Vec<BTreeSet<usize>>>,
    input_adjacency: OnceLock<Vec<BTreeSet<usize>>>,
}

impl<N: Number> Polyhedron<N> {
    /// Convert a matrix.
    ///
    /// A matrix with an unspecified representation is read as inequalities.
    ///
    /// # Arguments
    ///
    /// * `row_order`: Order in which the rows are added, if not the row order of the matrix.
    ///
    /// # Errors
    ///
    /// `NumericalInconsistency` when the float kernel produces a ray that violates a row.
    pub fn from_matrix(matrix: &Matrix<N>, row_order: Option<RowOrder>) -> Result<Self> {
        let options = DdOptions::from(row_order.unwrap_or_else(|| matrix.row_order()));
        Self::with_options(matrix, &options)
    }

    /// Convert a matrix with explicit settings.
    ///
    /// # Errors
    ///
    /// As `from_matrix`.
    pub fn with_options(matrix: &Matrix<N>, options: &DdOptions) -> Result<Self> {
        let mut input = matrix.clone();
        if input.rep() == Representation::Unspecified {
            input.set_rep(Representation::Inequality);
        }
        let width = input.column_count();
        let inequalities = input.rep() == Representation::Inequality;

        let mut rows = input.rows().to_vec();
        if inequalities && width > 0 {
            let mut artificial = vec![N::zero(); width];
            artificial[0] = N::one();
            rows.push(artificial);
        }
        let cone_rows = if inequalities { input.row_count() + 1 } else { input.row_count() };
        let equalities = input.lin_set().iter().collect::<RowSet>();

        let mut cone = if width == 0 {
            ConeOutput { rays: Vec::new(), lineality: Vec::new(), rank: 0 }
        } else {
            enumerate(&rows, width, &equalities, options)?
        };
        if inequalities && !cone.rays.iter().any(|ray| ray.vector[0].is_positive()) {
            // No vertex, so the polyhedron is empty.
            cone.rays.clear();
            cone.lineality.clear();
        }

        let mut output = Matrix::empty(width);
        let dual = if inequalities { Representation::Generator } else { Representation::Inequality };
        output.set_rep(dual);
        output.set_row_order(input.row_order());
        let extreme = cone.rays.iter()
            .map(|ray| {
                let mut vector = ray.vector.clone();
                if inequalities && vector[0].is_positive() {
                    let scale = vector[0].clone();
                    for value in &mut vector {
                        *value /= &scale;
                    }
                } else {
                    normalize_by_min_abs(&mut vector);
                }
                vector
            })
            .collect();
        output.extend(extreme, false)?;
        let lineality = cone.lineality.iter()
            .map(|vector| {
                let mut vector = vector.clone();
                normalize_by_min_abs(&mut vector);
                vector
            })
            .collect();
        output.extend(lineality, true)?;

        let incidence = cone.rays.iter()
            .map(|ray| ray.zero_set.clone())
            .chain(cone.lineality.iter().map(|_| RowSet::full(cone_rows)))
            .collect::<Vec<_>>();
        debug!(
            input = input.row_count(),
            output = output.row_count(),
            lineality = cone.lineality.len(),
            rep = ?input.rep(),
            "polyhedron converted",
        );

        Ok(Self {
            input,
            output,
            options: *options,
            cone_rows,
            cone,
            incidence,
            adjacency: OnceLock::new(),
            input_adjacency: OnceLock::new(),
        })
    }

    /// Representation of the input matrix.
    pub fn rep(&self) -> Representation {
        self.input.rep()
    }

    /// Make the current output the input, converting it back.
    ///
    /// Nothing happens if the representation is already `rep`.
    ///
    /// # Errors
    ///
    /// `UnspecifiedRepresentation` when asked to change to an unspecified representation, and as
    /// `from_matrix`.
    pub fn set_rep(&mut self, rep: Representation) -> Result<()> {
        if rep == self.rep() {
            return Ok(());
        }
        if rep == Representation::Unspecified {
            return Err(PolyError::UnspecifiedRepresentation);
        }

        *self = Self::with_options(&self.output, &self.options)?;
        Ok(())
    }

    /// The matrix that the polyhedron was created from.
    pub fn copy_input(&self) -> Matrix<N> {
        self.input.clone()
    }

    /// The computed representation.
    ///
    /// Vertices are scaled to a leading one, rays and inequalities by their smallest absolute
    /// nonzero entry. Lineality rows come last and form the linearity set.
    pub fn copy_output(&self) -> Matrix<N> {
        self.output.clone()
    }

    /// The generators, either the input or the output.
    pub fn copy_generators(&self) -> Matrix<N> {
        match self.rep() {
            Representation::Generator => self.copy_input(),
            _ => self.copy_output(),
        }
    }

    /// The inequalities, either the input or the output.
    pub fn copy_inequalities(&self) -> Matrix<N> {
        match self.rep() {
            Representation::Generator => self.copy_output(),
            _ => self.copy_input(),
        }
    }

    /// For every output row, the input rows it is incident with.
    ///
    /// For inequality input, index `row_count` of the input stands for `x_0 >= 0`, the face at
    /// infinity.
    pub fn copy_incidence(&self) -> Vec<BTreeSet<usize>> {
        self.incidence.iter().map(RowSet::to_btree).collect()
    }

    /// For every input row, the output rows it is incident with.
    ///
    /// Inequality input has one more entry than it has rows, for `x_0 >= 0`. Rows with an empty
    /// incidence are kept.
    pub fn copy_input_incidence(&self) -> Vec<BTreeSet<usize>> {
        let mut transposed = vec![BTreeSet::new(); self.cone_rows];
        for (output, incident) in self.incidence.iter().enumerate() {
            for row in incident.iter() {
                transposed[row].insert(output);
            }
        }
        transposed
    }

    /// For every output row, the output rows adjacent to it.
    ///
    /// Two extreme rays are adjacent when they span a two dimensional face. Lineality rows are
    /// adjacent to all other rows.
    pub fn copy_adjacency(&self) -> Vec<BTreeSet<usize>> {
        self.adjacency.get_or_init(|| {
            let rays = self.cone.rays.len();
            let total = self.output.row_count();
            (0..total)
                .map(|first| if first < rays {
                    (0..rays)
                        .filter(|&second| second != first && self.cone.adjacent(first, second))
                        .chain(rays..total)
                        .collect()
                } else {
                    (0..total).filter(|&second| second != first).collect()
                })
                .collect()
        }).clone()
    }

    /// For every input row, the input rows adjacent to it.
    ///
    /// Only facets (or extreme generators) have neighbours; see `input_adjacency` for the rows
    /// that are left out.
    pub fn copy_input_adjacency(&self) -> Vec<BTreeSet<usize>> {
        self.input_adjacency.get_or_init(|| {
            let rays = self.cone.rays.len();
            let mut incidence = vec![RowSet::new(); self.cone_rows];
            for (output, ray) in self.cone.rays.iter().enumerate() {
                for row in ray.zero_set.iter() {
                    incidence[row].insert(output);
                }
            }
            let linearity = self.input.lin_set().iter().collect::<RowSet>();

            input_adjacency(&incidence, rays, &linearity)
        }).clone()
    }
}
