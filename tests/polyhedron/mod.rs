//! # Conversions of known polyhedra
//!
//! The cube, the unbounded polyhedron of `vtest_vo.ine` from the cddlib distribution, and inputs
//! that once broke other implementations.
use std::collections::BTreeSet;

use polydd::data::elements::Representation;
use polydd::data::linear_algebra::matrix::Matrix;
use polydd::data::number_types::rational::Rational;
use polydd::data::number_types::traits::Number;

/// # Generation and execution
#[allow(missing_docs)]
mod test;

/// Inequalities of the cube `[-1, 1]^3`.
fn cube() -> Matrix<Rational> {
    Matrix::from_integers(&[
        [1, 1, 0, 0],
        [1, 0, 1, 0],
        [1, 0, 0, 1],
        [1, -1, 0, 0],
        [1, 0, -1, 0],
        [1, 0, 0, -1],
    ]).unwrap().with_rep(Representation::Inequality)
}

/// An unbounded polyhedron with six vertices and four rays.
fn vtest_vo() -> Matrix<Rational> {
    Matrix::from_integers(&[
        [0, 0, 0, 1],
        [5, -4, -2, 1],
        [5, -2, -4, 1],
        [16, -8, 0, 1],
        [16, 0, -8, 1],
        [32, -8, -8, 1],
    ]).unwrap().with_rep(Representation::Inequality)
}

/// The cube `[-1, 1]^3` cut by four planes with decimal coefficients, with thirteen vertices.
fn cut_cube() -> Matrix<f64> {
    let mut matrix = cube().to_float();
    matrix.extend(vec![
        vec![0.5, -0.3, 0.2, 0.1],
        vec![1.2, 0.7, -0.4, 0.9],
        vec![0.9, 0.1, 0.1, -0.6],
        vec![1.1, -0.5, -0.5, -0.5],
    ], false).unwrap();
    matrix
}

/// Generators on which the float kernel loses track of the signs.
fn inconsistent_generators() -> Matrix<f64> {
    Matrix::new(vec![
        vec![1.0, -4.0, -40.0, -4.0, 30.0677432, -0.93140119, -20.75373128],
        vec![1.0, 4.0, -40.0, -4.0, 31.02398625, 5.00096, -18.98561378],
        vec![1.0, -4.0, -40.0, -4.0, 31.02398625, -1.09504, -20.07358622],
        vec![1.0, 4.0, -40.0, 4.0, 29.05601375, 1.09504, -18.10561371],
        vec![1.0, -4.0, 40.0, -4.0, -28.02714601, -1.01021223, 17.92502368],
        vec![1.0, -4.0, 40.0, -4.0, -27.9039032, -0.93140119, 18.58989128],
        vec![1.0, -4.0, 40.0, -4.0, -28.86014625, -1.00704, 18.78974629],
        vec![1.0, 4.0, 40.0, -4.0, -28.86014625, 5.00096, 21.14945378],
        vec![1.0, -4.0, 40.0, 4.0, -31.21985375, -4.91296, 17.90974622],
        vec![1.0, 4.0, 40.0, -4.0, -28.86014625, 4.91296, 20.26945371],
    ]).unwrap().with_rep(Representation::Generator)
}

/// Rows as a set, to compare matrices up to the order of their rows.
fn row_set<N: Number + Ord>(matrix: &Matrix<N>) -> BTreeSet<Vec<N>> {
    matrix.rows().iter().cloned().collect()
}
