//! # Projections with known results
use std::collections::BTreeSet;

use polydd::algorithm::elimination::{block_elimination, fourier_elimination};
use polydd::data::elements::Representation;
use polydd::data::linear_algebra::matrix::Matrix;
use polydd::data::number_types::rational::Rational;
use polydd::io::error::PolyError;

fn inequalities<R: AsRef<[i64]>>(rows: &[R]) -> Matrix<Rational> {
    Matrix::from_integers(rows).unwrap().with_rep(Representation::Inequality)
}

fn rational(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom).unwrap()
}

/// `2x - 5y + 4z <= 10`, `3x - 6y + 3z <= 9`, `-x + 5y - 2z <= -7`, `-3x + 2y + 6z <= 12`
fn system() -> Matrix<Rational> {
    inequalities(&[
        [10, -2, 5, -4],
        [9, -3, 6, -3],
        [-7, 1, -5, 2],
        [12, 3, -2, -6],
    ])
}

#[test]
fn fourier_motzkin() {
    let projection = fourier_elimination(&system()).unwrap();

    assert_eq!(projection.rows(), [
        vec![rational(-1, 1), rational(0, 1), rational(-5, 4)],
        vec![rational(-1, 1), rational(-1, 1), rational(-1, 1)],
        vec![rational(-3, 2), rational(1, 1), rational(-17, 6)],
    ]);
}

#[test]
fn block_of_one() {
    let projection = block_elimination(&system(), &BTreeSet::from([3])).unwrap();

    assert_eq!(projection.rows().iter().cloned().collect::<BTreeSet<_>>(), BTreeSet::from([
        vec![rational(-4, 1), rational(0, 1), rational(-5, 1)],
        vec![rational(-3, 2), rational(-3, 2), rational(-3, 2)],
        vec![rational(-9, 1), rational(6, 1), rational(-17, 1)],
    ]));
    assert!(projection.lin_set().is_empty());
}

#[test]
fn block_of_three() {
    let matrix = inequalities(&[[1, 1, 1, 1, 1], [1, 2, -1, -1, -1]]);
    let projection = block_elimination(&matrix, &BTreeSet::from([2, 3, 4])).unwrap();

    assert_eq!(projection.rows(), [vec![rational(2, 1), rational(3, 1)]]);
    assert!(projection.lin_set().is_empty());
}

#[test]
fn block_through_an_equality() {
    let matrix = inequalities(&[[-2, 1, 1], [0, 0, 1]]).with_lin_set([0]).unwrap();
    let projection = block_elimination(&matrix, &BTreeSet::from([2])).unwrap();

    assert_eq!(projection.rows(), [vec![rational(2, 1), rational(-1, 1)]]);
    assert!(projection.lin_set().is_empty());
}

#[test]
fn linearity_is_refused() {
    let matrix = inequalities(&[[-2, 1, 1], [0, 0, 1]]).with_lin_set([0]).unwrap();
    assert_eq!(fourier_elimination(&matrix), Err(PolyError::CannotHandleLinearity));
    assert_eq!(
        PolyError::CannotHandleLinearity.to_string(),
        "cannot handle linearity",
    );
}
