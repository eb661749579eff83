//! # Properties of random small inputs
//!
//! All inequality systems below contain the origin, such that they are feasible.
use std::collections::BTreeSet;

use num::Zero;
use proptest::prelude::*;

use polydd::algorithm::canonicalize::canonicalize;
use polydd::algorithm::elimination::{block_elimination, fourier_elimination};
use polydd::algorithm::linear_program::LinProg;
use polydd::data::elements::{LpSolver, LpStatus, ObjectiveType, Representation};
use polydd::data::linear_algebra::matrix::Matrix;
use polydd::data::number_types::rational::Rational;
use polydd::data::number_types::traits::Number;

/// Rows `[b, a]` with `b >= 0`.
fn feasible_rows(width: usize, rows: std::ops::Range<usize>) -> impl Strategy<Value=Vec<Vec<i64>>> {
    prop::collection::vec(
        (0..4_i64, prop::collection::vec(-3..4_i64, width - 1))
            .prop_map(|(constant, coefficients)| {
                let mut row = vec![constant];
                row.extend(coefficients);
                row
            }),
        rows,
    )
}

fn inequalities(rows: &[Vec<i64>]) -> Matrix<Rational> {
    Matrix::from_integers(rows).unwrap().with_rep(Representation::Inequality)
}

/// Nonzero rows, each divided by its smallest absolute nonzero value.
fn normalized(matrix: &Matrix<Rational>) -> BTreeSet<Vec<Rational>> {
    matrix.rows()
        .iter()
        .filter_map(|row| {
            let smallest = row.iter().filter(|value| !value.is_zero()).map(Number::abs).min()?;
            Some(row.iter().map(|value| value.clone() / &smallest).collect())
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn canonicalize_twice(rows in feasible_rows(3, 1..6)) {
        let mut matrix = inequalities(&rows);
        canonicalize(&mut matrix).unwrap();
        let once = matrix.clone();

        let second = canonicalize(&mut matrix).unwrap();
        prop_assert!(second.implicit_linearity.is_empty());
        prop_assert!(second.redundant.is_empty());
        prop_assert_eq!(second.row_map, (0..once.row_count()).map(Some).collect::<Vec<_>>());
        prop_assert_eq!(matrix, once);
    }

    #[test]
    fn solvers_agree(
        rows in feasible_rows(3, 0..5),
        objective in prop::collection::vec(-3..4_i64, 3),
        maximize in any::<bool>(),
    ) {
        // Keep the problem bounded with 0 <= x, y <= 5.
        let mut all = rows;
        all.extend([vec![0, 1, 0], vec![0, 0, 1], vec![5, -1, 0], vec![5, 0, -1]]);
        all.push(objective);
        let obj_type = if maximize { ObjectiveType::Max } else { ObjectiveType::Min };
        let array = all.iter()
            .map(|row| row.iter().map(|&value| Rational::from(value)).collect())
            .collect::<Vec<Vec<_>>>();

        let mut dual_simplex = LinProg::from_array(array.clone(), obj_type).unwrap();
        dual_simplex.solve(LpSolver::DualSimplex);
        let mut criss_cross = LinProg::from_array(array, obj_type).unwrap();
        criss_cross.solve(LpSolver::CrissCross);

        prop_assert_eq!(dual_simplex.status(), LpStatus::Optimal);
        prop_assert_eq!(criss_cross.status(), LpStatus::Optimal);
        prop_assert_eq!(dual_simplex.obj_value(), criss_cross.obj_value());
    }

    #[test]
    fn fourier_is_block_of_the_last(rows in feasible_rows(4, 1..6)) {
        let matrix = inequalities(&rows);

        let fourier = fourier_elimination(&matrix).unwrap();
        let block = block_elimination(&matrix, &BTreeSet::from([3])).unwrap();
        prop_assert_eq!(normalized(&fourier), normalized(&block));
    }
}
