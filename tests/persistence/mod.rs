//! # Writing and reading back
use polydd::algorithm::linear_program::LinProg;
use polydd::data::elements::{LpSolver, LpStatus, ObjectiveType, Representation, RowOrder};
use polydd::data::linear_algebra::matrix::Matrix;
use polydd::data::number_types::rational::Rational;
use polydd::io::error::PolyError;
use polydd::io::record::{linprog_from_bytes, linprog_to_bytes, matrix_from_bytes, matrix_to_bytes};
use polydd::polyhedron::Polyhedron;

fn matrix() -> Matrix<Rational> {
    Matrix::from_integers(&[[1, 1, 0], [1, 0, 1], [1, -1, 0], [1, 0, -1], [0, 1, 1]])
        .unwrap()
        .with_rep(Representation::Inequality)
        .with_lin_set([4])
        .unwrap()
        .with_objective(ObjectiveType::Min, vec![Rational::from(0), Rational::from(1), Rational::new(-1, 3).unwrap()])
        .unwrap()
        .with_row_order(RowOrder::MinIndex)
}

#[test]
fn matrix_attributes() {
    let bytes = matrix_to_bytes(&matrix()).unwrap();
    let read = matrix_from_bytes::<Rational>(&bytes).unwrap();

    assert_eq!(read, matrix());
    assert_eq!(read.row_order(), RowOrder::MinIndex);
    assert_eq!(read.obj_func()[2], Rational::new(-1, 3).unwrap());
}

#[test]
fn conversion_after_reading() {
    let read = matrix_from_bytes::<Rational>(&matrix_to_bytes(&matrix()).unwrap()).unwrap();

    let original = Polyhedron::from_matrix(&matrix(), None).unwrap().copy_generators();
    let after = Polyhedron::from_matrix(&read, None).unwrap().copy_generators();
    assert_eq!(original, after);
}

#[test]
fn solved_linear_program() {
    let mut lp = LinProg::from_matrix(&matrix()).unwrap();
    lp.solve(LpSolver::DualSimplex);
    assert_eq!(lp.status(), LpStatus::Optimal);

    let read = linprog_from_bytes::<Rational>(&linprog_to_bytes(&lp).unwrap()).unwrap();
    assert_eq!(read.status(), lp.status());
    assert_eq!(read.obj_value(), lp.obj_value());
    assert_eq!(read.primal_solution(), lp.primal_solution());
    assert_eq!(read.dual_solution(), lp.dual_solution());
    assert_eq!(read.equalities(), lp.equalities());
}

#[test]
fn other_kernel() {
    let bytes = matrix_to_bytes(&matrix().to_float()).unwrap();

    assert!(matches!(matrix_from_bytes::<Rational>(&bytes), Err(PolyError::Record(_))));
    assert_eq!(matrix_from_bytes::<f64>(&bytes), Ok(matrix().to_float()));
}
