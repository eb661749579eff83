//! # Small linear programs with known optima
use polydd::algorithm::linear_program::LinProg;
use polydd::data::elements::{LpSolver, LpStatus, ObjectiveType, Representation};
use polydd::data::linear_algebra::matrix::Matrix;
use polydd::data::number_types::rational::Rational;

const SOLVERS: [LpSolver; 2] = [LpSolver::DualSimplex, LpSolver::CrissCross];

fn rational(numer: i64, denom: i64) -> Rational {
    Rational::new(numer, denom).unwrap()
}

fn integers(values: &[i64]) -> Vec<Rational> {
    values.iter().map(|&value| Rational::from(value)).collect()
}

#[test]
fn two_variables() {
    // max 3x + 4y subject to 2x + y <= 4/3, y <= 2/3, x >= 0, y >= 0
    let matrix = Matrix::new(vec![
        vec![rational(4, 3), rational(-2, 1), rational(-1, 1)],
        vec![rational(2, 3), rational(0, 1), rational(-1, 1)],
        integers(&[0, 1, 0]),
        integers(&[0, 0, 1]),
    ])
        .unwrap()
        .with_rep(Representation::Inequality)
        .with_objective(ObjectiveType::Max, integers(&[0, 3, 4]))
        .unwrap();

    for solver in SOLVERS {
        let mut lp = LinProg::from_matrix(&matrix).unwrap();
        lp.solve(solver);

        assert_eq!(lp.status(), LpStatus::Optimal);
        assert_eq!(lp.obj_value(), &rational(11, 3));
        assert_eq!(lp.primal_solution(), [rational(1, 3), rational(2, 3)]);
        let mut duals = lp.dual_solution().to_vec();
        duals.sort();
        assert_eq!(duals, [(0, rational(3, 2)), (1, rational(5, 2))]);
    }
}

#[test]
fn simplex_with_equality() {
    // x + y + z = 1 over the nonnegative orthant
    let matrix = Matrix::from_integers(&[[1, -1, -1, -1], [0, 1, 0, 0], [0, 0, 1, 0], [0, 0, 0, 1]])
        .unwrap()
        .with_rep(Representation::Inequality)
        .with_lin_set([0])
        .unwrap();

    let cases = [
        (ObjectiveType::Min, integers(&[0, 1, 2, 3]), Rational::from(1)),
        (ObjectiveType::Min, integers(&[0, -1, -2, -3]), Rational::from(-3)),
        (ObjectiveType::Max, integers(&[0, 1, 2, 3]), Rational::from(3)),
    ];
    for (obj_type, objective, optimum) in cases {
        let matrix = matrix.clone().with_objective(obj_type, objective).unwrap();
        for solver in SOLVERS {
            let mut lp = LinProg::from_matrix(&matrix).unwrap();
            assert_eq!(lp.array().len(), 6);
            lp.solve(solver);
            assert_eq!(lp.status(), LpStatus::Optimal);
            assert_eq!(lp.obj_value(), &optimum);
        }
    }
}

#[test]
fn float_kernel() {
    // -0.5 + x >= 0, 2 - x >= 0, max 2 - x
    for solver in SOLVERS {
        let mut lp = LinProg::from_array(
            vec![vec![-0.5, 1.0], vec![2.0, -1.0], vec![2.0, -1.0]],
            ObjectiveType::Max,
        ).unwrap();
        lp.solve(solver);

        assert_eq!(lp.status(), LpStatus::Optimal);
        assert_eq!(lp.obj_value(), &1.5);
        assert_eq!(lp.primal_solution(), [0.5]);
        assert_eq!(lp.dual_solution(), [(0, 1.0)]);
    }
}

#[test]
fn float_fractions() {
    // The rows of `two_variables` with right hand sides that have no exact float form.
    let close = |left: f64, right: f64| (left - right).abs() < 1e-12;
    let matrix = Matrix::new(vec![
        vec![4. / 3., -2., -1.],
        vec![2. / 3., 0., -1.],
        vec![0., 1., 0.],
        vec![0., 0., 1.],
    ])
        .unwrap()
        .with_rep(Representation::Inequality)
        .with_objective(ObjectiveType::Max, vec![0., 3., 4.])
        .unwrap();

    for solver in SOLVERS {
        let mut lp = LinProg::from_matrix(&matrix).unwrap();
        lp.solve(solver);

        assert_eq!(lp.status(), LpStatus::Optimal);
        assert!(close(*lp.obj_value(), 11. / 3.));
        let primal = lp.primal_solution();
        assert!(close(primal[0], 1. / 3.) && close(primal[1], 2. / 3.), "{primal:?}");
        let mut duals = lp.dual_solution().to_vec();
        duals.sort_by_key(|&(row, _)| row);
        assert_eq!(duals.iter().map(|&(row, _)| row).collect::<Vec<_>>(), [0, 1]);
        assert!(close(duals[0].1, 1.5) && close(duals[1].1, 2.5), "{duals:?}");
    }
}
