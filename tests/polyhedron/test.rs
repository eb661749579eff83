use std::collections::BTreeSet;

use polydd::algorithm::double_description::DdOptions;
use polydd::data::elements::{Representation, RowOrder};
use polydd::data::linear_algebra::matrix::Matrix;
use polydd::data::number_types::rational::Rational;
use polydd::data::number_types::traits::Number;
use polydd::io::error::PolyError;
use polydd::polyhedron::Polyhedron;

use super::{cube, cut_cube, inconsistent_generators, row_set, vtest_vo};

#[test]
fn cube_graph() {
    let poly = Polyhedron::from_matrix(&cube(), None).unwrap();
    let generators = poly.copy_generators();
    let adjacency = poly.copy_adjacency();

    assert_eq!(generators.row_count(), 8);
    assert_eq!(adjacency.len(), 8);
    for (first, neighbours) in adjacency.iter().enumerate() {
        assert_eq!(neighbours.len(), 3);
        for &second in neighbours {
            assert!(adjacency[second].contains(&first));
            let differing = generators.row(first).iter()
                .zip(generators.row(second))
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(differing, 1);
        }
    }
}

#[test]
fn cube_round_trip() {
    let poly = Polyhedron::from_matrix(&cube(), None).unwrap();
    let back = Polyhedron::from_matrix(&poly.copy_generators(), None).unwrap();

    assert_eq!(back.rep(), Representation::Generator);
    assert_eq!(row_set(&back.copy_inequalities()), row_set(&cube()));
    assert!(back.copy_inequalities().lin_set().is_empty());
}

#[test]
fn cube_float() {
    let poly = Polyhedron::from_matrix(&cube().to_float(), None).unwrap();
    let generators = poly.copy_generators();

    assert_eq!(generators.row_count(), 8);
    for row in generators.rows() {
        assert_eq!(row[0], 1.0);
        assert!(row[1..].iter().all(|value| value.abs() == 1.0));
    }
}

#[test]
fn vtest_vo_incidence() {
    let poly = Polyhedron::from_matrix(&vtest_vo(), None).unwrap();
    let generators = poly.copy_generators();

    assert_eq!(generators.row_count(), 10);
    let vertices = generators.rows().iter().filter(|row| row[0] == Rational::from(1)).count();
    assert_eq!(vertices, 6);

    let incidence = poly.copy_incidence();
    assert!(incidence.iter().all(|incident| incident.len() == 3));

    let input_incidence = poly.copy_input_incidence();
    assert_eq!(input_incidence.iter().map(BTreeSet::len).collect::<Vec<_>>(), [5, 4, 4, 4, 4, 5, 4]);
    // The face at infinity holds exactly the rays.
    let rays = generators.rows().iter()
        .enumerate()
        .filter(|(_, row)| row[0] == Rational::from(0))
        .map(|(index, _)| index)
        .collect::<BTreeSet<_>>();
    assert_eq!(input_incidence[6], rays);
}

#[test]
fn vtest_vo_adjacency() {
    let poly = Polyhedron::from_matrix(&vtest_vo(), None).unwrap();

    assert_eq!(poly.copy_input_adjacency(), vec![
        BTreeSet::from([1, 2, 3, 4, 6]),
        BTreeSet::from([0, 2, 3, 5]),
        BTreeSet::from([0, 1, 4, 5]),
        BTreeSet::from([0, 1, 5, 6]),
        BTreeSet::from([0, 2, 5, 6]),
        BTreeSet::from([1, 2, 3, 4, 6]),
        BTreeSet::from([0, 3, 4, 5]),
    ]);
}

#[test]
fn vtest_vo_round_trip() {
    let poly = Polyhedron::from_matrix(&vtest_vo(), None).unwrap();
    let back = Polyhedron::from_matrix(&poly.copy_generators(), None).unwrap();

    let mut expected = row_set(&vtest_vo());
    // The face at infinity is a facet of the homogenized polyhedron.
    expected.insert([1, 0, 0, 0].into_iter().map(Rational::from).collect());
    assert_eq!(row_set(&back.copy_inequalities()), expected);
}

#[test]
fn row_orders() {
    let expected = row_set(&Polyhedron::from_matrix(&vtest_vo(), None).unwrap().copy_generators());

    for order in [
        RowOrder::MaxIndex,
        RowOrder::MinIndex,
        RowOrder::MinCutoff,
        RowOrder::MaxCutoff,
        RowOrder::MixCutoff,
        RowOrder::LexMin,
        RowOrder::LexMax,
    ] {
        let poly = Polyhedron::from_matrix(&vtest_vo(), Some(order)).unwrap();
        assert_eq!(row_set(&poly.copy_generators()), expected, "{order:?}");

        let matrix = vtest_vo().with_row_order(order);
        let poly = Polyhedron::from_matrix(&matrix, None).unwrap();
        assert_eq!(row_set(&poly.copy_generators()), expected, "{order:?}");
    }
}

#[test]
fn numerical_inconsistency() {
    let result = Polyhedron::from_matrix(&inconsistent_generators(), None);
    assert!(matches!(result, Err(PolyError::NumericalInconsistency { .. })));
    assert!(result.unwrap_err().to_string().contains("inconsistency"));
}

#[test]
fn exact_kernel_has_no_inconsistency() {
    let exact = inconsistent_generators().to_exact().unwrap();
    let poly = Polyhedron::from_matrix(&exact, None).unwrap();

    assert_eq!(poly.copy_inequalities().rep(), Representation::Inequality);
    assert!(poly.copy_inequalities().row_count() > 0);

    let options = DdOptions::default().with_tolerance(1e-12);
    let float = Polyhedron::with_options(&inconsistent_generators(), &options).unwrap();
    assert_eq!(float.copy_inequalities().row_count(), poly.copy_inequalities().row_count());
}

#[test]
fn decimal_triangle() {
    // 0.3 - 0.1 * x - 0.7 * y >= 0, 0.1 * x >= 0, 0.3 * y >= 0
    let inequalities = Matrix::new(vec![
        vec![0.3, -0.1, -0.7],
        vec![0., 0.1, 0.],
        vec![0., 0., 0.3],
    ]).unwrap().with_rep(Representation::Inequality);
    let mut poly = Polyhedron::from_matrix(&inequalities, None).unwrap();
    let generators = poly.copy_generators();

    assert!(generators.lin_set().is_empty());
    assert_eq!(generators.row_count(), 3);
    for expected in [[0., 3. / 7.], [3., 0.], [0., 0.]] {
        assert!(
            generators.rows().iter().any(|row| {
                row[0] == 1. && row[1..].iter().zip(expected).all(|(value, other)| (value - other).abs() < 1e-12)
            }),
            "{expected:?} in {generators:?}",
        );
    }

    poly.set_rep(Representation::Generator).unwrap();
    assert_eq!(poly.copy_inequalities().row_count(), 3);
    assert!(poly.copy_inequalities().lin_set().is_empty());
}

#[test]
fn tolerance() {
    let exact = Polyhedron::from_matrix(&cut_cube().to_exact().unwrap(), None).unwrap().copy_generators();
    assert_eq!(exact.row_count(), 13);

    let options = DdOptions::default().with_tolerance(1e-9);
    let mut poly = Polyhedron::with_options(&cut_cube(), &options).unwrap();
    let generators = poly.copy_generators();
    assert_eq!(generators.row_count(), 13);
    for row in generators.rows() {
        assert_eq!(row[0], 1.);
        let closest = exact.rows().iter()
            .map(|vertex| row.iter().zip(vertex).map(|(value, other)| (value - other.to_f64()).abs()).fold(0., f64::max))
            .fold(f64::INFINITY, f64::min);
        assert!(closest < 1e-9, "{row:?}");
    }

    poly.set_rep(Representation::Generator).unwrap();
    assert_eq!(poly.copy_inequalities().row_count(), 9);
}

#[test]
fn triangle() {
    let generators = Matrix::<Rational>::from_integers(&[[1, 0, 0], [1, 1, 0], [1, 0, 1]])
        .unwrap()
        .with_rep(Representation::Generator);
    let inequalities = Polyhedron::from_matrix(&generators, None).unwrap().copy_inequalities();

    let expected = Matrix::<Rational>::from_integers(&[[1, -1, -1], [0, 1, 0], [0, 0, 1]]).unwrap();
    assert_eq!(row_set(&inequalities), row_set(&expected));
}

#[test]
fn empty_input() {
    let matrix = Matrix::<Rational>::new(Vec::new()).unwrap();
    let poly = Polyhedron::from_matrix(&matrix, None).unwrap();

    assert_eq!(poly.copy_generators().row_count(), 0);
    assert!(poly.copy_incidence().is_empty());
}

#[test]
fn set_rep() {
    let generators = Matrix::<Rational>::from_integers(&[[1, 0, 1], [1, 1, 0], [1, 1, 1], [1, 0, 0]])
        .unwrap()
        .with_rep(Representation::Generator);
    let mut poly = Polyhedron::from_matrix(&generators, None).unwrap();

    poly.set_rep(Representation::Inequality).unwrap();
    assert_eq!(poly.rep(), Representation::Inequality);
    assert_eq!(row_set(&poly.copy_generators()), row_set(&generators));
    poly.set_rep(Representation::Generator).unwrap();
    assert_eq!(poly.rep(), Representation::Generator);
    assert_eq!(row_set(&poly.copy_generators()), row_set(&generators));
}

#[test]
fn large_numbers() {
    use num::BigInt;

    let numerator = BigInt::from(10).pow(100);
    let denominator = BigInt::from(13).pow(90);
    let matrix = Matrix::new(vec![vec![
        Rational::from_big(numerator.clone(), BigInt::from(1)).unwrap(),
        Rational::from_big(numerator, denominator).unwrap(),
    ]]).unwrap();

    let float = matrix.to_float();
    assert_eq!(float.row(0)[0], 1e100);
    assert!((float.row(0)[1] - 0.556030087418433).abs() < 1e-12);
}
