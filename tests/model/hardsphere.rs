use sasmodel::kernel::{HardsphereParameters, hardsphere_1d, hardsphere_2d};
use sasmodel::prelude::*;

fn kernel(radius: f64, volfraction: f64) -> HardsphereParameters {
    HardsphereParameters {
        radius,
        volfraction,
    }
}

#[test]
fn delta_radius_equals_direct_kernel_call() {
    let mut model = HardsphereStructure::new();
    model.set_dispersion("radius", Dispersion::Delta).unwrap();
    assert_eq!(model.param("radius").unwrap(), 50.0);
    assert_eq!(model.param("volfraction").unwrap(), 0.20);

    let direct = hardsphere_1d(&kernel(50.0, 0.20), 0.01);
    assert_eq!(model.evaluate(0.01), direct);
    assert_eq!(model.run(&[0.01]).unwrap(), direct);
}

#[test]
fn delta_matches_kernel_at_many_q() {
    let mut model = HardsphereStructure::new();
    model.set_param("radius", 32.0).unwrap();
    model.set_param("volfraction", 0.35).unwrap();
    model.set_dispersion("radius", Dispersion::Delta).unwrap();
    let p = kernel(32.0, 0.35);
    for q in [0.0, 1e-4, 0.003, 0.05, 0.2, 1.5] {
        assert_eq!(model.evaluate(q), hardsphere_1d(&p, q), "q = {q}");
    }
}

#[test]
fn degenerate_gaussians_collapse_to_delta() {
    let mut delta = HardsphereStructure::new();
    delta.set_dispersion("radius", Dispersion::Delta).unwrap();

    let mut one_point = HardsphereStructure::new();
    one_point
        .set_dispersion("radius", Dispersion::gaussian(5.0, 1, 3.0))
        .unwrap();

    let mut zero_width = HardsphereStructure::new();
    zero_width
        .set_dispersion("radius", Dispersion::gaussian(0.0, 25, 3.0))
        .unwrap();

    for q in [0.001, 0.01, 0.1] {
        let expected = delta.evaluate(q);
        assert_eq!(one_point.evaluate(q), expected);
        assert_eq!(zero_width.evaluate(q), expected);
    }
}

#[test]
fn rectangular_radius_average_is_sum_over_norm() {
    let mut model = HardsphereStructure::new();
    model
        .set_dispersion("radius", Dispersion::rectangular(5.0, 10))
        .unwrap();

    let points = model.parameters().weights("radius").unwrap();
    assert_eq!(points.len(), 10);
    assert!((points[0].value - 45.0).abs() < 1e-12);
    assert!((points[9].value - 55.0).abs() < 1e-12);

    let q = 0.02;
    let (sum, norm) = points.iter().fold((0.0, 0.0), |(s, n), p| {
        (
            s + p.weight * hardsphere_1d(&kernel(p.value, 0.20), q),
            n + p.weight,
        )
    });
    let got = model.evaluate(q);
    assert!((got - sum / norm).abs() < 1e-12, "{got} vs {}", sum / norm);
}

#[test]
fn equal_weight_pair_is_arithmetic_mean() {
    let mut model = HardsphereStructure::new();
    model
        .set_dispersion(
            "radius",
            Dispersion::array(vec![40.0, 60.0], vec![0.5, 0.5]).unwrap(),
        )
        .unwrap();
    let q = 0.03;
    let mean = 0.5
        * (hardsphere_1d(&kernel(40.0, 0.20), q) + hardsphere_1d(&kernel(60.0, 0.20), q));
    assert!((model.evaluate(q) - mean).abs() < 1e-12);
}

#[test]
fn zero_total_weight_gives_nan() {
    let mut model = HardsphereStructure::new();
    model
        .set_dispersion(
            "radius",
            Dispersion::array(vec![40.0, 60.0], vec![0.0, 0.0]).unwrap(),
        )
        .unwrap();
    assert!(model.evaluate(0.01).is_nan());
}

#[test]
fn two_dimensional_uses_magnitude() {
    let mut model = HardsphereStructure::new();
    model
        .set_dispersion("radius", Dispersion::gaussian(3.0, 9, 2.5))
        .unwrap();
    let xy = model.evaluate_xy(0.006, 0.008);
    assert!((xy - model.evaluate(0.01)).abs() < 1e-12);

    let mut plain = HardsphereStructure::new();
    plain.set_dispersion("radius", Dispersion::Delta).unwrap();
    assert_eq!(
        plain.evaluate_xy(0.006, 0.008),
        hardsphere_2d(&kernel(50.0, 0.20), 0.006, 0.008)
    );
}

#[test]
fn rphi_matches_cartesian() {
    let model = HardsphereStructure::new();
    for (q, phi) in [(0.01, 0.0), (0.05, 1.2), (0.2, -2.5)] {
        let (s, c) = f64::sin_cos(phi);
        assert_eq!(model.evaluate_rphi(q, phi), model.evaluate_xy(q * c, q * s));
        assert_eq!(model.run(&[q, phi]).unwrap(), model.evaluate_xy(q * c, q * s));
    }
}

#[test]
fn out_of_bounds_values_are_rejected() {
    let mut model = HardsphereStructure::new();
    let err = model.set_param("radius", -1.0).unwrap_err();
    assert!(matches!(err, Error::OutOfBounds { .. }));
    assert_eq!(model.param("radius").unwrap(), 50.0);
}
