use sasmodel::kernel::{ParallelepipedParameters, parallelepiped_1d, parallelepiped_2d};
use sasmodel::prelude::*;

fn defaults() -> ParallelepipedParameters {
    ParallelepipedParameters {
        short_a: 35.0,
        long_b: 75.0,
        long_c: 400.0,
        contrast: 5.3e-6,
        theta: 1.0,
        phi: 1.0,
    }
}

fn delta_model() -> ParallelepipedModel {
    let mut model = ParallelepipedModel::new();
    for name in [
        "short_edgeA",
        "longer_edgeB",
        "longuest_edgeC",
        "parallel_theta",
        "parallel_phi",
    ] {
        model.set_dispersion(name, Dispersion::Delta).unwrap();
    }
    model
}

#[test]
fn default_parameters() {
    let model = ParallelepipedModel::new();
    let names: Vec<_> = model.parameters().names().collect();
    assert_eq!(
        names,
        vec![
            "scale",
            "short_edgeA",
            "longer_edgeB",
            "longuest_edgeC",
            "contrast",
            "background",
            "parallel_theta",
            "parallel_phi"
        ]
    );
    assert_eq!(model.param("contrast").unwrap(), 5.3e-6);
    assert_eq!(model.parameters().dispersible().count(), 5);
    assert_eq!(model.parameters().orientation().count(), 2);
}

#[test]
fn delta_edges_equal_kernel() {
    let model = delta_model();
    for q in [0.001, 0.01, 0.1] {
        assert!((model.evaluate(q) - parallelepiped_1d(&defaults(), q)).abs() < 1e-12);
    }
    assert!(
        (model.evaluate_xy(0.01, 0.02) - parallelepiped_2d(&defaults(), 0.01, 0.02)).abs() < 1e-12
    );
}

#[test]
fn zero_q_is_exactly_zero_for_any_parameters() {
    let mut model = ParallelepipedModel::new();
    model.set_param("scale", 7.0).unwrap();
    model.set_param("background", 3.0).unwrap();
    model
        .set_dispersion("short_edgeA", Dispersion::gaussian(4.0, 7, 3.0))
        .unwrap();
    assert_eq!(model.evaluate(0.0), 0.0);
    assert_eq!(model.run(&[0.0, 2.0]).unwrap(), 0.0);
}

#[test]
fn edge_dispersion_averages_over_product() {
    let mut model = delta_model();
    model
        .set_dispersion(
            "short_edgeA",
            Dispersion::array(vec![30.0, 40.0], vec![1.0, 1.0]).unwrap(),
        )
        .unwrap();
    model
        .set_dispersion(
            "longuest_edgeC",
            Dispersion::array(vec![300.0, 500.0], vec![1.0, 3.0]).unwrap(),
        )
        .unwrap();

    let q = 0.02;
    let mut sum = 0.0;
    let mut norm = 0.0;
    for (a, wa) in [(30.0, 1.0), (40.0, 1.0)] {
        for (c, wc) in [(300.0, 1.0), (500.0, 3.0)] {
            let p = ParallelepipedParameters {
                short_a: a,
                long_c: c,
                ..defaults()
            };
            sum += wa * wc * parallelepiped_1d(&p, q);
            norm += wa * wc;
        }
    }
    let got = model.evaluate(q);
    assert!((got - sum / norm).abs() < 1e-9 * got.abs(), "{got}");
}

#[test]
fn rphi_matches_cartesian_away_from_zero() {
    let model = ParallelepipedModel::new();
    let (q, phi): (f64, f64) = (0.03, 0.4);
    let (s, c) = phi.sin_cos();
    assert_eq!(model.run(&[q, phi]).unwrap(), model.evaluate_xy(q * c, q * s));
    assert_eq!(model.run_xy(&[q * c, q * s]).unwrap(), model.evaluate_xy(q * c, q * s));
}

#[test]
fn eval_distribution_matches_pointwise() {
    let model = ParallelepipedModel::new();
    let qx = [0.01, 0.02, 0.03];
    let qy = [0.0, 0.01, -0.02];
    let out = model.eval_distribution(EvalInput::QxQy(&qx, &qy)).unwrap();
    for i in 0..3 {
        assert_eq!(out[i], model.evaluate_xy(qx[i], qy[i]));
    }
}
