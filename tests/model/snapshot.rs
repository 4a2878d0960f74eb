use sasmodel::model;
use sasmodel::prelude::*;
use sasmodel::settings;

#[test]
fn snapshot_captures_values_and_dispersions() {
    let mut pp = ParallelepipedModel::new();
    pp.set_param("short_edgeA", 20.0).unwrap();
    pp.set_dispersion("parallel_phi", Dispersion::gaussian(0.1, 5, 2.0))
        .unwrap();

    let snap = pp.snapshot();
    assert_eq!(snap.model, "ParallelepipedModel");
    assert_eq!(snap.params["short_edgeA"], 20.0);
    assert_eq!(snap.dispersion.len(), 5);
    assert_eq!(
        settings::from_settings(&snap.dispersion["parallel_phi"]).unwrap(),
        Dispersion::gaussian(0.1, 5, 2.0)
    );

    let restored = model::from_snapshot(&snap).unwrap();
    assert_eq!(restored.evaluate_xy(0.01, 0.02), pp.evaluate_xy(0.01, 0.02));
}

#[test]
fn failed_restore_leaves_model_unchanged() {
    let mut model = HardsphereStructure::new();
    let mut snap = model.snapshot();
    snap.params.insert("radius".into(), 10.0);
    snap.params.insert("volfraction".into(), -0.5);

    let before = model.snapshot();
    assert!(model.restore(&snap).is_err());
    assert_eq!(model.snapshot(), before);
}

#[test]
fn dispersion_settings_round_trip_preserves_weights() {
    let mut source = HardsphereStructure::new();
    source
        .set_dispersion("radius", Dispersion::gaussian(4.0, 13, 2.5))
        .unwrap();
    let exported = source.dispersion_settings();

    let mut target = HardsphereStructure::new();
    target
        .apply_dispersion_settings("radius", &exported["radius"])
        .unwrap();
    assert_eq!(
        target.parameters().weights("radius").unwrap(),
        source.parameters().weights("radius").unwrap()
    );
}

#[test]
fn snapshot_with_edge_dispersions_restores() {
    let mut pp = ParallelepipedModel::new();
    pp.set_dispersion("longuest_edgeC", Dispersion::rectangular(1.0, 200_000))
        .unwrap();
    pp.set_dispersion("parallel_theta", Dispersion::gaussian(0.3, 4, 0.0))
        .unwrap();

    let snap = pp.snapshot();
    let restored = model::from_snapshot(&snap).unwrap();
    assert_eq!(restored.snapshot(), snap);
}
