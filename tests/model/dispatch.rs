use sasmodel::model::{self, MODEL_NAMES};
use sasmodel::prelude::*;

#[test]
fn factory_builds_models_by_name() {
    for name in MODEL_NAMES {
        let model = model::create(name).unwrap();
        assert_eq!(model.name(), name);
        assert!(!model.description().is_empty());
        assert!(model.run(&[0.05]).unwrap().is_finite());
    }
}

#[test]
fn scalar_and_pair_inputs() {
    let model = TeubnerStrey::new();
    assert_eq!(model.run_input(QInput::from(0.1)), model.evaluate(0.1));
    assert_eq!(
        model.run_xy_input(QInput::from((0.1, 0.2))),
        model.evaluate_xy(0.1, 0.2)
    );
    assert_eq!(
        model.run(&[1.0, 2.0, 3.0]).unwrap_err(),
        Error::WrongArity {
            expected: 2,
            got: 3
        }
    );
}

#[test]
fn registry_dispersion_is_copied_into_parameter() {
    let registry = DispersionRegistry::new();
    let handle = registry.insert(Dispersion::rectangular(5.0, 10));

    let mut model = model::create("HardsphereStructure").unwrap();
    model.set_dispersion_from(&registry, "radius", handle).unwrap();

    registry.replace(handle, Dispersion::Delta).unwrap();
    assert_eq!(model.parameters().weights("radius").unwrap().len(), 10);

    registry.remove(handle).unwrap();
    assert!(matches!(
        model.set_dispersion_from(&registry, "radius", handle),
        Err(Error::UnknownHandle(_))
    ));
}

#[test]
fn dispersion_on_fixed_parameter_fails() {
    let mut model = ParallelepipedModel::new();
    assert_eq!(
        model.set_dispersion("contrast", Dispersion::rectangular(1e-7, 3)),
        Err(Error::NotDispersible("contrast".into()))
    );
    assert_eq!(
        model.set_dispersion("radius", Dispersion::Delta),
        Err(Error::UnknownParameter("radius".into()))
    );
}

#[test]
fn models_evaluate_concurrently() {
    let model = ParallelepipedModel::new();
    let expected = model.evaluate(0.04);
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| assert_eq!(model.evaluate(0.04), expected));
        }
    });
}
