use std::sync::Arc;

use sasmodel::prelude::*;
use sasmodel::settings;

#[test]
fn one_registered_dispersion_feeds_many_models() {
    let registry = DispersionRegistry::new();
    let handle = registry.insert(Dispersion::gaussian(2.0, 7, 3.0));

    let mut a = HardsphereStructure::new();
    let mut b = ParallelepipedModel::new();
    a.set_dispersion_from(&registry, "radius", handle).unwrap();
    b.set_dispersion_from(&registry, "short_edgeA", handle).unwrap();

    assert_eq!(a.parameters().weights("radius").unwrap().len(), 7);
    assert_eq!(b.parameters().weights("short_edgeA").unwrap().len(), 7);
}

#[test]
fn invalid_registered_dispersion_is_not_attached() {
    let registry = DispersionRegistry::new();
    let handle = registry.insert(Dispersion::gaussian(2.0, 7, -1.0));

    let mut model = HardsphereStructure::new();
    let before = model.snapshot();
    let err = model.set_dispersion_from(&registry, "radius", handle).unwrap_err();
    assert!(matches!(err, Error::InvalidDispersionSpec(_)));
    assert_eq!(model.snapshot(), before);
}

#[test]
fn update_via_settings() {
    let registry = DispersionRegistry::new();
    let handle = registry.insert(Dispersion::Delta);
    registry
        .update(handle, &settings::export(&Dispersion::rectangular(1.0, 4)))
        .unwrap();
    assert_eq!(registry.get(handle).unwrap(), Dispersion::rectangular(1.0, 4));
}

#[test]
fn concurrent_inserts_get_distinct_handles() {
    let registry = Arc::new(DispersionRegistry::new());
    let handles: Vec<DispersionHandle> = std::thread::scope(|s| {
        let workers: Vec<_> = (0..8)
            .map(|i| {
                let registry = Arc::clone(&registry);
                s.spawn(move || registry.insert(Dispersion::rectangular(f64::from(i), 3)))
            })
            .collect();
        workers.into_iter().map(|w| w.join().unwrap()).collect()
    });

    let mut unique = handles.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 8);
    assert_eq!(registry.len(), 8);
}
