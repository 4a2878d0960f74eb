use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sasmodel::average::WeightGrid;
use sasmodel::{Dispersion, WeightPoint};

fn points(npts: usize) -> Vec<WeightPoint> {
    Dispersion::gaussian(1.0, npts, 3.0).generate_weights(10.0)
}

fn bench_grid_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_average");

    for npts in [5, 10, 20] {
        let axis = points(npts);
        group.bench_with_input(BenchmarkId::new("3_axes", npts), &axis, |b, axis| {
            let grid = WeightGrid::new().axis(axis).axis(axis).axis(axis);
            b.iter(|| grid.average(|p| p[0] * p[1] + p[2]).value());
        });
    }

    group.finish();
}

fn bench_generate_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_weights");
    for npts in [10, 100, 1000] {
        let gaussian = Dispersion::gaussian(2.0, npts, 3.0);
        let rectangular = Dispersion::rectangular(2.0, npts);
        group.bench_with_input(BenchmarkId::new("gaussian", npts), &gaussian, |b, d| {
            b.iter(|| d.generate_weights(50.0));
        });
        group.bench_with_input(BenchmarkId::new("rectangular", npts), &rectangular, |b, d| {
            b.iter(|| d.generate_weights(50.0));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grid_average, bench_generate_weights);
criterion_main!(benches);
