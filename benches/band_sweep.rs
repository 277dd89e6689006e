use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use photonic_tmm::prelude::*;
use photonic_tmm::sweep::{angular_freq_linspace, sweep_power};

fn build_reference_crystal() -> PhotonicCrystal1d {
    let mut crystal = PhotonicCrystal1d::new(
        30,
        0.15,
        0.05,
        RelativeMaterial::dielectric(2.0),
        RelativeMaterial::dielectric(4.0),
    )
    .unwrap();
    crystal.set_environment(RelativeMaterial::vacuum()).unwrap();
    crystal
}

fn bench_band_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("band_sweep");
    let omegas: Vec<f64> = angular_freq_linspace(1.5e9, 4.0e9, 10_000);

    group.bench_function(BenchmarkId::new("n30_stack", omegas.len()), |b| {
        b.iter_batched(
            build_reference_crystal,
            |mut crystal| {
                let _ = sweep_power(&mut crystal, omegas.iter().copied()).unwrap();
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_band_sweep);
criterion_main!(benches);
