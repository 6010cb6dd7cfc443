use criterion::{criterion_group, criterion_main, Criterion};
use monet::scheme::SchemeGenerator;
use monet::zcam::{ViewingConditions, Zcam};
use monet::{Rgb, Tunables};
use std::hint::black_box;

pub fn run_benchmarks(c: &mut Criterion) {
    let seed = Rgb::new(0x42, 0x85, 0xf4);

    let mut group = c.benchmark_group("scheme");

    let accurate = SchemeGenerator::new(&Tunables::default());
    group.bench_function("accurate-shades", |b| {
        b.iter(|| accurate.generate(black_box(seed)))
    });

    let clipped = SchemeGenerator::new(&Tunables::default().with_accurate_shades(false));
    group.bench_function("clipped-shades", |b| {
        b.iter(|| clipped.generate(black_box(seed)))
    });

    group.bench_function("new-generator", |b| {
        b.iter(|| SchemeGenerator::new(black_box(&Tunables::default())))
    });

    group.finish();

    let conditions = ViewingConditions::default();
    c.bench_function("zcam-round-trip", |b| {
        b.iter(|| Zcam::from_rgb(black_box(seed), &conditions).to_linear_srgb(&conditions))
    });
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
