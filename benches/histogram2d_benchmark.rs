#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for 2D histogram binning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hist3d::prelude::*;

fn histogram2d_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("histogram2d");

    for size in [100, 1_000, 10_000, 100_000] {
        let mut sampler = NormalSampler::seeded(42);
        let x = sampler.sample_vec(size);
        let y = sampler.sample_vec(size);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                Histogram2d::from_data(black_box(&x), black_box(&y), BinStrategy::Fixed(30))
                    .unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, histogram2d_benchmark);
criterion_main!(benches);
