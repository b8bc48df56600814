#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for 3D bar chart rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hist3d::prelude::*;

fn bar3d_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("bar3d_render");

    let mut sampler = NormalSampler::seeded(42);
    let x = sampler.sample_vec(1000);
    let y = sampler.sample_vec(1000);

    for bins in [10usize, 20, 30] {
        let hist = Histogram2d::from_data(&x, &y, BinStrategy::Fixed(bins)).unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(bins), &bins, |b, _| {
            b.iter(|| {
                let plot = Bar3d::new()
                    .histogram(black_box(hist.clone()))
                    .dimensions(800, 600)
                    .build()
                    .unwrap();

                plot.to_framebuffer().unwrap()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bar3d_benchmark);
criterion_main!(benches);
