//! Criterion benchmarks for the triangle pipeline.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use trigon::layout::{scale_to_fit, Viewport};
use trigon::tri::rand::{draw_triangle, ReplayToken, TriangleCfg};
use trigon::tri::Triangle;
use trigon::{analyze, AnalysisCfg};

fn sample(index: u64) -> Triangle {
    draw_triangle(TriangleCfg::default(), ReplayToken { seed: 43, index }).unwrap_or_default()
}

fn bench_triangle(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangle");
    let cfg = AnalysisCfg::default();
    let mut index = 0u64;
    group.bench_function("analyze", |b| {
        b.iter_batched(
            || {
                index += 1;
                sample(index)
            },
            |tri| {
                let _res = analyze(&tri, &cfg);
            },
            BatchSize::SmallInput,
        )
    });

    let vp = Viewport::default();
    group.bench_function("scale_to_fit", |b| {
        b.iter_batched(
            || sample(7),
            |tri| {
                let _fitted = scale_to_fit(&tri, &vp);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_triangle);
criterion_main!(benches);
