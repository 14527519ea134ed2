//! Criterion benchmarks for boundary generation across the four shape families.

use agrocalc::shape::{generate, ShapeParams};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_shapes(c: &mut Criterion) {
    let mut group = c.benchmark_group("shape");
    let cases = [
        (
            "rectangular",
            ShapeParams::Rectangular {
                length_m: 120.0,
                width_m: 80.0,
            },
        ),
        (
            "triangular",
            ShapeParams::Triangular {
                base_m: 90.0,
                height_m: 60.0,
            },
        ),
        ("circular", ShapeParams::Circular { radius_m: 45.0 }),
        (
            "trapezoidal",
            ShapeParams::Trapezoidal {
                longer_base_m: 120.0,
                shorter_base_m: 70.0,
                height_m: 40.0,
            },
        ),
    ];
    for (name, params) in cases {
        group.bench_with_input(BenchmarkId::new("generate", name), &params, |b, p| {
            b.iter(|| generate(black_box(p)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_shapes);
criterion_main!(benches);
