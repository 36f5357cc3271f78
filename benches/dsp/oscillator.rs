//! Benchmarks for square oscillator rendering.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hat606::dsp::oscillator::SquareOscillator;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Square - sin() plus a branch per sample
        let mut osc = SquareOscillator::new(946.0, 48_000.0);
        group.bench_with_input(BenchmarkId::new("square", size), &size, |b, _| {
            b.iter(|| {
                osc.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
