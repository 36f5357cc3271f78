//! Benchmarks for the assembled hi-hat voice.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hat606::voices::hihat::{HatParams, HatVoice};

use crate::BLOCK_SIZES;

pub fn bench_hihat(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/hihat");
    let params = HatParams::default();

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Six oscillators plus the envelope per sample
        let mut voice = HatVoice::new(&params, 48_000.0);
        group.bench_with_input(BenchmarkId::new("render", size), &size, |b, _| {
            b.iter(|| {
                voice.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
