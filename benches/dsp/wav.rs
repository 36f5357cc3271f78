//! Benchmarks for 24-bit WAV encoding.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hat606::io::wav;
use hat606::voices::hihat::{synthesize, HatParams};

use crate::BLOCK_SIZES;

pub fn bench_wav(c: &mut Criterion) {
    let mut group = c.benchmark_group("io/wav");

    for &size in BLOCK_SIZES {
        let buffer = synthesize(&HatParams::default(), 48_000.0, size);
        let mut bytes = Vec::with_capacity(44 + size * 3);

        group.bench_with_input(BenchmarkId::new("encode", size), &size, |b, _| {
            b.iter(|| {
                bytes.clear();
                wav::write_wav_24bit_mono(black_box(&mut bytes), black_box(&buffer), 48_000)
                    .expect("vec write");
            })
        });
    }

    group.finish();
}
