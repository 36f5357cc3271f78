//! Benchmarks for the one-shot decay envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use hat606::dsp::envelope::DecayEnvelope;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Inside the decay window (ramping down)
        let mut env = DecayEnvelope::new(1_000_000);
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer));
            })
        });

        // Past the window (pinned at zero)
        let mut env = DecayEnvelope::new(0);
        env.next_level();
        group.bench_with_input(BenchmarkId::new("tail", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
