//! Benchmarks for quadrature down/up conversion.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use iqscope::dsp::{downconvert, generate, time_base, upconvert, SignalKind, SignalParams};

use crate::SIGNAL_LENGTHS;

const SAMPLE_RATE: f64 = 4000.0;
const CARRIER: f64 = 200.0;

pub fn bench_mixer(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mixer");

    for &size in SIGNAL_LENGTHS {
        let t = time_base(SAMPLE_RATE, size as f64 / SAMPLE_RATE);
        let signal = generate(SignalKind::Am, &t, &SignalParams::modulated(CARRIER, 12.0, 0.5));
        let iq = downconvert(&signal, &t, CARRIER);

        group.bench_with_input(BenchmarkId::new("downconvert", size), &size, |b, _| {
            b.iter(|| downconvert(black_box(&signal), black_box(&t), CARRIER))
        });

        group.bench_with_input(BenchmarkId::new("upconvert", size), &size, |b, _| {
            b.iter(|| upconvert(black_box(&iq), black_box(&t), CARRIER))
        });
    }

    group.finish();
}
