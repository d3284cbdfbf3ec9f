//! Benchmarks for the post-mixer low-pass filters.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use iqscope::dsp::{filter::moving_average, LowPass, Window};

use crate::SIGNAL_LENGTHS;

const SAMPLE_RATE: f64 = 4000.0;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in SIGNAL_LENGTHS {
        // Sawtooth-like ramp
        let input: Vec<f64> = (0..size)
            .map(|i| (i % 64) as f64 / 32.0 - 1.0)
            .collect();

        group.bench_with_input(BenchmarkId::new("moving_average_21", size), &size, |b, _| {
            b.iter(|| moving_average(black_box(&input), 10))
        });

        let hamming = LowPass::windowed_sinc(101, 60.0, SAMPLE_RATE, Window::Hamming);
        group.bench_with_input(BenchmarkId::new("sinc_hamming_101", size), &size, |b, _| {
            b.iter(|| hamming.filter(black_box(&input)))
        });

        let blackman = LowPass::windowed_sinc(255, 60.0, SAMPLE_RATE, Window::Blackman);
        group.bench_with_input(BenchmarkId::new("sinc_blackman_255", size), &size, |b, _| {
            b.iter(|| blackman.filter(black_box(&input)))
        });
    }

    group.bench_function("kernel_design_255", |b| {
        let low_pass = LowPass::windowed_sinc(255, 60.0, SAMPLE_RATE, Window::Blackman);
        b.iter(|| black_box(&low_pass).kernel())
    });

    group.finish();
}
