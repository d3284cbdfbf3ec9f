//! Benchmarks for the radix-2 FFT and the spectrum helpers built on it.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use iqscope::dsp::fft::{fft_in_place, Direction};
use iqscope::dsp::{fft_complex, fft_real, IqPair};

use crate::SIGNAL_LENGTHS;

const SAMPLE_RATE: f64 = 4000.0;

pub fn bench_fft(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fft");

    for &size in SIGNAL_LENGTHS {
        let signal: Vec<f64> = (0..size)
            .map(|i| (std::f64::consts::TAU * 50.0 * i as f64 / SAMPLE_RATE).sin())
            .collect();
        let iq = IqPair::new(signal.clone(), signal.iter().map(|x| -x).collect());

        // In-place transform on an already padded buffer
        let n = size.next_power_of_two();
        let mut re = vec![0.0; n];
        let mut im = vec![0.0; n];
        group.bench_with_input(BenchmarkId::new("in_place", n), &n, |b, _| {
            b.iter(|| {
                re[..size].copy_from_slice(&signal);
                re[size..].fill(0.0);
                im.fill(0.0);
                fft_in_place(black_box(&mut re), black_box(&mut im), Direction::Forward);
            })
        });

        group.bench_with_input(BenchmarkId::new("real_spectrum", size), &size, |b, _| {
            b.iter(|| fft_real(black_box(&signal), SAMPLE_RATE))
        });

        group.bench_with_input(BenchmarkId::new("complex_spectrum", size), &size, |b, _| {
            b.iter(|| fft_complex(black_box(&iq), SAMPLE_RATE))
        });
    }

    group.finish();
}
