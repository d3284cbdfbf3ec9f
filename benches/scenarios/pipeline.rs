//! Benchmarks for full pipeline runs from the presets.

use std::hint::black_box;

use criterion::Criterion;
use iqscope::dsp::{SignalKind, Window};
use iqscope::pipeline::{self, FilterDesign};
use iqscope::SimConfig;

pub fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/pipeline");

    let guided = SimConfig::guided();
    group.bench_function("guided", |b| {
        b.iter(|| pipeline::run(black_box(&guided)))
    });

    let receiver = SimConfig::receiver().with_seed(1);
    group.bench_function("receiver", |b| {
        b.iter(|| pipeline::run(black_box(&receiver)))
    });

    // Long chirp through a wide Blackman filter
    let heavy = SimConfig::receiver()
        .with_sample_rate(16_000.0)
        .with_duration(2.0)
        .with_signal(SignalKind::Chirp)
        .with_filter(FilterDesign::WindowedSinc(Window::Blackman), 255, 200.0)
        .with_seed(1);
    group.bench_function("chirp_16k_2s", |b| {
        b.iter(|| pipeline::run(black_box(&heavy)))
    });

    group.finish();
}
