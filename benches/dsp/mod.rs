//! Benchmarks for low-level DSP primitives.

mod fft;
mod filter;
mod mixer;

pub use fft::bench_fft;
pub use filter::bench_filter;
pub use mixer::bench_mixer;
