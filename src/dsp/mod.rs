//! Numerical core of the I/Q simulator.
//!
//! Every function here is a pure transform over `f64` slices that returns
//! freshly allocated buffers. Nothing is cached between calls, so stages can be
//! re-run (or run side by side) after any parameter change without sharing
//! state.

/// In-place radix-2 FFT.
pub mod fft;
/// Moving-average and windowed-sinc low-pass filters.
pub mod filter;
/// Sine, square, sawtooth, AM, FM and chirp test signals.
pub mod generator;
/// Quadrature down/up conversion.
pub mod mixer;
/// Box-Muller Gaussian noise.
pub mod noise;
/// Reconstruction SNR with gain fitting.
pub mod snr;
/// Real and complex magnitude spectra.
pub mod spectrum;
/// Sample clock.
pub mod time;

pub use filter::{Cutoff, FilterKind, LowPass, Window};
pub use generator::{generate, SignalKind, SignalParams};
pub use mixer::{downconvert, upconvert, IqPair};
pub use snr::{estimate_snr, SnrEstimate};
pub use spectrum::{fft_complex, fft_real, to_db, DbSpectrum, Spectrum};
pub use time::time_base;
