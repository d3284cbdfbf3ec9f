//! Quadrature (I/Q) downconversion simulator.
//!
//! Generate a real test signal, mix it to baseband I/Q, low-pass filter both
//! channels, mix back up, and measure how faithfully the original survives.
//! Spectra can be taken at every step.
//!
//! ```
//! use iqscope::pipeline::{self, SimConfig};
//!
//! let out = pipeline::run(&SimConfig::default()).unwrap();
//! assert_eq!(out.reconstructed.len(), out.input.len());
//! assert!(out.snr_db() > 0.0);
//! ```

pub mod dsp; // Signal math: generation, mixing, filtering, FFT, SNR
pub mod error;
pub mod io; // External I/Q sources
pub mod pipeline; // Stage wiring and configuration

pub use error::ConfigError;
pub use pipeline::{PipelineOutput, SimConfig};
