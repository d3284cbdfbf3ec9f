//! End-to-end receiver chain.
//!
//! ```text
//!  generate ──► downconvert ──► + noise ──► low-pass ──► upconvert ──► SNR
//!     │              │                         │             │
//!     ▼              ▼                         ▼             ▼
//!  spectrum      spectrum                  spectrum      spectrum
//! ```
//!
//! [`run`] starts from a generated signal, [`run_capture`] from recorded I/Q
//! that is first placed on the configured carrier. Both return every stage so
//! a front-end can plot whichever it likes.

mod config;

pub use config::{FilterConfig, FilterDesign, SimConfig};

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::dsp::generator::generate;
use crate::dsp::mixer::{downconvert, upconvert, IqPair};
use crate::dsp::noise::add_gaussian_noise;
use crate::dsp::snr::{self, SnrEstimate};
use crate::dsp::spectrum::{fft_complex, fft_real, DbSpectrum, Spectrum};
use crate::dsp::time::time_base;
use crate::error::ConfigError;
use crate::io::Capture;

/// Magnitude spectra taken along the chain.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectra {
    /// One-sided spectrum of the real input
    pub input: Spectrum,
    /// Two-sided spectrum of I/Q as it enters the filter (after noise)
    pub noisy_iq: Spectrum,
    /// Two-sided spectrum of the filtered I/Q
    pub filtered_iq: Spectrum,
    /// One-sided spectrum of the reconstruction
    pub reconstructed: Spectrum,
}

/// [`Spectra`] in dB relative to each spectrum's own peak.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DbSpectra {
    pub input: DbSpectrum,
    pub noisy_iq: DbSpectrum,
    pub filtered_iq: DbSpectrum,
    pub reconstructed: DbSpectrum,
}

impl Spectra {
    pub fn to_db(&self, floor: f64) -> DbSpectra {
        DbSpectra {
            input: self.input.to_db(floor),
            noisy_iq: self.noisy_iq.to_db(floor),
            filtered_iq: self.filtered_iq.to_db(floor),
            reconstructed: self.reconstructed.to_db(floor),
        }
    }
}

/// Every intermediate stage of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    pub sample_rate: f64,
    pub time: Vec<f64>,
    pub input: Vec<f64>,
    /// Mixer output before noise
    pub raw_iq: IqPair,
    /// Mixer output after noise (identical to `raw_iq` when noise is off)
    pub noisy_iq: IqPair,
    pub filtered_iq: IqPair,
    pub reconstructed: Vec<f64>,
    pub snr: SnrEstimate,
    pub spectra: Spectra,
    db_floor: f64,
}

impl PipelineOutput {
    /// Spectra in dB using the configured floor.
    pub fn db_spectra(&self) -> DbSpectra {
        self.spectra.to_db(self.db_floor)
    }

    pub fn snr_db(&self) -> f64 {
        self.snr.db
    }

    /// Lowest level [`db_spectra`](Self::db_spectra) reports.
    pub fn db_floor(&self) -> f64 {
        self.db_floor
    }
}

/// Run the chain on the signal described by `config`.
pub fn run(config: &SimConfig) -> Result<PipelineOutput, ConfigError> {
    config.validate()?;

    let t = time_base(config.sample_rate, config.duration);
    let input = generate(config.signal, &t, &config.params);
    log::debug!(
        "generated {} {} samples at {} Hz",
        input.len(),
        config.signal,
        config.sample_rate
    );

    Ok(process(config, config.sample_rate, t, input))
}

/// Run the chain on recorded I/Q, upconverted onto `config.carrier_freq`.
///
/// The capture's own sample rate replaces `config.sample_rate`; `duration`,
/// `signal` and `params` are unused.
pub fn run_capture(config: &SimConfig, capture: &Capture) -> Result<PipelineOutput, ConfigError> {
    capture.validate()?;
    config.validate_at(capture.sample_rate)?;

    let (t, input) = capture.to_passband(config.carrier_freq)?;
    Ok(process(config, capture.sample_rate, t, input))
}

fn process(config: &SimConfig, sample_rate: f64, t: Vec<f64>, input: Vec<f64>) -> PipelineOutput {
    let fc = config.carrier_freq;
    let low_pass = config.filter.low_pass(sample_rate);

    let raw_iq = downconvert(&input, &t, fc);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let noisy_iq = add_gaussian_noise(&raw_iq, config.noise_power, &mut rng);

    let filtered_iq = low_pass.filter_iq(&noisy_iq);
    let reconstructed = upconvert(&filtered_iq, &t, fc);

    let snr = snr::estimate(&input, &reconstructed, snr::edge_exclusion(low_pass.taps));
    log::debug!(
        "{} taps ({}), noise {}: SNR {:.2} dB, fitted gain {:.3}",
        low_pass.taps,
        config.filter.design.name(),
        config.noise_power,
        snr.db,
        snr.scale
    );

    let spectra = Spectra {
        input: fft_real(&input, sample_rate),
        noisy_iq: fft_complex(&noisy_iq, sample_rate),
        filtered_iq: fft_complex(&filtered_iq, sample_rate),
        reconstructed: fft_real(&reconstructed, sample_rate),
    };

    PipelineOutput {
        sample_rate,
        time: t,
        input,
        raw_iq,
        noisy_iq,
        filtered_iq,
        reconstructed,
        snr,
        spectra,
        db_floor: config.db_floor,
    }
}
