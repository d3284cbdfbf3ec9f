#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::filter::{LowPass, Window};
use crate::dsp::generator::{SignalKind, SignalParams};
use crate::dsp::spectrum::DEFAULT_DB_FLOOR;
use crate::error::ConfigError;

/// Which low-pass kernel cleans up the mixer output.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDesign {
    MovingAverage,
    WindowedSinc(Window),
}

impl FilterDesign {
    pub fn name(self) -> &'static str {
        match self {
            FilterDesign::MovingAverage => "moving-average",
            FilterDesign::WindowedSinc(Window::Hamming) => "sinc/hamming",
            FilterDesign::WindowedSinc(Window::Blackman) => "sinc/blackman",
        }
    }

    /// Moving-average → sinc/Hamming → sinc/Blackman → moving-average.
    pub fn next(self) -> Self {
        match self {
            FilterDesign::MovingAverage => FilterDesign::WindowedSinc(Window::Hamming),
            FilterDesign::WindowedSinc(Window::Hamming) => FilterDesign::WindowedSinc(Window::Blackman),
            FilterDesign::WindowedSinc(Window::Blackman) => FilterDesign::MovingAverage,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FilterConfig {
    pub design: FilterDesign,
    /// Kernel length; windowed-sinc rounds even counts up to odd
    pub taps: usize,
    /// Cutoff in Hz (windowed-sinc only)
    pub cutoff_hz: f64,
}

impl FilterConfig {
    pub fn low_pass(&self, sample_rate: f64) -> LowPass {
        match self.design {
            FilterDesign::MovingAverage => LowPass::moving_average(self.taps),
            FilterDesign::WindowedSinc(window) => {
                LowPass::windowed_sinc(self.taps, self.cutoff_hz, sample_rate, window)
            }
        }
    }
}

/// Everything one pipeline run needs.
///
/// Build from [`SimConfig::default`] (the guided walkthrough settings) or
/// [`SimConfig::receiver`], then adjust with the `with_*` methods:
///
/// ```
/// use iqscope::pipeline::SimConfig;
/// use iqscope::dsp::SignalKind;
///
/// let config = SimConfig::default()
///     .with_signal(SignalKind::Cosine)
///     .with_carrier(55.0)
///     .with_noise(0.1)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub sample_rate: f64,
    pub duration: f64,
    pub signal: SignalKind,
    pub params: SignalParams,
    /// Local oscillator frequency for both mixers (Hz)
    pub carrier_freq: f64,
    pub filter: FilterConfig,
    /// Gaussian noise amplitude added to I and Q before filtering
    pub noise_power: f64,
    /// Fixed RNG seed; `None` draws from OS entropy each run
    pub seed: Option<u64>,
    /// Lower clamp for dB spectra
    pub db_floor: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self::guided()
    }
}

impl SimConfig {
    /// Walkthrough settings: a clean 55 Hz tone mixed at its own frequency,
    /// moving-average filter, no noise.
    pub fn guided() -> Self {
        Self {
            sample_rate: 2000.0,
            duration: 0.3,
            signal: SignalKind::Sine,
            params: SignalParams::tone(55.0, 1.0),
            carrier_freq: 55.0,
            filter: FilterConfig {
                design: FilterDesign::MovingAverage,
                taps: 21,
                cutoff_hz: 40.0,
            },
            noise_power: 0.0,
            seed: None,
            db_floor: DEFAULT_DB_FLOOR,
        }
    }

    /// Receiver-style settings: AM on a 200 Hz carrier, Blackman windowed-sinc
    /// and a little channel noise.
    pub fn receiver() -> Self {
        Self {
            sample_rate: 4000.0,
            duration: 0.5,
            signal: SignalKind::Am,
            params: SignalParams::modulated(200.0, 12.0, 0.5),
            carrier_freq: 200.0,
            filter: FilterConfig {
                design: FilterDesign::WindowedSinc(Window::Blackman),
                taps: 101,
                cutoff_hz: 60.0,
            },
            noise_power: 0.1,
            seed: None,
            db_floor: DEFAULT_DB_FLOOR,
        }
    }

    pub fn with_sample_rate(mut self, sample_rate: f64) -> Self {
        self.sample_rate = sample_rate;
        self
    }

    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    pub fn with_signal(mut self, signal: SignalKind) -> Self {
        self.signal = signal;
        self
    }

    pub fn with_params(mut self, params: SignalParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_carrier(mut self, carrier_freq: f64) -> Self {
        self.carrier_freq = carrier_freq;
        self
    }

    pub fn with_filter(mut self, design: FilterDesign, taps: usize, cutoff_hz: f64) -> Self {
        self.filter = FilterConfig {
            design,
            taps,
            cutoff_hz,
        };
        self
    }

    pub fn with_noise(mut self, noise_power: f64) -> Self {
        self.noise_power = noise_power;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_db_floor(mut self, db_floor: f64) -> Self {
        self.db_floor = db_floor;
        self
    }

    /// Check everything except the sample rate, which may come from a capture.
    pub(crate) fn validate_at(&self, sample_rate: f64) -> Result<(), ConfigError> {
        if !(sample_rate > 0.0) || !sample_rate.is_finite() {
            return Err(ConfigError::SampleRate(sample_rate));
        }
        if self.filter.taps == 0 {
            return Err(ConfigError::NoTaps);
        }
        if let FilterDesign::WindowedSinc(_) = self.filter.design {
            let nyquist = sample_rate / 2.0;
            let cutoff_hz = self.filter.cutoff_hz;
            if !(cutoff_hz > 0.0 && cutoff_hz < nyquist) {
                return Err(ConfigError::Cutoff { cutoff_hz, nyquist });
            }
        }
        if !(self.noise_power >= 0.0) || !self.noise_power.is_finite() {
            return Err(ConfigError::NoisePower(self.noise_power));
        }
        if !self.carrier_freq.is_finite() {
            return Err(ConfigError::Carrier(self.carrier_freq));
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.duration > 0.0) || !self.duration.is_finite() {
            return Err(ConfigError::Duration(self.duration));
        }
        self.validate_at(self.sample_rate)
    }
}
