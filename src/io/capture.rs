#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::mixer::{upconvert, IqPair};
use crate::dsp::time::time_base_for_len;
use crate::error::ConfigError;

/// Pre-recorded baseband I/Q, already decoded by whatever loaded it.
///
/// With the `serde` feature the field names match the capture JSON layout
/// (`I`, `Q`, `sample_rate`, `center_freq_mhz`, `label`).
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Capture {
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    pub i: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(rename = "Q"))]
    pub q: Vec<f64>,
    pub sample_rate: f64,
    /// RF center frequency the capture was tuned to (informational)
    pub center_freq_mhz: f64,
    pub label: String,
}

impl Capture {
    pub fn new(label: impl Into<String>, iq: IqPair, sample_rate: f64, center_freq_mhz: f64) -> Self {
        Self {
            i: iq.i,
            q: iq.q,
            sample_rate,
            center_freq_mhz,
            label: label.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.i.len().min(self.q.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn duration(&self) -> f64 {
        self.len() as f64 / self.sample_rate
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.sample_rate > 0.0) || !self.sample_rate.is_finite() {
            return Err(ConfigError::SampleRate(self.sample_rate));
        }
        if self.i.len() != self.q.len() {
            return Err(ConfigError::CaptureLength {
                label: self.label.clone(),
                i: self.i.len(),
                q: self.q.len(),
            });
        }
        if self.i.is_empty() {
            return Err(ConfigError::EmptyCapture(self.label.clone()));
        }
        Ok(())
    }

    pub fn iq(&self) -> IqPair {
        IqPair::new(self.i.clone(), self.q.clone())
    }

    /// Time base at the capture's own sample rate.
    pub fn time_base(&self) -> Vec<f64> {
        time_base_for_len(self.sample_rate, self.len())
    }

    /// Put the baseband capture onto `carrier_freq` so it can enter the
    /// pipeline like a generated real signal. Returns `(t, signal)`.
    pub fn to_passband(&self, carrier_freq: f64) -> Result<(Vec<f64>, Vec<f64>), ConfigError> {
        self.validate()?;
        let t = self.time_base();
        let signal = upconvert(&self.iq(), &t, carrier_freq);
        log::debug!(
            "capture `{}`: {} samples at {} Hz upconverted to {} Hz",
            self.label,
            signal.len(),
            self.sample_rate,
            carrier_freq
        );
        Ok((t, signal))
    }
}
