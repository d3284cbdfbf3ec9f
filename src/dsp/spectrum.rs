//! Magnitude spectra of real and complex signals, and dB scaling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::fft::{self, Direction};
use crate::dsp::mixer::IqPair;

/// Default lower clamp for [`to_db`].
pub const DEFAULT_DB_FLOOR: f64 = -80.0;

/*
Reading the Bins
================

With N = next power of two ≥ input length, bin k sits at k·fs/N Hz, so
zero-padding a 600-sample capture to 1024 changes the bin spacing from
fs/600 to fs/1024 (finer grid, same underlying resolution).

Real input (one-sided):

    bins 0 .. N/2         frequency k·fs/N
    magnitude · 2/N       a cosine of amplitude A reads ≈ A at its bin

    A real signal's spectrum is conjugate-symmetric, so the upper half is
    a mirror and is dropped; the 2/N folds its energy back in.

Complex input (two-sided, DC centered):

    output i reads bin (i + N/2) mod N
    frequency (i − N/2)·fs/N          −fs/2 .. fs/2 − fs/N
    magnitude · 1/N

    I/Q distinguishes +f from −f, which is exactly what lets the receiver
    tell a signal above the LO from its image below it.
*/

/// Frequency axis (Hz) paired with non-negative linear magnitudes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Spectrum {
    pub frequencies: Vec<f64>,
    pub magnitudes: Vec<f64>,
}

/// Frequency axis (Hz) paired with levels in dB relative to the peak.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DbSpectrum {
    pub frequencies: Vec<f64>,
    pub levels_db: Vec<f64>,
}

impl Spectrum {
    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Index, frequency and magnitude of the strongest bin.
    pub fn peak(&self) -> Option<(usize, f64, f64)> {
        self.magnitudes
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, f64)>, (i, &m)| match best {
                Some((_, bm)) if bm >= m => best,
                _ => Some((i, m)),
            })
            .map(|(i, m)| (i, self.frequencies[i], m))
    }

    pub fn to_db(&self, floor: f64) -> DbSpectrum {
        DbSpectrum {
            frequencies: self.frequencies.clone(),
            levels_db: to_db(&self.magnitudes, floor),
        }
    }

    /// `(frequency, dB)` points for charting.
    pub fn db_points(&self, floor: f64) -> Vec<(f64, f64)> {
        self.frequencies
            .iter()
            .copied()
            .zip(to_db(&self.magnitudes, floor))
            .collect()
    }
}

/// One-sided magnitude spectrum of a real signal.
pub fn fft_real(signal: &[f64], sample_rate: f64) -> Spectrum {
    if signal.is_empty() {
        return Spectrum::default();
    }

    let (re, im) = fft::transform(signal, &[], Direction::Forward);
    let n = re.len();
    let scale = 2.0 / n as f64;
    let bin_hz = sample_rate / n as f64;

    let (frequencies, magnitudes) = (0..n / 2)
        .map(|k| (k as f64 * bin_hz, re[k].hypot(im[k]) * scale))
        .unzip();

    Spectrum {
        frequencies,
        magnitudes,
    }
}

/// Two-sided, DC-centered magnitude spectrum of `I + jQ`.
pub fn fft_complex(iq: &IqPair, sample_rate: f64) -> Spectrum {
    let len = iq.len();
    if len == 0 {
        return Spectrum::default();
    }

    let (re, im) = fft::transform(&iq.i[..len], &iq.q[..len], Direction::Forward);
    let n = re.len();
    let half = n / 2;
    let scale = 1.0 / n as f64;
    let bin_hz = sample_rate / n as f64;

    let (frequencies, magnitudes) = (0..n)
        .map(|k| {
            let src = (k + half) % n;
            let freq = (k as f64 - half as f64) * bin_hz;
            (freq, re[src].hypot(im[src]) * scale)
        })
        .unzip();

    Spectrum {
        frequencies,
        magnitudes,
    }
}

/// `20·log10(m / max)` clamped below at `floor`.
///
/// Zero (or negative) magnitudes map straight to `floor`, as does everything
/// when the whole input is silent. The peak maps to exactly 0 dB.
pub fn to_db(magnitudes: &[f64], floor: f64) -> Vec<f64> {
    let max = magnitudes.iter().copied().fold(0.0f64, f64::max);
    if max <= 0.0 {
        return vec![floor; magnitudes.len()];
    }

    magnitudes
        .iter()
        .map(|&m| {
            if m <= 0.0 {
                floor
            } else {
                (20.0 * (m / max).log10()).max(floor)
            }
        })
        .collect()
}
