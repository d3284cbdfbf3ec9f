//! Test signal synthesis: tones, classic shapes and modulated carriers.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::time;

/*
Signal Families
===============

Every generator is a pure function of the sample instant t, so a whole
signal is just the family's formula mapped over the time base. Nothing is
accumulated between samples, which keeps the output exact at any index
(no phase drift from an incremental oscillator).

Simple shapes (use `frequency` and `amplitude`):

  sine       A·sin(2π·f·t)
  cosine     A·cos(2π·f·t)
  square     A·sign(sin(2π·f·t))           sign(0) = 0
  sawtooth   A·2·(p − floor(p + 0.5)),  p = f·t

             The sawtooth ramps from −A to +A once per period 1/f,
             crossing zero at integer multiples of the period.

Modulated carriers (use `carrier_freq`, `modulating_freq`, `modulation_index`):

  am         (1 + m·cos(2π·fm·t)) · cos(2π·fc·t)          m defaults to 0.5
  fm         cos(2π·fc·t + β·sin(2π·fm·t))                β defaults to 2

             β is the peak phase deviation in radians. A frequency
             deviation Δf in Hz maps to β = Δf / fm.

Sweep (uses `carrier_freq` as start and `chirp_end_freq` as stop):

  chirp      cos(2π·(f0·t + ½·k·t²)),  k = (f1 − f0) / T

             The phase is the integral of a linearly ramped frequency,
             so the instantaneous frequency is f0 + k·t: f0 at t = 0 and
             f1 at t = T, where T is the last sample instant.

AM, FM and chirp ignore `amplitude`; their envelope is part of the family.
*/

const DEFAULT_AMPLITUDE: f64 = 1.0;
const DEFAULT_AM_INDEX: f64 = 0.5;
const DEFAULT_FM_INDEX: f64 = 2.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalKind {
    Sine,
    Cosine,
    Square,
    Sawtooth,
    Am,
    Fm,
    Chirp,
}

impl SignalKind {
    pub const ALL: [SignalKind; 7] = [
        SignalKind::Sine,
        SignalKind::Cosine,
        SignalKind::Square,
        SignalKind::Sawtooth,
        SignalKind::Am,
        SignalKind::Fm,
        SignalKind::Chirp,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SignalKind::Sine => "sine",
            SignalKind::Cosine => "cosine",
            SignalKind::Square => "square",
            SignalKind::Sawtooth => "sawtooth",
            SignalKind::Am => "am",
            SignalKind::Fm => "fm",
            SignalKind::Chirp => "chirp",
        }
    }

    /// Next kind in declaration order, wrapping around.
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|&k| k == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// True for families parameterised by a carrier rather than `frequency`.
    pub fn uses_carrier(self) -> bool {
        matches!(self, SignalKind::Am | SignalKind::Fm | SignalKind::Chirp)
    }
}

impl fmt::Display for SignalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown signal kind `{0}`")]
pub struct ParseSignalKindError(pub String);

impl FromStr for SignalKind {
    type Err = ParseSignalKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseSignalKindError(s.to_string()))
    }
}

/// Parameter record shared by all signal families.
///
/// Each family reads only the fields it defines; the rest are ignored.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalParams {
    /// Tone frequency in Hz (sine, cosine, square, sawtooth)
    pub frequency: f64,
    /// Peak amplitude (sine, cosine, square, sawtooth)
    pub amplitude: f64,
    /// Carrier / chirp start frequency in Hz
    pub carrier_freq: f64,
    /// Modulating tone in Hz (am, fm)
    pub modulating_freq: f64,
    /// AM depth or FM peak phase deviation (radians). `None` uses the family default.
    pub modulation_index: Option<f64>,
    /// Chirp stop frequency in Hz
    pub chirp_end_freq: f64,
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            frequency: 55.0,
            amplitude: DEFAULT_AMPLITUDE,
            carrier_freq: 100.0,
            modulating_freq: 10.0,
            modulation_index: None,
            chirp_end_freq: 150.0,
        }
    }
}

impl SignalParams {
    pub fn tone(frequency: f64, amplitude: f64) -> Self {
        Self {
            frequency,
            amplitude,
            ..Self::default()
        }
    }

    pub fn modulated(carrier_freq: f64, modulating_freq: f64, modulation_index: f64) -> Self {
        Self {
            carrier_freq,
            modulating_freq,
            modulation_index: Some(modulation_index),
            ..Self::default()
        }
    }

    pub fn chirp(start_freq: f64, end_freq: f64) -> Self {
        Self {
            carrier_freq: start_freq,
            chirp_end_freq: end_freq,
            ..Self::default()
        }
    }

    /// Drive FM from a peak frequency deviation in Hz: β = Δf / fm.
    ///
    /// A zero modulating frequency leaves the index unset.
    pub fn with_fm_deviation(mut self, deviation_hz: f64) -> Self {
        if self.modulating_freq != 0.0 {
            self.modulation_index = Some(deviation_hz / self.modulating_freq);
        }
        self
    }

    fn am_index(&self) -> f64 {
        self.modulation_index.unwrap_or(DEFAULT_AM_INDEX)
    }

    fn fm_index(&self) -> f64 {
        self.modulation_index.unwrap_or(DEFAULT_FM_INDEX)
    }
}

/// Sample `kind` over the time base `t`. Output has the same length as `t`.
pub fn generate(kind: SignalKind, t: &[f64], params: &SignalParams) -> Vec<f64> {
    let p = params;
    match kind {
        SignalKind::Sine => t
            .iter()
            .map(|&t| p.amplitude * (TAU * p.frequency * t).sin())
            .collect(),
        SignalKind::Cosine => t
            .iter()
            .map(|&t| p.amplitude * (TAU * p.frequency * t).cos())
            .collect(),
        SignalKind::Square => t
            .iter()
            .map(|&t| p.amplitude * sign((TAU * p.frequency * t).sin()))
            .collect(),
        SignalKind::Sawtooth => t
            .iter()
            .map(|&t| {
                let phase = p.frequency * t;
                p.amplitude * 2.0 * (phase - (phase + 0.5).floor())
            })
            .collect(),
        SignalKind::Am => {
            let m = p.am_index();
            t.iter()
                .map(|&t| {
                    let envelope = 1.0 + m * (TAU * p.modulating_freq * t).cos();
                    envelope * (TAU * p.carrier_freq * t).cos()
                })
                .collect()
        }
        SignalKind::Fm => {
            let beta = p.fm_index();
            t.iter()
                .map(|&t| {
                    (TAU * p.carrier_freq * t + beta * (TAU * p.modulating_freq * t).sin()).cos()
                })
                .collect()
        }
        SignalKind::Chirp => {
            let duration = match time::span(t) {
                d if d == 0.0 => 1.0,
                d => d,
            };
            let rate = (p.chirp_end_freq - p.carrier_freq) / duration;
            t.iter()
                .map(|&t| (TAU * (p.carrier_freq * t + 0.5 * rate * t * t)).cos())
                .collect()
        }
    }
}

/// Like [`generate`], but selects the family by name.
///
/// Unknown names produce an all-zero signal of the right length.
pub fn generate_named(name: &str, t: &[f64], params: &SignalParams) -> Vec<f64> {
    match name.parse::<SignalKind>() {
        Ok(kind) => generate(kind, t, params),
        Err(err) => {
            log::warn!("{err}; emitting silence");
            vec![0.0; t.len()]
        }
    }
}

/// Signum with sign(0) = 0 (and NaN passed through).
#[inline]
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dsp::time::time_base;

    fn max_abs(signal: &[f64]) -> f64 {
        signal.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()))
    }

    #[test]
    fn test_output_length_matches_time_base() {
        let t = time_base(2000.0, 0.3);
        let params = SignalParams::default();
        for kind in SignalKind::ALL {
            assert_eq!(generate(kind, &t, &params).len(), t.len(), "{kind}");
        }
    }

    #[test]
    fn test_sine_and_cosine_match_closed_form() {
        let t = time_base(1000.0, 0.1);
        let params = SignalParams::tone(50.0, 1.5);

        let sine = generate(SignalKind::Sine, &t, &params);
        let cosine = generate(SignalKind::Cosine, &t, &params);

        for (i, &ti) in t.iter().enumerate() {
            assert!((sine[i] - 1.5 * (TAU * 50.0 * ti).sin()).abs() < 1e-12);
            assert!((cosine[i] - 1.5 * (TAU * 50.0 * ti).cos()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_square_is_zero_at_exact_crossing() {
        // t = 0 is an exact zero of sin
        let params = SignalParams::tone(10.0, 2.0);
        let out = generate(SignalKind::Square, &[0.0, 0.01, 0.06], &params);

        assert_eq!(out[0], 0.0);
        assert_eq!(out[1], 2.0);
        assert_eq!(out[2], -2.0);
    }

    #[test]
    fn test_sawtooth_ramps_between_plus_minus_amplitude() {
        let t = time_base(1000.0, 1.0);
        let params = SignalParams::tone(4.0, 1.0);
        let saw = generate(SignalKind::Sawtooth, &t, &params);

        assert_eq!(saw[0], 0.0);
        assert!(max_abs(&saw) <= 1.0);
        // Quarter period in: phase 0.25 -> 0.5
        assert!((saw[62] - 2.0 * 0.248).abs() < 1e-9);
        // Just before the wrap at phase 0.5 the ramp is near +1, just after near -1
        let before = generate(SignalKind::Sawtooth, &[0.1249], &params)[0];
        let after = generate(SignalKind::Sawtooth, &[0.1251], &params)[0];
        assert!(before > 0.99);
        assert!(after < -0.99);
    }

    #[test]
    fn test_am_uses_default_index() {
        let params = SignalParams {
            carrier_freq: 100.0,
            modulating_freq: 5.0,
            modulation_index: None,
            ..SignalParams::default()
        };
        // t = 0: envelope = 1 + 0.5, carrier = 1
        let out = generate(SignalKind::Am, &[0.0], &params);
        assert!((out[0] - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_fm_matches_phase_formula() {
        let t = time_base(8000.0, 0.05);
        let params = SignalParams::modulated(400.0, 20.0, 3.0);
        let fm = generate(SignalKind::Fm, &t, &params);

        for (i, &ti) in t.iter().enumerate() {
            let expected = (TAU * 400.0 * ti + 3.0 * (TAU * 20.0 * ti).sin()).cos();
            assert!((fm[i] - expected).abs() < 1e-12);
        }
        assert!(max_abs(&fm) <= 1.0 + 1e-12);
    }

    #[test]
    fn test_fm_deviation_sets_index() {
        let params = SignalParams::modulated(400.0, 20.0, 1.0).with_fm_deviation(100.0);
        assert_eq!(params.modulation_index, Some(5.0));

        let unchanged = SignalParams {
            modulating_freq: 0.0,
            ..SignalParams::default()
        }
        .with_fm_deviation(100.0);
        assert_eq!(unchanged.modulation_index, None);
    }

    #[test]
    fn test_chirp_with_single_sample_uses_unit_duration() {
        let params = SignalParams::chirp(5.0, 150.0);
        let out = generate(SignalKind::Chirp, &[0.0], &params);
        assert_eq!(out, vec![1.0]);
    }

    #[test]
    fn test_parse_kind_round_trip() {
        for kind in SignalKind::ALL {
            assert_eq!(kind.name().parse::<SignalKind>(), Ok(kind));
        }
        assert_eq!("FM".parse::<SignalKind>(), Ok(SignalKind::Fm));
        assert!("triangle".parse::<SignalKind>().is_err());
    }

    #[test]
    fn test_unknown_name_yields_silence() {
        let t = time_base(100.0, 1.0);
        let out = generate_named("triangle", &t, &SignalParams::default());
        assert_eq!(out.len(), t.len());
        assert!(out.iter().all(|&x| x == 0.0));
    }

    #[test]
    fn test_next_cycles_through_all_kinds() {
        let mut kind = SignalKind::Sine;
        for _ in 0..SignalKind::ALL.len() {
            kind = kind.next();
        }
        assert_eq!(kind, SignalKind::Sine);
    }
}
