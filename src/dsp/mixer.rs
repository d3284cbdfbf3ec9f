//! Quadrature mixing between a real passband signal and complex baseband.

use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/*
Quadrature Mixing
=================

A real signal s(t) is multiplied by two local-oscillator references that are
90° apart:

    I(t) = s(t) ·  cos(2π·fc·t)
    Q(t) = s(t) · −sin(2π·fc·t)

which is s(t)·e^(−j·2π·fc·t) split into real and imaginary parts. A
component of s at fc lands at DC; its mirror lands at 2·fc. Nothing here
removes the 2·fc image - that is the low-pass filter's job.

Going back up is the real part of (I + jQ)·e^(+j·2π·fc·t):

    s'(t) = I(t)·cos(2π·fc·t) − Q(t)·sin(2π·fc·t)

Without filtering in between, s' = s·(cos² + sin²) = s exactly. After an
ideal low-pass filter only the baseband half survives, so the rebuilt
signal comes back at half amplitude (plus filter delay), which is what the
SNR estimator's scale fit absorbs.
*/

/// Complex baseband samples `I[n] + j·Q[n]` as two aligned channels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IqPair {
    pub i: Vec<f64>,
    pub q: Vec<f64>,
}

impl IqPair {
    pub fn new(i: Vec<f64>, q: Vec<f64>) -> Self {
        debug_assert_eq!(i.len(), q.len());
        Self { i, q }
    }

    pub fn len(&self) -> usize {
        self.i.len().min(self.q.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Instantaneous magnitude `sqrt(I² + Q²)`.
    pub fn magnitude(&self) -> Vec<f64> {
        self.i
            .iter()
            .zip(&self.q)
            .map(|(&i, &q)| i.hypot(q))
            .collect()
    }

    /// Instantaneous phase `atan2(Q, I)` in radians.
    pub fn phase(&self) -> Vec<f64> {
        self.i
            .iter()
            .zip(&self.q)
            .map(|(&i, &q)| q.atan2(i))
            .collect()
    }
}

/// Mix a real signal down to baseband I/Q against an LO at `carrier_freq`.
///
/// Pointwise over the common length of `signal` and `t`. No filtering.
pub fn downconvert(signal: &[f64], t: &[f64], carrier_freq: f64) -> IqPair {
    let (i, q) = signal
        .iter()
        .zip(t)
        .map(|(&s, &t)| {
            let (sin, cos) = (TAU * carrier_freq * t).sin_cos();
            (s * cos, s * -sin)
        })
        .unzip();

    IqPair { i, q }
}

/// Rebuild a real signal from I/Q by mixing back up to `carrier_freq`.
pub fn upconvert(iq: &IqPair, t: &[f64], carrier_freq: f64) -> Vec<f64> {
    iq.i.iter()
        .zip(&iq.q)
        .zip(t)
        .map(|((&i, &q), &t)| {
            let (sin, cos) = (TAU * carrier_freq * t).sin_cos();
            i * cos - q * sin
        })
        .collect()
}
