use std::f64::consts::{PI, TAU};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::dsp::mixer::IqPair;

/*
Low-Pass Filtering After the Mixer
==================================

Downconversion leaves two things in each of I and Q: the wanted baseband
component near DC and an image at 2·fc. A low-pass filter applied to both
channels with the same kernel keeps the first and suppresses the second.

| kernel          | taps                        | roll-off | cost     |
| --------------- | --------------------------- | -------- | -------- |
| moving-average  | 2h + 1 equal weights        | gentle   | O(n·h)   |
| windowed-sinc   | sinc · window, odd length   | steep    | O(n·taps)|

Windowed-sinc design (normalized cutoff fc = cutoff_hz / sample_rate):

    n = i − half,   half = floor(taps / 2)

    h[i] = 2·fc                       n = 0
    h[i] = sin(2π·fc·n) / (π·n)       n ≠ 0

    h[i] ·= w[i]                      window
    h    /= Σ h                       unity DC gain

Windows (M = taps − 1):

    Hamming    0.54 − 0.46·cos(2πi/M)
    Blackman   0.42 − 0.50·cos(2πi/M) + 0.08·cos(4πi/M)

Blackman trades a wider transition band for much lower sidelobes.

Scaling the sinc by any constant (for instance using 2π·fc at the center
and sin(2π·fc·n)/n elsewhere) yields the same kernel once it is normalized
to sum 1, so only the cutoff and the window matter.

Edges: output sample i only sums input samples that exist. Moving-average
divides by the number of samples actually summed; the sinc kernel keeps its
full normalization, so the first and last `half` outputs are slightly
attenuated. Neither filter wraps or pretends the outside is zero-valued
data.

The output is aligned with the input (the kernel is centered), so there is
no net delay, but the first and last `half` samples carry edge effects the
SNR estimator trims away.
*/

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Window {
    #[default]
    Hamming,
    Blackman,
}

impl Window {
    /// Window weight for tap `i` of a `taps`-long kernel.
    #[inline]
    pub fn weight(self, i: usize, taps: usize) -> f64 {
        if taps <= 1 {
            return 1.0;
        }
        let x = i as f64 / (taps - 1) as f64;
        match self {
            Window::Hamming => 0.54 - 0.46 * (TAU * x).cos(),
            Window::Blackman => 0.42 - 0.5 * (TAU * x).cos() + 0.08 * (2.0 * TAU * x).cos(),
        }
    }

    pub fn coefficients(self, taps: usize) -> Vec<f64> {
        (0..taps).map(|i| self.weight(i, taps)).collect()
    }

    pub fn name(self) -> &'static str {
        match self {
            Window::Hamming => "hamming",
            Window::Blackman => "blackman",
        }
    }
}

/// Cutoff frequency, either in Hz at a sample rate or as a fraction of it.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cutoff {
    Hz { hz: f64, sample_rate: f64 },
    /// Fraction of the sample rate, in (0, 0.5)
    Normalized(f64),
}

impl Cutoff {
    /// Cutoff as a fraction of the sample rate.
    pub fn normalized(self) -> f64 {
        match self {
            Cutoff::Hz { hz, sample_rate } => hz / sample_rate,
            Cutoff::Normalized(fc) => fc,
        }
    }
}

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterKind {
    MovingAverage,
    WindowedSinc { cutoff: Cutoff, window: Window },
}

/// Moving-average over `[i - half_window, i + half_window]`, clipped to the signal.
pub fn moving_average(signal: &[f64], half_window: usize) -> Vec<f64> {
    let n = signal.len();
    (0..n)
        .map(|i| {
            let lo = i.saturating_sub(half_window);
            let hi = (i + half_window).min(n - 1);
            let window = &signal[lo..=hi];
            window.iter().sum::<f64>() / window.len() as f64
        })
        .collect()
}

/// Design a windowed-sinc low-pass kernel.
///
/// `taps` is rounded up to the next odd count. A normalized cutoff is the
/// `sample_rate = 1.0` case. The result sums to 1 unless every tap is zero
/// (zero cutoff), in which case it is returned unnormalized.
pub fn windowed_sinc_kernel(taps: usize, cutoff_hz: f64, sample_rate: f64, window: Window) -> Vec<f64> {
    let taps = taps | 1;
    let half = taps / 2;
    let fc = cutoff_hz / sample_rate;

    let mut kernel: Vec<f64> = (0..taps)
        .map(|i| {
            let n = i as f64 - half as f64;
            let sinc = if i == half {
                2.0 * fc
            } else {
                (TAU * fc * n).sin() / (PI * n)
            };
            sinc * window.weight(i, taps)
        })
        .collect();

    let sum: f64 = kernel.iter().sum();
    if sum == 0.0 {
        log::warn!("windowed-sinc kernel sums to zero (fc = {fc}); leaving it unnormalized");
        return kernel;
    }
    for tap in kernel.iter_mut() {
        *tap /= sum;
    }
    kernel
}

/// Centered sliding dot product. Input indices outside the signal are skipped.
pub fn convolve(signal: &[f64], kernel: &[f64]) -> Vec<f64> {
    let n = signal.len() as isize;
    let half = (kernel.len() / 2) as isize;

    (0..n)
        .map(|i| {
            kernel
                .iter()
                .enumerate()
                .filter_map(|(k, &h)| {
                    let j = i + k as isize - half;
                    (0..n).contains(&j).then(|| h * signal[j as usize])
                })
                .sum()
        })
        .collect()
}

/// Low-pass filter applied identically to every channel it is given.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LowPass {
    pub kind: FilterKind,
    pub taps: usize,
}

impl LowPass {
    pub fn moving_average(taps: usize) -> Self {
        Self {
            kind: FilterKind::MovingAverage,
            taps,
        }
    }

    pub fn windowed_sinc(taps: usize, cutoff_hz: f64, sample_rate: f64, window: Window) -> Self {
        Self {
            kind: FilterKind::WindowedSinc {
                cutoff: Cutoff::Hz {
                    hz: cutoff_hz,
                    sample_rate,
                },
                window,
            },
            taps,
        }
    }

    /// Samples on each side of the center tap, i.e. how far edge effects reach.
    pub fn half_width(&self) -> usize {
        self.taps / 2
    }

    /// Kernel this filter convolves with (equal weights for moving-average).
    pub fn kernel(&self) -> Vec<f64> {
        match self.kind {
            FilterKind::MovingAverage => {
                let len = 2 * self.half_width() + 1;
                vec![1.0 / len as f64; len]
            }
            FilterKind::WindowedSinc { cutoff, window } => {
                windowed_sinc_kernel(self.taps, cutoff.normalized(), 1.0, window)
            }
        }
    }

    pub fn filter(&self, signal: &[f64]) -> Vec<f64> {
        match self.kind {
            FilterKind::MovingAverage => moving_average(signal, self.half_width()),
            FilterKind::WindowedSinc { .. } => convolve(signal, &self.kernel()),
        }
    }

    /// Filter I and Q with the same kernel.
    pub fn filter_iq(&self, iq: &IqPair) -> IqPair {
        match self.kind {
            FilterKind::MovingAverage => IqPair {
                i: moving_average(&iq.i, self.half_width()),
                q: moving_average(&iq.q, self.half_width()),
            },
            FilterKind::WindowedSinc { .. } => {
                let kernel = self.kernel();
                IqPair {
                    i: convolve(&iq.i, &kernel),
                    q: convolve(&iq.q, &kernel),
                }
            }
        }
    }
}
