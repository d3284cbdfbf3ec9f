//! Reconstruction fidelity: SNR after fitting out the pipeline's gain.

/*
Why fit a scale first
=====================

down-convert → low-pass → up-convert returns the original at roughly half
amplitude (only the baseband half of cos² + sin² survives the filter), and
the first/last few samples carry filter edge effects. Subtracting the raw
reconstruction from the original would measure that gain mismatch, not
distortion.

So, over the trimmed region:

    c   = Σ(o·r) / Σ(r²)                  least-squares gain
    SNR = 10·log10( Σo² / Σ(o − c·r)² )   dB

Sentinels rather than faults:

    empty region / silent original   0.0 dB   ("undefined")
    perfect match                    +∞
*/

/// Samples trimmed past the filter's half-width at each end.
pub const EDGE_MARGIN: usize = 10;

/// Result of [`estimate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnrEstimate {
    /// Signal-to-error ratio in dB (0.0 undefined, +∞ for a perfect match)
    pub db: f64,
    /// Least-squares gain applied to the reconstruction
    pub scale: f64,
    /// Samples that contributed after trimming
    pub samples: usize,
}

impl SnrEstimate {
    const UNDEFINED: SnrEstimate = SnrEstimate {
        db: 0.0,
        scale: 0.0,
        samples: 0,
    };

    pub fn is_perfect(&self) -> bool {
        self.db == f64::INFINITY
    }
}

/// Samples to exclude at each end for a filter with `taps` taps.
#[inline]
pub fn edge_exclusion(taps: usize) -> usize {
    taps / 2 + EDGE_MARGIN
}

/// Fit `reconstructed` onto `original` and report the residual SNR.
///
/// `exclude` samples are dropped from both ends of the common length.
pub fn estimate(original: &[f64], reconstructed: &[f64], exclude: usize) -> SnrEstimate {
    let len = original.len().min(reconstructed.len());
    if len <= 2 * exclude {
        log::debug!("SNR region empty ({} samples, {} excluded per side)", len, exclude);
        return SnrEstimate::UNDEFINED;
    }

    let o = &original[exclude..len - exclude];
    let r = &reconstructed[exclude..len - exclude];

    let (cross, recon_power, signal_power) = o
        .iter()
        .zip(r)
        .fold((0.0, 0.0, 0.0), |(c, rp, sp), (&o, &r)| {
            (c + o * r, rp + r * r, sp + o * o)
        });

    let scale = if recon_power > 0.0 {
        cross / recon_power
    } else {
        0.0
    };

    let error_power: f64 = o.iter().zip(r).map(|(&o, &r)| (o - scale * r).powi(2)).sum();

    // A silent original also has zero error once c = 0; it is undefined, not perfect
    let db = if signal_power == 0.0 {
        0.0
    } else if error_power == 0.0 {
        f64::INFINITY
    } else {
        10.0 * (signal_power / error_power).log10()
    };

    SnrEstimate {
        db,
        scale,
        samples: o.len(),
    }
}

/// SNR in dB between `original` and `reconstructed`; see [`estimate`].
pub fn estimate_snr(original: &[f64], reconstructed: &[f64], exclude: usize) -> f64 {
    estimate(original, reconstructed, exclude).db
}
