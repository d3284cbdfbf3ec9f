//! Additive Gaussian noise for I/Q channels (Box-Muller).

use std::f64::consts::TAU;

use rand::Rng;

use crate::dsp::mixer::IqPair;

/// One pair of independent standard normal deviates.
///
/// `u1` is drawn from (0, 1) so `ln(u1)` stays finite.
pub fn gaussian_pair<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    let u1: f64 = rng.gen_range(f64::MIN_POSITIVE..1.0);
    let u2: f64 = rng.gen_range(0.0..1.0);

    let radius = (-2.0 * u1.ln()).sqrt();
    let (sin, cos) = (TAU * u2).sin_cos();
    (radius * cos, radius * sin)
}

/// Add scaled Gaussian noise to both channels, one Box-Muller pair per sample:
/// `z0` goes to I and `z1` to Q.
///
/// `noise_power` is an amplitude scale. Zero leaves the samples untouched and
/// draws nothing from `rng`.
pub fn add_gaussian_noise<R: Rng + ?Sized>(iq: &IqPair, noise_power: f64, rng: &mut R) -> IqPair {
    if noise_power == 0.0 {
        return iq.clone();
    }

    let (i, q) = iq
        .i
        .iter()
        .zip(&iq.q)
        .map(|(&i, &q)| {
            let (z0, z1) = gaussian_pair(rng);
            (i + noise_power * z0, q + noise_power * z1)
        })
        .unzip();

    IqPair { i, q }
}
