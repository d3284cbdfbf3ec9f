//! In-place iterative radix-2 FFT over split real/imaginary buffers.

use std::f64::consts::TAU;

/*
Radix-2 Cooley-Tukey, Iterative
===============================

For N = 2^m the DFT

    X[k] = Σ x[n]·e^(−j·2π·k·n/N)

splits recursively into even and odd halves. Done in place and without
recursion it takes two passes:

1. Bit-reversal permutation. Sample n moves to the index whose m-bit binary
   representation is n's reversed (N = 8: 1 = 001 ↔ 100 = 4, 3 = 011 ↔ 110 = 6).
   A running reversed counter j is incremented "from the top" alongside i,
   and each pair is swapped once (when i < j).

2. Butterfly stages for len = 2, 4, 8, …, N. Within each block of `len`
   samples, pair a = start + k with b = a + len/2:

        w      = e^(∓j·2π·k/len)
        v      = x[b]·w
        x[a]   = x[a] + v
        x[b]   = x[a] − v

   Each stage reads the previous stage's output, so stages run in order.

The inverse flips the twiddle sign and divides by N at the end.

Twiddles are evaluated directly from k rather than by repeated complex
multiplication, so rounding error does not accumulate across a stage.
*/

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Inverse,
}

/// Next power of two at or above `len` (1 for an empty input).
#[inline]
pub fn padded_len(len: usize) -> usize {
    len.max(1).next_power_of_two()
}

/// Transform `re`/`im` in place.
///
/// Both buffers must have the same power-of-two length; callers zero-pad
/// first (see [`padded_len`]), or use [`transform`] which pads for them.
///
/// # Panics
///
/// Panics if `re` and `im` differ in length, or if that length is neither
/// zero nor a power of two.
pub fn fft_in_place(re: &mut [f64], im: &mut [f64], direction: Direction) {
    let n = re.len();
    assert_eq!(n, im.len(), "real and imaginary buffers differ in length");
    assert!(n.is_power_of_two() || n == 0, "FFT length {} is not a power of two", n);
    if n <= 1 {
        return;
    }

    bit_reverse_permute(re, im);

    let sign = match direction {
        Direction::Forward => -1.0,
        Direction::Inverse => 1.0,
    };

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let step = sign * TAU / len as f64;
        for start in (0..n).step_by(len) {
            for k in 0..half {
                let (w_im, w_re) = (step * k as f64).sin_cos();
                let a = start + k;
                let b = a + half;

                let v_re = re[b] * w_re - im[b] * w_im;
                let v_im = re[b] * w_im + im[b] * w_re;

                re[b] = re[a] - v_re;
                im[b] = im[a] - v_im;
                re[a] += v_re;
                im[a] += v_im;
            }
        }
        len <<= 1;
    }

    if direction == Direction::Inverse {
        let scale = 1.0 / n as f64;
        for (r, i) in re.iter_mut().zip(im.iter_mut()) {
            *r *= scale;
            *i *= scale;
        }
    }
}

fn bit_reverse_permute(re: &mut [f64], im: &mut [f64]) {
    let n = re.len();
    let mut j = 0usize;
    for i in 1..n {
        let mut bit = n >> 1;
        while j & bit != 0 {
            j ^= bit;
            bit >>= 1;
        }
        j ^= bit;

        if i < j {
            re.swap(i, j);
            im.swap(i, j);
        }
    }
}

/// Copy `re`/`im` into fresh zero-padded power-of-two buffers and transform them.
pub fn transform(re: &[f64], im: &[f64], direction: Direction) -> (Vec<f64>, Vec<f64>) {
    let n = padded_len(re.len().max(im.len()));
    if n > re.len() {
        log::debug!("zero-padding FFT input from {} to {} samples", re.len(), n);
    }

    let mut buf_re = vec![0.0; n];
    let mut buf_im = vec![0.0; n];
    buf_re[..re.len()].copy_from_slice(re);
    buf_im[..im.len()].copy_from_slice(im);

    fft_in_place(&mut buf_re, &mut buf_im, direction);
    (buf_re, buf_im)
}

/// Inverse transform of a complex spectrum, zero-padded to a power of two.
pub fn ifft_complex(re: &[f64], im: &[f64]) -> (Vec<f64>, Vec<f64>) {
    transform(re, im, Direction::Inverse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustfft::{num_complex::Complex, FftPlanner};

    /// Cheap deterministic test vector (no RNG needed).
    fn test_vector(n: usize, seed: f64) -> Vec<f64> {
        (0..n)
            .map(|i| ((i as f64 + seed) * 12.9898).sin() * 43.5453 % 1.0)
            .collect()
    }

    #[test]
    fn test_padded_len() {
        assert_eq!(padded_len(0), 1);
        assert_eq!(padded_len(1), 1);
        assert_eq!(padded_len(600), 1024);
        assert_eq!(padded_len(1024), 1024);
    }

    #[test]
    #[should_panic(expected = "not a power of two")]
    fn test_in_place_rejects_unpadded_length() {
        let mut re = vec![0.0; 12];
        let mut im = vec![0.0; 12];
        fft_in_place(&mut re, &mut im, Direction::Forward);
    }

    #[test]
    #[should_panic(expected = "differ in length")]
    fn test_in_place_rejects_mismatched_buffers() {
        let mut re = vec![0.0; 16];
        let mut im = vec![0.0; 8];
        fft_in_place(&mut re, &mut im, Direction::Forward);
    }

    #[test]
    fn test_impulse_has_flat_spectrum() {
        let mut re = vec![0.0; 16];
        let mut im = vec![0.0; 16];
        re[0] = 1.0;

        fft_in_place(&mut re, &mut im, Direction::Forward);

        for k in 0..16 {
            assert!((re[k] - 1.0).abs() < 1e-12);
            assert!(im[k].abs() < 1e-12);
        }
    }

    #[test]
    fn test_bit_reversal_order() {
        let mut re: Vec<f64> = (0..8).map(|i| i as f64).collect();
        let mut im = vec![0.0; 8];
        bit_reverse_permute(&mut re, &mut im);
        assert_eq!(re, vec![0.0, 4.0, 2.0, 6.0, 1.0, 5.0, 3.0, 7.0]);
    }

    #[test]
    fn test_matches_rustfft() {
        for &n in &[2usize, 8, 64, 512] {
            let re = test_vector(n, 0.0);
            let im = test_vector(n, 100.0);

            let (ours_re, ours_im) = transform(&re, &im, Direction::Forward);

            let mut reference: Vec<Complex<f64>> = re
                .iter()
                .zip(&im)
                .map(|(&r, &i)| Complex::new(r, i))
                .collect();
            FftPlanner::<f64>::new().plan_fft_forward(n).process(&mut reference);

            for k in 0..n {
                assert!((ours_re[k] - reference[k].re).abs() < 1e-9, "n={} k={}", n, k);
                assert!((ours_im[k] - reference[k].im).abs() < 1e-9, "n={} k={}", n, k);
            }
        }
    }

    #[test]
    fn test_inverse_round_trip() {
        let re = test_vector(256, 3.0);
        let im = test_vector(256, 9.0);

        let (spec_re, spec_im) = transform(&re, &im, Direction::Forward);
        let (back_re, back_im) = ifft_complex(&spec_re, &spec_im);

        for k in 0..256 {
            assert!((back_re[k] - re[k]).abs() < 1e-12);
            assert!((back_im[k] - im[k]).abs() < 1e-12);
        }
    }

    #[test]
    fn test_transform_zero_pads() {
        let (re, im) = transform(&[1.0, 1.0, 1.0], &[], Direction::Forward);
        assert_eq!(re.len(), 4);
        assert_eq!(im.len(), 4);
        // DC bin is the plain sum
        assert!((re[0] - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_does_not_share_state_between_calls() {
        let input = test_vector(32, 1.0);
        let first = transform(&input, &[], Direction::Forward);
        let _ = transform(&test_vector(32, 50.0), &[], Direction::Forward);
        let again = transform(&input, &[], Direction::Forward);
        assert_eq!(first, again);
    }
}
