//! Uniform sample clock shared by every pipeline stage.

/// Build the sample instants `t[i] = i / sample_rate` for `duration` seconds.
///
/// Length is `floor(sample_rate * duration)`. A non-positive or non-finite
/// product yields an empty time base rather than NaN samples.
pub fn time_base(sample_rate: f64, duration: f64) -> Vec<f64> {
    let count = (sample_rate * duration).floor();
    if !count.is_finite() || count <= 0.0 {
        return Vec::new();
    }

    (0..count as usize)
        .map(|i| i as f64 / sample_rate)
        .collect()
}

/// Time base for `len` samples at `sample_rate`.
///
/// Used when the sample count is fixed by the data (captures) rather than by
/// a duration.
pub fn time_base_for_len(sample_rate: f64, len: usize) -> Vec<f64> {
    if !(sample_rate > 0.0) || !sample_rate.is_finite() {
        return Vec::new();
    }
    (0..len).map(|i| i as f64 / sample_rate).collect()
}

/// Span covered by a time base: the last sample instant, or 0 when empty.
#[inline]
pub fn span(t: &[f64]) -> f64 {
    t.last().copied().unwrap_or(0.0)
}
