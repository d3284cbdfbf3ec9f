use thiserror::Error;

/// Rejected simulator or capture settings.
///
/// These are caught before any samples are computed, so a bad value never
/// turns into NaN halfway through the pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("sample rate must be positive and finite, got {0}")]
    SampleRate(f64),

    #[error("duration must be positive and finite, got {0}")]
    Duration(f64),

    #[error("filter needs at least one tap")]
    NoTaps,

    #[error("cutoff {cutoff_hz} Hz must lie in (0, {nyquist}) Hz")]
    Cutoff { cutoff_hz: f64, nyquist: f64 },

    #[error("noise power must be non-negative and finite, got {0}")]
    NoisePower(f64),

    #[error("carrier frequency must be finite, got {0}")]
    Carrier(f64),

    #[error("capture `{label}` has {i} I samples but {q} Q samples")]
    CaptureLength { label: String, i: usize, q: usize },

    #[error("capture `{0}` contains no samples")]
    EmptyCapture(String),
}
