use thiserror::Error;

/// Per-file analysis failures. None of these abort a batch; the affected
/// file is reported in its own row and the rest proceed.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The byte stream is not a parseable RIFF/WAVE container.
    #[error("decode error: {0}")]
    Decode(String),

    /// Noise floor is undefined for an all-zero (or empty) first channel.
    #[error("silent file: noise floor undefined")]
    InvalidSignal,

    /// A requirement value outside its enumerated domain.
    #[error("invalid requirement: {0}")]
    Configuration(String),
}
