//! Configuration errors. Fail fast at engine construction, before any
//! evidence is processed.

/// Errors raised while loading or validating an [`crate::EngineConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("segment width must be at least one day, got {days}")]
    InvalidBucketWidth { days: u32 },

    #[error("threshold {field} must be within [0.0, 1.0], got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },

    #[error("permanent freshness window must be positive, got {days}")]
    InvalidFreshnessWindow { days: i64 },

    #[error("category for attribute '{attribute}' is empty")]
    EmptyCategory { attribute: String },

    #[error("failed to parse config: {message}")]
    ParseError { message: String },
}
