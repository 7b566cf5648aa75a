//! Evidence validation errors.

/// Errors raised when a malformed evidence record is rejected at ingestion.
/// Rejected records never enter the trail.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("evidence subject is empty")]
    EmptySubject,

    #[error("evidence attribute is empty")]
    EmptyAttribute,

    #[error("confidence {value} outside [0.0, 1.0]")]
    ConfidenceOutOfRange { value: f64 },

    #[error("evidence value list is empty")]
    EmptyValueList,
}
