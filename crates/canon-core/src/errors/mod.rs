//! Error handling for Canon.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod validation_error;

pub use config_error::ConfigError;
pub use validation_error::ValidationError;

/// Umbrella error for the engine surface.
///
/// The detection and scoring pipeline itself has no fallible steps once the
/// trail is valid; errors only arise at the ingestion and construction
/// boundaries.
#[derive(Debug, thiserror::Error)]
pub enum CanonError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type CanonResult<T> = Result<T, CanonError>;
