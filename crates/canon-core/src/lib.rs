//! # canon-core
//!
//! Foundation crate for the Canon continuity system.
//! Defines all types, models, errors, config, and constants.
//! The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod evidence;
pub mod models;

// Re-export the most commonly used types at the crate root.
pub use config::EngineConfig;
pub use errors::{CanonError, CanonResult};
pub use evidence::{Confidence, EvidenceRecord, FactKey, FactValue, Scalar};
