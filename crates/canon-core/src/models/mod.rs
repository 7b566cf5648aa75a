pub mod audit;
pub mod canonical_fact;
pub mod conflict;
pub mod continuity_state;
pub mod drift_signal;
pub mod merge_suggestion;

pub use audit::ContinuityAudit;
pub use canonical_fact::CanonicalFact;
pub use conflict::{ConflictType, ContinuityConflict, Severity};
pub use continuity_state::ContinuityState;
pub use drift_signal::DriftSignal;
pub use merge_suggestion::MergeSuggestion;
