use serde::{Deserialize, Serialize};

use super::conflict::ContinuityConflict;

/// Per-invocation record of what the engine flagged and what it recommends
/// the collaborator layer ask the user. Advisory only; never feeds back
/// into scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContinuityAudit {
    pub conflicts: Vec<ContinuityConflict>,
    /// Templated correction prompts, one per flagged conflict or unstable
    /// drift signal.
    pub suggestions: Vec<String>,
}
