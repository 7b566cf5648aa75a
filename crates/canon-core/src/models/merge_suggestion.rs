use serde::{Deserialize, Serialize};

/// An advisory proposal that two subject identifiers likely denote the same
/// real-world entity. Never auto-applied; confirmation enters the system as
/// new evidence, not as a merge API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergeSuggestion {
    /// Deterministic id derived from the subject pair.
    pub id: String,
    pub title: String,
    /// Cites the shared attribute and the name similarity score.
    pub rationale: String,
    /// The two subject identifiers, in trail order.
    pub subjects: (String, String),
    /// Name-token overlap between the two subjects.
    pub similarity: f64,
}
