use serde::{Deserialize, Serialize};

use crate::evidence::{Confidence, EvidenceRecord, FactValue};

/// The currently winning value for a (subject, attribute) slot, derived
/// from the evidence trail. Recomputed on read, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanonicalFact {
    pub subject: String,
    pub attribute: String,
    pub value: FactValue,
    pub confidence: Confidence,
    pub scope: String,
    pub tags: Vec<String>,
    pub permanent: bool,
    /// Id of the evidence record the value was taken from.
    pub source_id: String,
}

impl CanonicalFact {
    /// Project the winning record into a canonical fact.
    pub fn from_record(record: &EvidenceRecord) -> Self {
        Self {
            subject: record.subject.clone(),
            attribute: record.attribute.clone(),
            value: record.value.clone(),
            confidence: record.confidence,
            scope: record.scope.clone(),
            tags: record.tags.clone(),
            permanent: record.permanent,
            source_id: record.id.clone(),
        }
    }
}
