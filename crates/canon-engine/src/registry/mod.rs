//! The canonical fact registry — an ordered projection over the evidence
//! trail, keyed by (subject, attribute).
//!
//! Built per request from the persisted trail and threaded explicitly
//! through the downstream passes. No process-wide singleton.

pub mod resolution;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use canon_core::config::defaults;
use canon_core::errors::ValidationError;
use canon_core::models::CanonicalFact;
use canon_core::{CanonResult, EvidenceRecord, FactKey};

/// Per-attribute rollup used by [`FactRegistry::summarize`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactSummary {
    pub value: String,
    pub confidence: f64,
    pub scope: String,
    pub permanent: bool,
    pub evidence_count: usize,
}

/// Registry of evidence grouped by fact slot.
///
/// `apply` is the only mutation; everything else is a read over the ordered
/// history. Canonical values are recomputed on read, never cached.
#[derive(Debug, Clone)]
pub struct FactRegistry {
    records: BTreeMap<FactKey, Vec<EvidenceRecord>>,
    /// Content-hash ids already applied; exact duplicates are dropped.
    seen: BTreeSet<String>,
    confidence_band: f64,
}

impl FactRegistry {
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            seen: BTreeSet::new(),
            confidence_band: defaults::DEFAULT_CONFIDENCE_BAND,
        }
    }

    /// Override the confidence band used by winning-value resolution.
    pub fn with_confidence_band(mut self, band: f64) -> Self {
        self.confidence_band = band;
        self
    }

    pub fn confidence_band(&self) -> f64 {
        self.confidence_band
    }

    /// Append one evidence record to the trail.
    ///
    /// Returns `Ok(false)` when the record is an exact duplicate of one
    /// already applied (same identity hash) — re-application is a no-op, so
    /// replayed deliveries cannot skew drift or conflict detection.
    pub fn apply(&mut self, record: EvidenceRecord) -> CanonResult<bool> {
        validate(&record)?;
        if !self.seen.insert(record.id.clone()) {
            debug!(id = %record.id, "duplicate evidence dropped");
            return Ok(false);
        }
        let history = self.records.entry(record.key()).or_default();
        let pos = history.partition_point(|r| r.timestamp <= record.timestamp);
        history.insert(pos, record);
        Ok(true)
    }

    /// The winning fact per slot, ordered by key.
    pub fn canonical_facts(&self) -> Vec<CanonicalFact> {
        self.records
            .values()
            .filter_map(|history| {
                let refs: Vec<&EvidenceRecord> = history.iter().collect();
                resolution::resolve(&refs, self.confidence_band)
            })
            .map(CanonicalFact::from_record)
            .collect()
    }

    /// The winning fact for one slot, if any evidence exists.
    pub fn canonical(&self, subject: &str, attribute: &str) -> Option<CanonicalFact> {
        let history = self.history(subject, attribute);
        let refs: Vec<&EvidenceRecord> = history.iter().collect();
        resolution::resolve(&refs, self.confidence_band).map(CanonicalFact::from_record)
    }

    /// Ordered evidence history for one slot. Empty when nothing has been
    /// asserted.
    pub fn history(&self, subject: &str, attribute: &str) -> &[EvidenceRecord] {
        self.records
            .get(&FactKey::new(subject, attribute))
            .map_or(&[], Vec::as_slice)
    }

    /// All slot histories in key order.
    pub fn histories(&self) -> impl Iterator<Item = (&FactKey, &[EvidenceRecord])> {
        self.records.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Total number of records in the trail.
    pub fn len(&self) -> usize {
        self.records.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of distinct fact slots.
    pub fn slot_count(&self) -> usize {
        self.records.len()
    }

    /// Per-subject rollup of canonical facts, for display layers.
    pub fn summarize(&self) -> BTreeMap<String, BTreeMap<String, FactSummary>> {
        let mut summary: BTreeMap<String, BTreeMap<String, FactSummary>> = BTreeMap::new();
        for fact in self.canonical_facts() {
            let evidence_count = self.history(&fact.subject, &fact.attribute).len();
            summary.entry(fact.subject.clone()).or_default().insert(
                fact.attribute.clone(),
                FactSummary {
                    value: fact.value.to_string(),
                    confidence: fact.confidence.value(),
                    scope: fact.scope.clone(),
                    permanent: fact.permanent,
                    evidence_count,
                },
            );
        }
        summary
    }
}

impl Default for FactRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Reject malformed records before they can reach the trail. Confidence
/// range is enforced by construction ([`canon_core::Confidence::try_new`]);
/// key fields are re-checked here.
fn validate(record: &EvidenceRecord) -> Result<(), ValidationError> {
    if record.subject.trim().is_empty() {
        return Err(ValidationError::EmptySubject);
    }
    if record.attribute.trim().is_empty() {
        return Err(ValidationError::EmptyAttribute);
    }
    Ok(())
}
