//! Non-permanent evidence disagreeing with the winning permanent record.

use std::collections::BTreeSet;

use chrono::Duration;

use canon_core::config::DetectionConfig;
use canon_core::models::{ConflictType, ContinuityConflict, Severity};
use canon_core::EvidenceRecord;

/// Detect contradictions of the slot's winning permanent record.
///
/// Severity is `High` when the permanent record was asserted within the
/// freshness window before the contradicting evidence — freshly asserted
/// and already contradicted — else `Medium`.
pub fn detect(history: &[EvidenceRecord], config: &DetectionConfig) -> Vec<ContinuityConflict> {
    let permanents: Vec<&EvidenceRecord> = history.iter().filter(|r| r.permanent).collect();
    let Some(anchor) = latest_permanent(&permanents) else {
        return Vec::new();
    };

    history
        .iter()
        .filter(|r| !r.permanent && r.value != anchor.value)
        .map(|record| {
            let age = record.timestamp.signed_duration_since(anchor.timestamp);
            let fresh = age >= Duration::zero()
                && age < Duration::days(config.permanent_freshness_days);
            let severity = if fresh { Severity::High } else { Severity::Medium };

            ContinuityConflict {
                conflict_type: ConflictType::ContradictsPermanent,
                description: format!(
                    "{}::{} asserts '{}' against permanent value '{}'",
                    record.subject, record.attribute, record.value, anchor.value
                ),
                severity,
                subjects: BTreeSet::from([anchor.subject.clone(), record.subject.clone()]),
                attributes: BTreeSet::from([anchor.attribute.clone(), record.attribute.clone()]),
                evidence: vec![anchor.id.clone(), record.id.clone()],
            }
        })
        .collect()
}

/// Newest permanent record; the newest permanent always wins among
/// permanents.
fn latest_permanent<'a>(permanents: &[&'a EvidenceRecord]) -> Option<&'a EvidenceRecord> {
    let (first, rest) = permanents.split_first()?;
    let mut best = *first;
    for record in rest.iter().copied() {
        if record.timestamp > best.timestamp {
            best = record;
        }
    }
    Some(best)
}
