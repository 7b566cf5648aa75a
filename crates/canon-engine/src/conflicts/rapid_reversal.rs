//! Canonical value flipping back and forth across segments — unstable
//! self-reporting rather than genuine change.

use std::collections::BTreeSet;

use canon_core::models::{ConflictType, ContinuityConflict, Severity};
use canon_core::EvidenceRecord;

use super::DetectionContext;
use crate::registry::resolution;

/// Detect A→B→A oscillation of the per-segment canonical value across 3 or
/// more consecutive segments. `Low`, unless one of the oscillating values
/// comes from a permanent record, then `High`.
pub fn detect(history: &[EvidenceRecord], ctx: &DetectionContext<'_>) -> Vec<ContinuityConflict> {
    let segments = ctx.segmenter.split(history);
    if segments.len() < 3 {
        return Vec::new();
    }

    let winners: Vec<&EvidenceRecord> = segments
        .iter()
        .filter_map(|s| resolution::resolve(&s.records, ctx.confidence_band))
        .collect();
    if winners.len() < 3 {
        return Vec::new();
    }
    let values: Vec<String> = winners.iter().map(|w| w.value.to_string()).collect();

    // Windows where the value leaves and returns: v[i] != v[i+1], v[i] == v[i+2].
    let flips: Vec<usize> = (0..values.len() - 2)
        .filter(|&i| values[i] != values[i + 1] && values[i] == values[i + 2])
        .collect();
    if flips.is_empty() {
        return Vec::new();
    }

    let oscillating: Vec<&EvidenceRecord> = flips
        .iter()
        .flat_map(|&i| winners[i..i + 3].iter().copied())
        .collect();
    let severity = if oscillating.iter().any(|r| r.permanent) {
        Severity::High
    } else {
        Severity::Low
    };

    let first_flip = flips[0];
    let mut evidence: Vec<String> = Vec::new();
    for record in &oscillating {
        if !evidence.contains(&record.id) {
            evidence.push(record.id.clone());
        }
    }

    let subjects: BTreeSet<String> = oscillating.iter().map(|r| r.subject.clone()).collect();
    let attributes: BTreeSet<String> = oscillating.iter().map(|r| r.attribute.clone()).collect();

    vec![ContinuityConflict {
        conflict_type: ConflictType::RapidReversal,
        description: format!(
            "{}::{} oscillates between '{}' and '{}' across {} segments",
            winners[0].subject,
            winners[0].attribute,
            values[first_flip],
            values[first_flip + 1],
            winners.len()
        ),
        severity,
        subjects,
        attributes,
        evidence,
    }]
}
