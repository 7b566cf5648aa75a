//! Materially different confident values inside one time segment.

use std::collections::BTreeSet;

use canon_core::models::{ConflictType, ContinuityConflict, Severity};
use canon_core::EvidenceRecord;

use super::DetectionContext;
use crate::similarity;

/// Detect contemporaneous disagreement within each segment.
///
/// Confident records (confidence ≥ 0.5) in the same segment whose values
/// fall below the material-similarity threshold conflict. `Medium`,
/// escalating to `High` when 3+ distinct confident values appear in one
/// segment.
pub fn detect(history: &[EvidenceRecord], ctx: &DetectionContext<'_>) -> Vec<ContinuityConflict> {
    let mut conflicts = Vec::new();

    for segment in ctx.segmenter.split(history) {
        let confident: Vec<&EvidenceRecord> = segment
            .records
            .iter()
            .copied()
            .filter(|r| r.confidence.is_confident())
            .collect();
        if confident.len() < 2 {
            continue;
        }

        // Distinct values in first-seen order, each with its records.
        let mut groups: Vec<(String, Vec<&EvidenceRecord>)> = Vec::new();
        for &record in &confident {
            let rendered = record.value.to_string();
            match groups.iter_mut().find(|(v, _)| *v == rendered) {
                Some((_, records)) => records.push(record),
                None => groups.push((rendered, vec![record])),
            }
        }
        if groups.len() < 2 {
            continue;
        }

        // Which value groups participate in a materially-different pair.
        let mut involved: BTreeSet<usize> = BTreeSet::new();
        for i in 0..groups.len() {
            for j in (i + 1)..groups.len() {
                let sim = similarity::value_similarity(
                    &groups[i].1[0].value,
                    &groups[j].1[0].value,
                );
                if sim < ctx.detection.material_similarity {
                    involved.insert(i);
                    involved.insert(j);
                }
            }
        }
        if involved.len() < 2 {
            continue;
        }

        let severity = if groups.len() >= 3 {
            Severity::High
        } else {
            Severity::Medium
        };

        let values: Vec<&str> = involved
            .iter()
            .map(|&i| groups[i].0.as_str())
            .collect();
        let evidence: Vec<String> = involved
            .iter()
            .flat_map(|&i| groups[i].1.iter().map(|r| r.id.clone()))
            .collect();
        let subjects: BTreeSet<String> = involved
            .iter()
            .flat_map(|&i| groups[i].1.iter().map(|r| r.subject.clone()))
            .collect();
        let attributes: BTreeSet<String> = involved
            .iter()
            .flat_map(|&i| groups[i].1.iter().map(|r| r.attribute.clone()))
            .collect();

        let sample = &confident[0];
        conflicts.push(ContinuityConflict {
            conflict_type: ConflictType::SimultaneousDisagreement,
            description: format!(
                "{}::{} recorded as {} within segment {}",
                sample.subject,
                sample.attribute,
                values
                    .iter()
                    .map(|v| format!("'{v}'"))
                    .collect::<Vec<_>>()
                    .join(" and "),
                segment.label
            ),
            severity,
            subjects,
            attributes,
            evidence,
        });
    }

    conflicts
}
