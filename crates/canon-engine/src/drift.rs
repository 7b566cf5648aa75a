//! Drift detection — how much the canonical value of each fact slot changed
//! across time segments.
//!
//! Per slot: the winning value is resolved per segment, then consecutive
//! segment pairs contribute a change in [0, 1]. Numeric values normalize by
//! the observed range; text and lists by token-overlap similarity. A slot
//! with fewer than two populated segments is skipped — insufficient history
//! is a normal empty result, not a failure.

use canon_core::models::DriftSignal;
use canon_core::{EvidenceRecord, FactValue};

use crate::registry::{resolution, FactRegistry};
use crate::segment::Segmenter;
use crate::similarity;

/// Compute drift signals for every slot in the registry.
pub fn detect_drift(
    registry: &FactRegistry,
    segmenter: &Segmenter,
    confidence_band: f64,
) -> Vec<DriftSignal> {
    registry
        .histories()
        .filter_map(|(_, history)| detect_for_slot(history, segmenter, confidence_band))
        .collect()
}

fn detect_for_slot(
    history: &[EvidenceRecord],
    segmenter: &Segmenter,
    confidence_band: f64,
) -> Option<DriftSignal> {
    let segments = segmenter.split(history);
    if segments.len() < 2 {
        return None;
    }

    // One winning record per populated segment, via the same resolution
    // rule the registry uses, restricted to the segment.
    let winners: Vec<(String, &EvidenceRecord)> = segments
        .iter()
        .filter_map(|s| {
            resolution::resolve(&s.records, confidence_band).map(|w| (s.label.clone(), w))
        })
        .collect();
    if winners.len() < 2 {
        return None;
    }

    // Normalization scale for the numeric path: observed value range across
    // all segments, or 1 if degenerate.
    let numbers: Vec<f64> = winners
        .iter()
        .filter_map(|(_, w)| w.value.as_number())
        .collect();
    let all_numeric = numbers.len() == winners.len();
    let scale = if all_numeric {
        let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
        let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let range = max - min;
        if range > f64::EPSILON {
            range
        } else {
            1.0
        }
    } else {
        1.0
    };

    let contributions: Vec<f64> = winners
        .windows(2)
        .map(|pair| {
            let (a, b) = (&pair[0].1.value, &pair[1].1.value);
            match (a.as_number(), b.as_number()) {
                (Some(x), Some(y)) if all_numeric => ((y - x).abs() / scale).clamp(0.0, 1.0),
                _ => 1.0 - similarity::value_similarity(a, b),
            }
        })
        .collect();

    let drift_score =
        (contributions.iter().sum::<f64>() / contributions.len() as f64).clamp(0.0, 1.0);

    let first = &winners[0].1.value;
    let last = &winners[winners.len() - 1].1.value;
    let notes = trend_notes(first, last, winners.len());

    Some(DriftSignal {
        subject: winners[0].1.subject.clone(),
        attribute: winners[0].1.attribute.clone(),
        drift_score,
        segments: winners.into_iter().map(|(label, _)| label).collect(),
        notes,
    })
}

/// Templated trend sentence naming the earliest and latest observed values
/// and the direction of change.
fn trend_notes(first: &FactValue, last: &FactValue, segments: usize) -> String {
    if first == last {
        return format!("held at '{first}' across {segments} segments");
    }
    match (first.as_number(), last.as_number()) {
        (Some(x), Some(y)) if y > x => format!("rose from {x} to {y} across {segments} segments"),
        (Some(x), Some(y)) if y < x => format!("fell from {x} to {y} across {segments} segments"),
        _ => format!("changed from '{first}' to '{last}' across {segments} segments"),
    }
}
