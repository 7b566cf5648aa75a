//! Aggregate continuity scoring.
//!
//! ```text
//! score = 100 × (0.6 × (1 − meanDrift) + 0.4 × (1 − conflictPenalty))
//! conflictPenalty = min(1, Σ severityWeight / 10)
//! ```
//!
//! A handful of high-severity conflicts dominate the score; many low ones
//! degrade it gradually. No signals and no conflicts scores 100 — nothing
//! established yet counts as maximally stable.

use std::collections::{BTreeMap, HashMap};

use canon_core::constants::{
    CONFLICT_PENALTY_SCALE, CONFLICT_WEIGHT, DEFAULT_CATEGORY, DRIFT_WEIGHT,
};
use canon_core::models::{ContinuityConflict, DriftSignal};

/// Scorer output: the aggregate plus the per-category stability summary.
#[derive(Debug, Clone, PartialEq)]
pub struct ContinuityScore {
    /// Aggregate stability in [0.0, 100.0].
    pub score: f64,
    /// `1 − mean(drift_score)` per category; higher = more stable.
    pub drift_summary: BTreeMap<String, f64>,
}

/// Aggregate drift and conflict signals into the continuity score.
///
/// `categories` maps attribute → category; unmapped attributes fall into
/// the default "general" bucket.
pub fn score(
    signals: &[DriftSignal],
    conflicts: &[ContinuityConflict],
    categories: &HashMap<String, String>,
) -> ContinuityScore {
    let mean_drift = if signals.is_empty() {
        0.0
    } else {
        signals.iter().map(|s| s.drift_score).sum::<f64>() / signals.len() as f64
    };

    let total_weight: f64 = conflicts.iter().map(|c| c.severity.weight()).sum();
    let conflict_penalty = (total_weight / CONFLICT_PENALTY_SCALE).min(1.0);

    let score = 100.0
        * (DRIFT_WEIGHT * (1.0 - mean_drift) + CONFLICT_WEIGHT * (1.0 - conflict_penalty));

    let mut buckets: BTreeMap<String, Vec<f64>> = BTreeMap::new();
    for signal in signals {
        let category = categories
            .get(&signal.attribute)
            .or_else(|| categories.get(&signal.attribute.to_lowercase()))
            .map(String::as_str)
            .unwrap_or(DEFAULT_CATEGORY);
        buckets
            .entry(category.to_string())
            .or_default()
            .push(signal.drift_score);
    }
    let drift_summary = buckets
        .into_iter()
        .map(|(category, scores)| {
            let mean = scores.iter().sum::<f64>() / scores.len() as f64;
            (category, (1.0 - mean).clamp(0.0, 1.0))
        })
        .collect();

    ContinuityScore {
        score: score.clamp(0.0, 100.0),
        drift_summary,
    }
}
