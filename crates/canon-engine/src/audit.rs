//! Audit trail for continuity decisions.
//!
//! Collects the emitted conflicts with a templated correction prompt per
//! conflict class, plus a prompt for every drift signal unstable enough to
//! warrant asking the user. Advisory only; never feeds scoring.

use canon_core::constants::DRIFT_AUDIT_THRESHOLD;
use canon_core::models::{ConflictType, ContinuityAudit, ContinuityState};

/// Assemble the audit for one snapshot.
pub fn build(state: &ContinuityState) -> ContinuityAudit {
    let mut suggestions: Vec<String> = Vec::new();

    for conflict in &state.conflicts {
        let prompt = match conflict.conflict_type {
            ConflictType::ContradictsPermanent => {
                "Confirm whether the permanent fact still holds or record an explicit correction."
            }
            ConflictType::SimultaneousDisagreement => {
                "Clarify which of the contemporaneous values is accurate."
            }
            ConflictType::RapidReversal => {
                "Prompt for a definitive answer; the value keeps flapping between entries."
            }
        };
        suggestions.push(format!("{} {prompt}", conflict.description));
    }

    for signal in &state.drift_signals {
        if signal.drift_score > DRIFT_AUDIT_THRESHOLD {
            suggestions.push(format!(
                "Drift detected for {}::{}; consider prompting a correction",
                signal.subject, signal.attribute
            ));
        }
    }

    ContinuityAudit {
        conflicts: state.conflicts.clone(),
        suggestions,
    }
}
