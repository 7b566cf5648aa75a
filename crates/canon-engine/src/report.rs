//! Markdown report rendering for a continuity snapshot.
//!
//! String formatting over an already-computed [`ContinuityState`], strictly
//! downstream of scoring; nothing here feeds back into the pipeline.

use canon_core::models::ContinuityState;

/// Render the human-readable rollup: canon summary, conflicts ordered by
/// severity, drift signals ordered by instability, and the aggregate score.
pub fn render(state: &ContinuityState) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Canon Summary".to_string());
    if state.facts.is_empty() {
        lines.push("- No canonical facts yet.".to_string());
    }
    for fact in &state.facts {
        let anchor = if fact.permanent { ", permanent" } else { "" };
        lines.push(format!(
            "- **{}::{}** → {} (conf={}, scope={}{anchor})",
            fact.subject, fact.attribute, fact.value, fact.confidence, fact.scope
        ));
    }

    lines.push(String::new());
    lines.push("# Conflicts".to_string());
    if state.conflicts.is_empty() {
        lines.push("- No conflicts detected.".to_string());
    }
    for conflict in &state.conflicts {
        lines.push(format!(
            "- [{}] {} (severity: {})",
            conflict.conflict_type, conflict.description, conflict.severity
        ));
    }

    lines.push(String::new());
    lines.push("# Drift".to_string());
    if state.drift_signals.is_empty() {
        lines.push("- No drift detected.".to_string());
    }
    let mut signals: Vec<_> = state.drift_signals.iter().collect();
    signals.sort_by(|a, b| {
        b.drift_score
            .partial_cmp(&a.drift_score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.subject.cmp(&b.subject))
    });
    for signal in signals {
        lines.push(format!(
            "- {}::{} drift={:.2} segments=[{}] {}",
            signal.subject,
            signal.attribute,
            signal.drift_score,
            signal.segments.join(", "),
            signal.notes
        ));
    }

    lines.push(String::new());
    lines.push("# Stability".to_string());
    lines.push(format!("- Continuity score: {:.1}/100", state.score));
    for (category, stability) in &state.drift_summary {
        lines.push(format!("- {category}: {stability:.2}"));
    }

    lines.join("\n")
}
