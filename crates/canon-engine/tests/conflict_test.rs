use chrono::{DateTime, Duration, TimeZone, Utc};

use canon_core::models::{ConflictType, Severity};
use canon_core::{EvidenceRecord, FactValue};
use canon_engine::{ContinuityEngine, FactRegistry};

fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap()
}

fn employer(value: &str, confidence: f64, at: DateTime<Utc>) -> EvidenceRecord {
    EvidenceRecord::new("Maya", "employer", FactValue::text(value), confidence, at).unwrap()
}

fn registry_of(records: Vec<EvidenceRecord>) -> FactRegistry {
    let mut registry = FactRegistry::new();
    for record in records {
        registry.apply(record).unwrap();
    }
    registry
}

// ── ContradictsPermanent ─────────────────────────────────────────────────

#[test]
fn fresh_permanent_contradiction_is_high_severity() {
    let t0 = ts(1);
    let registry = registry_of(vec![
        employer("Acme", 0.9, t0).permanent(),
        employer("Globex", 0.8, t0 + Duration::days(7)),
    ]);
    let engine = ContinuityEngine::default();

    // The permanent record still wins resolution.
    let fact = registry.canonical("Maya", "employer").unwrap();
    assert_eq!(fact.value, FactValue::text("Acme"));

    let conflicts = engine.conflicts(&registry);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].conflict_type,
        ConflictType::ContradictsPermanent
    );
    assert_eq!(conflicts[0].severity, Severity::High);
    assert_eq!(conflicts[0].evidence.len(), 2);
}

#[test]
fn stale_permanent_contradiction_is_medium_severity() {
    let t0 = ts(1);
    let registry = registry_of(vec![
        employer("Acme", 0.9, t0).permanent(),
        employer("Globex", 0.8, t0 + Duration::days(45)),
    ]);
    let engine = ContinuityEngine::default();

    let conflicts = engine.conflicts(&registry);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, Severity::Medium);
}

#[test]
fn agreeing_evidence_never_contradicts_a_permanent() {
    let t0 = ts(1);
    let registry = registry_of(vec![
        employer("Acme", 0.9, t0).permanent(),
        employer("Acme", 0.7, t0 + Duration::days(7)),
    ]);
    let engine = ContinuityEngine::default();

    assert!(engine.conflicts(&registry).is_empty());
}

// ── SimultaneousDisagreement ─────────────────────────────────────────────

#[test]
fn confident_disagreement_in_one_segment_is_medium() {
    let registry = registry_of(vec![
        employer("Acme", 0.9, ts(4)),
        employer("Globex", 0.8, ts(5)),
    ]);
    let engine = ContinuityEngine::default();

    let conflicts = engine.conflicts(&registry);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(
        conflicts[0].conflict_type,
        ConflictType::SimultaneousDisagreement
    );
    assert_eq!(conflicts[0].severity, Severity::Medium);
}

#[test]
fn three_distinct_values_in_one_segment_escalate_to_high() {
    let registry = registry_of(vec![
        employer("Acme", 0.9, ts(4)),
        employer("Globex", 0.8, ts(5)),
        employer("Initech", 0.7, ts(6)),
    ]);
    let engine = ContinuityEngine::default();

    let conflicts = engine.conflicts(&registry);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].severity, Severity::High);
}

#[test]
fn low_confidence_records_do_not_disagree() {
    let registry = registry_of(vec![
        employer("Acme", 0.9, ts(4)),
        employer("Globex", 0.4, ts(5)),
    ]);
    let engine = ContinuityEngine::default();

    assert!(engine.conflicts(&registry).is_empty());
}

#[test]
fn similar_values_are_not_material_disagreement() {
    let registry = registry_of(vec![
        employer("Acme Corp", 0.9, ts(4)),
        employer("Acme", 0.8, ts(5)),
    ]);
    let engine = ContinuityEngine::default();

    // Token overlap is 0.5, right at the material-similarity threshold.
    assert!(engine.conflicts(&registry).is_empty());
}

// ── RapidReversal ────────────────────────────────────────────────────────

#[test]
fn oscillating_value_across_four_segments_is_low_severity() {
    let registry = registry_of(vec![
        employer("Austin", 0.9, ts(1)),
        employer("Denver", 0.9, ts(8)),
        employer("Austin", 0.9, ts(15)),
        employer("Denver", 0.9, ts(22)),
    ]);
    let engine = ContinuityEngine::default();

    let conflicts = engine.conflicts(&registry);
    assert_eq!(conflicts.len(), 1);
    assert_eq!(conflicts[0].conflict_type, ConflictType::RapidReversal);
    assert_eq!(conflicts[0].severity, Severity::Low);
    assert!(conflicts[0].description.contains("oscillates"));
}

#[test]
fn reversal_touching_a_permanent_value_is_high_severity() {
    let registry = registry_of(vec![
        employer("Austin", 0.9, ts(1)),
        employer("Denver", 0.9, ts(8)).permanent(),
        employer("Austin", 0.9, ts(15)),
    ]);
    let engine = ContinuityEngine::default();

    let conflicts = engine.conflicts(&registry);
    let reversal = conflicts
        .iter()
        .find(|c| c.conflict_type == ConflictType::RapidReversal)
        .unwrap();
    assert_eq!(reversal.severity, Severity::High);
}

#[test]
fn steady_change_is_not_a_reversal() {
    let registry = registry_of(vec![
        employer("Acme", 0.9, ts(1)),
        employer("Globex", 0.9, ts(8)),
        employer("Initech", 0.9, ts(15)),
    ]);
    let engine = ContinuityEngine::default();

    assert!(engine
        .conflicts(&registry)
        .iter()
        .all(|c| c.conflict_type != ConflictType::RapidReversal));
}

#[test]
fn clean_trail_has_no_conflicts() {
    let registry = registry_of(vec![
        employer("Acme", 0.9, ts(1)),
        employer("Acme", 0.8, ts(8)),
        employer("Acme", 0.95, ts(15)),
    ]);
    let engine = ContinuityEngine::default();

    assert!(engine.conflicts(&registry).is_empty());
}

// ── Ordering ─────────────────────────────────────────────────────────────

#[test]
fn conflicts_are_ordered_by_severity_descending() {
    let t0 = ts(1);
    let mut registry = registry_of(vec![
        // High: fresh permanent contradiction.
        employer("Acme", 0.9, t0).permanent(),
        employer("Globex", 0.8, t0 + Duration::days(3)),
    ]);
    // Low: oscillation on an unrelated slot.
    for (value, day) in [("gym", 2), ("yoga", 9), ("gym", 16)] {
        registry
            .apply(
                EvidenceRecord::new("Maya", "routine", FactValue::text(value), 0.9, ts(day))
                    .unwrap(),
            )
            .unwrap();
    }
    let engine = ContinuityEngine::default();

    let severities: Vec<Severity> = engine
        .conflicts(&registry)
        .iter()
        .map(|c| c.severity)
        .collect();
    let mut sorted = severities.clone();
    sorted.sort_by(|a, b| b.cmp(a));
    assert_eq!(severities, sorted);
}
