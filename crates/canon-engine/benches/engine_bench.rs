use criterion::{criterion_group, criterion_main, Criterion};

use chrono::{Duration, TimeZone, Utc};

use canon_core::{EvidenceRecord, FactValue};
use canon_engine::{ContinuityEngine, FactRegistry};

const SUBJECTS: usize = 50;
const ATTRIBUTES: [&str; 4] = ["employer", "location", "weekly_runs", "hobby"];
const WEEKS: i64 = 12;

/// Build a trail of ~2.4K records: 50 subjects × 4 attributes × 12 weekly
/// assertions, with values rotating so drift and conflicts both fire.
fn build_busy_registry() -> FactRegistry {
    let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
    let mut registry = FactRegistry::new();
    for subject_idx in 0..SUBJECTS {
        let subject = format!("Subject {subject_idx}");
        for (attr_idx, attribute) in ATTRIBUTES.iter().enumerate() {
            for week in 0..WEEKS {
                let value = if *attribute == "weekly_runs" {
                    FactValue::number(((week + attr_idx as i64) % 5) as f64)
                } else {
                    FactValue::text(&format!("value-{}", (week + subject_idx as i64) % 3))
                };
                let record = EvidenceRecord::new(
                    &subject,
                    attribute,
                    value,
                    0.5 + 0.04 * (week % 10) as f64,
                    epoch + Duration::weeks(week),
                )
                .unwrap();
                registry.apply(record).unwrap();
            }
        }
    }
    registry
}

fn bench_analyze(c: &mut Criterion) {
    let engine = ContinuityEngine::default();
    let registry = build_busy_registry();

    c.bench_function("analyze_2k4_records", |b| {
        b.iter(|| engine.analyze(&registry));
    });
}

fn bench_merge_suggestions(c: &mut Criterion) {
    let engine = ContinuityEngine::default();
    let registry = build_busy_registry();

    c.bench_function("merge_suggestions_50_subjects", |b| {
        b.iter(|| engine.merge_suggestions(&registry));
    });
}

criterion_group!(benches, bench_analyze, bench_merge_suggestions);
criterion_main!(benches);
