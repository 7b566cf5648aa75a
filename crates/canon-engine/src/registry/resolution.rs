//! Winning-record resolution for a fact slot.
//!
//! Rule, applied at read time over the slot's full history:
//! 1. The newest permanent record wins regardless of confidence.
//! 2. Otherwise the most recent record whose confidence is within the band
//!    of the slot's maximum wins — a stale high-confidence record cannot
//!    perpetually override fresh, nearly-as-confident evidence, and noisy
//!    low-confidence records cannot flap the canonical value.
//! 3. Ties break by recency, then lexicographic value.

use canon_core::EvidenceRecord;

/// Resolve the winning record among a slot's (or segment's) records.
/// Returns `None` only for an empty slice.
pub fn resolve<'a>(
    records: &[&'a EvidenceRecord],
    confidence_band: f64,
) -> Option<&'a EvidenceRecord> {
    let permanents: Vec<&EvidenceRecord> =
        records.iter().copied().filter(|r| r.permanent).collect();
    if !permanents.is_empty() {
        return latest(&permanents);
    }

    let max_confidence = records
        .iter()
        .map(|r| r.confidence.value())
        .fold(f64::MIN, f64::max);
    let eligible: Vec<&EvidenceRecord> = records
        .iter()
        .copied()
        .filter(|r| r.confidence.value() >= max_confidence - confidence_band)
        .collect();
    latest(&eligible)
}

/// Most recent record; equal timestamps break toward the lexicographically
/// smaller rendered value, so resolution is deterministic.
fn latest<'a>(records: &[&'a EvidenceRecord]) -> Option<&'a EvidenceRecord> {
    let (first, rest) = records.split_first()?;
    let mut best = *first;
    for record in rest.iter().copied() {
        if record.timestamp > best.timestamp
            || (record.timestamp == best.timestamp
                && record.value.to_string() < best.value.to_string())
        {
            best = record;
        }
    }
    Some(best)
}
