//! Fixed-width time bucketing for the evidence trail.
//!
//! Buckets are aligned to the Unix epoch, weekly by default. Only populated
//! buckets are materialized; the detectors walk them in order.

use chrono::{DateTime, TimeZone, Utc};

use canon_core::EvidenceRecord;

const SECS_PER_DAY: i64 = 86_400;

/// One populated time bucket of a single fact slot's history.
#[derive(Debug, Clone)]
pub struct Segment<'a> {
    /// Epoch-aligned bucket index; consecutive indexes are adjacent weeks.
    pub index: i64,
    /// Human-readable label: the bucket's start date.
    pub label: String,
    /// Records falling into this bucket, in trail order.
    pub records: Vec<&'a EvidenceRecord>,
}

/// Splits ordered record slices into fixed-width buckets.
#[derive(Debug, Clone, Copy)]
pub struct Segmenter {
    width_secs: i64,
}

impl Segmenter {
    /// Width comes from validated config; zero never reaches here.
    pub fn new(bucket_days: u32) -> Self {
        Self {
            width_secs: i64::from(bucket_days) * SECS_PER_DAY,
        }
    }

    /// Bucket index for a timestamp.
    pub fn index(&self, timestamp: DateTime<Utc>) -> i64 {
        timestamp.timestamp().div_euclid(self.width_secs)
    }

    /// Label for a bucket: its start date.
    pub fn label(&self, index: i64) -> String {
        Utc.timestamp_opt(index * self.width_secs, 0)
            .single()
            .map(|start| start.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| format!("bucket-{index}"))
    }

    /// Group a timestamp-ordered history into its populated buckets.
    pub fn split<'a>(&self, records: &'a [EvidenceRecord]) -> Vec<Segment<'a>> {
        let mut segments: Vec<Segment<'a>> = Vec::new();
        for record in records {
            let index = self.index(record.timestamp);
            match segments.last_mut() {
                Some(last) if last.index == index => last.records.push(record),
                _ => segments.push(Segment {
                    index,
                    label: self.label(index),
                    records: vec![record],
                }),
            }
        }
        segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canon_core::FactValue;
    use chrono::TimeZone;

    fn record(day: u32) -> EvidenceRecord {
        let ts = Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap();
        EvidenceRecord::new("Maya", "employer", FactValue::text("Acme"), 0.9, ts).unwrap()
    }

    #[test]
    fn same_week_lands_in_one_bucket() {
        let segmenter = Segmenter::new(7);
        let records = vec![record(1), record(2), record(3)];
        assert_eq!(segmenter.split(&records).len(), 1);
    }

    #[test]
    fn weekly_buckets_split_a_month() {
        let segmenter = Segmenter::new(7);
        let records = vec![record(1), record(9), record(17), record(25)];
        let segments = segmenter.split(&records);
        assert_eq!(segments.len(), 4);
        // Labels are ordered start dates.
        let labels: Vec<&str> = segments.iter().map(|s| s.label.as_str()).collect();
        let mut sorted = labels.clone();
        sorted.sort();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn wider_buckets_coalesce() {
        let segmenter = Segmenter::new(31);
        let records = vec![record(1), record(9), record(17), record(25)];
        assert_eq!(segmenter.split(&records).len(), 1);
    }
}
