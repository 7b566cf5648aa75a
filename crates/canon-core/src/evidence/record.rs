//! The append-only evidence record and its fact-slot key.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::confidence::Confidence;
use super::value::FactValue;
use crate::errors::ValidationError;

/// Key identifying a fact slot. Lowercased, so `"Maya"` and `"maya"`
/// address the same slot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FactKey {
    pub subject: String,
    pub attribute: String,
}

impl FactKey {
    pub fn new(subject: &str, attribute: &str) -> Self {
        Self {
            subject: subject.trim().to_lowercase(),
            attribute: attribute.trim().to_lowercase(),
        }
    }
}

impl fmt::Display for FactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.subject, self.attribute)
    }
}

/// One immutable, timestamped assertion about a fact.
///
/// Records are never mutated or deleted; the registry is a projection over
/// the full ordered history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceRecord {
    /// blake3 hash of the identity fields; doubles as the dedup key.
    pub id: String,
    pub subject: String,
    pub attribute: String,
    pub value: FactValue,
    pub confidence: Confidence,
    /// Partition tag ("personal", "professional", ...), not a uniqueness key.
    pub scope: String,
    /// Passthrough classification tags; unused by the detectors.
    pub tags: Vec<String>,
    pub timestamp: DateTime<Utc>,
    /// Asserted to never be contradicted without explicit correction.
    pub permanent: bool,
}

impl EvidenceRecord {
    /// Build a validated record. Empty subject/attribute and out-of-range
    /// confidence are rejected here, before the record can reach a trail.
    pub fn new(
        subject: &str,
        attribute: &str,
        value: FactValue,
        confidence: f64,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if subject.trim().is_empty() {
            return Err(ValidationError::EmptySubject);
        }
        if attribute.trim().is_empty() {
            return Err(ValidationError::EmptyAttribute);
        }
        if let FactValue::List(items) = &value {
            if items.is_empty() {
                return Err(ValidationError::EmptyValueList);
            }
        }
        let confidence = Confidence::try_new(confidence)?;

        let mut record = Self {
            id: String::new(),
            subject: subject.trim().to_string(),
            attribute: attribute.trim().to_string(),
            value,
            confidence,
            scope: "general".to_string(),
            tags: Vec::new(),
            timestamp,
            permanent: false,
        };
        record.rehash();
        Ok(record)
    }

    /// Mark this record as a permanent assertion.
    pub fn permanent(mut self) -> Self {
        self.permanent = true;
        self.rehash();
        self
    }

    /// Set the partition scope.
    pub fn with_scope(mut self, scope: &str) -> Self {
        self.scope = scope.to_string();
        self.rehash();
        self
    }

    /// Attach passthrough tags. Tags do not participate in identity.
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// The fact slot this record asserts.
    pub fn key(&self) -> FactKey {
        FactKey::new(&self.subject, &self.attribute)
    }

    /// Recompute the content-hash id from the identity fields.
    ///
    /// Two records asserting the same thing at the same instant hash to the
    /// same id, which is what the registry's exact-equality dedup keys on.
    fn rehash(&mut self) {
        let identity = format!(
            "{}|{}|{}|{}|{}|{}|{}",
            self.subject,
            self.attribute,
            self.value,
            self.confidence.value(),
            self.scope,
            self.timestamp.timestamp_millis(),
            self.permanent,
        );
        self.id = blake3::hash(identity.as_bytes()).to_hex().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn identical_assertions_share_an_id() {
        let a = EvidenceRecord::new("Maya", "employer", FactValue::text("Acme"), 0.9, ts(1))
            .unwrap();
        let b = EvidenceRecord::new("Maya", "employer", FactValue::text("Acme"), 0.9, ts(1))
            .unwrap();
        assert_eq!(a.id, b.id);

        let c = EvidenceRecord::new("Maya", "employer", FactValue::text("Globex"), 0.9, ts(1))
            .unwrap();
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn builders_keep_the_id_in_sync() {
        let base = EvidenceRecord::new("Maya", "employer", FactValue::text("Acme"), 0.9, ts(1))
            .unwrap();
        let scoped = base.clone().with_scope("professional");
        let anchored = base.clone().permanent();
        assert_ne!(base.id, scoped.id);
        assert_ne!(base.id, anchored.id);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(matches!(
            EvidenceRecord::new("  ", "employer", FactValue::text("Acme"), 0.9, ts(1)),
            Err(ValidationError::EmptySubject)
        ));
        assert!(matches!(
            EvidenceRecord::new("Maya", "", FactValue::text("Acme"), 0.9, ts(1)),
            Err(ValidationError::EmptyAttribute)
        ));
        assert!(matches!(
            EvidenceRecord::new("Maya", "employer", FactValue::text("Acme"), 1.2, ts(1)),
            Err(ValidationError::ConfidenceOutOfRange { .. })
        ));
        assert!(matches!(
            EvidenceRecord::new("Maya", "employer", FactValue::List(vec![]), 0.9, ts(1)),
            Err(ValidationError::EmptyValueList)
        ));
    }

    #[test]
    fn keys_are_case_insensitive() {
        assert_eq!(FactKey::new("Maya", "Employer"), FactKey::new("maya", "employer"));
        assert_eq!(FactKey::new("Maya", "employer").to_string(), "maya::employer");
    }
}
