use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A detected inconsistency between evidence records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuityConflict {
    pub conflict_type: ConflictType,
    /// Human-readable description of the conflict.
    pub description: String,
    pub severity: Severity,
    /// Subjects involved, unioned over the evidence.
    pub subjects: BTreeSet<String>,
    /// Attributes involved, unioned over the evidence.
    pub attributes: BTreeSet<String>,
    /// Ids of the evidence records that justify the conflict.
    pub evidence: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictType {
    /// A non-permanent record disagrees with the winning permanent record.
    ContradictsPermanent,
    /// Materially different confident values inside one time segment.
    SimultaneousDisagreement,
    /// The canonical value flips back and forth across segments.
    RapidReversal,
}

impl fmt::Display for ConflictType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConflictType::ContradictsPermanent => "contradicts_permanent",
            ConflictType::SimultaneousDisagreement => "simultaneous_disagreement",
            ConflictType::RapidReversal => "rapid_reversal",
        };
        write!(f, "{name}")
    }
}

/// Conflict severity. Ordering is Low < Medium < High.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Penalty weight used by the continuity scorer. A handful of high
    /// severity conflicts dominate the score; many low ones degrade it
    /// gradually.
    pub fn weight(self) -> f64 {
        match self {
            Severity::Low => 1.0,
            Severity::Medium => 2.0,
            Severity::High => 4.0,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        };
        write!(f, "{name}")
    }
}
