use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::canonical_fact::CanonicalFact;
use super::conflict::ContinuityConflict;
use super::drift_signal::DriftSignal;

/// The engine's single output aggregate: the full continuity snapshot for
/// one evidence trail.
///
/// Ordered collections throughout, so a fixed trail serializes to an
/// identical state on every invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContinuityState {
    /// Canonical facts, ordered by (subject, attribute).
    pub facts: Vec<CanonicalFact>,
    pub drift_signals: Vec<DriftSignal>,
    /// Average stability per category, 1.0 = fully stable.
    pub drift_summary: BTreeMap<String, f64>,
    /// Aggregate stability in [0.0, 100.0]. An empty trail scores 100 —
    /// nothing established yet counts as maximally stable.
    pub score: f64,
    pub conflicts: Vec<ContinuityConflict>,
}
