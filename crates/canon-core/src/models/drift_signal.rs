use serde::{Deserialize, Serialize};

/// How much the canonical value of one fact slot changed across time
/// segments. Recomputed fresh on every engine invocation; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriftSignal {
    pub subject: String,
    pub attribute: String,
    /// Mean change across consecutive segment pairs, in [0.0, 1.0].
    pub drift_score: f64,
    /// Ordered labels of the compared time buckets.
    pub segments: Vec<String>,
    /// Templated description of the trend.
    pub notes: String,
}
