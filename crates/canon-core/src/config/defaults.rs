//! Compiled default values for engine configuration.

/// Segment width: weekly buckets.
pub const DEFAULT_BUCKET_DAYS: u32 = 7;

/// Confidence band below the observed maximum within which a more recent
/// record may still win canonical resolution.
pub const DEFAULT_CONFIDENCE_BAND: f64 = 0.15;

/// Similarity below which two contemporaneous values count as materially
/// different.
pub const DEFAULT_MATERIAL_SIMILARITY: f64 = 0.5;

/// Subject-name token overlap at or above which two subjects become merge
/// candidates.
pub const DEFAULT_NAME_SIMILARITY: f64 = 0.7;

/// Days within which a contradicted permanent record counts as freshly
/// asserted, escalating severity.
pub const DEFAULT_PERMANENT_FRESHNESS_DAYS: i64 = 30;
