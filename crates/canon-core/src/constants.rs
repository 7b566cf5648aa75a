/// Canon system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Weight of the drift term in the aggregate continuity score.
pub const DRIFT_WEIGHT: f64 = 0.6;

/// Weight of the conflict term in the aggregate continuity score.
pub const CONFLICT_WEIGHT: f64 = 0.4;

/// Sum of severity weights at which the conflict penalty saturates.
pub const CONFLICT_PENALTY_SCALE: f64 = 10.0;

/// Drift score above which the audit prompts for a correction.
pub const DRIFT_AUDIT_THRESHOLD: f64 = 0.5;

/// Category assigned to attributes missing from the configured map.
pub const DEFAULT_CATEGORY: &str = "general";
