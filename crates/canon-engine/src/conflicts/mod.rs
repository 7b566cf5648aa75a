//! Conflict detection strategy registry.
//!
//! 3 independently detected conflict classes over each fact slot's
//! history. Conflicts are recomputed from scratch each invocation — there
//! is no persisted "open conflict" state; resolution is modeled as new
//! evidence arriving.

pub mod contradicts_permanent;
pub mod rapid_reversal;
pub mod simultaneous;

use canon_core::config::DetectionConfig;
use canon_core::models::ContinuityConflict;

use crate::registry::FactRegistry;
use crate::segment::Segmenter;

/// Shared inputs for the detection strategies.
pub struct DetectionContext<'a> {
    pub segmenter: &'a Segmenter,
    pub detection: &'a DetectionConfig,
    /// Band used when resolving per-segment winners.
    pub confidence_band: f64,
}

/// Run all strategies over every slot.
///
/// Output is ordered by severity (high first), then description, so a
/// fixed trail always yields an identical conflict list.
pub fn detect_conflicts(
    registry: &FactRegistry,
    ctx: &DetectionContext<'_>,
) -> Vec<ContinuityConflict> {
    let mut conflicts = Vec::new();
    for (_, history) in registry.histories() {
        conflicts.extend(contradicts_permanent::detect(history, ctx.detection));
        conflicts.extend(simultaneous::detect(history, ctx));
        conflicts.extend(rapid_reversal::detect(history, ctx));
    }
    conflicts.sort_by(|a, b| {
        b.severity
            .cmp(&a.severity)
            .then_with(|| a.description.cmp(&b.description))
    });
    conflicts
}
