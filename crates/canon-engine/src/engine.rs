//! ContinuityEngine — central orchestrator over the detection passes.

use tracing::{debug, info};

use canon_core::config::defaults;
use canon_core::models::{ContinuityAudit, ContinuityConflict, ContinuityState, MergeSuggestion};
use canon_core::{CanonResult, EngineConfig};

use crate::conflicts::{self, DetectionContext};
use crate::registry::FactRegistry;
use crate::scoring::{self, ContinuityScore};
use crate::segment::Segmenter;
use crate::{audit, drift, merge, report};

/// The continuity engine.
///
/// Stateless between invocations: every method is a pure function of the
/// registry snapshot passed in. Construction validates the configuration
/// before any evidence is processed.
#[derive(Debug)]
pub struct ContinuityEngine {
    config: EngineConfig,
    segmenter: Segmenter,
}

impl ContinuityEngine {
    pub fn new(config: EngineConfig) -> CanonResult<Self> {
        config.validate()?;
        let segmenter = Segmenter::new(config.segmentation.bucket_days);
        Ok(Self { config, segmenter })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// An empty registry tuned to this engine's confidence band. Callers
    /// replay the persisted trail into it before invoking `analyze`.
    pub fn new_registry(&self) -> FactRegistry {
        FactRegistry::new().with_confidence_band(self.config.detection.confidence_band)
    }

    /// Run the full pipeline over one registry snapshot.
    ///
    /// The drift and conflict detectors read independent views of the trail
    /// and run concurrently; the scorer joins both.
    pub fn analyze(&self, registry: &FactRegistry) -> ContinuityState {
        debug!(
            records = registry.len(),
            slots = registry.slot_count(),
            "analyzing evidence trail"
        );

        let ctx = DetectionContext {
            segmenter: &self.segmenter,
            detection: &self.config.detection,
            confidence_band: registry.confidence_band(),
        };
        let (drift_signals, conflict_list) = rayon::join(
            || drift::detect_drift(registry, &self.segmenter, registry.confidence_band()),
            || conflicts::detect_conflicts(registry, &ctx),
        );

        let ContinuityScore {
            score,
            drift_summary,
        } = scoring::score(
            &drift_signals,
            &conflict_list,
            &self.config.scoring.categories,
        );

        info!(
            score,
            conflicts = conflict_list.len(),
            signals = drift_signals.len(),
            "continuity analysis complete"
        );

        ContinuityState {
            facts: registry.canonical_facts(),
            drift_signals,
            drift_summary,
            score,
            conflicts: conflict_list,
        }
    }

    /// Conflicts-only view, for collaborators that don't need the full
    /// snapshot.
    pub fn conflicts(&self, registry: &FactRegistry) -> Vec<ContinuityConflict> {
        let ctx = DetectionContext {
            segmenter: &self.segmenter,
            detection: &self.config.detection,
            confidence_band: registry.confidence_band(),
        };
        conflicts::detect_conflicts(registry, &ctx)
    }

    /// Advisory alias-candidate suggestions. Never mutates the registry.
    pub fn merge_suggestions(&self, registry: &FactRegistry) -> Vec<MergeSuggestion> {
        merge::suggest_merges(registry, self.config.merge.name_similarity)
    }

    /// Audit rollup for an already-computed snapshot.
    pub fn audit(&self, state: &ContinuityState) -> ContinuityAudit {
        audit::build(state)
    }

    /// Markdown rollup for an already-computed snapshot.
    pub fn render_report(&self, state: &ContinuityState) -> String {
        report::render(state)
    }
}

impl Default for ContinuityEngine {
    fn default() -> Self {
        // The default config always validates.
        Self {
            config: EngineConfig::default(),
            segmenter: Segmenter::new(defaults::DEFAULT_BUCKET_DAYS),
        }
    }
}
