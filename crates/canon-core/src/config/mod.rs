//! Configuration for the continuity engine.
//! TOML-based, compiled defaults, validated before any evidence is processed.

pub mod defaults;
pub mod engine_config;

pub use engine_config::{
    DetectionConfig, EngineConfig, MergeConfig, ScoringConfig, SegmentationConfig,
};
