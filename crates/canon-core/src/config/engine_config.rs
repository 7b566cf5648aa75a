//! Engine configuration aggregating all sub-configs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::ConfigError;

/// Time-segmentation configuration for the drift and conflict detectors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Width of a time bucket in days.
    pub bucket_days: u32,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        Self {
            bucket_days: defaults::DEFAULT_BUCKET_DAYS,
        }
    }
}

/// Thresholds used by canonical resolution and conflict detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectionConfig {
    /// Confidence band below the observed maximum within which a more
    /// recent record may still win canonical resolution.
    pub confidence_band: f64,
    /// Similarity below which two contemporaneous values count as
    /// materially different.
    pub material_similarity: f64,
    /// Days within which a contradicted permanent record counts as freshly
    /// asserted.
    pub permanent_freshness_days: i64,
}

impl Default for DetectionConfig {
    fn default() -> Self {
        Self {
            confidence_band: defaults::DEFAULT_CONFIDENCE_BAND,
            material_similarity: defaults::DEFAULT_MATERIAL_SIMILARITY,
            permanent_freshness_days: defaults::DEFAULT_PERMANENT_FRESHNESS_DAYS,
        }
    }
}

/// Scoring configuration: the attribute → category map used to bucket drift
/// signals. Unmapped attributes fall into the default "general" bucket.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoringConfig {
    pub categories: HashMap<String, String>,
}

/// Merge-suggestion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Subject-name token overlap at or above which two subjects become
    /// merge candidates.
    pub name_similarity: f64,
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            name_similarity: defaults::DEFAULT_NAME_SIMILARITY,
        }
    }
}

/// Top-level engine configuration.
///
/// Unknown keys in loaded TOML are silently ignored (forward-compatible).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub segmentation: SegmentationConfig,
    pub detection: DetectionConfig,
    pub scoring: ScoringConfig,
    pub merge: MergeConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.segmentation.bucket_days == 0 {
            return Err(ConfigError::InvalidBucketWidth {
                days: self.segmentation.bucket_days,
            });
        }
        for (field, value) in [
            ("detection.confidence_band", self.detection.confidence_band),
            (
                "detection.material_similarity",
                self.detection.material_similarity,
            ),
            ("merge.name_similarity", self.merge.name_similarity),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { field, value });
            }
        }
        if self.detection.permanent_freshness_days <= 0 {
            return Err(ConfigError::InvalidFreshnessWindow {
                days: self.detection.permanent_freshness_days,
            });
        }
        for (attribute, category) in &self.scoring.categories {
            if category.trim().is_empty() {
                return Err(ConfigError::EmptyCategory {
                    attribute: attribute.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        assert!(EngineConfig::default().validate().is_ok());
    }

    #[test]
    fn from_toml_overrides_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            [segmentation]
            bucket_days = 14

            [scoring.categories]
            employer = "professional"
            "#,
        )
        .unwrap();
        assert_eq!(config.segmentation.bucket_days, 14);
        assert_eq!(
            config.scoring.categories.get("employer").map(String::as_str),
            Some("professional")
        );
        // Untouched sections keep their defaults.
        assert_eq!(config.detection.confidence_band, 0.15);
    }

    #[test]
    fn zero_width_buckets_rejected() {
        let err = EngineConfig::from_toml("[segmentation]\nbucket_days = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBucketWidth { days: 0 }));
    }

    #[test]
    fn out_of_range_threshold_rejected() {
        let mut config = EngineConfig::default();
        config.detection.material_similarity = 1.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_category_rejected() {
        let mut config = EngineConfig::default();
        config
            .scoring
            .categories
            .insert("employer".to_string(), "  ".to_string());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyCategory { .. })
        ));
    }
}
