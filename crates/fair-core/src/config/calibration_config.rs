use serde::{Deserialize, Serialize};

use super::defaults;

/// Confidence calibration configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub base_min: f64,
    pub base_max: f64,
    /// Starting point of the text-length base heuristic.
    pub base_start: f64,
    pub evidence_weight: f64,
    /// Evidence count at which the count part of the boost saturates.
    pub evidence_target: usize,
    pub evidence_cap: f64,
    pub fetched_bonus_per_source: f64,
    pub fetched_bonus_cap: f64,
    pub reasoning_weight: f64,
    pub reasoning_target: usize,
    pub reasoning_cap: f64,
    pub safety_weight: f64,
    pub safety_cap: f64,
    pub validation_min: f64,
    pub validation_max: f64,
    pub floor: f64,
    pub ceiling: f64,
    /// Scale safety and reasoning boosts by evidence quality.
    pub quality_scaling: bool,
    /// Evidence boost at which evidence quality counts as full.
    pub quality_reference_boost: f64,
    /// Force the floor when an answer has no evidence at all.
    pub require_evidence: bool,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            base_min: defaults::DEFAULT_BASE_MIN,
            base_max: defaults::DEFAULT_BASE_MAX,
            base_start: defaults::DEFAULT_BASE_START,
            evidence_weight: defaults::DEFAULT_EVIDENCE_WEIGHT,
            evidence_target: defaults::DEFAULT_EVIDENCE_TARGET,
            evidence_cap: defaults::DEFAULT_EVIDENCE_CAP,
            fetched_bonus_per_source: defaults::DEFAULT_FETCHED_BONUS_PER_SOURCE,
            fetched_bonus_cap: defaults::DEFAULT_FETCHED_BONUS_CAP,
            reasoning_weight: defaults::DEFAULT_REASONING_WEIGHT,
            reasoning_target: defaults::DEFAULT_REASONING_TARGET,
            reasoning_cap: defaults::DEFAULT_REASONING_CAP,
            safety_weight: defaults::DEFAULT_SAFETY_WEIGHT,
            safety_cap: defaults::DEFAULT_SAFETY_CAP,
            validation_min: defaults::DEFAULT_VALIDATION_MIN,
            validation_max: defaults::DEFAULT_VALIDATION_MAX,
            floor: defaults::DEFAULT_CONFIDENCE_FLOOR,
            ceiling: defaults::DEFAULT_CONFIDENCE_CEILING,
            quality_scaling: defaults::DEFAULT_QUALITY_SCALING,
            quality_reference_boost: defaults::DEFAULT_QUALITY_REFERENCE_BOOST,
            require_evidence: defaults::DEFAULT_REQUIRE_EVIDENCE,
        }
    }
}
