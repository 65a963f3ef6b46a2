//! Top-level FAIR configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CalibrationConfig, DiversityConfig, EmbeddingConfig, ExpansionConfig, GenerationConfig,
    QualityConfig, RetrievalConfig, ThresholdConfig,
};
use crate::errors::ConfigError;

/// Embedding providers the workspace knows how to build.
pub const KNOWN_PROVIDERS: &[&str] = &["tfidf", "ollama"];

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FAIR_*`)
/// 2. TOML file, when given
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FairConfig {
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub expansion: ExpansionConfig,
    pub quality: QualityConfig,
    pub threshold: ThresholdConfig,
    pub diversity: DiversityConfig,
    pub calibration: CalibrationConfig,
    pub generation: GenerationConfig,
}

impl FairConfig {
    /// Load configuration: defaults, then `path` if given, then `FAIR_*` env vars.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply overrides from the process environment.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup.
    /// Values that fail to parse are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("FAIR_EMBEDDING_PROVIDER") {
            self.embedding.provider = v;
        }
        if let Some(v) = lookup("FAIR_EMBEDDING_MODEL") {
            self.embedding.model = v;
        }
        if let Some(v) = lookup("FAIR_CACHE_PATH") {
            self.embedding.cache_path = Some(v);
        }
        if let Some(v) = lookup("FAIR_SEMANTIC_WEIGHT").and_then(|v| v.parse().ok()) {
            self.retrieval.semantic_weight = v;
        }
        if let Some(v) = lookup("FAIR_CURATED_BOOST").and_then(|v| v.parse().ok()) {
            self.retrieval.curated_boost = v;
        }
        if let Some(v) = lookup("FAIR_MAX_SOURCES").and_then(|v| v.parse().ok()) {
            self.diversity.max_sources = v;
        }
        if let Some(v) = lookup("FAIR_MMR_LAMBDA").and_then(|v| v.parse().ok()) {
            self.diversity.lambda = v;
        }
        if let Some(v) = lookup("FAIR_GENERATION_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.generation.timeout_ms = v;
        }
        if let Some(v) = lookup("FAIR_GENERATION_MODEL") {
            self.generation.model = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !KNOWN_PROVIDERS.contains(&self.embedding.provider.as_str()) {
            return Err(invalid(
                "embedding.provider",
                format!("must be one of {}", KNOWN_PROVIDERS.join(", ")),
            ));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }
        for (field, value) in self.float_fields() {
            if !value.is_finite() {
                return Err(invalid(field, "must be a finite number"));
            }
        }
        unit_interval("retrieval.semantic_weight", self.retrieval.semantic_weight)?;
        if self.retrieval.curated_boost <= 0.0 {
            return Err(invalid("retrieval.curated_boost", "must be greater than 0"));
        }
        if self.retrieval.bm25_k1 < 0.0 {
            return Err(invalid("retrieval.bm25_k1", "must not be negative"));
        }
        unit_interval("retrieval.bm25_b", self.retrieval.bm25_b)?;

        for (name, weight) in self.quality.source_type_weights.all() {
            if !weight.is_finite() || weight <= 0.0 {
                return Err(invalid(
                    &format!("quality.source_type_weights.{name}"),
                    "must be greater than 0",
                ));
            }
        }
        unit_interval("quality.recency_floor", self.quality.recency_floor)?;
        if self.quality.density_min > self.quality.density_max {
            return Err(invalid("quality.density_min", "must not exceed density_max"));
        }
        if self.quality.cap_factor <= 0.0 {
            return Err(invalid("quality.cap_factor", "must be greater than 0"));
        }
        if self.quality.density_saturation == 0 {
            return Err(invalid("quality.density_saturation", "must be greater than 0"));
        }

        let t = &self.threshold;
        unit_interval("threshold.min", t.min)?;
        unit_interval("threshold.max", t.max)?;
        if t.min > t.max {
            return Err(invalid("threshold.min", "must not exceed threshold.max"));
        }
        if t.relaxation_step <= 0.0 {
            return Err(invalid("threshold.relaxation_step", "must be greater than 0"));
        }
        if t.relaxation_floor < 0.0 || t.relaxation_floor > t.min {
            return Err(invalid("threshold.relaxation_floor", "must lie in [0, threshold.min]"));
        }

        unit_interval("diversity.lambda", self.diversity.lambda)?;
        if self.diversity.max_sources == 0 {
            return Err(invalid("diversity.max_sources", "must be greater than 0"));
        }

        let c = &self.calibration;
        if c.base_min > c.base_max {
            return Err(invalid("calibration.base_min", "must not exceed base_max"));
        }
        if c.floor >= c.ceiling {
            return Err(invalid("calibration.floor", "must be below calibration.ceiling"));
        }
        unit_interval("calibration.floor", c.floor)?;
        unit_interval("calibration.ceiling", c.ceiling)?;
        if c.validation_min > c.validation_max {
            return Err(invalid("calibration.validation_min", "must not exceed validation_max"));
        }
        if c.evidence_target == 0 || c.reasoning_target == 0 {
            return Err(invalid("calibration.evidence_target", "targets must be greater than 0"));
        }
        for (field, value) in [
            ("calibration.evidence_weight", c.evidence_weight),
            ("calibration.evidence_cap", c.evidence_cap),
            ("calibration.fetched_bonus_per_source", c.fetched_bonus_per_source),
            ("calibration.fetched_bonus_cap", c.fetched_bonus_cap),
            ("calibration.reasoning_weight", c.reasoning_weight),
            ("calibration.reasoning_cap", c.reasoning_cap),
            ("calibration.safety_weight", c.safety_weight),
            ("calibration.safety_cap", c.safety_cap),
            ("calibration.quality_reference_boost", c.quality_reference_boost),
        ] {
            if value < 0.0 {
                return Err(invalid(field, "must not be negative"));
            }
        }

        if self.generation.timeout_ms == 0 {
            return Err(invalid("generation.timeout_ms", "must be greater than 0"));
        }
        Ok(())
    }

    /// Every float setting by dotted name. All of them must be finite.
    fn float_fields(&self) -> Vec<(&'static str, f64)> {
        let r = &self.retrieval;
        let q = &self.quality;
        let t = &self.threshold;
        let c = &self.calibration;
        vec![
            ("retrieval.semantic_weight", r.semantic_weight),
            ("retrieval.curated_boost", r.curated_boost),
            ("retrieval.bm25_k1", r.bm25_k1),
            ("retrieval.bm25_b", r.bm25_b),
            ("quality.recency_decay_per_year", q.recency_decay_per_year),
            ("quality.recency_floor", q.recency_floor),
            ("quality.undated_recency", q.undated_recency),
            ("quality.density_min", q.density_min),
            ("quality.density_max", q.density_max),
            ("quality.cap_factor", q.cap_factor),
            ("threshold.base.finance", t.base.finance),
            ("threshold.base.medical", t.base.medical),
            ("threshold.base.cross_domain", t.base.cross_domain),
            ("threshold.base.unknown", t.base.unknown),
            ("threshold.length_adjustment", t.length_adjustment),
            ("threshold.technical_density_level", t.technical_density_level),
            ("threshold.technical_adjustment", t.technical_adjustment),
            ("threshold.min", t.min),
            ("threshold.max", t.max),
            ("threshold.relaxation_step", t.relaxation_step),
            ("threshold.relaxation_floor", t.relaxation_floor),
            ("diversity.lambda", self.diversity.lambda),
            ("calibration.base_min", c.base_min),
            ("calibration.base_max", c.base_max),
            ("calibration.base_start", c.base_start),
            ("calibration.evidence_weight", c.evidence_weight),
            ("calibration.evidence_cap", c.evidence_cap),
            ("calibration.fetched_bonus_per_source", c.fetched_bonus_per_source),
            ("calibration.fetched_bonus_cap", c.fetched_bonus_cap),
            ("calibration.reasoning_weight", c.reasoning_weight),
            ("calibration.reasoning_cap", c.reasoning_cap),
            ("calibration.safety_weight", c.safety_weight),
            ("calibration.safety_cap", c.safety_cap),
            ("calibration.validation_min", c.validation_min),
            ("calibration.validation_max", c.validation_max),
            ("calibration.floor", c.floor),
            ("calibration.ceiling", c.ceiling),
            ("calibration.quality_reference_boost", c.quality_reference_boost),
            ("generation.temperature", self.generation.temperature),
        ]
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: impl Into<String>) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.into(),
    }
}

fn unit_interval(field: &str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid(field, "must be between 0.0 and 1.0"))
    }
}
