//! ConfidenceCalibrator: additive boosts, individually capped, clamped total.

use fair_core::config::CalibrationConfig;
use fair_core::models::{ConfidenceBreakdown, ConfidenceComponents, GenerationStatus};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Signals gathered for one answer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationInputs {
    pub generation: GenerationStatus,
    /// Base confidence reported for the generated text. Ignored when
    /// generation did not complete.
    pub base_confidence: f64,
    /// Size of the selected evidence set.
    pub evidence_count: usize,
    /// Fetched sources among the selected evidence.
    pub fetched_count: usize,
    pub reasoning_steps: usize,
    /// External safety reviewer score in [0, 1].
    pub safety_score: f64,
    /// Raw adjustment from answer validation, clamped here.
    pub validation_adjustment: f64,
}

impl CalibrationInputs {
    /// Inputs for a query whose generation failed.
    pub fn failed(status: GenerationStatus, evidence_count: usize, fetched_count: usize) -> Self {
        Self {
            generation: status,
            base_confidence: 0.0,
            evidence_count,
            fetched_count,
            reasoning_steps: 0,
            safety_score: 0.0,
            validation_adjustment: 0.0,
        }
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        fallback
    }
}

/// `value` limited to `[0, cap]`. A negative or NaN cap yields 0.
fn capped(value: f64, cap: f64) -> f64 {
    let cap = finite_or(cap, 0.0).max(0.0);
    finite_or(value, 0.0).max(0.0).min(cap)
}

/// `clamp` that tolerates an inverted or NaN range by preferring `lo`.
fn bounded(value: f64, lo: f64, hi: f64) -> f64 {
    value.min(hi).max(lo)
}

fn ratio(count: usize, target: usize) -> f64 {
    if target == 0 {
        1.0
    } else {
        count as f64 / target as f64
    }
}

/// `min(cap, n / target * weight + min(fetched_cap, fetched * per_fetched))`.
pub fn evidence_boost(evidence_count: usize, fetched_count: usize, config: &CalibrationConfig) -> f64 {
    let count_part = ratio(evidence_count, config.evidence_target) * config.evidence_weight;
    let fetched_part =
        (fetched_count as f64 * config.fetched_bonus_per_source).min(config.fetched_bonus_cap);
    capped(count_part + fetched_part, config.evidence_cap)
}

/// `min(cap, steps / target * weight)`, zero unless generation completed.
pub fn reasoning_boost(steps: usize, generation: GenerationStatus, config: &CalibrationConfig) -> f64 {
    if !generation.is_completed() {
        return 0.0;
    }
    capped(
        ratio(steps, config.reasoning_target) * config.reasoning_weight,
        config.reasoning_cap,
    )
}

/// `min(cap, safety_score * weight)`.
pub fn safety_boost(safety_score: f64, config: &CalibrationConfig) -> f64 {
    let score = finite_or(safety_score, 0.0).clamp(0.0, 1.0);
    capped(score * config.safety_weight, config.safety_cap)
}

/// Evidence quality in [0, 1] derived from the evidence boost; 0.5 when
/// there is no evidence boost at all.
pub fn evidence_quality(evidence_boost: f64, reference: f64) -> f64 {
    if evidence_boost <= 0.0 {
        return 0.5;
    }
    if reference <= 0.0 {
        return 1.0;
    }
    (evidence_boost / reference).min(1.0)
}

#[derive(Debug, Clone, Default)]
pub struct ConfidenceCalibrator {
    config: CalibrationConfig,
}

impl ConfidenceCalibrator {
    pub fn new(config: CalibrationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalibrationConfig {
        &self.config
    }

    /// Combine `inputs` into a breakdown. Never fails: every component and
    /// the total are clamped to their declared bounds.
    pub fn calibrate(&self, inputs: &CalibrationInputs) -> ConfidenceBreakdown {
        let cfg = &self.config;

        let base = if inputs.generation.is_completed() {
            bounded(finite_or(inputs.base_confidence, cfg.base_min), cfg.base_min, cfg.base_max)
        } else {
            cfg.base_min
        };
        let evidence = evidence_boost(inputs.evidence_count, inputs.fetched_count, cfg);
        let mut reasoning = reasoning_boost(inputs.reasoning_steps, inputs.generation, cfg);
        let mut safety = safety_boost(inputs.safety_score, cfg);

        if cfg.quality_scaling {
            let q = evidence_quality(evidence, cfg.quality_reference_boost);
            safety *= 0.3 + 0.7 * q;
            reasoning *= 0.4 + 0.6 * q;
        }

        let validation = bounded(
            finite_or(inputs.validation_adjustment, 0.0),
            cfg.validation_min,
            cfg.validation_max,
        );

        let components = ConfidenceComponents {
            base,
            evidence_boost: evidence,
            reasoning_boost: reasoning,
            safety_boost: safety,
            validation_adjustment: validation,
        };

        let no_evidence = inputs.evidence_count == 0 && inputs.fetched_count == 0;
        let evidence_floor_applied = cfg.require_evidence && no_evidence;
        let confidence = if evidence_floor_applied {
            cfg.floor
        } else {
            bounded(finite_or(components.sum(), cfg.floor), cfg.floor, cfg.ceiling)
        };

        info!(
            event = "confidence_calibrated",
            confidence,
            base,
            evidence_boost = evidence,
            reasoning_boost = reasoning,
            safety_boost = safety,
            validation_adjustment = validation,
            generation = ?inputs.generation,
            evidence_floor_applied,
            "confidence calibrated"
        );

        ConfidenceBreakdown::new(
            components,
            confidence,
            inputs.generation,
            evidence_floor_applied,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs() -> CalibrationInputs {
        CalibrationInputs {
            generation: GenerationStatus::Completed,
            base_confidence: 0.4,
            evidence_count: 5,
            fetched_count: 0,
            reasoning_steps: 5,
            safety_score: 1.0,
            validation_adjustment: 0.05,
        }
    }

    #[test]
    fn evidence_boost_formula() {
        let cfg = CalibrationConfig::default();
        assert!((evidence_boost(5, 0, &cfg) - 0.25).abs() < 1e-12);
        assert!((evidence_boost(2, 0, &cfg) - 0.10).abs() < 1e-12);
        assert!((evidence_boost(5, 1, &cfg) - 0.30).abs() < 1e-12);
        assert!((evidence_boost(5, 10, &cfg) - 0.35).abs() < 1e-12);
        assert_eq!(evidence_boost(0, 0, &cfg), 0.0);
    }

    #[test]
    fn broken_caps_never_panic() {
        let cfg = CalibrationConfig {
            evidence_cap: -0.1,
            reasoning_cap: f64::NAN,
            safety_cap: -1.0,
            base_min: 0.6,
            base_max: 0.2,
            ..Default::default()
        };
        assert_eq!(evidence_boost(5, 2, &cfg), 0.0);
        assert_eq!(reasoning_boost(5, GenerationStatus::Completed, &cfg), 0.0);
        assert_eq!(safety_boost(1.0, &cfg), 0.0);

        let b = ConfidenceCalibrator::new(cfg).calibrate(&inputs());
        assert!(b.confidence().is_finite());
    }

    #[test]
    fn reasoning_boost_zero_on_failure() {
        let cfg = CalibrationConfig::default();
        assert!((reasoning_boost(5, GenerationStatus::Completed, &cfg) - 0.15).abs() < 1e-12);
        assert!((reasoning_boost(20, GenerationStatus::Completed, &cfg) - 0.15).abs() < 1e-12);
        assert_eq!(reasoning_boost(5, GenerationStatus::TimedOut, &cfg), 0.0);
        assert_eq!(reasoning_boost(5, GenerationStatus::Unavailable, &cfg), 0.0);
    }

    #[test]
    fn full_signals_sum() {
        let calibrator = ConfidenceCalibrator::default();
        let b = calibrator.calibrate(&inputs());
        // eb 0.25 => q 1.0, no scaling loss.
        let expected = 0.4 + 0.25 + 0.15 + 0.10 + 0.05;
        assert!((b.confidence() - expected).abs() < 1e-12);
        assert!(!b.evidence_floor_applied());
    }

    #[test]
    fn weak_evidence_shrinks_safety_and_reasoning() {
        let calibrator = ConfidenceCalibrator::default();
        let b = calibrator.calibrate(&CalibrationInputs {
            evidence_count: 1,
            ..inputs()
        });
        // eb 0.05 => q = 1/3
        let q = 0.05 / 0.15;
        assert!((b.safety_boost() - 0.10 * (0.3 + 0.7 * q)).abs() < 1e-12);
        assert!((b.reasoning_boost() - 0.15 * (0.4 + 0.6 * q)).abs() < 1e-12);
    }

    #[test]
    fn ceiling_and_validation_clamp() {
        let calibrator = ConfidenceCalibrator::default();
        let b = calibrator.calibrate(&CalibrationInputs {
            base_confidence: 5.0,
            validation_adjustment: 3.0,
            ..inputs()
        });
        assert_eq!(b.validation_adjustment(), 0.1);
        assert_eq!(b.base(), 0.5);
        assert_eq!(b.confidence(), 0.95);
    }

    #[test]
    fn no_evidence_pins_floor() {
        let calibrator = ConfidenceCalibrator::default();
        let b = calibrator.calibrate(&CalibrationInputs {
            evidence_count: 0,
            ..inputs()
        });
        assert_eq!(b.confidence(), 0.10);
        assert!(b.evidence_floor_applied());
    }

    #[test]
    fn evidence_rule_can_be_disabled() {
        let calibrator = ConfidenceCalibrator::new(CalibrationConfig {
            require_evidence: false,
            ..CalibrationConfig::default()
        });
        let b = calibrator.calibrate(&CalibrationInputs {
            evidence_count: 0,
            ..inputs()
        });
        assert!(b.confidence() > 0.10);
    }

    #[test]
    fn nan_inputs_stay_bounded() {
        let calibrator = ConfidenceCalibrator::default();
        let b = calibrator.calibrate(&CalibrationInputs {
            base_confidence: f64::NAN,
            safety_score: f64::INFINITY,
            validation_adjustment: f64::NAN,
            ..inputs()
        });
        assert!((0.10..=0.95).contains(&b.confidence()));
    }
}
