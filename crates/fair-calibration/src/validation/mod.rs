//! AnswerValidator: four checks over a generated answer.
//!
//! Each check yields a score in [0, 1] plus warnings. Low scores translate
//! into negative confidence adjustments; a uniformly strong answer earns a
//! small bonus. Domain safety checks may also request disclaimers, which
//! `apply_corrections` appends to the answer.

pub mod citation;
pub mod completeness;
pub mod numerical;
pub mod safety;

use fair_core::config::CalibrationConfig;
use fair_core::models::Domain;
use serde::Serialize;
use tracing::debug;

pub use safety::Correction;

/// Score and findings of one check.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckOutcome {
    pub score: f64,
    pub warnings: Vec<String>,
    pub corrections: Vec<Correction>,
}

impl CheckOutcome {
    pub fn pass(score: f64) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }

    pub fn warn(score: f64, warning: impl Into<String>) -> Self {
        Self {
            score,
            warnings: vec![warning.into()],
            corrections: Vec::new(),
        }
    }
}

/// Per-check scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CheckScores {
    pub citation: f64,
    pub numerical: f64,
    pub safety: f64,
    pub completeness: f64,
}

impl CheckScores {
    pub fn mean(&self) -> f64 {
        (self.citation + self.numerical + self.safety + self.completeness) / 4.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    pub is_valid: bool,
    /// Already clamped to the configured validation bounds.
    pub confidence_adjustment: f64,
    pub warnings: Vec<String>,
    pub corrections: Vec<Correction>,
    /// Mean of the check scores.
    pub quality_score: f64,
    pub scores: CheckScores,
}

#[derive(Debug, Clone)]
pub struct AnswerValidator {
    adjustment_min: f64,
    adjustment_max: f64,
}

impl Default for AnswerValidator {
    fn default() -> Self {
        Self::from_config(&CalibrationConfig::default())
    }
}

impl AnswerValidator {
    pub fn from_config(config: &CalibrationConfig) -> Self {
        Self {
            adjustment_min: config.validation_min,
            adjustment_max: config.validation_max,
        }
    }

    /// Run all four checks. `evidence_count` is the number of sources the
    /// answer was given to cite.
    pub fn validate(
        &self,
        answer: &str,
        question: &str,
        domain: Domain,
        evidence_count: usize,
    ) -> ValidationReport {
        let citation = citation::check(answer, evidence_count);
        let numerical = numerical::check(answer);
        let safety = safety::check(answer, domain);
        let completeness = completeness::check(answer, question);

        let mut adjustment: f64 = 0.0;
        if !citation.warnings.is_empty() && citation.score < 0.5 {
            adjustment -= 0.10;
        }
        if !numerical.warnings.is_empty() && numerical.score < 0.6 {
            adjustment -= 0.15;
        }
        if safety.score < 0.7 {
            adjustment -= 0.20;
        }
        if !completeness.warnings.is_empty() && completeness.score < 0.5 {
            adjustment -= 0.08;
        }

        let scores = CheckScores {
            citation: citation.score,
            numerical: numerical.score,
            safety: safety.score,
            completeness: completeness.score,
        };
        let quality_score = scores.mean();
        if quality_score > 0.85 {
            adjustment += 0.05;
        }

        let is_valid = scores.citation >= 0.4
            && scores.numerical >= 0.5
            && scores.safety >= 0.6
            && scores.completeness >= 0.4;

        let mut warnings = Vec::new();
        let mut corrections = Vec::new();
        for outcome in [citation, numerical, safety, completeness] {
            warnings.extend(outcome.warnings);
            corrections.extend(outcome.corrections);
        }

        debug!(
            quality = quality_score,
            citation = scores.citation,
            numerical = scores.numerical,
            safety = scores.safety,
            completeness = scores.completeness,
            "answer validated"
        );

        ValidationReport {
            is_valid,
            confidence_adjustment: adjustment.min(self.adjustment_max).max(self.adjustment_min),
            warnings,
            corrections,
            quality_score,
            scores,
        }
    }

    /// Append every requested disclaimer not already present in `answer`.
    pub fn apply_corrections(&self, answer: &str, report: &ValidationReport) -> String {
        let mut corrected = answer.to_string();
        for correction in &report.corrections {
            if let Correction::AddDisclaimer(text) = correction {
                if !corrected.to_lowercase().contains(&text.to_lowercase()) {
                    corrected.push_str("\n\n**Important:** ");
                    corrected.push_str(text);
                }
            }
        }
        corrected
    }
}
