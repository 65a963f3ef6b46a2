use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

/// How answer generation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStatus {
    Completed,
    TimedOut,
    Unavailable,
}

impl GenerationStatus {
    pub fn is_completed(self) -> bool {
        self == Self::Completed
    }
}

impl From<&GenerationError> for GenerationStatus {
    fn from(err: &GenerationError) -> Self {
        match err {
            GenerationError::Timeout { .. } => Self::TimedOut,
            GenerationError::Unavailable { .. } => Self::Unavailable,
        }
    }
}

/// Raw additive components of a confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ConfidenceComponents {
    pub base: f64,
    pub evidence_boost: f64,
    pub reasoning_boost: f64,
    pub safety_boost: f64,
    pub validation_adjustment: f64,
}

impl ConfidenceComponents {
    pub fn sum(&self) -> f64 {
        self.base
            + self.evidence_boost
            + self.reasoning_boost
            + self.safety_boost
            + self.validation_adjustment
    }
}

/// Decomposition of the final confidence. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBreakdown {
    components: ConfidenceComponents,
    confidence: f64,
    generation_status: GenerationStatus,
    evidence_floor_applied: bool,
}

impl ConfidenceBreakdown {
    pub fn new(
        components: ConfidenceComponents,
        confidence: f64,
        generation_status: GenerationStatus,
        evidence_floor_applied: bool,
    ) -> Self {
        Self {
            components,
            confidence,
            generation_status,
            evidence_floor_applied,
        }
    }

    pub fn components(&self) -> &ConfidenceComponents {
        &self.components
    }

    pub fn base(&self) -> f64 {
        self.components.base
    }

    pub fn evidence_boost(&self) -> f64 {
        self.components.evidence_boost
    }

    pub fn reasoning_boost(&self) -> f64 {
        self.components.reasoning_boost
    }

    pub fn safety_boost(&self) -> f64 {
        self.components.safety_boost
    }

    pub fn validation_adjustment(&self) -> f64 {
        self.components.validation_adjustment
    }

    /// Final clamped score.
    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn generation_status(&self) -> GenerationStatus {
        self.generation_status
    }

    /// True when the score was forced to the floor for lack of evidence.
    pub fn evidence_floor_applied(&self) -> bool {
        self.evidence_floor_applied
    }
}
