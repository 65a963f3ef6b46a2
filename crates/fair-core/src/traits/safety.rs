use serde::{Deserialize, Serialize};

use crate::models::Domain;

/// Outcome of a safety review of generated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SafetyReview {
    /// Reviewed text, possibly annotated with warnings.
    pub annotated_text: String,
    /// Safety score in [0, 1].
    pub safety_score: f64,
}

/// Reviews and annotates generated answers.
pub trait ISafetyReviewer: Send + Sync {
    fn review(&self, text: &str, domain: Domain) -> SafetyReview;
}

/// Reviewer that returns the text untouched with a fixed score.
#[derive(Debug, Clone, Copy)]
pub struct PassthroughSafetyReviewer {
    pub score: f64,
}

impl Default for PassthroughSafetyReviewer {
    fn default() -> Self {
        Self { score: 1.0 }
    }
}

impl ISafetyReviewer for PassthroughSafetyReviewer {
    fn review(&self, text: &str, _domain: Domain) -> SafetyReview {
        SafetyReview {
            annotated_text: text.to_string(),
            safety_score: self.score.clamp(0.0, 1.0),
        }
    }
}
