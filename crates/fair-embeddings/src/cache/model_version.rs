//! Embedding model change detection for the persistent cache.

use tracing::info;

/// Result of comparing the stored model version with the configured one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetectionResult {
    /// No stored version: new cache.
    FirstRun,
    NoChange,
    /// Stored rows were produced by another model and must be discarded.
    Invalidated { old: String, new: String },
}

pub fn detect_model_change(stored: Option<&str>, current: &str) -> DetectionResult {
    let Some(stored) = stored else {
        return DetectionResult::FirstRun;
    };
    if stored == current {
        DetectionResult::NoChange
    } else {
        info!(old = stored, new = current, "embedding model changed, cache invalidated");
        DetectionResult::Invalidated {
            old: stored.to_string(),
            new: current.to_string(),
        }
    }
}
