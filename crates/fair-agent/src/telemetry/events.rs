//! Structured log events for key pipeline operations.

use fair_core::errors::GenerationError;
use fair_core::models::{DegradationEvent, Domain, GenerationStatus};

pub fn corpus_loaded(path: &str, loaded: usize, skipped: usize) {
    tracing::info!(
        event = "corpus_loaded",
        path = %path,
        loaded,
        skipped,
        "corpus loaded"
    );
}

pub fn index_rebuilt(generation: u64, indexed: usize, excluded: usize) {
    tracing::info!(
        event = "index_rebuilt",
        generation,
        indexed,
        excluded,
        "index rebuilt"
    );
}

pub fn generation_degraded(error: &GenerationError, evidence: usize) {
    tracing::warn!(
        event = "generation_degraded",
        status = ?GenerationStatus::from(error),
        error = %error,
        evidence,
        "generation degraded, returning evidence only"
    );
}

pub fn embedding_degraded(event: &DegradationEvent) {
    tracing::warn!(
        event = "embedding_degraded",
        component = %event.component,
        failure = %event.failure,
        fallback = %event.fallback_used,
        "embedding provider fell back"
    );
}

pub fn answer_completed(domain: Domain, evidence: usize, confidence: f64, valid: Option<bool>) {
    tracing::info!(
        event = "answer_completed",
        domain = %domain,
        evidence,
        confidence,
        valid = ?valid,
        "answer completed"
    );
}
