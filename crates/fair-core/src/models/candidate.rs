use std::sync::Arc;

use serde::Serialize;

use super::EvidenceSource;

/// A source scored against one query.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalCandidate {
    pub source: Arc<EvidenceSource>,
    #[serde(skip)]
    pub embedding: Arc<Vec<f32>>,
    /// Cosine similarity after the curated boost, before normalization.
    pub semantic_raw: f64,
    /// Normalized semantic score in [0, 1].
    pub semantic_score: f64,
    /// BM25 score before normalization.
    pub keyword_raw: f64,
    /// Normalized keyword score in [0, 1].
    pub keyword_score: f64,
    pub quality_score: f64,
    /// `alpha * semantic_score + (1 - alpha) * keyword_score`.
    pub combined_score: f64,
}

impl RetrievalCandidate {
    pub fn new(source: Arc<EvidenceSource>, embedding: Arc<Vec<f32>>) -> Self {
        Self {
            source,
            embedding,
            semantic_raw: 0.0,
            semantic_score: 0.0,
            keyword_raw: 0.0,
            keyword_score: 0.0,
            quality_score: 0.0,
            combined_score: 0.0,
        }
    }

    pub fn id(&self) -> &str {
        &self.source.id
    }

    /// Relevance used by diversity selection.
    pub fn relevance(&self) -> f64 {
        self.combined_score * self.quality_score
    }
}
