use serde::{Deserialize, Serialize};

use super::defaults;

/// Hybrid ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    /// Weight of the semantic score in the combined score (alpha).
    pub semantic_weight: f64,
    /// Multiplier applied to curated sources' cosine similarity.
    pub curated_boost: f64,
    pub bm25_k1: f64,
    pub bm25_b: f64,
    /// Embed the expanded query text instead of the raw text.
    pub embed_expanded_query: bool,
    /// Maximum number of fetched sources merged into one candidate pool.
    pub max_fetched: usize,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            curated_boost: defaults::DEFAULT_CURATED_BOOST,
            bm25_k1: defaults::DEFAULT_BM25_K1,
            bm25_b: defaults::DEFAULT_BM25_B,
            embed_expanded_query: false,
            max_fetched: defaults::DEFAULT_MAX_FETCHED,
        }
    }
}
