//! Semantic score: cosine similarity with the curated boost.

use fair_embeddings::cosine_similarity;

/// Raw semantic score of one source, before normalization.
pub fn semantic_raw(query: &[f32], source: &[f32], curated: bool, curated_boost: f64) -> f64 {
    let cosine = cosine_similarity(query, source);
    if curated {
        cosine * curated_boost
    } else {
        cosine
    }
}
