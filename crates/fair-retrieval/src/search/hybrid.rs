//! Alpha blend of the normalized semantic and keyword scores.

use fair_core::config::RetrievalConfig;
use fair_core::models::{Query, RetrievalCandidate};
use tracing::debug;

use super::keyword::{bm25_scores, query_terms};
use super::normalize::normalize_by_max;
use super::semantic::semantic_raw;
use crate::snapshot::KeywordDoc;

/// `alpha * semantic + (1 - alpha) * keyword`.
pub fn combine(semantic_norm: f64, keyword_norm: f64, alpha: f64) -> f64 {
    alpha * semantic_norm + (1.0 - alpha) * keyword_norm
}

#[derive(Debug, Clone)]
pub struct HybridRanker {
    config: RetrievalConfig,
}

impl HybridRanker {
    pub fn new(config: RetrievalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Fill the semantic, keyword, and combined scores of every candidate.
    ///
    /// `docs[i]` is the keyword document of `candidates[i]`.
    pub fn score(
        &self,
        query: &Query,
        query_vector: &[f32],
        candidates: &mut [RetrievalCandidate],
        docs: &[&KeywordDoc],
    ) {
        debug_assert_eq!(candidates.len(), docs.len());

        let semantic: Vec<f64> = candidates
            .iter()
            .map(|c| {
                semantic_raw(
                    query_vector,
                    &c.embedding,
                    c.source.is_curated(),
                    self.config.curated_boost,
                )
            })
            .collect();
        let terms = query_terms(&query.expanded_text);
        let keyword = bm25_scores(&terms, docs, self.config.bm25_k1, self.config.bm25_b);

        let semantic_norm = normalize_by_max(&semantic);
        let keyword_norm = normalize_by_max(&keyword);
        let alpha = self.config.semantic_weight;

        for (i, candidate) in candidates.iter_mut().enumerate() {
            candidate.semantic_raw = semantic[i];
            candidate.semantic_score = semantic_norm[i];
            candidate.keyword_raw = keyword.get(i).copied().unwrap_or(0.0);
            candidate.keyword_score = keyword_norm.get(i).copied().unwrap_or(0.0);
            candidate.combined_score =
                combine(candidate.semantic_score, candidate.keyword_score, alpha);
            debug!(
                id = candidate.id(),
                semantic = candidate.semantic_score,
                keyword = candidate.keyword_score,
                combined = candidate.combined_score,
                "candidate scored"
            );
        }
    }
}

impl Default for HybridRanker {
    fn default() -> Self {
        Self::new(RetrievalConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use fair_core::models::{Domain, EvidenceSource, Origin, SourceType};

    fn candidate(id: &str, content: &str, origin: Origin, v: Vec<f32>) -> RetrievalCandidate {
        let source = EvidenceSource {
            id: id.to_string(),
            domain: Domain::Finance,
            title: id.to_string(),
            content: content.to_string(),
            source_type: SourceType::General,
            base_reliability: 0.8,
            publication_date: None,
            keywords: vec![],
            url: None,
            origin,
        };
        RetrievalCandidate::new(Arc::new(source), Arc::new(v))
    }

    #[test]
    fn combine_is_weighted_sum() {
        assert!((combine(1.0, 0.0, 0.7) - 0.7).abs() < 1e-12);
        assert!((combine(0.5, 1.0, 0.7) - 0.65).abs() < 1e-12);
    }

    #[test]
    fn scores_fill_and_blend() {
        let mut pool = vec![
            candidate("a", "compound interest explained", Origin::Curated, vec![1.0, 0.0]),
            candidate("b", "household budget", Origin::Fetched, vec![0.0, 1.0]),
        ];
        let docs: Vec<KeywordDoc> = pool
            .iter()
            .map(|c| KeywordDoc::from_text(&c.source.keyword_text()))
            .collect();
        let doc_refs: Vec<&KeywordDoc> = docs.iter().collect();
        let query = Query::new("compound interest", Domain::Finance);

        let ranker = HybridRanker::default();
        ranker.score(&query, &[1.0, 0.0], &mut pool, &doc_refs);

        assert!((pool[0].semantic_raw - 1.2).abs() < 1e-6);
        assert_eq!(pool[0].semantic_score, 1.0);
        assert_eq!(pool[0].keyword_score, 1.0);
        assert!((pool[0].combined_score - 1.0).abs() < 1e-12);
        assert_eq!(pool[1].combined_score, 0.0);
    }
}
