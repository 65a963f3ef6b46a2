//! RetrievalEngine: expand → embed → hybrid rank → quality → threshold → MMR.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use fair_core::config::FairConfig;
use fair_core::errors::RetrievalError;
use fair_core::models::{EvidenceSet, Query, RetrievalCandidate};
use fair_core::traits::{IEvidenceFetcher, NoopFetcher};
use fair_embeddings::EmbeddingEngine;
use serde::Serialize;
use tracing::{info, warn};

use crate::diversity::DiversitySelector;
use crate::expansion::QueryExpander;
use crate::fetch;
use crate::quality::QualityScorer;
use crate::search::HybridRanker;
use crate::snapshot::{IndexSnapshot, KeywordDoc};
use crate::threshold::{ThresholdOutcome, ThresholdPolicy};

/// Everything retrieval produced for one query.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievalOutcome {
    /// The query with its expansion filled in.
    pub query: Query,
    pub evidence: EvidenceSet,
    pub threshold: ThresholdOutcome,
    /// Candidates ranked, curated and fetched.
    pub pool_size: usize,
    /// Fetched sources merged into the pool.
    pub fetched_count: usize,
    pub snapshot_generation: u64,
}

pub struct RetrievalEngine {
    embeddings: Arc<EmbeddingEngine>,
    expander: QueryExpander,
    ranker: HybridRanker,
    quality: QualityScorer,
    threshold: ThresholdPolicy,
    diversity: DiversitySelector,
    fetcher: Arc<dyn IEvidenceFetcher>,
    max_fetched: usize,
    embed_expanded_query: bool,
    reference_date: Option<NaiveDate>,
}

impl RetrievalEngine {
    pub fn new(config: &FairConfig, embeddings: Arc<EmbeddingEngine>) -> Self {
        Self {
            embeddings,
            expander: QueryExpander::new(config.expansion.clone()),
            ranker: HybridRanker::new(config.retrieval.clone()),
            quality: QualityScorer::new(config.quality.clone(), config.expansion.clone()),
            threshold: ThresholdPolicy::new(config.threshold.clone(), config.expansion.clone()),
            diversity: DiversitySelector::new(config.diversity.clone()),
            fetcher: Arc::new(NoopFetcher),
            max_fetched: config.retrieval.max_fetched,
            embed_expanded_query: config.retrieval.embed_expanded_query,
            reference_date: None,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Arc<dyn IEvidenceFetcher>) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Score recency as of a fixed date instead of today.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    pub fn embeddings(&self) -> &Arc<EmbeddingEngine> {
        &self.embeddings
    }

    pub fn threshold_policy(&self) -> &ThresholdPolicy {
        &self.threshold
    }

    /// Run retrieval for `query` against `snapshot`.
    ///
    /// An empty evidence set is a normal outcome.
    pub fn retrieve(
        &self,
        snapshot: &IndexSnapshot,
        query: Query,
    ) -> Result<RetrievalOutcome, RetrievalError> {
        if query.text.trim().is_empty() {
            return Err(RetrievalError::EmptyQuery);
        }
        if snapshot.model_version() != self.embeddings.model_version() {
            return Err(RetrievalError::ModelVersionMismatch {
                snapshot: snapshot.model_version().to_string(),
                engine: self.embeddings.model_version().to_string(),
            });
        }

        let query = self.expander.expand(query);
        let embed_input = if self.embed_expanded_query {
            &query.expanded_text
        } else {
            &query.text
        };
        let query_vector = self.embeddings.embed_query(embed_input).map_err(|e| {
            RetrievalError::QueryEmbeddingFailed {
                reason: e.to_string(),
            }
        })?;

        let mut candidates: Vec<RetrievalCandidate> = Vec::new();
        let mut docs: Vec<&KeywordDoc> = Vec::new();
        for source in snapshot.store().for_query_domain(query.domain) {
            let (Some(embedding), Some(doc)) = (
                snapshot.embeddings().get(&source.id),
                snapshot.keyword_doc(&source.id),
            ) else {
                warn!(id = %source.id, "source missing from snapshot index, skipped");
                continue;
            };
            candidates.push(RetrievalCandidate::new(Arc::clone(source), Arc::clone(embedding)));
            docs.push(doc);
        }

        let fetched = fetch::gather(
            self.fetcher.as_ref(),
            &query,
            self.max_fetched,
            snapshot.store(),
            &self.embeddings,
        );
        let fetched_docs: Vec<KeywordDoc> = fetched
            .iter()
            .map(|f| KeywordDoc::from_text(&f.source.keyword_text()))
            .collect();
        for (item, doc) in fetched.iter().zip(&fetched_docs) {
            candidates.push(RetrievalCandidate::new(
                Arc::clone(&item.source),
                Arc::clone(&item.embedding),
            ));
            docs.push(doc);
        }
        let pool_size = candidates.len();

        self.ranker.score(&query, &query_vector, &mut candidates, &docs);
        let today = self.reference_date.unwrap_or_else(|| Utc::now().date_naive());
        for candidate in &mut candidates {
            candidate.quality_score = self.quality.score_at(&candidate.source, today);
        }

        let (admitted, threshold) = self.threshold.filter(&query, candidates);
        let evidence = self.diversity.select(admitted);

        info!(
            domain = %query.domain,
            generation = snapshot.generation(),
            pool = pool_size,
            fetched = fetched.len(),
            admitted = threshold.admitted,
            threshold = threshold.effective_threshold,
            selected = evidence.len(),
            "retrieval complete"
        );

        Ok(RetrievalOutcome {
            query,
            evidence,
            threshold,
            pool_size,
            fetched_count: fetched.len(),
            snapshot_generation: snapshot.generation(),
        })
    }
}
