//! DiversitySelector: Maximal Marginal Relevance over the admitted pool.

pub mod mmr;

use fair_core::config::DiversityConfig;
use fair_core::models::{EvidenceSet, RetrievalCandidate};
use tracing::debug;

pub use mmr::{dedup_by_id, mmr_order};

#[derive(Debug, Clone)]
pub struct DiversitySelector {
    config: DiversityConfig,
}

impl DiversitySelector {
    pub fn new(config: DiversityConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiversityConfig {
        &self.config
    }

    /// Select up to `max_sources` candidates. Selection order is citation order.
    pub fn select(&self, candidates: Vec<RetrievalCandidate>) -> EvidenceSet {
        let pool = dedup_by_id(candidates);
        let order = mmr_order(&pool, self.config.lambda, self.config.max_sources);
        debug!(
            pool = pool.len(),
            selected = order.len(),
            lambda = self.config.lambda,
            "mmr selection"
        );

        let mut slots: Vec<Option<RetrievalCandidate>> = pool.into_iter().map(Some).collect();
        let selected = order
            .into_iter()
            .filter_map(|(i, score)| slots[i].take().map(|c| (c, score)));
        EvidenceSet::from_selection(selected, self.config.max_sources)
    }
}

impl Default for DiversitySelector {
    fn default() -> Self {
        Self::new(DiversityConfig::default())
    }
}
