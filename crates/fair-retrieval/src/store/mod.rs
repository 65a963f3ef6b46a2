//! EvidenceStore: the loaded corpus, indexed by id.

pub mod corpus;

pub use corpus::{load_corpus, parse_corpus, CorpusFormat, CorpusLoadReport, SkippedEntry};

use std::collections::HashMap;
use std::sync::Arc;

use fair_core::models::{Domain, EvidenceSource};
use tracing::warn;

/// Immutable set of evidence sources with unique ids.
#[derive(Debug, Clone, Default)]
pub struct EvidenceStore {
    sources: Vec<Arc<EvidenceSource>>,
    by_id: HashMap<String, usize>,
}

impl EvidenceStore {
    /// Build a store. Later duplicates of an id are dropped.
    pub fn new(sources: impl IntoIterator<Item = EvidenceSource>) -> Self {
        let mut store = Self::default();
        for source in sources {
            if store.by_id.contains_key(&source.id) {
                warn!(id = %source.id, "duplicate source id dropped");
                continue;
            }
            store.by_id.insert(source.id.clone(), store.sources.len());
            store.sources.push(Arc::new(source));
        }
        store
    }

    pub fn get(&self, id: &str) -> Option<&Arc<EvidenceSource>> {
        self.by_id.get(id).map(|&i| &self.sources[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Sources in load order.
    pub fn sources(&self) -> &[Arc<EvidenceSource>] {
        &self.sources
    }

    /// Sources whose domain is in scope for a query targeting `domain`.
    pub fn for_query_domain(&self, domain: Domain) -> impl Iterator<Item = &Arc<EvidenceSource>> {
        self.sources.iter().filter(move |s| domain.covers(s.domain))
    }

    /// Copy of the store without the given ids.
    pub fn without(&self, ids: &[&str]) -> Self {
        Self::new(
            self.sources
                .iter()
                .filter(|s| !ids.contains(&s.id.as_str()))
                .map(|s| s.as_ref().clone()),
        )
    }

    pub fn count_in(&self, domain: Domain) -> usize {
        self.sources.iter().filter(|s| s.domain == domain).count()
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_core::models::{Origin, SourceType};

    fn source(id: &str, domain: Domain) -> EvidenceSource {
        EvidenceSource {
            id: id.to_string(),
            domain,
            title: id.to_string(),
            content: "text".to_string(),
            source_type: SourceType::General,
            base_reliability: 0.7,
            publication_date: None,
            keywords: vec![],
            url: None,
            origin: Origin::Curated,
        }
    }

    #[test]
    fn duplicates_dropped_keeping_first() {
        let mut second = source("a", Domain::Medical);
        second.title = "second".to_string();
        let store = EvidenceStore::new(vec![source("a", Domain::Finance), second]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("a").unwrap().domain, Domain::Finance);
    }

    #[test]
    fn cross_domain_queries_see_both_pools() {
        let store = EvidenceStore::new(vec![
            source("f", Domain::Finance),
            source("m", Domain::Medical),
        ]);
        assert_eq!(store.for_query_domain(Domain::Finance).count(), 1);
        assert_eq!(store.for_query_domain(Domain::CrossDomain).count(), 2);
        assert_eq!(store.count_in(Domain::Medical), 1);
    }

    #[test]
    fn without_removes_ids() {
        let store = EvidenceStore::new(vec![
            source("f", Domain::Finance),
            source("g", Domain::Finance),
        ]);
        let trimmed = store.without(&["f"]);
        assert!(!trimmed.contains("f"));
        assert!(trimmed.contains("g"));
    }
}
