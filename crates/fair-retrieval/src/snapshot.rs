//! Versioned, immutable corpus snapshots.
//!
//! A snapshot bundles the store, the embedding index built for it, and the
//! pre-tokenized keyword documents. Queries hold an `Arc` to the snapshot
//! they started on; a rebuild swaps a whole new generation in.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use fair_core::text::content_terms;
use fair_embeddings::{EmbeddingEngine, EmbeddingIndex, ExcludedSource};
use tracing::{info, warn};

use crate::store::EvidenceStore;

/// Term frequencies for one source, as seen by the keyword scorer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeywordDoc {
    pub term_freqs: HashMap<String, u32>,
    pub length: usize,
}

impl KeywordDoc {
    pub fn from_text(text: &str) -> Self {
        let terms = content_terms(text);
        let length = terms.len();
        let mut term_freqs = HashMap::new();
        for term in terms {
            *term_freqs.entry(term).or_insert(0) += 1;
        }
        Self { term_freqs, length }
    }

    pub fn tf(&self, term: &str) -> u32 {
        self.term_freqs.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.term_freqs.contains_key(term)
    }
}

/// One index generation.
#[derive(Debug)]
pub struct IndexSnapshot {
    generation: u64,
    built_at: DateTime<Utc>,
    store: EvidenceStore,
    embeddings: EmbeddingIndex,
    keyword_docs: HashMap<String, KeywordDoc>,
}

impl IndexSnapshot {
    /// Embed every source and assemble the snapshot. Sources that fail to
    /// embed are left out of this generation.
    pub fn build(generation: u64, store: EvidenceStore, engine: &EmbeddingEngine) -> Self {
        let embeddings = EmbeddingIndex::build(engine, store.sources());
        let store = if embeddings.excluded().is_empty() {
            store
        } else {
            let ids: Vec<&str> = embeddings.excluded().iter().map(|e| e.id.as_str()).collect();
            warn!(
                generation,
                excluded = ids.len(),
                "sources excluded from index generation"
            );
            store.without(&ids)
        };
        Self::assemble(generation, store, embeddings)
    }

    /// Assemble from a precomputed index. Sources missing from the index
    /// are dropped.
    pub fn from_parts(generation: u64, store: EvidenceStore, embeddings: EmbeddingIndex) -> Self {
        let missing: Vec<&str> = store
            .sources()
            .iter()
            .filter(|s| !embeddings.contains(&s.id))
            .map(|s| s.id.as_str())
            .collect();
        let store = if missing.is_empty() {
            store
        } else {
            store.without(&missing)
        };
        Self::assemble(generation, store, embeddings)
    }

    /// Generation zero: nothing loaded yet.
    pub fn empty(engine: &EmbeddingEngine) -> Self {
        Self::assemble(
            0,
            EvidenceStore::default(),
            EmbeddingIndex::empty(engine.model_version(), engine.dimensions()),
        )
    }

    fn assemble(generation: u64, store: EvidenceStore, embeddings: EmbeddingIndex) -> Self {
        let keyword_docs = store
            .sources()
            .iter()
            .map(|s| (s.id.clone(), KeywordDoc::from_text(&s.keyword_text())))
            .collect();
        info!(
            generation,
            sources = store.len(),
            model_version = embeddings.model_version(),
            "index snapshot built"
        );
        Self {
            generation,
            built_at: Utc::now(),
            store,
            embeddings,
            keyword_docs,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn store(&self) -> &EvidenceStore {
        &self.store
    }

    pub fn embeddings(&self) -> &EmbeddingIndex {
        &self.embeddings
    }

    pub fn excluded(&self) -> &[ExcludedSource] {
        self.embeddings.excluded()
    }

    pub fn keyword_doc(&self, id: &str) -> Option<&KeywordDoc> {
        self.keyword_docs.get(id)
    }

    pub fn model_version(&self) -> &str {
        self.embeddings.model_version()
    }
}

/// Holder of the current snapshot.
#[derive(Debug)]
pub struct SnapshotHandle {
    current: RwLock<Arc<IndexSnapshot>>,
    last_generation: AtomicU64,
}

impl SnapshotHandle {
    pub fn new(initial: IndexSnapshot) -> Self {
        let generation = initial.generation();
        Self {
            current: RwLock::new(Arc::new(initial)),
            last_generation: AtomicU64::new(generation),
        }
    }

    /// The snapshot in effect now. The lock is held only for the clone.
    pub fn current(&self) -> Arc<IndexSnapshot> {
        Arc::clone(&self.current.read().unwrap_or_else(PoisonError::into_inner))
    }

    /// Reserve the generation number for the next rebuild.
    pub fn next_generation(&self) -> u64 {
        self.last_generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install `snapshot` and return the one it replaced.
    pub fn swap(&self, snapshot: IndexSnapshot) -> Arc<IndexSnapshot> {
        let new = Arc::new(snapshot);
        let generation = new.generation();
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let old = std::mem::replace(&mut *guard, new);
        drop(guard);
        self.last_generation.fetch_max(generation, Ordering::SeqCst);
        info!(
            event = "snapshot_swapped",
            old_generation = old.generation(),
            new_generation = generation,
            "snapshot swapped"
        );
        old
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fair_core::config::EmbeddingConfig;
    use fair_core::models::{Domain, EvidenceSource, Origin, SourceType};

    fn source(id: &str, content: &str) -> EvidenceSource {
        EvidenceSource {
            id: id.to_string(),
            domain: Domain::Finance,
            title: id.to_string(),
            content: content.to_string(),
            source_type: SourceType::General,
            base_reliability: 0.8,
            publication_date: None,
            keywords: vec!["savings".to_string()],
            url: None,
            origin: Origin::Curated,
        }
    }

    #[test]
    fn keyword_doc_counts_terms() {
        let doc = KeywordDoc::from_text("Interest on interest is the heart of compounding");
        assert_eq!(doc.tf("interest"), 2);
        assert!(doc.contains("compounding"));
        assert!(!doc.contains("the"));
        assert_eq!(doc.length, 4);
    }

    #[test]
    fn in_flight_snapshot_survives_swap() {
        let engine = EmbeddingEngine::new(&EmbeddingConfig::default());
        let handle = SnapshotHandle::new(IndexSnapshot::empty(&engine));
        let before = handle.current();

        let generation = handle.next_generation();
        let store = EvidenceStore::new(vec![source("a", "budget basics")]);
        let old = handle.swap(IndexSnapshot::build(generation, store, &engine));

        assert_eq!(old.generation(), 0);
        assert_eq!(before.store().len(), 0);
        assert_eq!(handle.current().generation(), 1);
        assert_eq!(handle.current().store().len(), 1);
        assert!(handle.current().keyword_doc("a").is_some());
        assert_eq!(handle.next_generation(), 2);
    }

    #[test]
    fn from_parts_drops_unindexed_sources() {
        let store = EvidenceStore::new(vec![source("a", "one"), source("b", "two")]);
        let index = EmbeddingIndex::from_vectors("tfidf:test:2", 2, vec![("a".to_string(), vec![1.0, 0.0])]);
        let snapshot = IndexSnapshot::from_parts(3, store, index);
        assert_eq!(snapshot.store().len(), 1);
        assert!(snapshot.store().contains("a"));
        assert_eq!(snapshot.generation(), 3);
    }
}
