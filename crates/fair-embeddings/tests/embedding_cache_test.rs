//! Cache and index behaviour under restarts, model changes, corruption,
//! and concurrent access.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use fair_core::config::EmbeddingConfig;
use fair_core::errors::EmbeddingError;
use fair_core::models::{Domain, EvidenceSource, Origin, SourceType};
use fair_core::traits::IEmbeddingProvider;
use fair_embeddings::cache::{DetectionResult, L2SqliteCache};
use fair_embeddings::{EmbeddingEngine, EmbeddingIndex, TfIdfFallback};

fn config_with_cache(path: &std::path::Path, dims: usize) -> EmbeddingConfig {
    EmbeddingConfig {
        provider: "tfidf".to_string(),
        dimensions: dims,
        l1_cache_size: 100,
        cache_path: Some(path.display().to_string()),
        ..Default::default()
    }
}

/// Counts calls and fails on any text containing "FAIL".
struct CountingProvider {
    calls: Arc<AtomicUsize>,
    dims: usize,
}

impl IEmbeddingProvider for CountingProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        std::thread::sleep(std::time::Duration::from_millis(5));
        if text.contains("FAIL") {
            return Err(EmbeddingError::InferenceFailed {
                reason: "refused".to_string(),
            });
        }
        Ok(vec![text.len() as f32; self.dims])
    }
    fn dimensions(&self) -> usize {
        self.dims
    }
    fn name(&self) -> &str {
        "tfidf"
    }
    fn model(&self) -> &str {
        "counting"
    }
    fn is_available(&self) -> bool {
        true
    }
}

fn source(id: &str, content: &str) -> Arc<EvidenceSource> {
    Arc::new(EvidenceSource {
        id: id.to_string(),
        domain: Domain::Finance,
        title: id.to_string(),
        content: content.to_string(),
        source_type: SourceType::General,
        base_reliability: 0.8,
        publication_date: None,
        keywords: vec![],
        url: None,
        origin: Origin::Curated,
    })
}

#[test]
fn persistent_cache_survives_restart() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("embeddings.db");
    let config = config_with_cache(&path, 32);

    let first = EmbeddingEngine::new(&config);
    let v1 = first.embed_text("dollar cost averaging").unwrap();
    drop(first);

    let second = EmbeddingEngine::new(&config);
    let v2 = second.embed_text("dollar cost averaging").unwrap();
    assert_eq!(v1, v2);
    let stats = second.cache_stats();
    assert_eq!(stats.l2_hits, 1);
    assert_eq!(stats.computations, 0);
}

#[test]
fn model_version_change_wipes_whole_cache() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("embeddings.db");

    let small = EmbeddingEngine::new(&config_with_cache(&path, 16));
    small.embed_text("a").unwrap();
    small.embed_text("b").unwrap();
    drop(small);

    let l2 = L2SqliteCache::open(&path, "tfidf:hashed-tfidf-v1:32").unwrap();
    assert!(matches!(l2.detection(), DetectionResult::Invalidated { .. }));
    assert!(l2.is_empty());
    assert_eq!(
        l2.stored_model_version().as_deref(),
        Some("tfidf:hashed-tfidf-v1:32")
    );
}

#[test]
fn garbage_cache_file_falls_back_to_recompute() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("embeddings.db");
    std::fs::write(&path, b"this is not a sqlite database, just junk bytes....").unwrap();

    let engine = EmbeddingEngine::new(&config_with_cache(&path, 16));
    let v = engine.embed_text("bond ladder").unwrap();
    assert_eq!(v.len(), 16);
    assert!(!engine.cache().l2().map(|c| c.is_persistent()).unwrap_or(true));
    assert_eq!(engine.cache_stats().computations, 1);
}

#[test]
fn corrupt_row_is_a_miss_and_gets_rewritten() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("embeddings.db");
    let config = config_with_cache(&path, 8);

    let engine = EmbeddingEngine::new(&config);
    let good = engine.embed_text("annuity").unwrap();
    drop(engine);

    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute("UPDATE embeddings SET vector = x'00000000FF'", [])
            .unwrap();
    }

    let reopened = EmbeddingEngine::new(&config);
    let v = reopened.embed_text("annuity").unwrap();
    assert_eq!(v, good);
    assert_eq!(reopened.cache_stats().computations, 1);
}

#[test]
fn concurrent_misses_compute_once() {
    let calls = Arc::new(AtomicUsize::new(0));
    let provider = CountingProvider {
        calls: calls.clone(),
        dims: 4,
    };
    let engine = Arc::new(EmbeddingEngine::with_provider(
        Box::new(provider),
        &EmbeddingConfig::default(),
    ));

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let engine = engine.clone();
            std::thread::spawn(move || engine.embed_text("shared content").unwrap())
        })
        .collect();
    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn index_build_excludes_failures() {
    let calls = Arc::new(AtomicUsize::new(0));
    let engine = EmbeddingEngine::with_provider(
        Box::new(CountingProvider { calls, dims: 4 }),
        &EmbeddingConfig::default(),
    );
    let sources = vec![
        source("ok-1", "diversify holdings"),
        source("bad", "FAIL this one"),
        source("ok-2", "rebalance yearly"),
    ];
    let index = EmbeddingIndex::build(&engine, &sources);
    assert_eq!(index.len(), 2);
    assert!(!index.contains("bad"));
    assert_eq!(index.excluded().len(), 1);
    assert_eq!(index.excluded()[0].id, "bad");
    assert_eq!(index.dimensions(), 4);
}

#[test]
fn index_vectors_match_fresh_encoding() {
    let engine = EmbeddingEngine::new(&EmbeddingConfig {
        dimensions: 64,
        ..Default::default()
    });
    let sources = vec![source("s1", "tax loss harvesting offsets gains")];
    let index = EmbeddingIndex::build(&engine, &sources);
    let fresh = TfIdfFallback::new(64)
        .embed("tax loss harvesting offsets gains")
        .unwrap();
    assert_eq!(index.get("s1").unwrap().as_ref(), &fresh);
}
