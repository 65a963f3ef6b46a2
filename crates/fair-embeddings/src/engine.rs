//! EmbeddingEngine, the main entry point for fair-embeddings.
//!
//! Coordinates provider selection, the fallback chain, and the cache tiers.
//! Implements `IEmbeddingProvider`.

use std::path::Path;
use std::sync::Arc;

use fair_core::config::EmbeddingConfig;
use fair_core::errors::EmbeddingError;
use fair_core::models::DegradationEvent;
use fair_core::traits::IEmbeddingProvider;
use tracing::info;

use crate::cache::{cache_key, CacheCoordinator, CacheStatsSnapshot, Computed};
use crate::degradation::DegradationChain;
use crate::providers::{self, TfIdfFallback};

/// The main embedding engine. Shared by reference across threads.
pub struct EmbeddingEngine {
    chain: DegradationChain,
    cache: CacheCoordinator,
    model_version: String,
    model: String,
    dimensions: usize,
}

impl EmbeddingEngine {
    /// Create an engine from configuration.
    pub fn new(config: &EmbeddingConfig) -> Self {
        Self::with_provider(providers::create_provider(config), config)
    }

    /// Create an engine around an explicit primary provider.
    ///
    /// The model version is taken from the provider actually in use, so a
    /// construction-time fallback never reuses another model's cache rows.
    pub fn with_provider(primary: Box<dyn IEmbeddingProvider>, config: &EmbeddingConfig) -> Self {
        let dimensions = primary.dimensions();
        let model = primary.model().to_string();
        let model_version = format!("{}:{}:{}", primary.name(), model, dimensions);
        let needs_fallback = primary.name() != "tfidf";

        let mut chain = DegradationChain::new();
        chain.push(primary);
        if needs_fallback {
            chain.push(Box::new(TfIdfFallback::new(dimensions)));
        }

        let cache = CacheCoordinator::open(
            config.l1_cache_size,
            config.cache_path.as_deref().map(Path::new),
            &model_version,
        );

        info!(
            provider = chain.active_provider_name(),
            model_version = %model_version,
            persistent_cache = cache.l2().map(|c| c.is_persistent()).unwrap_or(false),
            "EmbeddingEngine initialized"
        );

        Self {
            chain,
            cache,
            model_version,
            model,
            dimensions,
        }
    }

    /// Embed `content`, consulting the cache first.
    ///
    /// A miss computes once, persists, then returns. Vectors from a fallback
    /// provider are returned uncached.
    pub fn embed_text(&self, content: &str) -> Result<Arc<Vec<f32>>, EmbeddingError> {
        self.embed_cached(content, true)
    }

    /// Embed text that is not part of the corpus, such as a query or a
    /// fetched article. Reads both tiers but only ever writes L1.
    pub fn embed_transient(&self, content: &str) -> Result<Arc<Vec<f32>>, EmbeddingError> {
        self.embed_cached(content, false)
    }

    fn embed_cached(&self, content: &str, persist: bool) -> Result<Arc<Vec<f32>>, EmbeddingError> {
        let key = cache_key(&self.model_version, content);
        let dims = self.dimensions;
        let compute = || {
            let out = self.chain.embed(content)?;
            if out.vector.len() != dims {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: dims,
                    actual: out.vector.len(),
                });
            }
            Ok(Computed {
                cacheable: out.from_primary(),
                vector: out.vector,
            })
        };
        let (vector, _tier) = if persist {
            self.cache.get_or_compute(&key, compute)?
        } else {
            self.cache.get_or_compute_transient(&key, compute)?
        };

        if vector.len() != dims {
            return Err(EmbeddingError::DimensionMismatch {
                expected: dims,
                actual: vector.len(),
            });
        }
        Ok(vector)
    }

    /// Embed query text. Kept out of the persistent tier.
    pub fn embed_query(&self, query: &str) -> Result<Arc<Vec<f32>>, EmbeddingError> {
        self.embed_transient(query)
    }

    /// `provider:model:dimensions` of the primary provider.
    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn active_provider(&self) -> &str {
        self.chain.active_provider_name()
    }

    pub fn cache(&self) -> &CacheCoordinator {
        &self.cache
    }

    pub fn cache_stats(&self) -> CacheStatsSnapshot {
        self.cache.stats()
    }

    pub fn drain_degradation_events(&self) -> Vec<DegradationEvent> {
        self.chain.drain_events()
    }
}

impl IEmbeddingProvider for EmbeddingEngine {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.embed_text(text).map(|v| v.as_ref().clone())
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "fair-embedding-engine"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(dims: usize) -> EmbeddingEngine {
        EmbeddingEngine::new(&EmbeddingConfig {
            provider: "tfidf".to_string(),
            dimensions: dims,
            l1_cache_size: 100,
            ..Default::default()
        })
    }

    #[test]
    fn model_version_matches_config() {
        let config = EmbeddingConfig::default();
        let e = EmbeddingEngine::new(&config);
        assert_eq!(e.model_version(), config.model_version());
    }

    #[test]
    fn embed_returns_configured_dims() {
        let e = engine(64);
        assert_eq!(e.embed_text("emergency fund").unwrap().len(), 64);
    }

    #[test]
    fn second_embed_is_cache_hit() {
        let e = engine(64);
        let a = e.embed_text("index funds").unwrap();
        let b = e.embed_text("index funds").unwrap();
        assert_eq!(a, b);
        let stats = e.cache_stats();
        assert_eq!(stats.computations, 1);
        assert_eq!(stats.l1_hits, 1);
    }

    #[test]
    fn query_vectors_do_not_reach_l2() {
        let e = engine(32);
        let corpus = e.embed_text("diversified portfolio").unwrap();
        let query = e.embed_query("what is a roth ira").unwrap();
        assert_eq!(corpus.len(), query.len());

        let l2 = e.cache().l2().unwrap();
        assert_eq!(l2.len(), 1);
        let query_key = cache_key(e.model_version(), "what is a roth ira");
        assert!(l2.get(&query_key).unwrap().is_none());

        e.embed_query("what is a roth ira").unwrap();
        assert_eq!(e.cache_stats().computations, 2);
    }

    #[test]
    fn cached_equals_fresh() {
        let e = engine(64);
        let cached = e.embed_text("roth conversion").unwrap();
        let fresh = TfIdfFallback::new(64).embed("roth conversion").unwrap();
        assert_eq!(*cached, fresh);
    }

    #[test]
    fn trait_impl_matches_engine() {
        let e = engine(32);
        let provider: &dyn IEmbeddingProvider = &e;
        assert_eq!(provider.dimensions(), 32);
        assert_eq!(provider.embed("x y").unwrap().len(), 32);
    }

    #[test]
    fn no_degradation_events_on_success() {
        let e = engine(16);
        e.embed_text("test").unwrap();
        assert!(e.drain_degradation_events().is_empty());
    }
}
