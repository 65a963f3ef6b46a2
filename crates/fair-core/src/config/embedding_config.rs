use serde::{Deserialize, Serialize};

use super::defaults;

/// Embedding subsystem configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Provider name: "tfidf" or "ollama".
    pub provider: String,
    pub model: String,
    pub dimensions: usize,
    /// L1 in-memory cache capacity (entries).
    pub l1_cache_size: u64,
    /// Path of the persistent L2 cache. In-memory when unset.
    pub cache_path: Option<String>,
    pub ollama_url: String,
    pub request_timeout_ms: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            model: defaults::DEFAULT_EMBEDDING_MODEL.to_string(),
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            l1_cache_size: defaults::DEFAULT_L1_CACHE_SIZE,
            cache_path: None,
            ollama_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
            request_timeout_ms: defaults::DEFAULT_EMBEDDING_TIMEOUT_MS,
        }
    }
}

impl EmbeddingConfig {
    /// `provider:model:dimensions`, the identity cached vectors are tagged with.
    pub fn model_version(&self) -> String {
        format!("{}:{}:{}", self.provider, self.model, self.dimensions)
    }
}
