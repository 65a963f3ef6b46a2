//! Provider registry.
//!
//! Priority order:
//! 1. Ollama (local HTTP, when configured and reachable)
//! 2. TF-IDF (always available)

pub mod ollama_provider;
pub mod tfidf_fallback;

pub use ollama_provider::OllamaProvider;
pub use tfidf_fallback::TfIdfFallback;

use std::time::Duration;

use fair_core::config::defaults::{DEFAULT_EMBEDDING_MODEL, DEFAULT_OLLAMA_EMBEDDING_MODEL};
use fair_core::config::EmbeddingConfig;
use fair_core::traits::IEmbeddingProvider;
use tracing::{info, warn};

/// Build the configured provider. An unreachable Ollama server yields TF-IDF.
pub fn create_provider(config: &EmbeddingConfig) -> Box<dyn IEmbeddingProvider> {
    match config.provider.as_str() {
        "ollama" => {
            let model = if config.model == DEFAULT_EMBEDDING_MODEL {
                DEFAULT_OLLAMA_EMBEDDING_MODEL
            } else {
                config.model.as_str()
            };
            match OllamaProvider::new(
                &config.ollama_url,
                model,
                config.dimensions,
                Duration::from_millis(config.request_timeout_ms),
            ) {
                Ok(provider) if provider.health_check() => {
                    info!(provider = "ollama", model, "embedding provider connected");
                    return Box::new(provider);
                }
                Ok(_) => warn!("Ollama unavailable, falling back to TF-IDF"),
                Err(e) => warn!(error = %e, "Ollama client failed, falling back to TF-IDF"),
            }
            Box::new(TfIdfFallback::new(config.dimensions))
        }
        "tfidf" => {
            info!(provider = "tfidf", "using TF-IDF embedding provider");
            Box::new(TfIdfFallback::with_model(config.dimensions, &config.model))
        }
        other => {
            warn!(provider = other, "unknown provider, using TF-IDF");
            Box::new(TfIdfFallback::new(config.dimensions))
        }
    }
}
