//! Fallback chain for embedding generation.
//!
//! Providers are tried in order; every fallback is recorded as a
//! `DegradationEvent`.

use std::sync::{Mutex, PoisonError};

use chrono::Utc;
use fair_core::errors::EmbeddingError;
use fair_core::models::DegradationEvent;
use fair_core::traits::IEmbeddingProvider;
use tracing::warn;

/// Output of a chain call: the vector and the index of the provider that made it.
#[derive(Debug, Clone)]
pub struct ChainOutput {
    pub vector: Vec<f32>,
    pub provider_index: usize,
}

impl ChainOutput {
    /// Whether the primary provider produced the vector.
    pub fn from_primary(&self) -> bool {
        self.provider_index == 0
    }
}

/// Ordered list of providers with degradation tracking.
#[derive(Default)]
pub struct DegradationChain {
    chain: Vec<Box<dyn IEmbeddingProvider>>,
    events: Mutex<Vec<DegradationEvent>>,
}

impl DegradationChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a provider to the end of the chain.
    pub fn push(&mut self, provider: Box<dyn IEmbeddingProvider>) {
        self.chain.push(provider);
    }

    /// Embed with the first provider that succeeds.
    pub fn embed(&self, text: &str) -> Result<ChainOutput, EmbeddingError> {
        let mut last_error = None;

        for (i, provider) in self.chain.iter().enumerate() {
            if !provider.is_available() {
                continue;
            }
            match provider.embed(text) {
                Ok(vector) => {
                    if i > 0 {
                        self.record_fallback(provider.name(), last_error.as_ref());
                    }
                    return Ok(ChainOutput {
                        vector,
                        provider_index: i,
                    });
                }
                Err(e) => {
                    warn!(
                        provider = provider.name(),
                        error = %e,
                        "provider failed, trying next in chain"
                    );
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| EmbeddingError::ProviderUnavailable {
            provider: "all providers exhausted".to_string(),
        }))
    }

    fn record_fallback(&self, fallback: &str, cause: Option<&EmbeddingError>) {
        let primary = self.primary().map(|p| p.name()).unwrap_or("unknown");
        let failure = match cause {
            Some(e) => format!("{primary}: {e}"),
            None => format!("{primary} unavailable"),
        };
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(DegradationEvent {
                component: "embeddings".to_string(),
                failure,
                fallback_used: fallback.to_string(),
                timestamp: Utc::now(),
            });
    }

    pub fn primary(&self) -> Option<&dyn IEmbeddingProvider> {
        self.chain.first().map(|p| p.as_ref())
    }

    /// Name of the first available provider.
    pub fn active_provider_name(&self) -> &str {
        self.chain
            .iter()
            .find(|p| p.is_available())
            .map(|p| p.name())
            .unwrap_or("none")
    }

    /// Take the accumulated degradation events.
    pub fn drain_events(&self) -> Vec<DegradationEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}
