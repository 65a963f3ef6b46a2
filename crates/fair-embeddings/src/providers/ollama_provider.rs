//! Ollama local embedding provider.
//!
//! Talks to a local Ollama server over HTTP. Health-checked on construction;
//! an unreachable server marks the provider unavailable.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use fair_core::errors::EmbeddingError;
use fair_core::traits::IEmbeddingProvider;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    model: String,
    dimensions: usize,
    available: AtomicBool,
}

#[derive(Serialize)]
struct OllamaEmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct OllamaEmbedResponse {
    embeddings: Vec<Vec<f32>>,
}

impl OllamaProvider {
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        dimensions: usize,
        timeout: Duration,
    ) -> Result<Self, EmbeddingError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EmbeddingError::ProviderUnavailable {
                provider: format!("ollama: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            dimensions,
            available: AtomicBool::new(false),
        })
    }

    /// Probe the server and record whether it answered.
    pub fn health_check(&self) -> bool {
        let url = format!("{}/api/tags", self.base_url);
        let ok = match self.client.get(&url).send() {
            Ok(resp) if resp.status().is_success() => {
                debug!(model = %self.model, "Ollama health check passed");
                true
            }
            Ok(resp) => {
                warn!(status = %resp.status(), "Ollama health check failed");
                false
            }
            Err(e) => {
                warn!(error = %e, "Ollama unreachable");
                false
            }
        };
        self.available.store(ok, Ordering::Relaxed);
        ok
    }

    fn request_embeddings(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: "ollama".to_string(),
            });
        }

        let url = format!("{}/api/embed", self.base_url);
        let request = OllamaEmbedRequest {
            model: &self.model,
            input: texts,
        };
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Ollama HTTP error: {e}"),
            })?;

        if !response.status().is_success() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!("Ollama returned {}", response.status()),
            });
        }

        let body: OllamaEmbedResponse =
            response.json().map_err(|e| EmbeddingError::InferenceFailed {
                reason: format!("Ollama JSON parse error: {e}"),
            })?;

        if body.embeddings.len() != texts.len() {
            return Err(EmbeddingError::InferenceFailed {
                reason: format!(
                    "Ollama returned {} vectors for {} inputs",
                    body.embeddings.len(),
                    texts.len()
                ),
            });
        }
        for v in &body.embeddings {
            if v.len() != self.dimensions {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: self.dimensions,
                    actual: v.len(),
                });
            }
        }
        Ok(body.embeddings)
    }
}

impl IEmbeddingProvider for OllamaProvider {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.request_embeddings(&[text.to_string()])?
            .into_iter()
            .next()
            .ok_or_else(|| EmbeddingError::InferenceFailed {
                reason: "empty Ollama response".to_string(),
            })
    }

    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}
