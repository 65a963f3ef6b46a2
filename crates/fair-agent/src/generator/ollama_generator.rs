//! Ollama text generation over `/api/generate`.

use std::time::{Duration, Instant};

use fair_core::config::GenerationConfig;
use fair_core::errors::GenerationError;
use fair_core::traits::{GenerationRequest, IGenerator};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub struct OllamaGenerator {
    client: Client,
    base_url: String,
    model: String,
    timeout: Duration,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: GenerateOptions,
}

#[derive(Serialize)]
struct GenerateOptions {
    temperature: f64,
    num_predict: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

impl OllamaGenerator {
    /// Build the blocking client. Must not run, or be dropped, on an async
    /// worker thread.
    pub fn new(
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| GenerationError::Unavailable {
                reason: format!("ollama client: {e}"),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            model: model.into(),
            timeout,
        })
    }

    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerationError> {
        Self::new(
            config.base_url.clone(),
            config.model.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn classify(&self, err: reqwest::Error, started: Instant) -> GenerationError {
        if err.is_timeout() {
            let elapsed = started.elapsed().max(self.timeout);
            GenerationError::Timeout {
                elapsed_ms: elapsed.as_millis() as u64,
            }
        } else {
            GenerationError::Unavailable {
                reason: format!("ollama: {err}"),
            }
        }
    }
}

impl IGenerator for OllamaGenerator {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError> {
        let url = format!("{}/api/generate", self.base_url);
        let body = GenerateRequest {
            model: &self.model,
            prompt: &request.prompt,
            stream: false,
            options: GenerateOptions {
                temperature: request.temperature,
                num_predict: request.max_tokens,
            },
        };

        let started = Instant::now();
        let resp = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| self.classify(e, started))?;

        if !resp.status().is_success() {
            warn!(status = %resp.status(), model = %self.model, "Ollama generate failed");
            return Err(GenerationError::Unavailable {
                reason: format!("ollama returned {}", resp.status()),
            });
        }

        let parsed: GenerateResponse = resp.json().map_err(|e| self.classify(e, started))?;
        if parsed.response.trim().is_empty() {
            return Err(GenerationError::Unavailable {
                reason: "ollama returned an empty response".to_string(),
            });
        }
        debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            chars = parsed.response.len(),
            "Ollama generation finished"
        );
        Ok(parsed.response)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}
