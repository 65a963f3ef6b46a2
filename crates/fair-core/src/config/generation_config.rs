use serde::{Deserialize, Serialize};

use super::defaults;

/// Answer generation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub base_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub timeout_ms: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_OLLAMA_URL.to_string(),
            model: defaults::DEFAULT_GENERATION_MODEL.to_string(),
            temperature: defaults::DEFAULT_GENERATION_TEMPERATURE,
            max_tokens: defaults::DEFAULT_GENERATION_MAX_TOKENS,
            timeout_ms: defaults::DEFAULT_GENERATION_TIMEOUT_MS,
        }
    }
}
