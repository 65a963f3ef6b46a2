use serde::{Deserialize, Serialize};

use crate::errors::GenerationError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub prompt: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

/// Text generation backend.
///
/// Implementations may block; callers run them off the async executor.
pub trait IGenerator: Send + Sync {
    fn generate(&self, request: &GenerationRequest) -> Result<String, GenerationError>;

    fn name(&self) -> &str;
}
