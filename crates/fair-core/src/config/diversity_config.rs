use serde::{Deserialize, Serialize};

use super::defaults;

/// Diversity selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiversityConfig {
    /// Relevance/novelty trade-off in [0, 1]. 1.0 ranks by relevance only.
    pub lambda: f64,
    pub max_sources: usize,
}

impl Default for DiversityConfig {
    fn default() -> Self {
        Self {
            lambda: defaults::DEFAULT_MMR_LAMBDA,
            max_sources: defaults::DEFAULT_MAX_SOURCES,
        }
    }
}
