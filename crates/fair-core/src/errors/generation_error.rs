use serde::{Deserialize, Serialize};

/// Distinguished failure of the external text generator.
///
/// The pipeline never aborts on this: evidence is still returned and
/// reasoning-derived confidence is zeroed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerationError {
    #[error("generation timed out after {elapsed_ms}ms")]
    Timeout { elapsed_ms: u64 },

    #[error("generator unavailable: {reason}")]
    Unavailable { reason: String },
}
