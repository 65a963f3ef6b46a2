//! Error handling for the FAIR engine.
//! One error enum per subsystem, `thiserror` only.

pub mod cache_error;
pub mod config_error;
pub mod corpus_error;
pub mod embedding_error;
pub mod generation_error;
pub mod retrieval_error;

pub use cache_error::CacheError;
pub use config_error::ConfigError;
pub use corpus_error::CorpusError;
pub use embedding_error::EmbeddingError;
pub use generation_error::GenerationError;
pub use retrieval_error::RetrievalError;

/// Umbrella error aggregating every subsystem via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum FairError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("corpus error: {0}")]
    Corpus(#[from] CorpusError),

    #[error("retrieval error: {0}")]
    Retrieval(#[from] RetrievalError),

    #[error("generation error: {0}")]
    Generation(#[from] GenerationError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

pub type FairResult<T> = Result<T, FairError>;
