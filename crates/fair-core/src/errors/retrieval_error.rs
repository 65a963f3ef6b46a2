/// Retrieval subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("query embedding failed: {reason}")]
    QueryEmbeddingFailed { reason: String },

    #[error("snapshot built with model {snapshot} but engine uses {engine}")]
    ModelVersionMismatch { snapshot: String, engine: String },

    #[error("retrieval task failed: {reason}")]
    TaskFailed { reason: String },
}
