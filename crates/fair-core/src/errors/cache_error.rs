/// Persistent embedding cache errors.
///
/// None of these abort a query: callers log them and recompute.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("cache open failed: {path}: {reason}")]
    OpenFailed { path: String, reason: String },

    #[error("cache read failed: {reason}")]
    ReadFailed { reason: String },

    #[error("cache write failed: {reason}")]
    WriteFailed { reason: String },

    #[error("corrupt cache entry {key}: {reason}")]
    CorruptEntry { key: String, reason: String },
}
