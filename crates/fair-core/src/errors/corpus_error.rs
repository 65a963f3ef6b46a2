/// Corpus loading errors.
///
/// `Io` and `Parse` are fatal for a whole file; `InvalidEntry` describes a
/// single skipped entry and is normally collected, not returned.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("cannot read corpus {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("cannot parse corpus {path}: {reason}")]
    Parse { path: String, reason: String },

    #[error("unsupported corpus format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("invalid entry {index}: {reason}")]
    InvalidEntry { index: usize, reason: String },
}
