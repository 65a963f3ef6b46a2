//! # fair-embeddings
//!
//! Vector representations of evidence and queries.
//! Deterministic hashed TF-IDF provider with an optional Ollama provider in
//! front of it, a two-tier cache keyed by model version and content, and the
//! parallel index build over a corpus.
//!
//! ## Architecture
//!
//! ```text
//! EmbeddingEngine
//! ├── DegradationChain (provider fallback)
//! │   ├── OllamaProvider (local HTTP)
//! │   └── TfIdfFallback (always available)
//! └── CacheCoordinator (2-tier, compute-once per key)
//!     ├── L1 Memory (moka)
//!     └── L2 SQLite (persistent, model-version stamped)
//! EmbeddingIndex (id -> vector, built with rayon)
//! ```

pub mod cache;
pub mod degradation;
pub mod engine;
pub mod index;
pub mod providers;
pub mod similarity;

pub use cache::{CacheCoordinator, CacheHitTier, CacheStats, CacheStatsSnapshot};
pub use degradation::DegradationChain;
pub use engine::EmbeddingEngine;
pub use index::{EmbeddingIndex, ExcludedSource};
pub use providers::{OllamaProvider, TfIdfFallback};
pub use similarity::cosine_similarity;
