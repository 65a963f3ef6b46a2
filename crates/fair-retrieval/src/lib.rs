//! # fair-retrieval
//!
//! The evidence engine. Loads a corpus into immutable snapshots, ranks
//! evidence with a semantic + keyword hybrid, weights it by source quality,
//! filters it with an adaptive threshold, and picks a diverse citation set.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── SnapshotHandle (atomic swap of IndexSnapshot generations)
//! │   └── IndexSnapshot
//! │       ├── EvidenceStore (corpus loader: JSON / YAML)
//! │       ├── EmbeddingIndex (fair-embeddings)
//! │       └── KeywordDocs (pre-tokenized content + keywords)
//! ├── QueryExpander (domain synonym tables)
//! ├── HybridRanker
//! │   ├── Semantic (cosine × curated boost)
//! │   ├── Keyword (BM25 over the pool)
//! │   └── Max normalization + alpha blend
//! ├── QualityScorer (reliability × recency × type × density, capped)
//! ├── ThresholdPolicy (per-domain base, length/technicality, relaxation)
//! ├── DiversitySelector (MMR)
//! └── Fetch (optional external evidence behind IEvidenceFetcher)
//! ```

pub mod diversity;
pub mod engine;
pub mod expansion;
pub mod fetch;
pub mod quality;
pub mod search;
pub mod snapshot;
pub mod store;
pub mod threshold;

pub use diversity::DiversitySelector;
pub use engine::{RetrievalEngine, RetrievalOutcome};
pub use expansion::QueryExpander;
pub use fetch::UnavailableFetcher;
pub use quality::QualityScorer;
pub use search::HybridRanker;
pub use snapshot::{IndexSnapshot, SnapshotHandle};
pub use store::{CorpusLoadReport, EvidenceStore, SkippedEntry};
pub use threshold::{ThresholdOutcome, ThresholdPolicy};
