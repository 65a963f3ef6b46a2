//! HybridRanker: semantic + keyword scoring, normalized within the pool.

pub mod hybrid;
pub mod keyword;
pub mod normalize;
pub mod semantic;

pub use hybrid::{combine, HybridRanker};
pub use keyword::{bm25_scores, query_terms};
pub use normalize::normalize_by_max;
pub use semantic::semantic_raw;
