mod classifier;
mod embedding;
mod fetcher;
mod generator;
mod safety;

pub use classifier::{FixedDomainClassifier, IDomainClassifier};
pub use embedding::IEmbeddingProvider;
pub use fetcher::{FetchedSource, IEvidenceFetcher, NoopFetcher};
pub use generator::{GenerationRequest, IGenerator};
pub use safety::{ISafetyReviewer, PassthroughSafetyReviewer, SafetyReview};
