pub mod calibration_config;
pub mod defaults;
pub mod diversity_config;
pub mod embedding_config;
pub mod expansion_config;
pub mod fair_config;
pub mod generation_config;
pub mod quality_config;
pub mod retrieval_config;
pub mod threshold_config;

pub use calibration_config::CalibrationConfig;
pub use diversity_config::DiversityConfig;
pub use embedding_config::EmbeddingConfig;
pub use expansion_config::{DomainLexicon, ExpansionConfig};
pub use fair_config::FairConfig;
pub use generation_config::GenerationConfig;
pub use quality_config::{QualityConfig, SourceTypeWeights};
pub use retrieval_config::RetrievalConfig;
pub use threshold_config::{DomainThresholds, ThresholdConfig};
