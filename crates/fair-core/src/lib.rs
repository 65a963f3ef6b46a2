//! # fair-core
//!
//! Foundation crate for the FAIR agent.
//! Defines the shared models, collaborator traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod text;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FairConfig;
pub use errors::{FairError, FairResult};
pub use models::{Domain, EvidenceSource, Origin, Query, SourceType};
