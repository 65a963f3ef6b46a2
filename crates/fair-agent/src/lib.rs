//! # fair-agent
//!
//! Wires the engine together for a single question:
//!
//! ```text
//! FairAgent::answer
//! ├── IDomainClassifier        (unless the caller names a domain)
//! ├── RetrievalEngine          (on the current IndexSnapshot, blocking pool)
//! ├── prompt                   ([Source N] evidence block)
//! ├── IGenerator               (blocking pool, under tokio::time::timeout)
//! ├── ISafetyReviewer
//! ├── AnswerValidator          (+ disclaimers)
//! └── ConfidenceCalibrator
//! ```
//!
//! `FairAgent::rebuild` builds a whole new snapshot generation and swaps it
//! in; in-flight questions finish on the snapshot they started with.

pub mod agent;
pub mod classifier;
pub mod generator;
pub mod prompt;
pub mod telemetry;

pub use agent::{
    AgentRequest, AgentResponse, CorpusIndexReport, FairAgent, RebuildReport, RetrievalStats,
};
pub use classifier::LexiconDomainClassifier;
pub use generator::OllamaGenerator;
