use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Domain, SourceType};

/// Where an evidence source came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    /// Loaded from the curated corpus at startup.
    #[default]
    Curated,
    /// Supplied by an external fetcher for a single query.
    Fetched,
}

/// A unit of evidence with its static metadata.
///
/// Embeddings live in the `EmbeddingIndex` of the snapshot the source
/// belongs to, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidenceSource {
    /// Unique within a store.
    pub id: String,
    pub domain: Domain,
    pub title: String,
    pub content: String,
    pub source_type: SourceType,
    /// Static trust weight in [0.0, 1.0].
    pub base_reliability: f64,
    pub publication_date: Option<NaiveDate>,
    pub keywords: Vec<String>,
    pub url: Option<String>,
    pub origin: Origin,
}

impl EvidenceSource {
    pub fn is_curated(&self) -> bool {
        self.origin == Origin::Curated
    }

    /// Check the invariants a source must satisfy to enter a store.
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("id is empty".to_string());
        }
        if self.content.trim().is_empty() {
            return Err("content is empty".to_string());
        }
        if !self.domain.is_evidence_domain() {
            return Err(format!("domain '{}' cannot tag evidence", self.domain));
        }
        if !(0.0..=1.0).contains(&self.base_reliability) {
            return Err(format!(
                "reliability_score {} outside [0, 1]",
                self.base_reliability
            ));
        }
        Ok(())
    }

    /// Text indexed by the keyword scorer: content followed by keywords.
    pub fn keyword_text(&self) -> String {
        if self.keywords.is_empty() {
            return self.content.clone();
        }
        format!("{} {}", self.content, self.keywords.join(" "))
    }
}
