use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{Domain, Query, SourceType};

/// A source returned by an external fetcher, before it is embedded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedSource {
    pub id: String,
    pub title: String,
    pub content: String,
    pub url: Option<String>,
    pub domain: Domain,
    pub source_type: SourceType,
    pub base_reliability: f64,
    pub publication_date: Option<NaiveDate>,
}

/// Supplies extra evidence for a single query.
pub trait IEvidenceFetcher: Send + Sync {
    fn fetch(&self, query: &Query, limit: usize) -> Result<Vec<FetchedSource>, String>;

    fn name(&self) -> &str;
}

/// Fetcher that never returns anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopFetcher;

impl IEvidenceFetcher for NoopFetcher {
    fn fetch(&self, _query: &Query, _limit: usize) -> Result<Vec<FetchedSource>, String> {
        Ok(Vec::new())
    }

    fn name(&self) -> &str {
        "noop"
    }
}
