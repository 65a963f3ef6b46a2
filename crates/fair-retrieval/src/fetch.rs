//! External evidence, merged into a single query's candidate pool.

use std::sync::Arc;

use fair_core::models::{EvidenceSource, Origin, Query};
use fair_core::traits::{FetchedSource, IEvidenceFetcher};
use fair_embeddings::EmbeddingEngine;
use tracing::{debug, warn};

use crate::store::EvidenceStore;

/// Fetcher standing in for a configured but unreachable service.
#[derive(Debug, Clone, Default)]
pub struct UnavailableFetcher {
    reason: String,
}

impl UnavailableFetcher {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl IEvidenceFetcher for UnavailableFetcher {
    fn fetch(&self, _query: &Query, _limit: usize) -> Result<Vec<FetchedSource>, String> {
        Err(if self.reason.is_empty() {
            "evidence fetcher unavailable".to_string()
        } else {
            self.reason.clone()
        })
    }

    fn name(&self) -> &str {
        "unavailable"
    }
}

/// A fetched source ready to be ranked next to the snapshot's sources.
#[derive(Debug, Clone)]
pub struct FetchedEvidence {
    pub source: Arc<EvidenceSource>,
    pub embedding: Arc<Vec<f32>>,
}

pub fn to_evidence(fetched: FetchedSource) -> EvidenceSource {
    EvidenceSource {
        id: fetched.id,
        domain: fetched.domain,
        title: fetched.title,
        content: fetched.content,
        source_type: fetched.source_type,
        base_reliability: fetched.base_reliability,
        publication_date: fetched.publication_date,
        keywords: Vec::new(),
        url: fetched.url,
        origin: Origin::Fetched,
    }
}

/// Ask `fetcher` for up to `limit` sources and embed them.
///
/// Failures never propagate: a failing fetcher yields nothing, and a source
/// that is invalid, out of domain, already in the store, or fails to embed is
/// dropped.
pub fn gather(
    fetcher: &dyn IEvidenceFetcher,
    query: &Query,
    limit: usize,
    store: &EvidenceStore,
    engine: &EmbeddingEngine,
) -> Vec<FetchedEvidence> {
    if limit == 0 {
        return Vec::new();
    }
    let fetched = match fetcher.fetch(query, limit) {
        Ok(sources) => sources,
        Err(reason) => {
            warn!(fetcher = fetcher.name(), %reason, "evidence fetch failed, continuing without");
            return Vec::new();
        }
    };

    let mut out: Vec<FetchedEvidence> = Vec::with_capacity(limit.min(fetched.len()));
    for raw in fetched {
        if out.len() >= limit {
            break;
        }
        let source = to_evidence(raw);
        if let Err(reason) = source.validate() {
            debug!(id = %source.id, %reason, "fetched source rejected");
            continue;
        }
        if !query.domain.covers(source.domain) {
            debug!(id = %source.id, domain = %source.domain, "fetched source out of domain");
            continue;
        }
        if store.contains(&source.id) || out.iter().any(|f| f.source.id == source.id) {
            debug!(id = %source.id, "fetched source id already present");
            continue;
        }
        match engine.embed_transient(&source.content) {
            Ok(embedding) => out.push(FetchedEvidence {
                source: Arc::new(source),
                embedding,
            }),
            Err(e) => warn!(id = %source.id, error = %e, "fetched source embedding failed"),
        }
    }
    out
}
