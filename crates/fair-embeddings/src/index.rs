//! Corpus-wide embedding index for one snapshot generation.

use std::collections::HashMap;
use std::sync::Arc;

use fair_core::models::EvidenceSource;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::engine::EmbeddingEngine;

/// A source left out of the index and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExcludedSource {
    pub id: String,
    pub reason: String,
}

/// Source id -> vector, all of one dimension and one model version.
#[derive(Debug, Clone)]
pub struct EmbeddingIndex {
    vectors: HashMap<String, Arc<Vec<f32>>>,
    dimensions: usize,
    model_version: String,
    excluded: Vec<ExcludedSource>,
}

impl EmbeddingIndex {
    /// Embed every source in parallel. Failures are excluded, not fatal.
    pub fn build(engine: &EmbeddingEngine, sources: &[Arc<EvidenceSource>]) -> Self {
        let results: Vec<(String, Result<Arc<Vec<f32>>, String>)> = sources
            .par_iter()
            .map(|s| {
                let result = engine.embed_text(&s.content).map_err(|e| e.to_string());
                (s.id.clone(), result)
            })
            .collect();

        let mut vectors = HashMap::with_capacity(results.len());
        let mut excluded = Vec::new();
        for (id, result) in results {
            match result {
                Ok(v) => {
                    vectors.insert(id, v);
                }
                Err(reason) => {
                    warn!(id = %id, reason = %reason, "source excluded from index");
                    excluded.push(ExcludedSource { id, reason });
                }
            }
        }
        excluded.sort_by(|a, b| a.id.cmp(&b.id));

        info!(
            indexed = vectors.len(),
            excluded = excluded.len(),
            model_version = engine.model_version(),
            "embedding index built"
        );

        Self {
            vectors,
            dimensions: engine.dimensions(),
            model_version: engine.model_version().to_string(),
            excluded,
        }
    }

    /// Assemble an index from precomputed vectors.
    ///
    /// Vectors whose length differs from `dimensions` are excluded.
    pub fn from_vectors(
        model_version: impl Into<String>,
        dimensions: usize,
        entries: impl IntoIterator<Item = (String, Vec<f32>)>,
    ) -> Self {
        let mut vectors = HashMap::new();
        let mut excluded = Vec::new();
        for (id, v) in entries {
            if v.len() == dimensions {
                vectors.insert(id, Arc::new(v));
            } else {
                excluded.push(ExcludedSource {
                    reason: format!("dimension mismatch: expected {dimensions}, got {}", v.len()),
                    id,
                });
            }
        }
        Self {
            vectors,
            dimensions,
            model_version: model_version.into(),
            excluded,
        }
    }

    /// Empty index, used before the first corpus load.
    pub fn empty(model_version: impl Into<String>, dimensions: usize) -> Self {
        Self::from_vectors(model_version, dimensions, std::iter::empty())
    }

    pub fn get(&self, id: &str) -> Option<&Arc<Vec<f32>>> {
        self.vectors.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.vectors.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    /// Sources left out of this generation, sorted by id.
    pub fn excluded(&self) -> &[ExcludedSource] {
        &self.excluded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_vectors_excludes_wrong_dims() {
        let idx = EmbeddingIndex::from_vectors(
            "m:1:2",
            2,
            vec![
                ("a".to_string(), vec![1.0, 0.0]),
                ("b".to_string(), vec![1.0]),
            ],
        );
        assert_eq!(idx.len(), 1);
        assert!(idx.contains("a"));
        assert_eq!(idx.excluded()[0].id, "b");
    }

    #[test]
    fn empty_index() {
        let idx = EmbeddingIndex::empty("m:1:2", 2);
        assert!(idx.is_empty());
        assert!(idx.excluded().is_empty());
    }
}
