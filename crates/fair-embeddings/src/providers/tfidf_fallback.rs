//! Hashed TF-IDF provider.
//!
//! Generates fixed-dimension vectors by hashing content terms into buckets.
//! No external dependencies, so it works offline and anchors the fallback chain.

use std::collections::HashMap;

use fair_core::config::defaults::DEFAULT_EMBEDDING_MODEL;
use fair_core::errors::EmbeddingError;
use fair_core::text;
use fair_core::traits::IEmbeddingProvider;

/// Deterministic hashed TF-IDF embedding provider.
///
/// Each content term (stopwords removed) lands in a bucket chosen by FNV-1a
/// and contributes its term frequency weighted by a length-based IDF proxy.
/// Adjacent term pairs add a half-weight bigram feature so phrases like
/// "compound interest" outrank the words scattered apart.
pub struct TfIdfFallback {
    dimensions: usize,
    model: String,
}

impl TfIdfFallback {
    pub fn new(dimensions: usize) -> Self {
        Self::with_model(dimensions, DEFAULT_EMBEDDING_MODEL)
    }

    pub fn with_model(dimensions: usize, model: impl Into<String>) -> Self {
        Self {
            dimensions: dimensions.max(1),
            model: model.into(),
        }
    }

    /// Hash a feature into a bucket index using FNV-1a.
    fn bucket(feature: &str, dims: usize) -> usize {
        let mut h: u64 = 0xcbf29ce484222325;
        for b in feature.as_bytes() {
            h ^= *b as u64;
            h = h.wrapping_mul(0x100000001b3);
        }
        (h % dims as u64) as usize
    }

    fn vectorize(&self, input: &str) -> Vec<f32> {
        let terms = text::content_terms(input);
        let mut vec = vec![0.0f32; self.dimensions];
        if terms.is_empty() {
            return vec;
        }

        let mut tf: HashMap<String, f32> = HashMap::new();
        for term in &terms {
            *tf.entry(term.clone()).or_default() += 1.0;
        }
        for pair in terms.windows(2) {
            *tf.entry(format!("{} {}", pair[0], pair[1])).or_default() += 0.5;
        }

        let total = terms.len() as f32;
        for (feature, count) in &tf {
            let idf = 1.0 + (feature.len() as f32).ln();
            vec[Self::bucket(feature, self.dimensions)] += (count / total) * idf;
        }

        let norm: f32 = vec.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for v in &mut vec {
                *v /= norm;
            }
        }
        vec
    }
}

impl IEmbeddingProvider for TfIdfFallback {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(self.vectorize(text))
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "tfidf"
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn is_available(&self) -> bool {
        true
    }
}
