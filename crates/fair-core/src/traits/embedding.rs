use crate::errors::EmbeddingError;

/// Embedding generation provider.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embed a batch of texts. Default embeds one by one.
    fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|t| self.embed(t)).collect()
    }

    /// Dimensionality of produced vectors.
    fn dimensions(&self) -> usize;

    /// Provider name, part of the model version.
    fn name(&self) -> &str;

    /// Model identifier, part of the model version.
    fn model(&self) -> &str;

    fn is_available(&self) -> bool;
}
