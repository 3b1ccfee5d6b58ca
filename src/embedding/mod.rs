//! Query and corpus embedding.
//!
//! Everything that turns text into vectors sits behind [`Embedder`], so the
//! pipeline and the cache never know which backend produced a vector and
//! tests can substitute deterministic stubs.

mod openai;

pub use openai::OpenAIEmbedder;

use crate::error::Result;
use async_trait::async_trait;

/// A backend that maps texts to fixed-width embedding vectors.
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Embed a single text (queries).
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Embed many texts in one call, preserving input order (corpora).
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Width of the vectors this backend produces.
    fn dimensions(&self) -> usize;
}
