//! Per-video embedding cache.
//!
//! One artifact per video id, holding the embedding vectors of that video's
//! transcript chunks in chunk order. Compute-once semantics: an existing
//! artifact is never recomputed or staleness-checked; a changed transcript
//! is only re-embedded after the artifact is removed out-of-band
//! (`lektor cache clear`).

mod fs;
mod memory;

pub use fs::FsEmbeddingStore;
pub use memory::MemoryEmbeddingStore;

use crate::embedding::Embedder;
use crate::error::{LektorError, Result};
use crate::nlp::clean_text;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Content-addressed store of embedding artifacts, keyed by video id.
#[async_trait]
pub trait EmbeddingStore: Send + Sync {
    /// Whether an artifact exists for `key`.
    async fn contains(&self, key: &str) -> Result<bool>;

    /// The stored vectors, or None when no artifact exists.
    async fn get(&self, key: &str) -> Result<Option<Vec<Vec<f32>>>>;

    /// Persist vectors for `key`, replacing any previous artifact.
    async fn put(&self, key: &str, vectors: &[Vec<f32>]) -> Result<()>;

    /// Remove every artifact.
    async fn clear(&self) -> Result<usize>;
}

/// Compute-once embedding cache over a store and an embedder.
pub struct EmbeddingCache {
    store: Arc<dyn EmbeddingStore>,
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingCache {
    /// Create a cache over a store and an embedder.
    pub fn new(store: Arc<dyn EmbeddingStore>, embedder: Arc<dyn Embedder>) -> Self {
        Self { store, embedder }
    }

    /// Embed and persist `texts` for `video_id` unless an artifact already
    /// exists. Returns whether the embedding computation ran.
    #[instrument(skip(self, texts), fields(count = texts.len()))]
    pub async fn ensure_cached(&self, video_id: &str, texts: &[String]) -> Result<bool> {
        if self.store.contains(video_id).await? {
            debug!("Embeddings for {} already cached", video_id);
            return Ok(false);
        }

        let cleaned: Vec<String> = texts.iter().map(|t| clean_text(t)).collect();
        let vectors = self.embedder.embed_batch(&cleaned).await?;
        self.store.put(video_id, &vectors).await?;
        debug!("Cached {} embeddings for {}", vectors.len(), video_id);
        Ok(true)
    }

    /// Load the cached vectors for `video_id`.
    ///
    /// Callers must `ensure_cached` first; a missing artifact is a
    /// `CacheMiss` error.
    pub async fn load(&self, video_id: &str) -> Result<Vec<Vec<f32>>> {
        self.store
            .get(video_id)
            .await?
            .ok_or_else(|| LektorError::CacheMiss(video_id.to_string()))
    }

    /// Remove every cached artifact.
    pub async fn clear(&self) -> Result<usize> {
        self.store.clear().await
    }
}
