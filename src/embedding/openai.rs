//! OpenAI embedding backend.

use super::Embedder;
use crate::config::EmbeddingSettings;
use crate::error::{LektorError, Result};
use async_openai::types::{CreateEmbeddingRequestArgs, EmbeddingInput};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// The embeddings endpoint rejects requests above this many inputs.
const MAX_INPUTS_PER_REQUEST: usize = 100;

/// Embedder backed by the OpenAI embeddings API.
///
/// The API key comes from the `OPENAI_API_KEY` environment variable; model
/// and vector width come from the `[embedding]` configuration section.
pub struct OpenAIEmbedder {
    client: async_openai::Client<async_openai::config::OpenAIConfig>,
    model: String,
    dimensions: u32,
}

impl OpenAIEmbedder {
    /// Build an embedder from the configured model and dimensions.
    pub fn from_settings(settings: &EmbeddingSettings) -> Self {
        Self {
            client: async_openai::Client::new(),
            model: settings.model.clone(),
            dimensions: settings.dimensions,
        }
    }

    async fn request(&self, inputs: Vec<String>) -> Result<Vec<Vec<f32>>> {
        let request = CreateEmbeddingRequestArgs::default()
            .model(&self.model)
            .input(EmbeddingInput::StringArray(inputs))
            .dimensions(self.dimensions)
            .build()
            .map_err(|e| LektorError::EmbeddingBackend(format!("bad embedding request: {e}")))?;

        let response = self
            .client
            .embeddings()
            .create(request)
            .await
            .map_err(|e| LektorError::EmbeddingBackend(format!("embeddings API: {e}")))?;

        // Response rows carry their input index; restore input order.
        let mut rows = response.data;
        rows.sort_by_key(|row| row.index);
        Ok(rows.into_iter().map(|row| row.embedding).collect())
    }
}

#[async_trait]
impl Embedder for OpenAIEmbedder {
    #[instrument(skip(self, text))]
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_batch(&[text.to_string()])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| LektorError::EmbeddingBackend("empty embedding response".to_string()))
    }

    #[instrument(skip(self, texts), fields(count = texts.len()))]
    async fn embed_batch(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let mut vectors = Vec::with_capacity(texts.len());
        for batch in texts.chunks(MAX_INPUTS_PER_REQUEST) {
            vectors.extend(self.request(batch.to_vec()).await?);
        }

        debug!("Embedded {} texts", vectors.len());
        Ok(vectors)
    }

    fn dimensions(&self) -> usize {
        self.dimensions as usize
    }
}
