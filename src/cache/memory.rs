//! In-memory embedding store.
//!
//! Useful for testing and one-off runs.

use super::EmbeddingStore;
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory embedding store.
pub struct MemoryEmbeddingStore {
    artifacts: RwLock<HashMap<String, Vec<Vec<f32>>>>,
}

impl MemoryEmbeddingStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self {
            artifacts: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryEmbeddingStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmbeddingStore for MemoryEmbeddingStore {
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.artifacts.read().unwrap().contains_key(key))
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<Vec<f32>>>> {
        Ok(self.artifacts.read().unwrap().get(key).cloned())
    }

    async fn put(&self, key: &str, vectors: &[Vec<f32>]) -> Result<()> {
        self.artifacts
            .write()
            .unwrap()
            .insert(key.to_string(), vectors.to_vec());
        Ok(())
    }

    async fn clear(&self) -> Result<usize> {
        let mut artifacts = self.artifacts.write().unwrap();
        let count = artifacts.len();
        artifacts.clear();
        Ok(count)
    }
}
