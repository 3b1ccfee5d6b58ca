//! Filesystem embedding store.
//!
//! One JSON artifact per video id under the cache directory. Writes go to a
//! temporary file in the same directory and are renamed into place, so a
//! concurrent reader never observes a partial artifact.

use super::EmbeddingStore;
use crate::error::{LektorError, Result};
use async_trait::async_trait;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const ARTIFACT_SUFFIX: &str = "_embeddings.json";

/// Embedding store writing one artifact per video id.
pub struct FsEmbeddingStore {
    dir: PathBuf,
}

impl FsEmbeddingStore {
    /// Create a store under `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    fn artifact_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}{ARTIFACT_SUFFIX}"))
    }

    fn is_artifact(path: &Path) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(ARTIFACT_SUFFIX))
    }
}

#[async_trait]
impl EmbeddingStore for FsEmbeddingStore {
    async fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.artifact_path(key).exists())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<Vec<f32>>>> {
        let path = self.artifact_path(key);
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(&path)?;
        let vectors: Vec<Vec<f32>> = serde_json::from_str(&content)?;
        Ok(Some(vectors))
    }

    async fn put(&self, key: &str, vectors: &[Vec<f32>]) -> Result<()> {
        let path = self.artifact_path(key);
        let content = serde_json::to_string(vectors)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.persist(&path)
            .map_err(|e| LektorError::Store(format!("persisting {}: {}", path.display(), e)))?;

        debug!("Wrote {} vectors to {}", vectors.len(), path.display());
        Ok(())
    }

    async fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for entry in std::fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if Self::is_artifact(&path) {
                std::fs::remove_file(&path)?;
                removed += 1;
            }
        }
        debug!("Removed {} cache artifacts", removed);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fs_store_roundtrip() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsEmbeddingStore::new(tmp.path()).unwrap();

        assert!(!store.contains("vid1").await.unwrap());
        store
            .put("vid1", &[vec![0.5, -0.25], vec![1.0, 0.0]])
            .await
            .unwrap();
        assert!(store.contains("vid1").await.unwrap());

        let vectors = store.get("vid1").await.unwrap().unwrap();
        assert_eq!(vectors, vec![vec![0.5, -0.25], vec![1.0, 0.0]]);
    }

    #[tokio::test]
    async fn test_put_replaces_previous_artifact() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsEmbeddingStore::new(tmp.path()).unwrap();

        store.put("vid1", &[vec![1.0]]).await.unwrap();
        store.put("vid1", &[vec![2.0], vec![3.0]]).await.unwrap();

        let vectors = store.get("vid1").await.unwrap().unwrap();
        assert_eq!(vectors.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_only_artifacts() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FsEmbeddingStore::new(tmp.path()).unwrap();

        store.put("vid1", &[vec![1.0]]).await.unwrap();
        store.put("vid2", &[vec![2.0]]).await.unwrap();
        std::fs::write(tmp.path().join("notes.txt"), "keep me").unwrap();

        assert_eq!(store.clear().await.unwrap(), 2);
        assert!(tmp.path().join("notes.txt").exists());
        assert!(!store.contains("vid1").await.unwrap());
    }
}
