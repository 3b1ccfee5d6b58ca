//! Cache management commands.

use crate::cache::{EmbeddingStore, FsEmbeddingStore};
use crate::cli::Output;
use crate::config::Settings;
use anyhow::Result;

/// Remove every cached embedding artifact.
pub async fn run_cache_clear(settings: Settings) -> Result<()> {
    let store = FsEmbeddingStore::new(settings.cache_dir())?;
    let removed = store.clear().await?;
    Output::success(&format!("Removed {} cache artifacts", removed));
    Ok(())
}
