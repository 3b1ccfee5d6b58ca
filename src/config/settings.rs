//! Configuration settings for Lektor.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct Settings {
    pub general: GeneralSettings,
    pub catalog: CatalogSettings,
    pub embedding: EmbeddingSettings,
    pub search: SearchSettings,
    pub speller: SpellerSettings,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralSettings {
    /// Directory for storing application data.
    pub data_dir: String,
    /// Directory for cached embedding artifacts.
    pub cache_dir: String,
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            data_dir: "~/.lektor".to_string(),
            cache_dir: "~/.lektor/cache".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Catalog snapshot settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Root directory of the playlist/video snapshot.
    pub root_dir: String,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            root_dir: "~/.lektor/catalog".to_string(),
        }
    }
}

/// Embedding generation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingSettings {
    /// Embedding provider (openai).
    pub provider: String,
    /// Embedding model to use.
    pub model: String,
    /// Embedding dimensions.
    pub dimensions: u32,
}

impl Default for EmbeddingSettings {
    fn default() -> Self {
        Self {
            provider: "openai".to_string(),
            model: "text-embedding-3-small".to_string(),
            dimensions: 1536,
        }
    }
}

/// Similarity search settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
    /// Minimum cosine similarity for any candidate to qualify as a match.
    pub threshold: f32,
    /// Tolerance band below the best score that still admits near-best matches.
    pub score_offset: f32,
    /// Base watch URL of the video platform.
    pub platform_url: String,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            threshold: 0.75,
            score_offset: 0.2,
            platform_url: "https://www.youtube.com/watch".to_string(),
        }
    }
}

/// Remote spell-correction settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpellerSettings {
    /// Enable remote spell correction of queries.
    pub enabled: bool,
    /// Speller service endpoint.
    pub endpoint: String,
    /// Language hint passed to the speller.
    pub lang: String,
}

impl Default for SpellerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "https://speller.yandex.net/services/spellservice.json/checkText"
                .to_string(),
            lang: "ru".to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the default configuration file.
    pub fn load() -> crate::error::Result<Self> {
        Self::load_from(None)
    }

    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::LektorError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("lektor")
            .join("config.toml")
    }

    /// Expand shell variables in paths (e.g., ~).
    pub fn expand_path(path: &str) -> PathBuf {
        PathBuf::from(shellexpand::tilde(path).to_string())
    }

    /// Get the expanded data directory path.
    pub fn data_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.data_dir)
    }

    /// Get the expanded cache directory path.
    pub fn cache_dir(&self) -> PathBuf {
        Self::expand_path(&self.general.cache_dir)
    }

    /// Get the expanded catalog root path.
    pub fn catalog_root(&self) -> PathBuf {
        Self::expand_path(&self.catalog.root_dir)
    }
}
