//! Error types for Lektor.

use thiserror::Error;

/// Library-level error type for Lektor operations.
#[derive(Error, Debug)]
pub enum LektorError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("Retrieval backend unavailable: {0}")]
    EmbeddingBackend(String),

    #[error("No cached embeddings for video '{0}'")]
    CacheMiss(String),

    #[error("Embedding store error: {0}")]
    Store(String),

    #[error("Spell correction failed: {0}")]
    Spellcheck(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Lektor operations.
pub type Result<T> = std::result::Result<T, LektorError>;
