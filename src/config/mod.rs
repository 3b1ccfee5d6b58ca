//! Configuration module for Lektor.
//!
//! Handles loading and managing application settings.

mod settings;

pub use settings::{
    CatalogSettings, EmbeddingSettings, GeneralSettings, SearchSettings, Settings,
    SpellerSettings,
};
