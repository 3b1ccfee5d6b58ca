//! Lektor - Lecture Moment Search
//!
//! A CLI tool for finding moments inside a catalog of lecture-video
//! transcripts and hand-authored timecode lists.
//!
//! The name "Lektor" is the Slavic word for "lecturer."
//!
//! # Overview
//!
//! Lektor allows you to:
//! - Filter lecture videos by structured tags (subject, lecturer, course,
//!   season, year) extracted from playlist titles and video descriptions
//! - Search transcripts and timecode labels semantically
//! - Jump straight to the matching moment via a timestamped watch URL
//!
//! # Architecture
//!
//! The library is organized into several modules:
//!
//! - `config` - Configuration management
//! - `tags` - Tag and timecode extraction from titles/descriptions
//! - `media` - Playlist, video and transcript data model
//! - `catalog` - Catalog of playlists/videos (filesystem snapshot)
//! - `embedding` - Embedding generation
//! - `nlp` - Query normalization, lemmatization, spell correction
//! - `cache` - Per-video embedding cache
//! - `search` - Similarity ranking and the query pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use std::collections::HashMap;
//! use lektor::config::Settings;
//! use lektor::search::QueryPipeline;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let settings = Settings::load()?;
//!     let pipeline = QueryPipeline::new(settings)?;
//!
//!     let playlist_filter = HashMap::from([("subject".to_string(), "Алгоритмы".to_string())]);
//!     let outcome = pipeline
//!         .search("бинарный поиск", &playlist_filter, &HashMap::new(), None)
//!         .await?;
//!     println!("{:?}", outcome);
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod embedding;
pub mod error;
pub mod media;
pub mod nlp;
pub mod search;
pub mod tags;

pub use error::{LektorError, Result};
