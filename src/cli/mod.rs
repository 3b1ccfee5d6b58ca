//! CLI module for Lektor.

pub mod commands;
mod output;

pub use output::Output;

use crate::catalog::TagFilter;
use crate::error::{LektorError, Result};
use clap::{Parser, Subcommand};

/// Lektor - Lecture Moment Search
///
/// Find moments inside a catalog of lecture-video transcripts and timecode
/// lists, filtered by structured tags and ranked by semantic similarity.
#[derive(Parser, Debug)]
#[command(name = "lektor")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search transcripts and timecodes for a moment
    Search {
        /// Search query
        query: String,

        /// Playlist tag filter, repeatable (e.g. -p subject="Алгоритмы" -p year=2025)
        #[arg(short = 'p', long = "playlist-tag")]
        playlist_tag: Vec<String>,

        /// Video tag filter, repeatable (e.g. -t lecturer="Иванов А. Б.")
        #[arg(short = 't', long = "video-tag")]
        video_tag: Vec<String>,

        /// Minimum similarity threshold (0.0-1.0); defaults to the configured value
        #[arg(long)]
        threshold: Option<f32>,
    },

    /// List catalog videos matching tag filters
    Videos {
        /// Playlist tag filter, repeatable
        #[arg(short = 'p', long = "playlist-tag")]
        playlist_tag: Vec<String>,

        /// Video tag filter, repeatable
        #[arg(short = 't', long = "video-tag")]
        video_tag: Vec<String>,
    },

    /// Manage the embedding cache
    Cache {
        #[command(subcommand)]
        action: CacheAction,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum CacheAction {
    /// Remove every cached embedding artifact
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write the current configuration to the config file
    Init,
}

/// Parse repeated `key=value` arguments into a tag filter.
pub fn parse_tag_filter(pairs: &[String]) -> Result<TagFilter> {
    pairs
        .iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
                .ok_or_else(|| {
                    LektorError::InvalidInput(format!("Expected key=value, got '{pair}'"))
                })
        })
        .collect()
}
