//! Raw catalog record types.
//!
//! These mirror the JSON shapes the out-of-band snapshot tool stores: one
//! playlist description record per playlist and one video record per video,
//! both straight from the video platform's API, with the fetched transcript
//! rows grafted onto the video snippet.

use serde::Deserialize;

/// Raw playlist record (`desc.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistRecord {
    pub id: String,
    pub snippet: PlaylistSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "publishedAt", default)]
    pub published_at: Option<String>,
}

/// Raw video record (`<video_id>.json`).
#[derive(Debug, Clone, Deserialize)]
pub struct VideoRecord {
    #[serde(rename = "contentDetails")]
    pub content_details: VideoContentDetails,
    pub snippet: VideoSnippet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoContentDetails {
    #[serde(rename = "videoId")]
    pub video_id: String,
    #[serde(rename = "videoPublishedAt", default)]
    pub video_published_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Transcript rows, absent when subtitles could not be fetched.
    #[serde(default)]
    pub transcript: Option<Vec<TranscriptChunkRecord>>,
}

/// One transcript row as fetched from the platform.
#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptChunkRecord {
    pub text: String,
    pub start: f64,
    #[serde(default)]
    pub duration: f64,
}
