//! Similarity ranking and the query pipeline.

mod pipeline;
mod ranker;

pub use pipeline::{QueryPipeline, SearchOutcome};
pub use ranker::{Ranker, MAX_RESULTS};

use crate::media::Video;

/// A search-corpus unit: one timecode label or transcript chunk, stamped
/// with its owning video. Built fresh per query, never mutated.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub video_id: String,
    pub video_title: String,
    pub video_year: i32,
    pub text: String,
    /// Start offset of the moment in seconds.
    pub start_seconds: f64,
}

/// A ranked match: a chunk, its similarity as a percentage and a playable
/// URL pointing at the moment.
#[derive(Debug, Clone)]
pub struct SearchHit {
    pub chunk: Chunk,
    /// Similarity score in percent, rounded to 2 decimals.
    pub score_percent: f64,
    pub url: String,
}

/// Compute cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Parse a "MM:SS" or "HH:MM:SS" time label into seconds.
///
/// Malformed or absurdly large labels yield 0 rather than failing corpus
/// assembly.
pub fn parse_time_label(label: &str) -> u32 {
    // Fields parse as u32 and the sum is computed in u64, so the arithmetic
    // cannot overflow no matter what the description says.
    let parts: Option<Vec<u64>> = label
        .split(':')
        .map(|p| p.trim().parse::<u32>().ok().map(u64::from))
        .collect();
    let Some(parts) = parts else {
        return 0;
    };

    let total = match parts.as_slice() {
        [mins, secs] => mins * 60 + secs,
        [hours, mins, secs] => hours * 3600 + mins * 60 + secs,
        _ => return 0,
    };
    u32::try_from(total).unwrap_or(0)
}

/// Playable URL of the form `<platform>?v=<id>&t=<Ns|MmNs>`.
pub fn watch_url(platform_url: &str, video_id: &str, start_seconds: f64) -> String {
    let total = start_seconds as u32;
    let mins = total / 60;
    let secs = total % 60;
    let t = if mins == 0 {
        format!("{secs}s")
    } else {
        format!("{mins}m{secs}s")
    };
    format!("{platform_url}?v={video_id}&t={t}")
}

/// Corpus chunks from a video's hand-authored timecodes. Every chunk
/// resolves to this video's own id/title/year.
pub(crate) fn timestamp_chunks(video: &Video) -> Vec<Chunk> {
    video
        .timestamps
        .iter()
        .map(|ts| Chunk {
            video_id: video.id.clone(),
            video_title: video.title.clone(),
            video_year: video.year(),
            text: ts.label.clone(),
            start_seconds: parse_time_label(&ts.time) as f64,
        })
        .collect()
}

/// Corpus chunks from a video's transcript, in chunk order (aligned with
/// the cached embedding artifact).
pub(crate) fn transcript_chunks(video: &Video) -> Vec<Chunk> {
    let Some(transcript) = &video.transcript else {
        return Vec::new();
    };
    transcript
        .chunks()
        .iter()
        .map(|chunk| Chunk {
            video_id: video.id.clone(),
            video_title: video.title.clone(),
            video_year: video.year(),
            text: chunk.text.clone(),
            start_seconds: chunk.start,
        })
        .collect()
}
