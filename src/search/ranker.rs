//! Similarity ranking of a query against a chunk corpus.

use super::{cosine_similarity, watch_url, Chunk, SearchHit};
use crate::embedding::Embedder;
use crate::error::Result;
use crate::nlp::{clean_text, Lemmatizer};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Hard cap on returned results.
pub const MAX_RESULTS: usize = 7;

/// When the score-offset band admits more than this many chunks, the band
/// is halved to tighten the result set.
const WIDE_SELECTION_LIMIT: usize = 10;

/// Scores a query against a pre-embedded chunk corpus.
///
/// Pure with respect to its inputs: ranking never touches the embedding
/// cache or mutates the corpus.
pub struct Ranker {
    embedder: Arc<dyn Embedder>,
    lemmatizer: Arc<dyn Lemmatizer>,
    platform_url: String,
}

impl Ranker {
    /// Create a ranker over an embedder and a lemmatizer.
    pub fn new(
        embedder: Arc<dyn Embedder>,
        lemmatizer: Arc<dyn Lemmatizer>,
        platform_url: &str,
    ) -> Self {
        Self {
            embedder,
            lemmatizer,
            platform_url: platform_url.to_string(),
        }
    }

    /// Rank `chunks` against `query`.
    ///
    /// `embeddings` is aligned 1:1 with `chunks`. Returns `None` when no
    /// chunk reaches `threshold` (the distinguishable no-match signal);
    /// otherwise an ordered list of at most [`MAX_RESULTS`] hits, sorted by
    /// (video year desc, score desc, start-time asc).
    #[instrument(skip(self, query, embeddings, chunks), fields(corpus = chunks.len()))]
    pub async fn rank(
        &self,
        query: &str,
        embeddings: &[Vec<f32>],
        chunks: &[Chunk],
        threshold: f32,
        score_offset: f32,
    ) -> Result<Option<Vec<SearchHit>>> {
        if chunks.is_empty() || embeddings.is_empty() {
            return Ok(None);
        }

        let normalized = self.normalize_query(query).await?;
        let query_vec = self.embedder.embed(&normalized).await?;

        // A cache artifact can hold more vectors than the transcript has
        // chunks; only the paired prefix is scored.
        let paired = embeddings.len().min(chunks.len());
        let scores: Vec<f32> = embeddings[..paired]
            .iter()
            .map(|embedding| cosine_similarity(&query_vec, embedding))
            .collect();

        let best = scores.iter().copied().fold(f32::NEG_INFINITY, f32::max);
        if best < threshold {
            debug!("Best similarity {:.3} below threshold {:.3}", best, threshold);
            return Ok(None);
        }

        let mut selected = select_indices(&scores, threshold, best, score_offset);
        if selected.len() > WIDE_SELECTION_LIMIT {
            debug!("{} chunks in band, tightening with halved offset", selected.len());
            selected = select_indices(&scores, threshold, best, score_offset / 2.0);
        }

        let mut hits: Vec<SearchHit> = selected
            .into_iter()
            .map(|i| SearchHit {
                chunk: chunks[i].clone(),
                score_percent: round_percent(scores[i]),
                url: watch_url(&self.platform_url, &chunks[i].video_id, chunks[i].start_seconds),
            })
            .collect();

        // Newer lectures first, then relevance, then the earliest moment.
        hits.sort_by(|a, b| {
            b.chunk
                .video_year
                .cmp(&a.chunk.video_year)
                .then(
                    b.score_percent
                        .partial_cmp(&a.score_percent)
                        .unwrap_or(Ordering::Equal),
                )
                .then(
                    a.chunk
                        .start_seconds
                        .partial_cmp(&b.chunk.start_seconds)
                        .unwrap_or(Ordering::Equal),
                )
        });
        hits.truncate(MAX_RESULTS);

        Ok(Some(hits))
    }

    /// Lowercase, lemmatize and collapse whitespace.
    async fn normalize_query(&self, query: &str) -> Result<String> {
        let lemmatized = self.lemmatizer.lemmatize(&query.to_lowercase()).await?;
        Ok(clean_text(&lemmatized))
    }
}

/// Indices of chunks whose score clears `max(threshold, best - offset)`.
fn select_indices(scores: &[f32], threshold: f32, best: f32, offset: f32) -> Vec<usize> {
    let cutoff = threshold.max(best - offset);
    scores
        .iter()
        .enumerate()
        .filter(|(_, &score)| score >= cutoff)
        .map(|(i, _)| i)
        .collect()
}

/// Similarity as a percentage, rounded to 2 decimals.
fn round_percent(score: f32) -> f64 {
    (score as f64 * 100.0 * 100.0).round() / 100.0
}
