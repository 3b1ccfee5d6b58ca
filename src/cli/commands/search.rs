//! Search command implementation.

use crate::cli::{parse_tag_filter, Output};
use crate::config::Settings;
use crate::search::{QueryPipeline, SearchHit, SearchOutcome};
use anyhow::Result;

/// Run the search command.
pub async fn run_search(
    query: &str,
    playlist_tags: &[String],
    video_tags: &[String],
    threshold: Option<f32>,
    settings: Settings,
) -> Result<()> {
    let playlist_filter = parse_tag_filter(playlist_tags)?;
    let video_filter = parse_tag_filter(video_tags)?;

    let pipeline = QueryPipeline::new(settings)?;

    let spinner = Output::spinner("Searching...");
    let outcome = pipeline
        .search(query, &playlist_filter, &video_filter, threshold)
        .await;
    spinner.finish_and_clear();

    match outcome {
        Ok(SearchOutcome::NoVideos) => {
            Output::warning("No videos matched the tag filters.");
        }
        Ok(SearchOutcome::Ranked {
            timestamp_hits,
            transcript_hits,
        }) => {
            print_hits("Timecode matches", timestamp_hits.as_deref());
            print_hits("Transcript matches", transcript_hits.as_deref());
        }
        Err(e) => {
            Output::error(&format!("Search failed: {}", e));
            return Err(anyhow::anyhow!("{}", e));
        }
    }

    Ok(())
}

fn print_hits(title: &str, hits: Option<&[SearchHit]>) {
    Output::header(title);
    match hits {
        Some(hits) => {
            Output::success(&format!("Found {} results", hits.len()));
            for (i, hit) in hits.iter().enumerate() {
                Output::search_hit(i + 1, hit);
            }
        }
        None => Output::warning("No matches above the similarity threshold."),
    }
}
