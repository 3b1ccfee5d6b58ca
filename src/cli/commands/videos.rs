//! Videos command: list catalog videos matching tag filters.

use crate::cli::{parse_tag_filter, Output};
use crate::config::Settings;
use crate::search::QueryPipeline;
use anyhow::Result;

/// Run the videos command.
pub async fn run_videos(
    playlist_tags: &[String],
    video_tags: &[String],
    settings: Settings,
) -> Result<()> {
    let playlist_filter = parse_tag_filter(playlist_tags)?;
    let video_filter = parse_tag_filter(video_tags)?;

    let pipeline = QueryPipeline::new(settings)?;
    let videos = pipeline
        .matching_videos(&playlist_filter, &video_filter)
        .await?;

    if videos.is_empty() {
        Output::warning("No videos matched the tag filters.");
        return Ok(());
    }

    Output::success(&format!("Matched {} videos", videos.len()));
    for video in &videos {
        Output::video_info(
            &video.title,
            &video.id,
            video.timestamps.len(),
            video.transcript.is_some(),
        );
        for (key, value) in &video.tags {
            if !value.is_empty() {
                Output::kv(key, value);
            }
        }
    }

    Ok(())
}
