//! CLI output formatting utilities.

use crate::search::SearchHit;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

/// Output helper for CLI formatting.
pub struct Output;

impl Output {
    /// Print an info message.
    pub fn info(msg: &str) {
        println!("{} {}", style(">>").cyan().bold(), msg);
    }

    /// Print a success message.
    pub fn success(msg: &str) {
        println!("{} {}", style(">>").green().bold(), msg);
    }

    /// Print a warning message.
    pub fn warning(msg: &str) {
        eprintln!("{} {}", style(">>").yellow().bold(), msg);
    }

    /// Print an error message.
    pub fn error(msg: &str) {
        eprintln!("{} {}", style(">>").red().bold(), msg);
    }

    /// Print a header.
    pub fn header(msg: &str) {
        println!("\n{}", style(msg).bold().underlined());
    }

    /// Print a key-value pair.
    pub fn kv(key: &str, value: &str) {
        println!("  {}: {}", style(key).dim(), value);
    }

    /// Print one ranked search hit.
    pub fn search_hit(index: usize, hit: &SearchHit) {
        println!(
            "\n{} {} @ {} ({}%)",
            style(format!("{index}.")).green().bold(),
            style(&hit.chunk.video_title).bold(),
            style(format_offset(hit.chunk.start_seconds)).cyan(),
            hit.score_percent
        );
        println!("   {}", content_preview(&hit.chunk.text, 200));
        println!("   {}", style(&hit.url).dim());
    }

    /// Print a catalog video line.
    pub fn video_info(title: &str, id: &str, timecodes: usize, has_transcript: bool) {
        let transcript = if has_transcript { "transcript" } else { "no transcript" };
        println!(
            "  {} {} ({}, {} timecodes, {})",
            style("*").cyan(),
            style(title).bold(),
            style(id).dim(),
            timecodes,
            transcript
        );
    }

    /// Create a spinner.
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message(msg.to_string());
        pb.enable_steady_tick(std::time::Duration::from_millis(100));
        pb
    }
}

/// Format a start offset in seconds as MM:SS or HH:MM:SS.
fn format_offset(seconds: f64) -> String {
    let total_seconds = seconds as u32;
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let secs = total_seconds % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}

/// Truncate content with ellipsis.
fn content_preview(content: &str, max_chars: usize) -> String {
    let content = content.replace('\n', " ");
    if content.chars().count() <= max_chars {
        content
    } else {
        let truncated: String = content.chars().take(max_chars).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_offset() {
        assert_eq!(format_offset(125.0), "02:05");
        assert_eq!(format_offset(3730.0), "01:02:10");
        assert_eq!(format_offset(0.0), "00:00");
    }

    #[test]
    fn test_content_preview_counts_chars() {
        let text = "п".repeat(300);
        let preview = content_preview(&text, 200);
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 203);
    }
}
