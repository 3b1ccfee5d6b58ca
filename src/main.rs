//! Lektor CLI entry point.

use anyhow::Result;
use clap::Parser;
use lektor::cli::{commands, Cli, CacheAction, Commands};
use lektor::config::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("lektor={}", log_level)),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    // Load configuration
    let settings = match &cli.config {
        Some(path) => Settings::load_from(Some(&std::path::PathBuf::from(path)))?,
        None => Settings::load()?,
    };

    // Ensure data directories exist
    std::fs::create_dir_all(settings.data_dir())?;
    std::fs::create_dir_all(settings.cache_dir())?;

    // Execute command
    match &cli.command {
        Commands::Search {
            query,
            playlist_tag,
            video_tag,
            threshold,
        } => {
            commands::run_search(query, playlist_tag, video_tag, *threshold, settings).await?;
        }

        Commands::Videos {
            playlist_tag,
            video_tag,
        } => {
            commands::run_videos(playlist_tag, video_tag, settings).await?;
        }

        Commands::Cache { action } => match action {
            CacheAction::Clear => {
                commands::run_cache_clear(settings).await?;
            }
        },

        Commands::Config { action } => {
            commands::run_config(action, settings)?;
        }
    }

    Ok(())
}
