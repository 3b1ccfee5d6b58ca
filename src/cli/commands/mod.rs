//! CLI command implementations.

mod cache;
mod config;
mod search;
mod videos;

pub use cache::run_cache_clear;
pub use config::run_config;
pub use search::run_search;
pub use videos::run_videos;
