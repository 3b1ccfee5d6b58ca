//! Catalog of playlists and videos.
//!
//! The catalog is a static snapshot refreshed out-of-band; this module only
//! reads it. Filtering is a superset test on tag maps: every filter key must
//! be present in the target's tags with an equal value, and the empty filter
//! matches everything.

mod fs;

pub use fs::FsCatalog;

use crate::error::Result;
use crate::media::{Playlist, Video};
use crate::tags::TagMap;
use async_trait::async_trait;
use std::collections::HashMap;

/// Tag filter: required key/value pairs.
pub type TagFilter = HashMap<String, String>;

/// Superset match: `tags` satisfies `filter` when every filter key exists in
/// `tags` with an equal value. A key absent from `tags` never matches.
pub fn matches_filter(tags: &TagMap, filter: &TagFilter) -> bool {
    filter
        .iter()
        .all(|(key, value)| tags.get(key).is_some_and(|tag| tag == value))
}

/// Trait for catalog implementations.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Playlists whose tag map superset-matches the filter, with their
    /// videos loaded.
    async fn fetch_playlists(&self, filter: &TagFilter) -> Result<Vec<Playlist>>;

    /// Videos of a playlist whose tag map superset-matches the filter.
    async fn fetch_videos(&self, playlist: &Playlist, filter: &TagFilter) -> Result<Vec<Video>>;
}
