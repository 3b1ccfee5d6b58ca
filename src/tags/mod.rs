//! Tag and timecode extraction from playlist titles and video descriptions.
//!
//! Parsing is heuristic by design: the catalog holds free-text titles and
//! descriptions authored by hand. Every extractor is a table of named, pure
//! rules tried in priority order; a rule that does not apply returns `None`
//! and the affected field degrades to the empty string. Nothing in this
//! module returns an error or panics — a malformed record must never block
//! loading the rest of the catalog.

mod playlist;
mod video;

pub use playlist::playlist_tags;
pub use video::{video_tags, Timestamp};

use std::collections::HashMap;

/// Mapping from metadata key to extracted string value.
///
/// A field that could not be determined is present with an empty string
/// value, never omitted.
pub type TagMap = HashMap<String, String>;
