//! Filesystem-backed catalog snapshot.
//!
//! Layout: one directory per playlist under the snapshot root, holding a
//! `desc.json` playlist record and one `<video_id>.json` record per video.
//! A record that fails to read or parse is skipped with a warning; a single
//! malformed record must never block the rest of the catalog.

use super::{matches_filter, Catalog, TagFilter};
use crate::error::{LektorError, Result};
use crate::media::{Playlist, PlaylistRecord, Video, VideoRecord};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const PLAYLIST_RECORD: &str = "desc.json";

/// Catalog reading the on-disk JSON snapshot.
pub struct FsCatalog {
    root: PathBuf,
}

impl FsCatalog {
    /// Create a catalog over a snapshot root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn load_playlist(&self, dir: &Path) -> Result<Playlist> {
        let desc_path = dir.join(PLAYLIST_RECORD);
        let content = std::fs::read_to_string(&desc_path)?;
        let record: PlaylistRecord = serde_json::from_str(&content)?;
        let mut playlist = Playlist::from_record(record);

        let mut video_paths: Vec<PathBuf> = std::fs::read_dir(dir)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| {
                path.extension().is_some_and(|ext| ext == "json")
                    && path.file_name().is_some_and(|name| name != PLAYLIST_RECORD)
            })
            .collect();
        video_paths.sort();

        for path in video_paths {
            match self.load_video(&path, &playlist.id) {
                Ok(video) => playlist.add_video(video),
                Err(e) => warn!("Skipping unreadable video record {}: {}", path.display(), e),
            }
        }

        Ok(playlist)
    }

    fn load_video(&self, path: &Path, playlist_id: &str) -> Result<Video> {
        let content = std::fs::read_to_string(path)?;
        let record: VideoRecord = serde_json::from_str(&content)?;
        Ok(Video::from_record(record, playlist_id))
    }
}

#[async_trait]
impl Catalog for FsCatalog {
    async fn fetch_playlists(&self, filter: &TagFilter) -> Result<Vec<Playlist>> {
        if !self.root.is_dir() {
            return Err(LektorError::Catalog(format!(
                "snapshot root '{}' does not exist",
                self.root.display()
            )));
        }

        let mut dirs: Vec<PathBuf> = std::fs::read_dir(&self.root)?
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect();
        dirs.sort();

        let mut playlists = Vec::new();
        for dir in dirs {
            match self.load_playlist(&dir) {
                Ok(playlist) => {
                    if matches_filter(&playlist.tags, filter) {
                        playlists.push(playlist);
                    }
                }
                Err(e) => warn!("Skipping playlist {}: {}", dir.display(), e),
            }
        }

        debug!("Matched {} playlists", playlists.len());
        Ok(playlists)
    }

    async fn fetch_videos(&self, playlist: &Playlist, filter: &TagFilter) -> Result<Vec<Video>> {
        Ok(playlist
            .videos
            .iter()
            .filter(|video| matches_filter(&video.tags, filter))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn write_snapshot(root: &Path) {
        let dir = root.join("PL_algorithms");
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(
            dir.join("desc.json"),
            serde_json::json!({
                "id": "PL_algorithms",
                "snippet": {
                    "title": "Алгоритмы и структуры данных (1, весна 2025) — Степанов И. Д.",
                    "description": "",
                    "publishedAt": "2025-01-10T09:00:00Z"
                }
            })
            .to_string(),
        )
        .unwrap();

        std::fs::write(
            dir.join("vid1.json"),
            serde_json::json!({
                "contentDetails": {"videoId": "vid1", "videoPublishedAt": "2025-02-01T09:00:00Z"},
                "snippet": {
                    "title": "Лекция 1",
                    "description": "Дата лекции: 03.02.2025\n\n00:00 Введение\n05:30 Сортировки",
                    "transcript": [
                        {"text": "добрый день", "start": 0.0, "duration": 2.0}
                    ]
                }
            })
            .to_string(),
        )
        .unwrap();

        // Malformed record: must be skipped, not fatal.
        std::fs::write(dir.join("broken.json"), "{not json").unwrap();
    }

    #[tokio::test]
    async fn test_fetch_playlists_and_videos() {
        let tmp = tempfile::tempdir().unwrap();
        write_snapshot(tmp.path());
        let catalog = FsCatalog::new(tmp.path());

        let playlists = catalog.fetch_playlists(&TagFilter::new()).await.unwrap();
        assert_eq!(playlists.len(), 1);
        let playlist = &playlists[0];
        assert_eq!(playlist.videos.len(), 1);
        assert_eq!(playlist.videos[0].id, "vid1");
        assert_eq!(playlist.videos[0].timestamps.len(), 2);

        let videos = catalog
            .fetch_videos(playlist, &HashMap::from([("year".to_string(), "2025".to_string())]))
            .await
            .unwrap();
        assert_eq!(videos.len(), 1);

        let none = catalog
            .fetch_videos(playlist, &HashMap::from([("year".to_string(), "1999".to_string())]))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_playlist_filter() {
        let tmp = tempfile::tempdir().unwrap();
        write_snapshot(tmp.path());
        let catalog = FsCatalog::new(tmp.path());

        let filter = HashMap::from([("season".to_string(), "весна".to_string())]);
        assert_eq!(catalog.fetch_playlists(&filter).await.unwrap().len(), 1);

        let filter = HashMap::from([("season".to_string(), "осень".to_string())]);
        assert!(catalog.fetch_playlists(&filter).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let catalog = FsCatalog::new("/nonexistent/lektor-snapshot");
        let err = catalog.fetch_playlists(&TagFilter::new()).await.unwrap_err();
        assert!(matches!(err, LektorError::Catalog(_)));
    }
}
