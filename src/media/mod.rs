//! Playlist, video and transcript data model.
//!
//! Playlists and videos are constructed once per catalog load and read-only
//! afterwards. A playlist exclusively owns its videos; each video carries
//! the owning playlist's id as a non-owning back-reference.

mod records;
mod transcript;

pub use records::{
    PlaylistRecord, PlaylistSnippet, TranscriptChunkRecord, VideoContentDetails,
    VideoRecord, VideoSnippet,
};
pub use transcript::{Transcript, TranscriptChunk};

pub use crate::tags::Timestamp;

use crate::tags::{self, TagMap};
use chrono::{DateTime, Utc};

/// A lecture-video playlist.
#[derive(Debug, Clone)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    pub description: String,
    pub upload_date: Option<DateTime<Utc>>,
    /// Tags extracted from the title: subject, course, season, year, lecturer.
    pub tags: TagMap,
    /// Videos owned by this playlist, in catalog order.
    pub videos: Vec<Video>,
}

impl Playlist {
    /// Build a playlist from its raw catalog record. Tag extraction never
    /// fails; unparseable fields come back as empty strings.
    pub fn from_record(record: PlaylistRecord) -> Self {
        let tags = tags::playlist_tags(&record.snippet.title);
        Self {
            id: record.id,
            title: record.snippet.title,
            description: record.snippet.description,
            upload_date: parse_upload_date(record.snippet.published_at.as_deref()),
            tags,
            videos: Vec::new(),
        }
    }

    /// Append a video during catalog construction.
    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
    }
}

/// A single lecture video.
#[derive(Debug, Clone)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub description: String,
    pub upload_date: Option<DateTime<Utc>>,
    /// Back-reference to the owning playlist.
    pub playlist_id: String,
    /// Tags extracted from the description: lecturer, lecture_date, year.
    pub tags: TagMap,
    /// Hand-authored timecode entries from the description.
    pub timestamps: Vec<Timestamp>,
    /// Transcript, when subtitles were available at snapshot time.
    pub transcript: Option<Transcript>,
}

impl Video {
    /// Build a video from its raw catalog record.
    pub fn from_record(record: VideoRecord, playlist_id: &str) -> Self {
        let (tags, timestamps) = tags::video_tags(&record.snippet.description);
        let transcript = record
            .snippet
            .transcript
            .as_deref()
            .map(Transcript::from_records);
        Self {
            id: record.content_details.video_id,
            title: record.snippet.title,
            description: record.snippet.description,
            upload_date: parse_upload_date(record.content_details.video_published_at.as_deref()),
            playlist_id: playlist_id.to_string(),
            tags,
            timestamps,
            transcript,
        }
    }

    /// The video's lecture year as a number, 0 when unknown.
    pub fn year(&self) -> i32 {
        self.tags
            .get("year")
            .and_then(|y| y.parse().ok())
            .unwrap_or(0)
    }
}

fn parse_upload_date(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video_record(description: &str, transcript: Option<Vec<TranscriptChunkRecord>>) -> VideoRecord {
        VideoRecord {
            content_details: VideoContentDetails {
                video_id: "abc123".to_string(),
                video_published_at: Some("2025-03-01T10:00:00Z".to_string()),
            },
            snippet: VideoSnippet {
                title: "Лекция 3".to_string(),
                description: description.to_string(),
                transcript,
            },
        }
    }

    #[test]
    fn test_video_from_record() {
        let record = video_record(
            "Дата лекции: 12.09.2023\n\nЛектор: Иванов А. Б.",
            Some(vec![TranscriptChunkRecord {
                text: "привет".to_string(),
                start: 0.0,
                duration: 2.0,
            }]),
        );
        let video = Video::from_record(record, "pl-1");

        assert_eq!(video.id, "abc123");
        assert_eq!(video.playlist_id, "pl-1");
        assert_eq!(video.year(), 2023);
        assert!(video.upload_date.is_some());
        assert_eq!(video.transcript.as_ref().unwrap().chunk_count(), 1);
    }

    #[test]
    fn test_year_defaults_to_zero() {
        let video = Video::from_record(video_record("Без даты", None), "pl-1");
        assert_eq!(video.tags.get("year").map(String::as_str), Some(""));
        assert_eq!(video.year(), 0);
    }

    #[test]
    fn test_playlist_owns_videos() {
        let mut playlist = Playlist::from_record(PlaylistRecord {
            id: "pl-1".to_string(),
            snippet: PlaylistSnippet {
                title: "Матанализ (1, осень 2024) — Иванов А. Б.".to_string(),
                description: String::new(),
                published_at: None,
            },
        });
        let video = Video::from_record(video_record("", None), &playlist.id);
        playlist.add_video(video);

        assert_eq!(playlist.videos.len(), 1);
        assert_eq!(playlist.videos[0].playlist_id, playlist.id);
        assert_eq!(playlist.tags.get("season").map(String::as_str), Some("осень"));
    }
}
