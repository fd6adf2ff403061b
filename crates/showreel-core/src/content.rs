//! Site content model.
//!
//! Mirrors the published portfolio data: a gallery of videos, newest first,
//! each carrying an optional category marker that the gallery filter matches
//! against. Content loads from a JSON file when one is supplied, otherwise
//! the built-in sample gallery is used.

use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ShowreelError;

/// Category applied to uploads that do not name one.
pub const DEFAULT_CATEGORY: &str = "coding";

/// Upload size cap: 100MB.
pub const MAX_CONTENT_LENGTH: u64 = 100 * 1024 * 1024;

/// File extensions accepted by the upload form.
pub const ALLOWED_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mov", "wmv", "flv", "webm"];

/// Whether the filename carries an allowed video extension.
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// A single portfolio video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub public_id: String,
    pub url: String,
    pub title: String,
    /// Category marker the gallery filter matches against. A video without
    /// one only appears under the "all" filter.
    #[serde(default)]
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Video {
    /// Element id the card renders under, shared by the reveal observer
    /// and by code that marks cards revealed at insertion time.
    pub fn dom_id(&self) -> String {
        format!("video-{}", self.public_id.replace('/', "-"))
    }
}

/// Everything the site renders: owner details plus the video gallery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub owner: String,
    pub tagline: String,
    pub about: String,
    pub videos: Vec<Video>,
}

impl SiteContent {
    /// Parse content from JSON, ordering the gallery newest first.
    pub fn from_json(json: &str) -> Result<Self, ShowreelError> {
        let mut content: SiteContent = serde_json::from_str(json)?;
        if content.owner.trim().is_empty() {
            return Err(ShowreelError::Content("owner must not be empty".into()));
        }
        content.sort_newest_first();
        tracing::debug!(videos = content.videos.len(), "site content parsed");
        Ok(content)
    }

    /// Load content from a JSON file.
    pub fn load(path: &Path) -> Result<Self, ShowreelError> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    /// Distinct category markers present in the gallery, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = self
            .videos
            .iter()
            .filter_map(|v| v.category.clone())
            .collect();
        categories.sort();
        categories.dedup();
        categories
    }

    /// Add a video, keeping the gallery ordered newest first.
    pub fn add_video(&mut self, video: Video) {
        self.videos.push(video);
        self.sort_newest_first();
    }

    fn sort_newest_first(&mut self) {
        self.videos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    }

    /// Built-in gallery used when no content file is supplied.
    pub fn sample() -> Self {
        let now = Utc::now();
        let video = |public_id: &str, title: &str, category: &str, days_ago: i64| Video {
            public_id: format!("portfolio_uploads/{public_id}"),
            url: format!("https://res.cloudinary.com/demo/video/upload/{public_id}.mp4"),
            title: title.to_string(),
            category: Some(category.to_string()),
            created_at: now - Duration::days(days_ago),
        };

        let mut content = SiteContent {
            owner: "Showreel".to_string(),
            tagline: "Stories told one frame at a time".to_string(),
            about: "Independent videographer and developer. I build small \
                    tools by day and cut footage by night; this site collects \
                    the pieces I am proud of."
                .to_string(),
            videos: vec![
                video("rust-live-refactor", "Live refactoring session", "coding", 3),
                video("terminal-workflow", "A terminal-first workflow", "coding", 21),
                video("harbor-sunrise", "Harbor at sunrise", "travel", 9),
                video("alps-timelapse", "Crossing the Alps", "travel", 40),
                video("studio-session", "Studio session, take two", "music", 15),
            ],
        };
        content.sort_newest_first();
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_file_accepts_listed_extensions() {
        for ext in ALLOWED_EXTENSIONS {
            assert!(allowed_file(&format!("clip.{ext}")), "{ext} rejected");
        }
    }

    #[test]
    fn allowed_file_is_case_insensitive() {
        assert!(allowed_file("CLIP.MP4"));
        assert!(allowed_file("clip.WebM"));
    }

    #[test]
    fn allowed_file_rejects_other_extensions_and_bare_names() {
        assert!(!allowed_file("clip.png"));
        assert!(!allowed_file("clip."));
        assert!(!allowed_file("clip"));
    }

    #[test]
    fn allowed_file_uses_the_last_extension() {
        assert!(allowed_file("archive.tar.mp4"));
        assert!(!allowed_file("clip.mp4.txt"));
    }

    #[test]
    fn sample_gallery_is_newest_first() {
        let content = SiteContent::sample();
        assert!(content
            .videos
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn categories_are_unique_and_sorted() {
        let content = SiteContent::sample();
        let categories = content.categories();
        assert_eq!(categories, vec!["coding", "music", "travel"]);
    }

    #[test]
    fn from_json_round_trip_and_ordering() {
        let json = r#"{
            "owner": "Showreel",
            "tagline": "t",
            "about": "a",
            "videos": [
                {
                    "public_id": "old",
                    "url": "u1",
                    "title": "Old",
                    "created_at": "2024-01-01T00:00:00Z"
                },
                {
                    "public_id": "new",
                    "url": "u2",
                    "title": "New",
                    "category": "coding",
                    "created_at": "2025-01-01T00:00:00Z"
                }
            ]
        }"#;
        let content = SiteContent::from_json(json).unwrap();
        assert_eq!(content.videos[0].public_id, "new");
        // Missing category deserializes to None.
        assert_eq!(content.videos[1].category, None);
    }

    #[test]
    fn from_json_rejects_blank_owner() {
        let json = r#"{"owner": "  ", "tagline": "", "about": "", "videos": []}"#;
        assert!(matches!(
            SiteContent::from_json(json),
            Err(ShowreelError::Content(_))
        ));
    }

    #[test]
    fn dom_id_is_slash_free() {
        let content = SiteContent::sample();
        let id = content.videos[0].dom_id();
        assert!(id.starts_with("video-"));
        assert!(!id.contains('/'));
    }

    #[test]
    fn add_video_keeps_order() {
        let mut content = SiteContent::sample();
        let newest = Video {
            public_id: "portfolio_uploads/fresh".to_string(),
            url: "file:///tmp/fresh.mp4".to_string(),
            title: "fresh".to_string(),
            category: Some(DEFAULT_CATEGORY.to_string()),
            created_at: Utc::now() + Duration::days(1),
        };
        content.add_video(newest);
        assert_eq!(content.videos[0].public_id, "portfolio_uploads/fresh");
    }
}
