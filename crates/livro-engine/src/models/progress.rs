use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-ebook reading position and completion state, persisted alongside the
/// library so reopening the app resumes where the reader left off.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadingProgress {
    pub ebook_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_chapter_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_section_id: Option<Uuid>,
    #[serde(default)]
    pub completion_percent: f32,
    #[serde(default)]
    pub completed_chapters: Vec<Uuid>,
    #[serde(default)]
    pub bookmarks: Vec<Uuid>,
    pub started_at: DateTime<Utc>,
    pub last_read_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

impl ReadingProgress {
    pub fn new(ebook_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            ebook_id,
            last_chapter_id: None,
            last_section_id: None,
            completion_percent: 0.0,
            completed_chapters: Vec::new(),
            bookmarks: Vec::new(),
            started_at: now,
            last_read_at: now,
            completed_at: None,
        }
    }

    /// Record that a chapter was opened.
    pub fn visit_chapter(&mut self, chapter_id: Uuid) {
        self.last_chapter_id = Some(chapter_id);
        self.last_section_id = None;
        self.last_read_at = Utc::now();
    }

    /// Mark a chapter finished and refresh the completion percentage.
    /// Completing the final outstanding chapter stamps `completed_at`.
    pub fn complete_chapter(&mut self, chapter_id: Uuid, total_chapters: usize) {
        if !self.completed_chapters.contains(&chapter_id) {
            self.completed_chapters.push(chapter_id);
        }
        self.completion_percent = if total_chapters == 0 {
            0.0
        } else {
            (self.completed_chapters.len() as f32 / total_chapters as f32) * 100.0
        };
        if total_chapters > 0 && self.completed_chapters.len() >= total_chapters {
            self.completed_at.get_or_insert_with(Utc::now);
        }
        self.last_read_at = Utc::now();
    }

    pub fn toggle_bookmark(&mut self, block_id: Uuid) {
        if let Some(index) = self.bookmarks.iter().position(|b| *b == block_id) {
            self.bookmarks.remove(index);
        } else {
            self.bookmarks.push(block_id);
        }
        self.last_read_at = Utc::now();
    }

    pub fn is_bookmarked(&self, block_id: Uuid) -> bool {
        self.bookmarks.contains(&block_id)
    }
}
