use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::chapter::{Chapter, slugify};
use crate::models::language::Language;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EbookStatus {
    #[default]
    Draft,
    Active,
    Archived,
}

impl EbookStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EbookStatus::Draft => "draft",
            EbookStatus::Active => "active",
            EbookStatus::Archived => "archived",
        }
    }
}

/// Per-ebook theming applied by the reader UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeConfig {
    pub primary_color: String,
    pub accent_color: String,
    pub font_family: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            primary_color: "#f97316".to_string(),
            accent_color: "#ef4444".to_string(),
            font_family: "Inter".to_string(),
        }
    }
}

/// Top-level product entity owning its chapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ebook {
    pub id: Uuid,
    pub slug: String,
    pub title_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_pt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_pt: Option<String>,
    #[serde(default)]
    pub status: EbookStatus,
    #[serde(default)]
    pub theme: ThemeConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_read_time_minutes: Option<u32>,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl Ebook {
    pub fn new(title_en: impl Into<String>) -> Self {
        let title_en = title_en.into();
        let slug = slugify(&title_en);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            slug,
            title_en,
            title_pt: None,
            description_en: None,
            description_pt: None,
            status: EbookStatus::default(),
            theme: ThemeConfig::default(),
            estimated_read_time_minutes: None,
            chapters: Vec::new(),
            created_at: now,
            updated_at: now,
            published_at: None,
        }
    }

    pub fn localized_title(&self, lang: Language) -> &str {
        crate::localize::pick(lang, self.title_en.as_str(), self.title_pt.as_deref())
    }

    pub fn localized_description(&self, lang: Language) -> Option<&str> {
        crate::localize::pick_optional(
            lang,
            self.description_en.as_deref(),
            self.description_pt.as_deref(),
        )
    }

    /// Derived, never stored: storing it alongside the chapter list would let
    /// the two disagree.
    pub fn total_chapters(&self) -> usize {
        self.chapters.len()
    }

    pub fn ordered_chapters(&self) -> Vec<&Chapter> {
        let mut chapters: Vec<&Chapter> = self.chapters.iter().collect();
        chapters.sort_by_key(|c| c.display_order);
        chapters
    }

    pub fn push_chapter(&mut self, chapter: Chapter) -> Uuid {
        let id = chapter.id;
        self.chapters.push(chapter);
        self.renumber_chapters();
        self.updated_at = Utc::now();
        id
    }

    pub fn remove_chapter(&mut self, id: Uuid) -> Option<Chapter> {
        let index = self.chapters.iter().position(|c| c.id == id)?;
        let removed = self.chapters.remove(index);
        self.renumber_chapters();
        self.updated_at = Utc::now();
        Some(removed)
    }

    pub fn move_chapter_up(&mut self, id: Uuid) -> bool {
        let Some(index) = self.chapters.iter().position(|c| c.id == id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.chapters.swap(index, index - 1);
        self.renumber_chapters();
        self.updated_at = Utc::now();
        true
    }

    pub fn move_chapter_down(&mut self, id: Uuid) -> bool {
        let Some(index) = self.chapters.iter().position(|c| c.id == id) else {
            return false;
        };
        if index + 1 >= self.chapters.len() {
            return false;
        }
        self.chapters.swap(index, index + 1);
        self.renumber_chapters();
        self.updated_at = Utc::now();
        true
    }

    pub fn chapter(&self, id: Uuid) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.id == id)
    }

    pub fn chapter_mut(&mut self, id: Uuid) -> Option<&mut Chapter> {
        self.chapters.iter_mut().find(|c| c.id == id)
    }

    pub fn chapter_by_slug(&self, slug: &str) -> Option<&Chapter> {
        self.chapters.iter().find(|c| c.slug == slug)
    }

    pub fn publish(&mut self) {
        self.status = EbookStatus::Active;
        self.published_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Chapter number and display order both stay sequential over the stored
    /// order.
    fn renumber_chapters(&mut self) {
        for (i, chapter) in self.chapters.iter_mut().enumerate() {
            chapter.display_order = (i + 1) as u32;
            chapter.chapter_number = (i + 1) as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_sequential_chapter_numbers() {
        let mut ebook = Ebook::new("Forge Your Focus");
        ebook.push_chapter(Chapter::new("One"));
        ebook.push_chapter(Chapter::new("Two"));
        ebook.push_chapter(Chapter::new("Three"));

        let numbers: Vec<u32> = ebook.chapters.iter().map(|c| c.chapter_number).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
        assert_eq!(ebook.total_chapters(), 3);
    }

    #[test]
    fn remove_renumbers_chapter_numbers() {
        let mut ebook = Ebook::new("Forge Your Focus");
        ebook.push_chapter(Chapter::new("One"));
        let two = ebook.push_chapter(Chapter::new("Two"));
        ebook.push_chapter(Chapter::new("Three"));

        ebook.remove_chapter(two).unwrap();
        let numbers: Vec<u32> = ebook.chapters.iter().map(|c| c.chapter_number).collect();
        assert_eq!(numbers, vec![1, 2]);
        assert_eq!(ebook.chapters[1].title_en, "Three");
    }

    #[test]
    fn move_keeps_number_and_order_in_sync() {
        let mut ebook = Ebook::new("Forge Your Focus");
        let one = ebook.push_chapter(Chapter::new("One"));
        ebook.push_chapter(Chapter::new("Two"));

        assert!(ebook.move_chapter_down(one));
        assert_eq!(ebook.chapters[0].title_en, "Two");
        assert_eq!(ebook.chapters[0].chapter_number, 1);
        assert_eq!(ebook.chapters[0].display_order, 1);
        assert_eq!(ebook.chapters[1].chapter_number, 2);
    }

    #[test]
    fn theme_defaults_are_populated() {
        let ebook = Ebook::new("Forge Your Focus");
        assert_eq!(ebook.theme.primary_color, "#f97316");
        assert_eq!(ebook.theme.font_family, "Inter");
    }

    #[test]
    fn publish_sets_status_and_timestamp() {
        let mut ebook = Ebook::new("Forge Your Focus");
        assert_eq!(ebook.status, EbookStatus::Draft);
        ebook.publish();
        assert_eq!(ebook.status, EbookStatus::Active);
        assert!(ebook.published_at.is_some());
    }
}
