use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::language::Language;
use crate::models::section::Section;

/// Ordered container of sections with bilingual metadata.
///
/// `chapter_number` is the reader-facing sequential number; `display_order`
/// is the dense position inside the ebook. Both are reassigned together when
/// chapters are inserted, removed, or reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub id: Uuid,
    pub chapter_number: u32,
    pub display_order: u32,
    pub title_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_pt: Option<String>,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_pt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_read_time_minutes: Option<u32>,
    #[serde(default)]
    pub is_free_preview: bool,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub sections: Vec<Section>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Chapter {
    pub fn new(title_en: impl Into<String>) -> Self {
        let title_en = title_en.into();
        let slug = slugify(&title_en);
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            chapter_number: 0,
            display_order: 0,
            title_en,
            title_pt: None,
            slug,
            summary_en: None,
            summary_pt: None,
            estimated_read_time_minutes: None,
            is_free_preview: false,
            is_published: false,
            sections: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn localized_title(&self, lang: Language) -> &str {
        crate::localize::pick(lang, self.title_en.as_str(), self.title_pt.as_deref())
    }

    pub fn localized_summary(&self, lang: Language) -> Option<&str> {
        crate::localize::pick_optional(lang, self.summary_en.as_deref(), self.summary_pt.as_deref())
    }

    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.display_order);
        sections
    }

    pub fn push_section(&mut self, section: Section) -> Uuid {
        let id = section.id;
        self.sections.push(section);
        self.renumber_sections();
        self.updated_at = Utc::now();
        id
    }

    pub fn remove_section(&mut self, id: Uuid) -> Option<Section> {
        let index = self.sections.iter().position(|s| s.id == id)?;
        let removed = self.sections.remove(index);
        self.renumber_sections();
        self.updated_at = Utc::now();
        Some(removed)
    }

    pub fn move_section_up(&mut self, id: Uuid) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.sections.swap(index, index - 1);
        self.renumber_sections();
        self.updated_at = Utc::now();
        true
    }

    pub fn move_section_down(&mut self, id: Uuid) -> bool {
        let Some(index) = self.sections.iter().position(|s| s.id == id) else {
            return false;
        };
        if index + 1 >= self.sections.len() {
            return false;
        }
        self.sections.swap(index, index + 1);
        self.renumber_sections();
        self.updated_at = Utc::now();
        true
    }

    pub fn section(&self, id: Uuid) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: Uuid) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    fn renumber_sections(&mut self) {
        for (i, section) in self.sections.iter_mut().enumerate() {
            section.display_order = (i + 1) as u32;
        }
    }
}

/// Lowercase ASCII slug from a title: alphanumerics kept, runs of anything
/// else collapse to single dashes.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_dash = true;
    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Getting Started"), "getting-started");
        assert_eq!(slugify("  What's Next?  "), "what-s-next");
        assert_eq!(slugify("Ética & Hábito"), "tica-h-bito");
    }

    #[test]
    fn new_chapter_slug_comes_from_title() {
        let chapter = Chapter::new("The First Step");
        assert_eq!(chapter.slug, "the-first-step");
    }

    #[test]
    fn localized_title_falls_back_to_english() {
        let mut chapter = Chapter::new("Discipline");
        assert_eq!(chapter.localized_title(Language::Pt), "Discipline");
        chapter.title_pt = Some("Disciplina".to_string());
        assert_eq!(chapter.localized_title(Language::Pt), "Disciplina");
        assert_eq!(chapter.localized_title(Language::En), "Discipline");
    }

    #[test]
    fn section_reorder_keeps_dense_orders() {
        let mut chapter = Chapter::new("C1");
        let a = chapter.push_section(Section::new(Some("A".into())));
        let b = chapter.push_section(Section::new(Some("B".into())));
        chapter.push_section(Section::new(Some("C".into())));

        assert!(chapter.move_section_down(a));
        let orders: Vec<u32> = chapter.sections.iter().map(|s| s.display_order).collect();
        assert_eq!(orders, vec![1, 2, 3]);
        assert_eq!(chapter.sections[0].id, b);

        chapter.remove_section(b).unwrap();
        let orders: Vec<u32> = chapter.sections.iter().map(|s| s.display_order).collect();
        assert_eq!(orders, vec![1, 2]);
    }
}
