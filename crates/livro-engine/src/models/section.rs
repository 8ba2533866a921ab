use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::block::ContentBlock;
use crate::models::language::Language;

/// Layout treatment for a section. Presentation hint only; the block
/// semantics are identical across types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionType {
    #[default]
    Standard,
    TwoColumn,
    FullWidth,
}

impl SectionType {
    pub fn css_class(&self) -> &'static str {
        match self {
            SectionType::Standard => "section-standard",
            SectionType::TwoColumn => "section-two-column",
            SectionType::FullWidth => "section-full-width",
        }
    }
}

/// Ordered container of blocks inside a chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Uuid,
    pub display_order: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heading_pt: Option<String>,
    #[serde(default)]
    pub section_type: SectionType,
    #[serde(default)]
    pub blocks: Vec<ContentBlock>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Section {
    pub fn new(heading_en: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            display_order: 0,
            heading_en,
            heading_pt: None,
            section_type: SectionType::default(),
            blocks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn localized_heading(&self, lang: Language) -> Option<&str> {
        crate::localize::pick_optional(lang, self.heading_en.as_deref(), self.heading_pt.as_deref())
    }

    /// Blocks in display order. Stored order is kept sorted by the mutation
    /// operations, so this is a cheap pass for already-well-formed documents.
    pub fn ordered_blocks(&self) -> Vec<&ContentBlock> {
        let mut blocks: Vec<&ContentBlock> = self.blocks.iter().collect();
        blocks.sort_by_key(|b| b.display_order);
        blocks
    }

    /// Append a block at the end.
    pub fn push_block(&mut self, block: ContentBlock) -> Uuid {
        let id = block.id;
        self.blocks.push(block);
        self.renumber_blocks();
        self.updated_at = Utc::now();
        id
    }

    /// Insert a block at a position (clamped to the current length).
    pub fn insert_block(&mut self, index: usize, block: ContentBlock) -> Uuid {
        let id = block.id;
        let index = index.min(self.blocks.len());
        self.blocks.insert(index, block);
        self.renumber_blocks();
        self.updated_at = Utc::now();
        id
    }

    /// Remove a block. Removal is immediate and irreversible.
    pub fn remove_block(&mut self, id: Uuid) -> Option<ContentBlock> {
        let index = self.blocks.iter().position(|b| b.id == id)?;
        let removed = self.blocks.remove(index);
        self.renumber_blocks();
        self.updated_at = Utc::now();
        Some(removed)
    }

    pub fn move_block_up(&mut self, id: Uuid) -> bool {
        let Some(index) = self.blocks.iter().position(|b| b.id == id) else {
            return false;
        };
        if index == 0 {
            return false;
        }
        self.blocks.swap(index, index - 1);
        self.renumber_blocks();
        self.updated_at = Utc::now();
        true
    }

    pub fn move_block_down(&mut self, id: Uuid) -> bool {
        let Some(index) = self.blocks.iter().position(|b| b.id == id) else {
            return false;
        };
        if index + 1 >= self.blocks.len() {
            return false;
        }
        self.blocks.swap(index, index + 1);
        self.renumber_blocks();
        self.updated_at = Utc::now();
        true
    }

    pub fn block(&self, id: Uuid) -> Option<&ContentBlock> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn block_mut(&mut self, id: Uuid) -> Option<&mut ContentBlock> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    /// Keep `display_order` dense and contiguous (1-based).
    fn renumber_blocks(&mut self) {
        for (i, block) in self.blocks.iter_mut().enumerate() {
            block.display_order = (i + 1) as u32;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::block::BlockContent;

    fn text_block(s: &str) -> ContentBlock {
        ContentBlock::new(BlockContent::Text {
            html: format!("<p>{s}</p>"),
        })
    }

    fn orders(section: &Section) -> Vec<u32> {
        section.blocks.iter().map(|b| b.display_order).collect()
    }

    #[test]
    fn push_assigns_dense_one_based_order() {
        let mut section = Section::new(None);
        section.push_block(text_block("a"));
        section.push_block(text_block("b"));
        section.push_block(text_block("c"));
        assert_eq!(orders(&section), vec![1, 2, 3]);
    }

    #[test]
    fn remove_renumbers_contiguously() {
        let mut section = Section::new(None);
        section.push_block(text_block("a"));
        let b = section.push_block(text_block("b"));
        section.push_block(text_block("c"));

        section.remove_block(b).unwrap();
        assert_eq!(orders(&section), vec![1, 2]);
    }

    #[test]
    fn move_up_swaps_and_renumbers() {
        let mut section = Section::new(None);
        section.push_block(text_block("a"));
        let b = section.push_block(text_block("b"));

        assert!(section.move_block_up(b));
        assert_eq!(section.blocks[0].id, b);
        assert_eq!(orders(&section), vec![1, 2]);

        // Already at the top: no-op.
        assert!(!section.move_block_up(b));
    }

    #[test]
    fn move_down_at_end_is_noop() {
        let mut section = Section::new(None);
        section.push_block(text_block("a"));
        let b = section.push_block(text_block("b"));
        assert!(!section.move_block_down(b));
        assert_eq!(orders(&section), vec![1, 2]);
    }

    #[test]
    fn insert_clamps_index() {
        let mut section = Section::new(None);
        section.push_block(text_block("a"));
        let late = section.insert_block(99, text_block("z"));
        assert_eq!(section.blocks[1].id, late);
        assert_eq!(orders(&section), vec![1, 2]);
    }

    #[test]
    fn localized_heading_falls_back() {
        let mut section = Section::new(Some("Heading".to_string()));
        assert_eq!(section.localized_heading(Language::Pt), Some("Heading"));
        section.heading_pt = Some("Título".to_string());
        assert_eq!(section.localized_heading(Language::Pt), Some("Título"));
        assert_eq!(section.localized_heading(Language::En), Some("Heading"));
    }
}
