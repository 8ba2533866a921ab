use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::models::language::Language;

/// The closed set of block kinds the content model supports.
///
/// The wire tag (`text`, `image`, ...) is the persisted representation and
/// must stay stable; previously authored documents depend on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    Text,
    Image,
    Quote,
    Callout,
    Accordion,
    Tabs,
    Code,
    Video,
    Divider,
}

impl BlockKind {
    pub const ALL: [BlockKind; 9] = [
        BlockKind::Text,
        BlockKind::Image,
        BlockKind::Quote,
        BlockKind::Callout,
        BlockKind::Accordion,
        BlockKind::Tabs,
        BlockKind::Code,
        BlockKind::Video,
        BlockKind::Divider,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Quote => "quote",
            BlockKind::Callout => "callout",
            BlockKind::Accordion => "accordion",
            BlockKind::Tabs => "tabs",
            BlockKind::Code => "code",
            BlockKind::Video => "video",
            BlockKind::Divider => "divider",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown block kind: {0}")]
pub struct UnknownBlockKind(pub String);

impl FromStr for BlockKind {
    type Err = UnknownBlockKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::ALL
            .iter()
            .find(|k| k.tag() == s)
            .copied()
            .ok_or_else(|| UnknownBlockKind(s.to_string()))
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalloutKind {
    #[default]
    Info,
    Warning,
    Tip,
    Note,
}

impl CalloutKind {
    pub const ALL: [CalloutKind; 4] = [
        CalloutKind::Info,
        CalloutKind::Warning,
        CalloutKind::Tip,
        CalloutKind::Note,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            CalloutKind::Info => "info",
            CalloutKind::Warning => "warning",
            CalloutKind::Tip => "tip",
            CalloutKind::Note => "note",
        }
    }

    pub fn parse(s: &str) -> Option<CalloutKind> {
        CalloutKind::ALL.iter().find(|k| k.tag() == s).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VideoKind {
    #[default]
    Youtube,
    Vimeo,
    File,
}

impl VideoKind {
    pub fn tag(&self) -> &'static str {
        match self {
            VideoKind::Youtube => "youtube",
            VideoKind::Vimeo => "vimeo",
            VideoKind::File => "file",
        }
    }

    pub fn parse(s: &str) -> Option<VideoKind> {
        match s {
            "youtube" => Some(VideoKind::Youtube),
            "vimeo" => Some(VideoKind::Vimeo),
            "file" => Some(VideoKind::File),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DividerStyle {
    #[default]
    Line,
    Dots,
    Space,
}

/// One expandable item inside an accordion block. `body` is free-form HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccordionItem {
    pub title: String,
    pub body: String,
}

/// One pane inside a tabs block. `body` is free-form HTML.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabPane {
    pub label: String,
    pub body: String,
}

/// Typed, serializable block payload.
///
/// Content persists as this tagged union rather than as markup that has to be
/// re-scanned; rendering is a pure dispatch over the variants. Documents
/// written by older tools may carry kinds this build does not know, so
/// deserialization keeps them as [`BlockContent::Unknown`] and render paths
/// skip them instead of failing the whole chapter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BlockContent {
    Text {
        html: String,
    },
    Image {
        src: String,
        alt: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        caption: Option<String>,
    },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    Callout {
        kind: CalloutKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
        body: String,
    },
    Accordion {
        items: Vec<AccordionItem>,
    },
    Tabs {
        panes: Vec<TabPane>,
    },
    Code {
        code: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filename: Option<String>,
    },
    Video {
        src: String,
        kind: VideoKind,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Divider {
        #[serde(default)]
        style: DividerStyle,
    },
    #[serde(untagged)]
    Unknown(serde_json::Value),
}

impl BlockContent {
    /// The kind tag of this payload, or `None` for content this build cannot
    /// interpret.
    pub fn kind(&self) -> Option<BlockKind> {
        match self {
            BlockContent::Text { .. } => Some(BlockKind::Text),
            BlockContent::Image { .. } => Some(BlockKind::Image),
            BlockContent::Quote { .. } => Some(BlockKind::Quote),
            BlockContent::Callout { .. } => Some(BlockKind::Callout),
            BlockContent::Accordion { .. } => Some(BlockKind::Accordion),
            BlockContent::Tabs { .. } => Some(BlockKind::Tabs),
            BlockContent::Code { .. } => Some(BlockKind::Code),
            BlockContent::Video { .. } => Some(BlockKind::Video),
            BlockContent::Divider { .. } => Some(BlockKind::Divider),
            BlockContent::Unknown(_) => None,
        }
    }
}

/// Free-form presentation overrides attached to a block by the author.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BlockConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub style: BTreeMap<String, String>,
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum TranslationError {
    #[error("translation kind {found} does not match block kind {expected}")]
    KindMismatch {
        expected: BlockKind,
        found: String,
    },
    #[error("block content is not translatable")]
    Untranslatable,
}

/// A single unit of content inside a section.
///
/// `content_en` is always populated. `content_pt` is optional; readers fall
/// back to English for the whole payload, never per-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBlock {
    pub id: Uuid,
    pub display_order: u32,
    pub content_en: BlockContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_pt: Option<BlockContent>,
    #[serde(default, skip_serializing_if = "BlockConfig::is_default")]
    pub config: BlockConfig,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlockConfig {
    fn is_default(&self) -> bool {
        *self == BlockConfig::default()
    }
}

impl ContentBlock {
    pub fn new(content_en: BlockContent) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            display_order: 0,
            content_en,
            content_pt: None,
            config: BlockConfig::default(),
            created_at: now,
            updated_at: now,
        }
    }

    pub fn kind(&self) -> Option<BlockKind> {
        self.content_en.kind()
    }

    /// Resolve the payload for a language, falling back to English as a whole
    /// when no Portuguese payload exists.
    pub fn localized(&self, lang: Language) -> &BlockContent {
        crate::localize::pick(lang, &self.content_en, self.content_pt.as_ref())
    }

    /// Replace the English payload. The kind may change freely; an existing
    /// translation of a different kind is discarded so the block never holds
    /// mixed kinds.
    pub fn set_content(&mut self, content: BlockContent) {
        if self.content_pt.as_ref().and_then(BlockContent::kind) != content.kind() {
            self.content_pt = None;
        }
        self.content_en = content;
        self.updated_at = Utc::now();
    }

    /// Attach or replace the Portuguese payload. The translation must be the
    /// same kind as the English payload.
    pub fn set_translation(&mut self, content: BlockContent) -> Result<(), TranslationError> {
        let expected = self.kind().ok_or(TranslationError::Untranslatable)?;
        match content.kind() {
            Some(kind) if kind == expected => {
                self.content_pt = Some(content);
                self.updated_at = Utc::now();
                Ok(())
            }
            Some(kind) => Err(TranslationError::KindMismatch {
                expected,
                found: kind.tag().to_string(),
            }),
            None => Err(TranslationError::KindMismatch {
                expected,
                found: "unknown".to_string(),
            }),
        }
    }

    /// Drop the Portuguese payload, reverting readers to the English fallback.
    pub fn clear_translation(&mut self) {
        self.content_pt = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(html: &str) -> BlockContent {
        BlockContent::Text {
            html: html.to_string(),
        }
    }

    #[test]
    fn kind_tag_roundtrips_through_from_str() {
        for kind in BlockKind::ALL {
            assert_eq!(kind.tag().parse::<BlockKind>().unwrap(), kind);
        }
    }

    #[test]
    fn unknown_kind_tag_is_an_error() {
        let err = "carousel".parse::<BlockKind>().unwrap_err();
        assert_eq!(err, UnknownBlockKind("carousel".to_string()));
    }

    #[test]
    fn content_serializes_with_type_tag() {
        let json = serde_json::to_value(text("<p>hi</p>")).unwrap();
        assert_eq!(json["type"], "text");
        assert_eq!(json["html"], "<p>hi</p>");
    }

    #[test]
    fn unknown_content_survives_deserialization() {
        let json = r#"{"type":"carousel","slides":[1,2,3]}"#;
        let content: BlockContent = serde_json::from_str(json).unwrap();
        assert!(matches!(content, BlockContent::Unknown(_)));
        assert_eq!(content.kind(), None);

        // And round-trips back out unchanged.
        let out = serde_json::to_value(&content).unwrap();
        assert_eq!(out["type"], "carousel");
    }

    #[test]
    fn set_translation_rejects_kind_mismatch() {
        let mut block = ContentBlock::new(text("<p>hello</p>"));
        let err = block
            .set_translation(BlockContent::Divider {
                style: DividerStyle::Line,
            })
            .unwrap_err();
        assert!(matches!(err, TranslationError::KindMismatch { .. }));
        assert!(block.content_pt.is_none());
    }

    #[test]
    fn set_translation_accepts_matching_kind() {
        let mut block = ContentBlock::new(text("<p>hello</p>"));
        block.set_translation(text("<p>olá</p>")).unwrap();
        assert_eq!(block.localized(Language::Pt), &text("<p>olá</p>"));
    }

    #[test]
    fn set_content_discards_translation_of_old_kind() {
        let mut block = ContentBlock::new(text("<p>hello</p>"));
        block.set_translation(text("<p>olá</p>")).unwrap();
        block.set_content(BlockContent::Divider {
            style: DividerStyle::Dots,
        });
        assert!(block.content_pt.is_none());
    }

    #[test]
    fn block_without_translation_falls_back_whole_payload() {
        let block = ContentBlock::new(text("<p>hello</p>"));
        assert_eq!(block.localized(Language::Pt), &block.content_en);
        assert_eq!(block.localized(Language::En), &block.content_en);
    }
}
