//! Block kind descriptors.
//!
//! The vocabulary is a closed set, so the registry is a static table rather
//! than a runtime registration mechanism. The authoring UI's block picker is
//! generated from it, and new blocks start from the descriptor's default
//! payload.

use crate::models::block::{
    AccordionItem, BlockContent, BlockKind, CalloutKind, DividerStyle, TabPane, VideoKind,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDescriptor {
    pub kind: BlockKind,
    pub label: &'static str,
    pub description: &'static str,
}

static DESCRIPTORS: [BlockDescriptor; 9] = [
    BlockDescriptor {
        kind: BlockKind::Text,
        label: "Text",
        description: "Rich text content",
    },
    BlockDescriptor {
        kind: BlockKind::Image,
        label: "Image",
        description: "Image with caption",
    },
    BlockDescriptor {
        kind: BlockKind::Quote,
        label: "Quote",
        description: "Blockquote with attribution",
    },
    BlockDescriptor {
        kind: BlockKind::Callout,
        label: "Callout",
        description: "Info, warning, tip, or note",
    },
    BlockDescriptor {
        kind: BlockKind::Accordion,
        label: "Accordion",
        description: "Expandable content sections",
    },
    BlockDescriptor {
        kind: BlockKind::Tabs,
        label: "Tabs",
        description: "Tabbed content panels",
    },
    BlockDescriptor {
        kind: BlockKind::Code,
        label: "Code",
        description: "Code snippet with copy button",
    },
    BlockDescriptor {
        kind: BlockKind::Video,
        label: "Video",
        description: "Embedded video",
    },
    BlockDescriptor {
        kind: BlockKind::Divider,
        label: "Divider",
        description: "Visual separator",
    },
];

/// All descriptors in picker order.
pub fn descriptors() -> &'static [BlockDescriptor] {
    &DESCRIPTORS
}

pub fn descriptor(kind: BlockKind) -> &'static BlockDescriptor {
    // The table covers every variant of the closed set.
    DESCRIPTORS
        .iter()
        .find(|d| d.kind == kind)
        .unwrap_or(&DESCRIPTORS[0])
}

/// Default payload for a freshly inserted block of `kind`.
pub fn default_content(kind: BlockKind) -> BlockContent {
    match kind {
        BlockKind::Text => BlockContent::Text {
            html: "<p></p>".to_string(),
        },
        BlockKind::Image => BlockContent::Image {
            src: String::new(),
            alt: String::new(),
            caption: None,
        },
        BlockKind::Quote => BlockContent::Quote {
            text: String::new(),
            author: None,
        },
        BlockKind::Callout => BlockContent::Callout {
            kind: CalloutKind::Info,
            title: None,
            body: String::new(),
        },
        BlockKind::Accordion => BlockContent::Accordion {
            items: vec![AccordionItem {
                title: "Item 1".to_string(),
                body: String::new(),
            }],
        },
        BlockKind::Tabs => BlockContent::Tabs {
            panes: vec![TabPane {
                label: "Tab 1".to_string(),
                body: String::new(),
            }],
        },
        BlockKind::Code => BlockContent::Code {
            code: String::new(),
            language: Some("rust".to_string()),
            filename: None,
        },
        BlockKind::Video => BlockContent::Video {
            src: String::new(),
            kind: VideoKind::Youtube,
            title: None,
        },
        BlockKind::Divider => BlockContent::Divider {
            style: DividerStyle::Line,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_a_descriptor() {
        for kind in BlockKind::ALL {
            assert_eq!(descriptor(kind).kind, kind);
        }
        assert_eq!(descriptors().len(), BlockKind::ALL.len());
    }

    #[test]
    fn default_content_matches_its_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(default_content(kind).kind(), Some(kind));
        }
    }

    #[test]
    fn accordion_and_tabs_defaults_are_nonempty() {
        let BlockContent::Accordion { items } = default_content(BlockKind::Accordion) else {
            panic!("expected accordion");
        };
        assert_eq!(items.len(), 1);

        let BlockContent::Tabs { panes } = default_content(BlockKind::Tabs) else {
            panic!("expected tabs");
        };
        assert_eq!(panes.len(), 1);
    }
}
