//! Component rendering tests over server-side rendered output.
//!
//! These assert the reader-facing contracts: initial widget state, per-kind
//! dispatch, unknown-block skipping, and the authoring→markup→render path.

use dioxus::prelude::*;
use dioxus_ssr::render_element;
use livro_dioxus::ui::components::{Block, RichContent, SectionView, TabsBlock};
use livro_engine::models::{
    AccordionItem, BlockContent, CalloutKind, ContentBlock, Language, Section, TabPane,
};
use livro_engine::richtext::markup;

fn two_item_accordion() -> Vec<AccordionItem> {
    vec![
        AccordionItem {
            title: "First question".to_string(),
            body: "<p>First answer</p>".to_string(),
        },
        AccordionItem {
            title: "Second question".to_string(),
            body: "<p>Second answer</p>".to_string(),
        },
    ]
}

#[test]
fn accordion_renders_with_all_panels_collapsed() {
    let items = two_item_accordion();
    let html = render_element(rsx! {
        livro_dioxus::ui::components::AccordionBlock { items }
    });

    assert!(html.contains("First question"));
    assert!(html.contains("Second question"));
    // Collapsed panels are not mounted at all.
    assert!(!html.contains("accordion-content"));
    assert!(!html.contains("First answer"));
}

#[test]
fn tabs_render_with_first_pane_active() {
    let panes = vec![
        TabPane {
            label: "Setup".to_string(),
            body: "<p>setup pane</p>".to_string(),
        },
        TabPane {
            label: "Usage".to_string(),
            body: "<p>usage pane</p>".to_string(),
        },
    ];
    let html = render_element(rsx! {
        TabsBlock { panes }
    });

    assert!(html.contains("Setup"));
    assert!(html.contains("Usage"));
    assert!(html.contains("setup pane"));
    // Exactly one pane is mounted.
    assert!(!html.contains("usage pane"));
    assert!(html.contains("tab-button active"));
}

#[test]
fn unknown_block_is_skipped_and_known_blocks_render_in_order() {
    let mut section = Section::new(Some("Mixed".to_string()));
    section.push_block(ContentBlock::new(BlockContent::Quote {
        text: "Begin anywhere.".to_string(),
        author: None,
    }));
    section.push_block(ContentBlock::new(BlockContent::Unknown(
        serde_json::json!({"type": "hologram", "payload": 1}),
    )));
    section.push_block(ContentBlock::new(BlockContent::Text {
        html: "<p>closing words</p>".to_string(),
    }));

    let html = render_element(rsx! {
        SectionView { section, language: Language::En }
    });

    let quote_at = html.find("Begin anywhere.").expect("quote rendered");
    let text_at = html.find("closing words").expect("text rendered");
    assert!(quote_at < text_at, "known blocks keep their order");
    assert!(!html.contains("hologram"));
}

#[test]
fn block_falls_back_to_english_when_no_translation() {
    let block = ContentBlock::new(BlockContent::Quote {
        text: "Only in English.".to_string(),
        author: None,
    });

    let html = render_element(rsx! {
        Block { block, language: Language::Pt }
    });
    assert!(html.contains("Only in English."));
}

#[test]
fn block_uses_translation_when_present() {
    let mut block = ContentBlock::new(BlockContent::Quote {
        text: "In English.".to_string(),
        author: None,
    });
    block
        .set_translation(BlockContent::Quote {
            text: "Em português.".to_string(),
            author: None,
        })
        .unwrap();

    let html = render_element(rsx! {
        Block { block, language: Language::Pt }
    });
    assert!(html.contains("Em português."));
    assert!(!html.contains("In English."));
}

#[test]
fn code_block_shows_header_label_and_copy_control() {
    let block = ContentBlock::new(BlockContent::Code {
        code: "cargo test".to_string(),
        language: Some("bash".to_string()),
        filename: Some("ci.sh".to_string()),
    });
    let html = render_element(rsx! {
        Block { block, language: Language::En }
    });

    // Filename wins over language as the header label.
    assert!(html.contains("ci.sh"));
    assert!(html.contains("cargo test"));
    assert!(html.contains("copy-button"));
    assert!(html.contains("Copy"));
}

/// The end-to-end authoring path: an inserted two-item accordion fragment
/// rendered through the rich-content renderer yields a two-item accordion,
/// both panels initially collapsed.
#[test]
fn authored_accordion_fragment_renders_interactive_and_collapsed() {
    let fragment = markup::accordion_fragment(&two_item_accordion());
    let html = render_element(rsx! {
        RichContent { html: fragment }
    });

    assert_eq!(html.matches("accordion-trigger").count(), 2);
    assert!(html.contains("First question"));
    assert!(html.contains("Second question"));
    assert!(!html.contains("First answer"));
    assert!(!html.contains("Second answer"));
}

#[test]
fn rich_content_renders_prose_runs_and_widgets_together() {
    let callout = markup::callout_fragment(CalloutKind::Tip, Some("Hint"), "<p>Go slow.</p>");
    let body = format!("<p>before</p>{callout}<p>after</p>");
    let html = render_element(rsx! {
        RichContent { html: body }
    });

    assert!(html.contains("before"));
    assert!(html.contains("after"));
    assert!(html.contains("callout-tip"));
    assert!(html.contains("Hint"));
    assert!(html.contains("Go slow."));
}

#[test]
fn plain_text_body_renders_heading_and_paragraph() {
    let html = render_element(rsx! {
        RichContent { html: "TITLE\n\nBody text".to_string() }
    });
    assert!(html.contains("<h2>TITLE</h2>"));
    assert!(html.contains("<p>Body text</p>"));
}
