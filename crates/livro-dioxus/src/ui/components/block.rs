use crate::ui::components::{
    AccordionBlock, CalloutBlock, CodeBlock, DividerBlock, ImageBlock, QuoteBlock, TabsBlock,
    TextBlock, VideoBlock,
};
use dioxus::prelude::*;
use livro_engine::models::{BlockContent, ContentBlock, Language};

/// Renders one content block in the requested language. Localization is
/// whole-payload: Portuguese if present, else the English original.
#[component]
pub fn Block(block: ContentBlock, language: Language) -> Element {
    let content = block.localized(language).clone();
    let extra_class = block.config.class.clone().unwrap_or_default();
    let style_attr: String = block
        .config
        .style
        .iter()
        .map(|(k, v)| format!("{k}: {v};"))
        .collect();

    rsx! {
        div {
            class: "content-block {extra_class}",
            style: "{style_attr}",
            BlockContentView { content }
        }
    }
}

/// Dispatch over the payload union. Unknown payloads are skipped with a
/// warning so the rest of the sequence keeps rendering.
#[component]
pub fn BlockContentView(content: BlockContent) -> Element {
    match content {
        BlockContent::Text { html } => rsx! {
            TextBlock { html }
        },
        BlockContent::Image { src, alt, caption } => rsx! {
            ImageBlock { src, alt, caption }
        },
        BlockContent::Quote { text, author } => rsx! {
            QuoteBlock { text, author }
        },
        BlockContent::Callout { kind, title, body } => rsx! {
            CalloutBlock { kind, title, body }
        },
        BlockContent::Accordion { items } => rsx! {
            AccordionBlock { items }
        },
        BlockContent::Tabs { panes } => rsx! {
            TabsBlock { panes }
        },
        BlockContent::Code {
            code,
            language,
            filename,
        } => rsx! {
            CodeBlock { code, language, filename }
        },
        BlockContent::Video { src, kind, title } => rsx! {
            VideoBlock { src, kind, title }
        },
        BlockContent::Divider { style } => rsx! {
            DividerBlock { style }
        },
        BlockContent::Unknown(value) => {
            let tag = value
                .get("type")
                .and_then(|v| v.as_str())
                .unwrap_or("<untagged>");
            log::warn!("Unknown block type: {tag}");
            rsx! {}
        }
    }
}
