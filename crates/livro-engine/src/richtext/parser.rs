//! Recovery of typed blocks from stored HTML.
//!
//! The input is one opaque HTML string. Tagged containers (`data-block=...`)
//! become typed payloads; everything between them stays an opaque HTML run.
//! Malformed containers — unclosed, unknown kind, missing required children —
//! degrade to plain HTML runs so a bad widget never takes down the rest of
//! the body.

use std::ops::Range;

use crate::models::block::{
    AccordionItem, BlockContent, CalloutKind, TabPane, VideoKind,
};
use crate::richtext::cursor::Cursor;
use crate::richtext::plaintext::{looks_like_html, plain_text_to_html};
use crate::richtext::tags::{
    ElementRef, OpenTag, attr_value, close_element, elements_with_attr, first_named,
    first_with_attr, scan_open_tag,
};
use crate::richtext::text::text_content;

/// One node of a parsed rich-content body.
#[derive(Debug, Clone, PartialEq)]
pub enum RichNode {
    /// A run of markup with no embedded widgets, rendered verbatim.
    Html(String),
    /// A recovered widget payload. Only embeddable kinds occur here
    /// (accordion, tabs, code, video, callout, quote).
    Block(BlockContent),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RichContent {
    pub nodes: Vec<RichNode>,
}

impl RichContent {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of recovered widget blocks.
    pub fn block_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, RichNode::Block(_)))
            .count()
    }
}

/// Parses a stored body into ordered HTML runs and typed blocks. Plain-text
/// bodies (no tag pair anywhere) are converted to HTML first. Parsing is pure:
/// the same input always yields the same tree.
pub fn parse_rich_content(input: &str) -> RichContent {
    let converted;
    let html: &str = if looks_like_html(input) {
        input
    } else {
        converted = plain_text_to_html(input);
        &converted
    };

    let mut nodes = Vec::new();
    let mut run_start = 0usize;
    let mut cur = Cursor::new(html);

    while cur.seek_byte(b'<') {
        let at = cur.i;
        let Some(open) = scan_open_tag(html, at) else {
            cur.bump();
            continue;
        };
        let Some(kind) = embeddable_kind(&open) else {
            cur.i = open.end;
            continue;
        };
        let Some(element) = close_element(html, &open) else {
            // Unclosed container: leave it to the surrounding run.
            cur.i = open.end;
            continue;
        };
        match parse_container(html, &open, &element, kind) {
            Some(content) => {
                push_run(&mut nodes, html, run_start..open.start);
                nodes.push(RichNode::Block(content));
                run_start = element.span.end;
                cur.i = element.span.end;
            }
            None => {
                // Recognized marker but unusable innards; keep as HTML.
                cur.i = element.span.end;
            }
        }
    }
    push_run(&mut nodes, html, run_start..html.len());

    RichContent { nodes }
}

fn push_run(nodes: &mut Vec<RichNode>, html: &str, range: Range<usize>) {
    let run = html[range].trim();
    if !run.is_empty() {
        nodes.push(RichNode::Html(run.to_string()));
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerKind {
    Accordion,
    Tabs,
    Code,
    Video,
    Callout,
    Quote,
}

fn embeddable_kind(open: &OpenTag<'_>) -> Option<ContainerKind> {
    match attr_value(open.attrs, "data-block")?.as_str() {
        "accordion" => Some(ContainerKind::Accordion),
        "tabs" => Some(ContainerKind::Tabs),
        "code" => Some(ContainerKind::Code),
        "video" => Some(ContainerKind::Video),
        "callout" => Some(ContainerKind::Callout),
        "quote" => Some(ContainerKind::Quote),
        _ => None,
    }
}

fn parse_container(
    html: &str,
    open: &OpenTag<'_>,
    element: &ElementRef<'_>,
    kind: ContainerKind,
) -> Option<BlockContent> {
    let inner = element.inner.clone();
    match kind {
        ContainerKind::Accordion => parse_accordion(html, inner),
        ContainerKind::Tabs => parse_tabs(html, inner),
        ContainerKind::Code => parse_code(html, open, inner),
        ContainerKind::Video => parse_video(html, open, inner),
        ContainerKind::Callout => parse_callout(html, open, inner),
        ContainerKind::Quote => parse_quote(html, open, inner),
    }
}

fn parse_accordion(html: &str, inner: Range<usize>) -> Option<BlockContent> {
    let mut items = Vec::new();
    for item in elements_with_attr(html, inner, "data-accordion-item") {
        let trigger = first_with_attr(html, item.inner.clone(), "data-accordion-trigger");
        let content = first_with_attr(html, item.inner.clone(), "data-accordion-content");
        let (Some(trigger), Some(content)) = (trigger, content) else {
            // An item missing its pair is dropped; the rest still parse.
            continue;
        };
        items.push(AccordionItem {
            title: trigger_title(html, &trigger),
            body: html[content.inner].trim().to_string(),
        });
    }
    if items.is_empty() {
        return None;
    }
    Some(BlockContent::Accordion { items })
}

/// Title text of an accordion trigger. Prefers the explicit title span so the
/// expander glyph next to it never leaks into the title.
fn trigger_title(html: &str, trigger: &ElementRef<'_>) -> String {
    if let Some(marked) = first_with_attr(html, trigger.inner.clone(), "data-accordion-title") {
        return text_content(&html[marked.inner]);
    }
    if let Some(span) = first_named(html, trigger.inner.clone(), "span") {
        return text_content(&html[span.inner]);
    }
    text_content(&html[trigger.inner.clone()])
}

fn parse_tabs(html: &str, inner: Range<usize>) -> Option<BlockContent> {
    let buttons = elements_with_attr(html, inner.clone(), "data-tab-button");
    let panels = elements_with_attr(html, inner, "data-tab-content");
    if buttons.is_empty() || panels.is_empty() {
        return None;
    }
    let panes: Vec<TabPane> = buttons
        .iter()
        .zip(panels.iter())
        .map(|(button, panel)| TabPane {
            label: text_content(&html[button.inner.clone()]),
            body: html[panel.inner.clone()].trim().to_string(),
        })
        .collect();
    Some(BlockContent::Tabs { panes })
}

fn parse_code(html: &str, open: &OpenTag<'_>, inner: Range<usize>) -> Option<BlockContent> {
    let code_el = first_named(html, inner.clone(), "code")
        .or_else(|| first_named(html, inner.clone(), "pre"))?;
    let code = html_escape::decode_html_entities(&html[code_el.inner]).into_owned();

    let mut language = attr_value(open.attrs, "data-code-language");
    let mut filename = attr_value(open.attrs, "data-code-filename");
    if language.is_none() && filename.is_none() {
        // Legacy containers only carry the header text; a dot means filename.
        if let Some(header) = first_named(html, inner, "div") {
            let label = text_content(&html[header.inner]);
            if !label.is_empty() {
                if label.contains('.') {
                    filename = Some(label);
                } else {
                    language = Some(label);
                }
            }
        }
    }

    Some(BlockContent::Code {
        code,
        language,
        filename,
    })
}

fn parse_video(html: &str, open: &OpenTag<'_>, inner: Range<usize>) -> Option<BlockContent> {
    let kind = VideoKind::parse(&attr_value(open.attrs, "data-video-type")?)?;
    let (src, title) = if let Some(iframe) = first_named(html, inner.clone(), "iframe") {
        (
            attr_value(iframe.attrs, "src")?,
            attr_value(iframe.attrs, "title"),
        )
    } else if let Some(video) = first_named(html, inner, "video") {
        (
            attr_value(video.attrs, "src")?,
            attr_value(video.attrs, "title"),
        )
    } else {
        return None;
    };
    // The default iframe title is presentation, not content.
    let title = title.filter(|t| t.as_str() != "Video");
    Some(BlockContent::Video { src, kind, title })
}

fn parse_callout(html: &str, open: &OpenTag<'_>, inner: Range<usize>) -> Option<BlockContent> {
    let kind = CalloutKind::parse(&attr_value(open.attrs, "data-callout-type")?)?;
    let (title, body_region) = match first_named(html, inner.clone(), "h4") {
        Some(h4) => (
            Some(text_content(&html[h4.inner.clone()])),
            h4.span.end..inner.end,
        ),
        None => (None, inner),
    };
    let body = unwrap_single_div(html, body_region);
    Some(BlockContent::Callout { kind, title, body })
}

/// If the region is exactly one `<div>` wrapper, return its inner HTML so
/// serialize→parse→serialize does not grow a fresh wrapper each cycle.
fn unwrap_single_div(html: &str, region: Range<usize>) -> String {
    let trimmed_start = region.start + html[region.clone()].len() - html[region.clone()].trim_start().len();
    if let Some(open) = scan_open_tag(html, trimmed_start)
        && open.name == "div"
        && let Some(element) = close_element(html, &open)
        && html[element.span.end..region.end].trim().is_empty()
    {
        return html[element.inner].trim().to_string();
    }
    html[region].trim().to_string()
}

fn parse_quote(html: &str, open: &OpenTag<'_>, inner: Range<usize>) -> Option<BlockContent> {
    let footer = first_named(html, inner.clone(), "footer");
    let text = match first_named(html, inner.clone(), "p") {
        Some(p) => text_content(&html[p.inner]),
        None => {
            let body_end = footer.as_ref().map_or(inner.end, |f| f.span.start);
            text_content(&html[inner.start..body_end])
        }
    };
    if text.is_empty() {
        return None;
    }
    let author = attr_value(open.attrs, "data-author")
        .or_else(|| footer.map(|f| text_content(&html[f.inner])))
        .filter(|a| !a.is_empty());
    Some(BlockContent::Quote { text, author })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::richtext::markup;

    fn single_block(input: &str) -> BlockContent {
        let parsed = parse_rich_content(input);
        assert_eq!(parsed.nodes.len(), 1, "expected one node: {:?}", parsed.nodes);
        match parsed.nodes.into_iter().next().unwrap() {
            RichNode::Block(content) => content,
            RichNode::Html(html) => panic!("expected a block, got html run: {html}"),
        }
    }

    #[test]
    fn body_without_widgets_is_one_html_run() {
        let parsed = parse_rich_content("<p>one</p><p>two</p>");
        assert_eq!(
            parsed.nodes,
            vec![RichNode::Html("<p>one</p><p>two</p>".to_string())]
        );
    }

    #[test]
    fn plain_text_body_is_converted_first() {
        let parsed = parse_rich_content("TITLE\n\nBody text");
        assert_eq!(
            parsed.nodes,
            vec![RichNode::Html("<h2>TITLE</h2>\n<p>Body text</p>".to_string())]
        );
    }

    #[test]
    fn accordion_round_trips() {
        let items = vec![
            AccordionItem {
                title: "First".to_string(),
                body: "<p>one</p>".to_string(),
            },
            AccordionItem {
                title: "Second & last".to_string(),
                body: "<p>two</p>".to_string(),
            },
        ];
        let content = single_block(&markup::accordion_fragment(&items));
        assert_eq!(content, BlockContent::Accordion { items });
    }

    #[test]
    fn tabs_round_trip() {
        let panes = vec![
            TabPane {
                label: "Setup".to_string(),
                body: "<p>install</p>".to_string(),
            },
            TabPane {
                label: "Usage".to_string(),
                body: "<p>run</p>".to_string(),
            },
        ];
        let content = single_block(&markup::tabs_fragment(&panes));
        assert_eq!(content, BlockContent::Tabs { panes });
    }

    #[test]
    fn code_round_trip_keeps_escaped_text() {
        let content = single_block(&markup::code_fragment(
            "if a < b { swap(&mut a, &mut b); }",
            Some("rust"),
            Some("sort.rs"),
        ));
        assert_eq!(
            content,
            BlockContent::Code {
                code: "if a < b { swap(&mut a, &mut b); }".to_string(),
                language: Some("rust".to_string()),
                filename: Some("sort.rs".to_string()),
            }
        );
    }

    #[test]
    fn legacy_code_header_text_is_classified() {
        let html = concat!(
            r#"<div data-block="code">"#,
            r#"<div><span>main.py</span></div>"#,
            "<pre><code>print(1)</code></pre>",
            "</div>"
        );
        let content = single_block(html);
        assert_eq!(
            content,
            BlockContent::Code {
                code: "print(1)".to_string(),
                language: None,
                filename: Some("main.py".to_string()),
            }
        );
    }

    #[test]
    fn video_round_trip() {
        let content = single_block(&markup::video_fragment(
            "https://youtu.be/dQw4w9WgXcQ",
            VideoKind::Youtube,
            None,
        ));
        assert_eq!(
            content,
            BlockContent::Video {
                src: "https://www.youtube.com/embed/dQw4w9WgXcQ".to_string(),
                kind: VideoKind::Youtube,
                title: None,
            }
        );
    }

    #[test]
    fn callout_round_trip() {
        let content = single_block(&markup::callout_fragment(
            CalloutKind::Tip,
            Some("Remember"),
            "<p>Small steps.</p>",
        ));
        assert_eq!(
            content,
            BlockContent::Callout {
                kind: CalloutKind::Tip,
                title: Some("Remember".to_string()),
                body: "<p>Small steps.</p>".to_string(),
            }
        );
    }

    #[test]
    fn quote_round_trip() {
        let content = single_block(&markup::quote_fragment(
            "Fall seven times, stand up eight.",
            Some("Proverb"),
        ));
        assert_eq!(
            content,
            BlockContent::Quote {
                text: "Fall seven times, stand up eight.".to_string(),
                author: Some("Proverb".to_string()),
            }
        );
    }

    #[test]
    fn widgets_interleave_with_html_runs() {
        let html = format!(
            "<p>before</p>{}<p>after</p>",
            markup::quote_fragment("Quoted.", None)
        );
        let parsed = parse_rich_content(&html);
        assert_eq!(parsed.nodes.len(), 3);
        assert_eq!(parsed.nodes[0], RichNode::Html("<p>before</p>".to_string()));
        assert!(matches!(parsed.nodes[1], RichNode::Block(_)));
        assert_eq!(parsed.nodes[2], RichNode::Html("<p>after</p>".to_string()));
    }

    #[test]
    fn unknown_data_block_value_stays_html() {
        let html = r#"<div data-block="carousel"><p>x</p></div>"#;
        let parsed = parse_rich_content(html);
        assert_eq!(parsed.block_count(), 0);
        assert_eq!(parsed.nodes, vec![RichNode::Html(html.to_string())]);
    }

    #[test]
    fn unclosed_container_stays_html() {
        let html = r#"<div data-block="accordion"><p>never closed"#;
        let parsed = parse_rich_content(html);
        assert_eq!(parsed.block_count(), 0);
    }

    #[test]
    fn accordion_item_missing_content_is_dropped_not_fatal() {
        let html = concat!(
            r#"<div data-block="accordion">"#,
            r#"<div data-accordion-item><div data-accordion-trigger>No body</div></div>"#,
            r#"<div data-accordion-item>"#,
            r#"<div data-accordion-trigger>Ok</div>"#,
            r#"<div data-accordion-content><p>body</p></div>"#,
            r#"</div>"#,
            "</div>"
        );
        let content = single_block(html);
        let BlockContent::Accordion { items } = content else {
            panic!("expected accordion");
        };
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Ok");
    }

    #[test]
    fn video_without_type_attribute_degrades() {
        let html = r#"<div data-block="video"><iframe src="https://x"></iframe></div>"#;
        let parsed = parse_rich_content(html);
        assert_eq!(parsed.block_count(), 0);
    }

    #[test]
    fn reparsing_serialized_output_is_stable() {
        let original = BlockContent::Callout {
            kind: CalloutKind::Warning,
            title: Some("Careful".to_string()),
            body: "<p>Mind the gap.</p>".to_string(),
        };
        let first = markup::fragment(&original).unwrap();
        let reparsed = single_block(&first);
        let second = markup::fragment(&reparsed).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parsing_is_idempotent_over_same_input() {
        let html = format!(
            "<p>intro</p>{}",
            markup::tabs_fragment(&[TabPane {
                label: "One".to_string(),
                body: "<p>1</p>".to_string(),
            }])
        );
        assert_eq!(parse_rich_content(&html), parse_rich_content(&html));
    }
}
