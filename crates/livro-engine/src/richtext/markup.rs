//! Serialization of typed payloads to the `data-block` markup convention.
//!
//! The authoring surface inserts these fragments into free-form bodies; the
//! parser recovers the payloads on render. Fragment shape is part of the
//! stored-document format and must stay parseable by older content.

use std::sync::LazyLock;

use regex::Regex;

use crate::models::block::{
    AccordionItem, BlockContent, CalloutKind, DividerStyle, TabPane, VideoKind,
};

static YOUTUBE_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:youtu\.be/|youtube\.com/(?:embed/|v/|shorts/|watch\?v=|watch\?.+&v=))([^&?/]+)")
        .expect("youtube regex")
});

static VIMEO_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"vimeo\.com/(?:.*/)?(\d+)").expect("vimeo regex"));

/// Embed URL for a YouTube watch/share/shorts URL. Unrecognized URLs are
/// returned unchanged so already-resolved embed URLs pass through.
pub fn youtube_embed_url(url: &str) -> String {
    match YOUTUBE_ID.captures(url) {
        Some(caps) => format!("https://www.youtube.com/embed/{}", &caps[1]),
        None => url.to_string(),
    }
}

/// Embed URL for a Vimeo URL; unrecognized URLs pass through.
pub fn vimeo_embed_url(url: &str) -> String {
    match VIMEO_ID.captures(url) {
        Some(caps) => format!("https://player.vimeo.com/video/{}", &caps[1]),
        None => url.to_string(),
    }
}

pub fn embed_url(src: &str, kind: VideoKind) -> String {
    match kind {
        VideoKind::Youtube => youtube_embed_url(src),
        VideoKind::Vimeo => vimeo_embed_url(src),
        VideoKind::File => src.to_string(),
    }
}

fn esc_text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

fn esc_attr(s: &str) -> String {
    html_escape::encode_double_quoted_attribute(s).into_owned()
}

pub fn accordion_fragment(items: &[AccordionItem]) -> String {
    let mut out = String::from(r#"<div data-block="accordion" class="rc-accordion">"#);
    for item in items {
        out.push_str(r#"<div data-accordion-item class="rc-accordion-item">"#);
        out.push_str(r#"<div data-accordion-trigger class="rc-accordion-trigger">"#);
        out.push_str(&format!(
            "<span data-accordion-title>{}</span>",
            esc_text(&item.title)
        ));
        out.push_str(r#"<span class="rc-accordion-icon" aria-hidden="true">&#9662;</span>"#);
        out.push_str("</div>");
        out.push_str(&format!(
            r#"<div data-accordion-content class="rc-accordion-content">{}</div>"#,
            item.body
        ));
        out.push_str("</div>");
    }
    out.push_str("</div>");
    out
}

pub fn tabs_fragment(panes: &[TabPane]) -> String {
    let mut out = String::from(r#"<div data-block="tabs" class="rc-tabs">"#);
    out.push_str(r#"<div class="rc-tab-row">"#);
    for (index, pane) in panes.iter().enumerate() {
        out.push_str(&format!(
            r#"<button data-tab-button="{index}" class="rc-tab-button">{}</button>"#,
            esc_text(&pane.label)
        ));
    }
    out.push_str("</div>");
    for (index, pane) in panes.iter().enumerate() {
        out.push_str(&format!(
            r#"<div data-tab-content="{index}" class="rc-tab-panel">{}</div>"#,
            pane.body
        ));
    }
    out.push_str("</div>");
    out
}

pub fn code_fragment(code: &str, language: Option<&str>, filename: Option<&str>) -> String {
    let mut out = String::from(r#"<div data-block="code" class="rc-code""#);
    if let Some(language) = language {
        out.push_str(&format!(r#" data-code-language="{}""#, esc_attr(language)));
    }
    if let Some(filename) = filename {
        out.push_str(&format!(r#" data-code-filename="{}""#, esc_attr(filename)));
    }
    out.push('>');
    let header = filename.or(language).unwrap_or_default();
    out.push_str(&format!(
        r#"<div class="rc-code-header"><span>{}</span></div>"#,
        esc_text(header)
    ));
    out.push_str(&format!("<pre><code>{}</code></pre>", esc_text(code)));
    out.push_str("</div>");
    out
}

pub fn video_fragment(src: &str, kind: VideoKind, title: Option<&str>) -> String {
    let mut out = format!(
        r#"<div data-block="video" data-video-type="{}" class="rc-video">"#,
        kind.tag()
    );
    let resolved = embed_url(src, kind);
    match kind {
        VideoKind::File => match title {
            Some(title) => out.push_str(&format!(
                r#"<video src="{}" title="{}" controls></video>"#,
                esc_attr(&resolved),
                esc_attr(title)
            )),
            None => out.push_str(&format!(
                r#"<video src="{}" controls></video>"#,
                esc_attr(&resolved)
            )),
        },
        _ => {
            out.push_str(&format!(
                r#"<iframe src="{}" title="{}" allowfullscreen></iframe>"#,
                esc_attr(&resolved),
                esc_attr(title.unwrap_or("Video"))
            ));
        }
    }
    if let Some(title) = title {
        out.push_str(&format!("<figcaption>{}</figcaption>", esc_text(title)));
    }
    out.push_str("</div>");
    out
}

pub fn callout_fragment(kind: CalloutKind, title: Option<&str>, body: &str) -> String {
    let mut out = format!(
        r#"<div data-block="callout" data-callout-type="{kind}" class="rc-callout rc-callout-{kind}">"#,
        kind = kind.tag()
    );
    if let Some(title) = title {
        out.push_str(&format!("<h4>{}</h4>", esc_text(title)));
    }
    out.push_str(&format!(r#"<div class="rc-callout-body">{body}</div>"#));
    out.push_str("</div>");
    out
}

pub fn quote_fragment(text: &str, author: Option<&str>) -> String {
    let mut out = String::from(r#"<blockquote data-block="quote""#);
    if let Some(author) = author {
        out.push_str(&format!(r#" data-author="{}""#, esc_attr(author)));
    }
    out.push_str(r#" class="rc-quote">"#);
    out.push_str(&format!("<p>{}</p>", esc_text(text)));
    if let Some(author) = author {
        out.push_str(&format!("<footer>{}</footer>", esc_text(author)));
    }
    out.push_str("</blockquote>");
    out
}

/// Image insertion emits a plain figure: standard rich text, no re-hydration
/// needed, so no `data-block` marker.
pub fn figure_fragment(src: &str, alt: &str, caption: Option<&str>) -> String {
    let mut out = format!(
        r#"<figure class="rc-figure"><img src="{}" alt="{}">"#,
        esc_attr(src),
        esc_attr(alt)
    );
    if let Some(caption) = caption {
        out.push_str(&format!("<figcaption>{}</figcaption>", esc_text(caption)));
    }
    out.push_str("</figure>");
    out
}

/// Inline link markup for the formatting toolbar.
pub fn link_fragment(href: &str, text: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        esc_attr(href),
        esc_text(text)
    )
}

pub fn divider_fragment(style: DividerStyle) -> String {
    match style {
        DividerStyle::Line => r#"<hr class="rc-divider rc-divider-line">"#.to_string(),
        DividerStyle::Dots => r#"<hr class="rc-divider rc-divider-dots">"#.to_string(),
        DividerStyle::Space => r#"<hr class="rc-divider rc-divider-space">"#.to_string(),
    }
}

/// Markup fragment for an embeddable payload; `None` for payloads that do
/// not exist as tagged containers (plain text bodies, unknown content).
pub fn fragment(content: &BlockContent) -> Option<String> {
    match content {
        BlockContent::Accordion { items } => Some(accordion_fragment(items)),
        BlockContent::Tabs { panes } => Some(tabs_fragment(panes)),
        BlockContent::Code {
            code,
            language,
            filename,
        } => Some(code_fragment(code, language.as_deref(), filename.as_deref())),
        BlockContent::Video { src, kind, title } => {
            Some(video_fragment(src, *kind, title.as_deref()))
        }
        BlockContent::Callout { kind, title, body } => {
            Some(callout_fragment(*kind, title.as_deref(), body))
        }
        BlockContent::Quote { text, author } => Some(quote_fragment(text, author.as_deref())),
        BlockContent::Image { src, alt, caption } => {
            Some(figure_fragment(src, alt, caption.as_deref()))
        }
        BlockContent::Divider { style } => Some(divider_fragment(*style)),
        BlockContent::Text { .. } | BlockContent::Unknown(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("https://www.youtube.com/watch?v=dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://youtu.be/dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/embed/dQw4w9WgXcQ", "dQw4w9WgXcQ")]
    #[case("https://www.youtube.com/shorts/abc123", "abc123")]
    #[case("https://www.youtube.com/watch?list=PL1&v=xyz789", "xyz789")]
    fn youtube_urls_resolve_to_embed(#[case] url: &str, #[case] id: &str) {
        assert_eq!(
            youtube_embed_url(url),
            format!("https://www.youtube.com/embed/{id}")
        );
    }

    #[test]
    fn unrecognized_youtube_url_passes_through() {
        assert_eq!(
            youtube_embed_url("https://example.com/clip"),
            "https://example.com/clip"
        );
    }

    #[rstest]
    #[case("https://vimeo.com/76979871", "76979871")]
    #[case("https://vimeo.com/channels/staffpicks/76979871", "76979871")]
    fn vimeo_urls_resolve_to_embed(#[case] url: &str, #[case] id: &str) {
        assert_eq!(
            vimeo_embed_url(url),
            format!("https://player.vimeo.com/video/{id}")
        );
    }

    #[test]
    fn file_videos_do_not_rewrite_src() {
        assert_eq!(
            embed_url("assets/clip.mp4", VideoKind::File),
            "assets/clip.mp4"
        );
    }

    #[test]
    fn accordion_fragment_snapshot() {
        let items = vec![
            AccordionItem {
                title: "First".to_string(),
                body: "<p>one</p>".to_string(),
            },
            AccordionItem {
                title: "Second".to_string(),
                body: "<p>two</p>".to_string(),
            },
        ];
        insta::assert_snapshot!(accordion_fragment(&items), @r###"<div data-block="accordion" class="rc-accordion"><div data-accordion-item class="rc-accordion-item"><div data-accordion-trigger class="rc-accordion-trigger"><span data-accordion-title>First</span><span class="rc-accordion-icon" aria-hidden="true">&#9662;</span></div><div data-accordion-content class="rc-accordion-content"><p>one</p></div></div><div data-accordion-item class="rc-accordion-item"><div data-accordion-trigger class="rc-accordion-trigger"><span data-accordion-title>Second</span><span class="rc-accordion-icon" aria-hidden="true">&#9662;</span></div><div data-accordion-content class="rc-accordion-content"><p>two</p></div></div></div>"###);
    }

    #[test]
    fn code_fragment_escapes_code_text() {
        let fragment = code_fragment("let x = a < b;", Some("rust"), None);
        assert!(fragment.contains("let x = a &lt; b;"));
        assert!(fragment.contains(r#"data-code-language="rust""#));
        // Header text falls back to the language when no filename is set.
        assert!(fragment.contains("<span>rust</span>"));
    }

    #[test]
    fn quote_fragment_carries_author_attribute_and_footer() {
        let fragment = quote_fragment("Fall seven times.", Some("Proverb"));
        assert!(fragment.contains(r#"data-author="Proverb""#));
        assert!(fragment.contains("<footer>Proverb</footer>"));
    }

    #[test]
    fn tabs_fragment_indexes_buttons_and_panels() {
        let panes = vec![
            TabPane {
                label: "A".to_string(),
                body: "<p>a</p>".to_string(),
            },
            TabPane {
                label: "B".to_string(),
                body: "<p>b</p>".to_string(),
            },
        ];
        let fragment = tabs_fragment(&panes);
        assert!(fragment.contains(r#"data-tab-button="0""#));
        assert!(fragment.contains(r#"data-tab-button="1""#));
        assert!(fragment.contains(r#"data-tab-content="0""#));
        assert!(fragment.contains(r#"data-tab-content="1""#));
    }

    #[test]
    fn video_fragment_resolves_embed_url() {
        let fragment = video_fragment(
            "https://youtu.be/dQw4w9WgXcQ",
            VideoKind::Youtube,
            Some("Intro"),
        );
        assert!(fragment.contains(r#"src="https://www.youtube.com/embed/dQw4w9WgXcQ""#));
        assert!(fragment.contains(r#"data-video-type="youtube""#));
    }

    #[test]
    fn text_content_has_no_fragment() {
        assert_eq!(
            fragment(&BlockContent::Text {
                html: "<p>x</p>".to_string()
            }),
            None
        );
    }
}
