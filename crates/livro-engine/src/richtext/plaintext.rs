//! Conversion of legacy plain-text chapter bodies to HTML.
//!
//! Early chapters were stored as bare text. The conversion is a best-effort
//! heuristic: a short single all-caps line reads as a section heading, a
//! short Title Case line as a subheading. It can misfire on a legitimately
//! shouted sentence; that ambiguity is accepted and the rule is confined to
//! this module.

use std::sync::LazyLock;

use regex::Regex;

/// Longest line the heading heuristics will consider.
const HEADING_MAX_CHARS: usize = 60;

static TAG_PAIR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?[A-Za-z][^>]*>").expect("tag regex"));

static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("blank-line regex"));

/// Whether the input already contains markup. Any tag pair means the body is
/// passed through unmodified.
pub fn looks_like_html(input: &str) -> bool {
    TAG_PAIR.is_match(input)
}

/// Converts plain text to HTML: paragraphs split on blank lines, heading
/// heuristics applied to short single lines, remaining newlines become
/// `<br>`. Input that already looks like HTML is returned unchanged.
pub fn plain_text_to_html(text: &str) -> String {
    if looks_like_html(text) {
        return text.to_string();
    }

    let mut out = Vec::new();
    for paragraph in BLANK_LINES.split(text) {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            continue;
        }
        let escaped = html_escape::encode_text(paragraph).into_owned();
        if is_all_caps_heading(paragraph) {
            out.push(format!("<h2>{escaped}</h2>"));
        } else if is_title_case_heading(paragraph) {
            out.push(format!("<h3>{escaped}</h3>"));
        } else {
            out.push(format!("<p>{}</p>", escaped.replace('\n', "<br>")));
        }
    }
    out.join("\n")
}

fn is_single_short_line(paragraph: &str) -> bool {
    !paragraph.contains('\n') && paragraph.chars().count() <= HEADING_MAX_CHARS
}

fn is_all_caps_heading(paragraph: &str) -> bool {
    if !is_single_short_line(paragraph) {
        return false;
    }
    let mut saw_upper = false;
    for c in paragraph.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            saw_upper = true;
        }
    }
    saw_upper
}

fn is_title_case_heading(paragraph: &str) -> bool {
    if !is_single_short_line(paragraph) {
        return false;
    }
    let words: Vec<&str> = paragraph.split_whitespace().collect();
    if words.is_empty() {
        return false;
    }
    words.iter().all(|word| {
        word.chars()
            .find(|c| c.is_alphabetic())
            .is_some_and(|c| c.is_uppercase())
    }) && paragraph.chars().any(|c| c.is_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn caps_line_becomes_h2_and_body_a_paragraph() {
        let html = plain_text_to_html("TITLE\n\nBody text");
        assert_eq!(html, "<h2>TITLE</h2>\n<p>Body text</p>");
    }

    #[test]
    fn title_case_line_becomes_h3() {
        let html = plain_text_to_html("Getting Started\n\nfirst do nothing");
        assert_eq!(html, "<h3>Getting Started</h3>\n<p>first do nothing</p>");
    }

    #[test]
    fn existing_html_passes_through_unmodified() {
        let input = "<p>already <strong>html</strong></p>";
        assert_eq!(plain_text_to_html(input), input);
        assert!(looks_like_html(input));
    }

    #[test]
    fn single_newlines_become_line_breaks() {
        let html = plain_text_to_html("line one\nline two");
        assert_eq!(html, "<p>line one<br>line two</p>");
    }

    #[test]
    fn long_caps_line_stays_a_paragraph() {
        let line = "A".repeat(HEADING_MAX_CHARS + 1);
        let html = plain_text_to_html(&line);
        assert!(html.starts_with("<p>"));
    }

    #[test]
    fn text_is_escaped() {
        let html = plain_text_to_html("a < b & c");
        assert!(html.contains("&lt;"));
        assert!(html.contains("&amp;"));
        assert!(!looks_like_html("a < b & c"));
    }

    #[test]
    fn blank_lines_with_spaces_still_split_paragraphs() {
        let html = plain_text_to_html("one\n   \ntwo");
        assert_eq!(html, "<p>one</p>\n<p>two</p>");
    }

    #[test]
    fn multiline_caps_paragraph_is_not_a_heading() {
        let html = plain_text_to_html("DO THIS\nAND THAT");
        assert_eq!(html, "<p>DO THIS<br>AND THAT</p>");
    }
}
