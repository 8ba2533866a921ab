//! Low-level tag scanning over raw HTML.
//!
//! This is not a conforming HTML parser. It understands exactly as much as
//! the marked-container convention needs: open tags with quoted attributes,
//! matching close tags with same-name nesting, and attribute lookup. Anything
//! it cannot make sense of is left for the caller to treat as opaque HTML.

use std::ops::Range;

use super::cursor::Cursor;

/// An open tag found in the source, borrowing the raw attribute slice.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct OpenTag<'a> {
    pub name: &'a str,
    /// Raw text between the tag name and the closing `>`.
    pub attrs: &'a str,
    /// Index of the `<`.
    pub start: usize,
    /// Index just past the `>`.
    pub end: usize,
    pub self_closing: bool,
}

/// A complete element: open tag, inner content range, full span.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ElementRef<'a> {
    pub name: &'a str,
    pub attrs: &'a str,
    /// Content between open and close tag (empty for self-closing).
    pub inner: Range<usize>,
    /// Full element including both tags.
    pub span: Range<usize>,
}

/// Scans the open tag starting at `at` (which must point at `<`). Returns
/// `None` when the text at `at` is not a well-formed open tag.
pub(crate) fn scan_open_tag(html: &str, at: usize) -> Option<OpenTag<'_>> {
    let mut cur = Cursor::at(html, at);
    if cur.bump() != Some(b'<') {
        return None;
    }
    let name_start = cur.i;
    if !cur.peek().is_some_and(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    while cur.peek().is_some_and(|b| b.is_ascii_alphanumeric()) {
        cur.bump();
    }
    let name = &html[name_start..cur.i];

    // Scan to the closing '>' without being fooled by quoted attribute values.
    let attrs_start = cur.i;
    let mut quote: Option<u8> = None;
    loop {
        let b = cur.bump()?;
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None => match b {
                b'"' | b'\'' => quote = Some(b),
                b'>' => break,
                _ => {}
            },
        }
    }
    let end = cur.i;
    let mut attrs = &html[attrs_start..end - 1];
    let self_closing = attrs.ends_with('/');
    if self_closing {
        attrs = &attrs[..attrs.len() - 1];
    }

    Some(OpenTag {
        name,
        attrs,
        start: at,
        end,
        self_closing,
    })
}

/// Whether the raw attribute slice contains `name` as a standalone attribute
/// (valueless or with a value).
pub(crate) fn has_attr(attrs: &str, name: &str) -> bool {
    let bytes = attrs.as_bytes();
    let mut from = 0;
    while let Some(offset) = attrs[from..].find(name) {
        let start = from + offset;
        let end = start + name.len();
        let before_ok = start == 0 || !is_attr_name_byte(bytes[start - 1]);
        let after_ok = end >= attrs.len() || !is_attr_name_byte(bytes[end]);
        if before_ok && after_ok {
            return true;
        }
        from = start + 1;
    }
    false
}

/// The decoded value of attribute `name`, if present with a quoted value.
pub(crate) fn attr_value(attrs: &str, name: &str) -> Option<String> {
    let bytes = attrs.as_bytes();
    let mut from = 0;
    while let Some(offset) = attrs[from..].find(name) {
        let start = from + offset;
        let mut i = start + name.len();
        let before_ok = start == 0 || !is_attr_name_byte(bytes[start - 1]);
        if !before_ok {
            from = start + 1;
            continue;
        }
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || bytes[i] != b'=' {
            from = start + 1;
            continue;
        }
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_whitespace() {
            i += 1;
        }
        if i >= bytes.len() || (bytes[i] != b'"' && bytes[i] != b'\'') {
            from = start + 1;
            continue;
        }
        let quote = bytes[i];
        i += 1;
        let value_start = i;
        while i < bytes.len() && bytes[i] != quote {
            i += 1;
        }
        if i >= bytes.len() {
            return None;
        }
        return Some(html_escape::decode_html_entities(&attrs[value_start..i]).into_owned());
    }
    None
}

fn is_attr_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Finds the end of the element whose open tag is `open`, balancing nested
/// same-name tags. Returns the element, or `None` when the close tag is
/// missing.
pub(crate) fn close_element<'a>(html: &'a str, open: &OpenTag<'a>) -> Option<ElementRef<'a>> {
    if open.self_closing {
        return Some(ElementRef {
            name: open.name,
            attrs: open.attrs,
            inner: open.end..open.end,
            span: open.start..open.end,
        });
    }

    let close_pat = format!("</{}", open.name);
    let mut depth = 1usize;
    let mut cur = Cursor::at(html, open.end);
    while cur.seek_byte(b'<') {
        let at = cur.i;
        if cur.starts_with(close_pat.as_bytes()) {
            let after = at + close_pat.len();
            let rest = &html[after..];
            // Require `>` (possibly after whitespace) so `</divx>` does not match.
            let trimmed = rest.trim_start();
            if trimmed.starts_with('>') {
                depth -= 1;
                let close_end = after + (rest.len() - trimmed.len()) + 1;
                if depth == 0 {
                    return Some(ElementRef {
                        name: open.name,
                        attrs: open.attrs,
                        inner: open.end..at,
                        span: open.start..close_end,
                    });
                }
                cur.i = close_end;
                continue;
            }
        }
        if let Some(nested) = scan_open_tag(html, at) {
            if nested.name == open.name && !nested.self_closing && !is_void_element(nested.name) {
                depth += 1;
            }
            cur.i = nested.end;
        } else {
            cur.bump();
        }
    }
    None
}

/// Elements that never carry a close tag; an unclosed `<img>` must not be
/// treated as an unbalanced container.
fn is_void_element(name: &str) -> bool {
    matches!(
        name,
        "img" | "br" | "hr" | "input" | "meta" | "link" | "source" | "wbr" | "col" | "embed"
    )
}

/// All non-overlapping elements inside `region` carrying `attr`. After a
/// match, scanning resumes past the element, so nested occurrences of the
/// same marker belong to the outer element.
pub(crate) fn elements_with_attr<'a>(
    html: &'a str,
    region: Range<usize>,
    attr: &str,
) -> Vec<ElementRef<'a>> {
    let mut out = Vec::new();
    let mut cur = Cursor::at(html, region.start);
    while cur.i < region.end && cur.seek_byte(b'<') {
        if cur.i >= region.end {
            break;
        }
        let Some(open) = scan_open_tag(html, cur.i) else {
            cur.bump();
            continue;
        };
        if has_attr(open.attrs, attr) {
            if let Some(element) = close_element(html, &open)
                && element.span.end <= region.end
            {
                cur.i = element.span.end;
                out.push(element);
                continue;
            }
        }
        cur.i = open.end;
    }
    out
}

pub(crate) fn first_with_attr<'a>(
    html: &'a str,
    region: Range<usize>,
    attr: &str,
) -> Option<ElementRef<'a>> {
    elements_with_attr(html, region, attr).into_iter().next()
}

/// First element named `name` inside `region`.
pub(crate) fn first_named<'a>(
    html: &'a str,
    region: Range<usize>,
    name: &str,
) -> Option<ElementRef<'a>> {
    let mut cur = Cursor::at(html, region.start);
    while cur.i < region.end && cur.seek_byte(b'<') {
        if cur.i >= region.end {
            break;
        }
        let Some(open) = scan_open_tag(html, cur.i) else {
            cur.bump();
            continue;
        };
        if open.name.eq_ignore_ascii_case(name) {
            if is_void_element(open.name) || open.self_closing {
                return Some(ElementRef {
                    name: open.name,
                    attrs: open.attrs,
                    inner: open.end..open.end,
                    span: open.start..open.end,
                });
            }
            if let Some(element) = close_element(html, &open)
                && element.span.end <= region.end
            {
                return Some(element);
            }
        }
        cur.i = open.end;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_open_tag_reads_name_and_attrs() {
        let html = r#"<div data-block="code" class="x">rest"#;
        let tag = scan_open_tag(html, 0).unwrap();
        assert_eq!(tag.name, "div");
        assert!(tag.attrs.contains("data-block"));
        assert!(!tag.self_closing);
        assert_eq!(&html[tag.end..], "rest");
    }

    #[test]
    fn scan_open_tag_handles_gt_inside_quotes() {
        let html = r#"<div title="a > b">x</div>"#;
        let tag = scan_open_tag(html, 0).unwrap();
        assert_eq!(&html[tag.end..], "x</div>");
    }

    #[test]
    fn scan_open_tag_rejects_close_tags_and_comments() {
        assert!(scan_open_tag("</div>", 0).is_none());
        assert!(scan_open_tag("<!-- c -->", 0).is_none());
    }

    #[test]
    fn self_closing_tag_detected() {
        let tag = scan_open_tag(r#"<img src="a.png"/>"#, 0).unwrap();
        assert!(tag.self_closing);
        assert_eq!(attr_value(tag.attrs, "src").as_deref(), Some("a.png"));
    }

    #[test]
    fn has_attr_requires_word_boundary() {
        assert!(has_attr(r#" data-block="tabs""#, "data-block"));
        assert!(!has_attr(r#" data-blocked="tabs""#, "data-block"));
        assert!(has_attr(" data-accordion-item ", "data-accordion-item"));
    }

    #[test]
    fn attr_value_decodes_entities() {
        let attrs = r#" data-author="Rilke &amp; Co""#;
        assert_eq!(attr_value(attrs, "data-author").as_deref(), Some("Rilke & Co"));
    }

    #[test]
    fn attr_value_none_for_valueless() {
        assert_eq!(attr_value(" data-accordion-item ", "data-accordion-item"), None);
    }

    #[test]
    fn close_element_balances_nesting() {
        let html = "<div a><div>inner</div></div>tail";
        let open = scan_open_tag(html, 0).unwrap();
        let element = close_element(html, &open).unwrap();
        assert_eq!(&html[element.inner.clone()], "<div>inner</div>");
        assert_eq!(&html[element.span.end..], "tail");
    }

    #[test]
    fn close_element_missing_close_is_none() {
        let html = "<div a><span>unbalanced</span>";
        let open = scan_open_tag(html, 0).unwrap();
        assert!(close_element(html, &open).is_none());
    }

    #[test]
    fn void_elements_do_not_break_balancing() {
        let html = "<div><img src=\"x.png\"><hr></div>";
        let open = scan_open_tag(html, 0).unwrap();
        let element = close_element(html, &open).unwrap();
        assert_eq!(&html[element.inner.clone()], "<img src=\"x.png\"><hr>");
    }

    #[test]
    fn elements_with_attr_finds_siblings_not_nested() {
        let html = concat!(
            "<div data-item>a<div data-item>nested</div></div>",
            "<div data-item>b</div>"
        );
        let found = elements_with_attr(html, 0..html.len(), "data-item");
        assert_eq!(found.len(), 2);
        assert!(html[found[0].inner.clone()].starts_with('a'));
        assert_eq!(&html[found[1].inner.clone()], "b");
    }

    #[test]
    fn first_named_finds_void_iframe_like_elements() {
        let html = r#"<div><iframe src="https://example.com/e"></iframe></div>"#;
        let el = first_named(html, 0..html.len(), "iframe").unwrap();
        assert_eq!(attr_value(el.attrs, "src").as_deref(), Some("https://example.com/e"));
    }
}
