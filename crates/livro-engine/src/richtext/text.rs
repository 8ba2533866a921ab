//! Plain-text extraction from HTML fragments.

use super::cursor::Cursor;

/// Strips tags, decodes entities, and normalizes whitespace. Used for widget
/// labels (accordion titles, tab labels) and for flattening HTML bodies into
/// terminal output.
pub fn text_content(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut cur = Cursor::new(html);
    let mut run_start = 0;
    while cur.seek_byte(b'<') {
        out.push_str(&html[run_start..cur.i]);
        // Tag-like: "</", "<!", or "<x". Anything else is literal text.
        let next = html.as_bytes().get(cur.i + 1).copied();
        let tag_like = matches!(next, Some(b'/') | Some(b'!'))
            || next.is_some_and(|b| b.is_ascii_alphabetic());
        if tag_like && cur.seek_byte(b'>') {
            cur.bump();
        } else {
            out.push('<');
            cur.bump();
        }
        run_start = cur.i;
    }
    out.push_str(&html[run_start..]);

    let decoded = html_escape::decode_html_entities(&out);
    let words: Vec<&str> = decoded.split_whitespace().collect();
    words.join(" ")
}
