//! Rich-content markup support.
//!
//! Free-form chapter bodies are stored as HTML strings that may embed tagged
//! widget containers (`data-block="accordion"` and friends). This module
//! parses such a string into an ordered tree of plain HTML runs and typed
//! block payloads, converts legacy plain-text bodies to HTML, and serializes
//! typed payloads back to the same markup convention. The attribute format is
//! a storage format: previously authored documents must keep parsing, so
//! changes here must stay backward compatible.

pub mod cursor;
pub mod markup;
pub mod parser;
pub mod plaintext;
mod tags;
pub mod text;

pub use markup::{embed_url, fragment, vimeo_embed_url, youtube_embed_url};
pub use parser::{RichContent, RichNode, parse_rich_content};
pub use plaintext::{looks_like_html, plain_text_to_html};
pub use text::text_content;
