pub mod io;
pub mod localize;
pub mod models;
pub mod registry;
pub mod richtext;

// Re-export key types for easier usage
pub use localize::*;
pub use models::{block::*, chapter::*, ebook::*, language::*, progress::*, section::*};
pub use registry::*;
