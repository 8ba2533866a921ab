pub mod block;
pub mod chapter;
pub mod ebook;
pub mod language;
pub mod progress;
pub mod section;

pub use block::{
    AccordionItem, BlockConfig, BlockContent, BlockKind, CalloutKind, ContentBlock, DividerStyle,
    TabPane, TranslationError, UnknownBlockKind, VideoKind,
};
pub use chapter::Chapter;
pub use ebook::{Ebook, EbookStatus, ThemeConfig};
pub use language::Language;
pub use progress::ReadingProgress;
pub use section::{Section, SectionType};
