pub mod accordion_block;
pub mod block;
pub mod callout_block;
pub mod chapter_view;
pub mod code_block;
pub mod divider_block;
pub mod empty_library;
pub mod image_block;
pub mod library_panel;
pub mod quote_block;
pub mod rich_content;
pub mod section_view;
pub mod tabs_block;
pub mod text_block;
pub mod video_block;

pub use accordion_block::AccordionBlock;
pub use block::{Block, BlockContentView};
pub use callout_block::CalloutBlock;
pub use chapter_view::ChapterView;
pub use code_block::CodeBlock;
pub use divider_block::DividerBlock;
pub use empty_library::EmptyLibrary;
pub use image_block::ImageBlock;
pub use library_panel::LibraryPanel;
pub use quote_block::QuoteBlock;
pub use rich_content::RichContent;
pub use section_view::SectionView;
pub use tabs_block::TabsBlock;
pub use text_block::TextBlock;
pub use video_block::VideoBlock;
