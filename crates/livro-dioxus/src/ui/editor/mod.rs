pub mod block_editor;
pub mod block_picker;
pub mod chapter_editor;
pub mod insert_modal;
pub mod rich_text_editor;
pub mod section_editor;

pub use block_editor::BlockEditorCard;
pub use block_picker::BlockPicker;
pub use chapter_editor::ChapterEditor;
pub use insert_modal::{InsertKind, InsertModal};
pub use rich_text_editor::RichTextEditor;
pub use section_editor::SectionEditor;
