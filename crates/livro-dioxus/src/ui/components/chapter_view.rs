use crate::ui::components::SectionView;
use dioxus::prelude::*;
use livro_engine::models::{Ebook, Language};
use uuid::Uuid;

#[component]
pub fn ChapterView(
    ebook: Ebook,
    chapter_id: Uuid,
    language: Language,
    on_mark_complete: Callback<()>,
) -> Element {
    let Some(chapter) = ebook.chapter(chapter_id) else {
        return rsx! {
            div { class: "chapter-missing", "Chapter not found" }
        };
    };

    let theme_style = format!(
        "--primary: {}; --accent: {}; font-family: {};",
        ebook.theme.primary_color, ebook.theme.accent_color, ebook.theme.font_family
    );
    let number = chapter.chapter_number;
    let title = chapter.localized_title(language).to_string();
    let summary = chapter.localized_summary(language).map(str::to_string);
    let read_time = chapter.estimated_read_time_minutes;
    let is_free_preview = chapter.is_free_preview;
    let is_published = chapter.is_published;
    let sections: Vec<_> = chapter.ordered_sections().into_iter().cloned().collect();

    rsx! {
        article {
            class: "chapter",
            style: "{theme_style}",
            header { class: "chapter-header",
                span { class: "chapter-number", "Chapter {number}" }
                h1 { class: "chapter-title", "{title}" }
                if let Some(summary) = summary {
                    p { class: "chapter-summary", "{summary}" }
                }
                div { class: "chapter-flags",
                    if is_free_preview {
                        span { class: "badge badge-preview", "Free preview" }
                    }
                    if !is_published {
                        span { class: "badge badge-draft", "Draft" }
                    }
                    if let Some(minutes) = read_time {
                        span { class: "badge", "{minutes} min read" }
                    }
                }
            }
            for section in sections {
                SectionView {
                    key: "{section.id}",
                    section,
                    language,
                }
            }
            footer { class: "chapter-footer",
                button {
                    class: "control-button",
                    onclick: move |_| on_mark_complete.call(()),
                    "Mark chapter as read"
                }
            }
        }
    }
}
