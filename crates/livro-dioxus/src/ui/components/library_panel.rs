use dioxus::prelude::*;
use livro_engine::models::{Ebook, Language};
use uuid::Uuid;

/// Sidebar listing every ebook with its chapters. Draft chapters and free
/// previews are marked so the author can see reader-facing state at a glance.
#[component]
pub fn LibraryPanel(
    library: ReadOnlySignal<Vec<Ebook>>,
    selected: Option<(usize, Uuid)>,
    language: Language,
    on_select_chapter: Callback<(usize, Uuid)>,
) -> Element {
    rsx! {
        div {
            class: "library-panel",
            for (ebook_index, ebook) in library.read().iter().enumerate() {
                {
                    let title = ebook.localized_title(language).to_string();
                    let status = ebook.status.label();
                    let chapters: Vec<_> = ebook
                        .ordered_chapters()
                        .into_iter()
                        .map(|c| {
                            (
                                c.id,
                                c.chapter_number,
                                c.localized_title(language).to_string(),
                                c.is_published,
                                c.is_free_preview,
                            )
                        })
                        .collect();
                    rsx! {
                        div { key: "{ebook.id}", class: "library-entry",
                            div { class: "library-entry-title",
                                span { "{title}" }
                                span { class: "badge badge-{status}", "{status}" }
                            }
                            ul { class: "chapter-list",
                                for (chapter_id, number, chapter_title, is_published, is_free_preview) in chapters {
                                    {
                                        let is_selected =
                                            selected == Some((ebook_index, chapter_id));
                                        let item_class = if is_selected {
                                            "chapter-item selected"
                                        } else {
                                            "chapter-item"
                                        };
                                        rsx! {
                                            li { key: "{chapter_id}",
                                                button {
                                                    class: "{item_class}",
                                                    onclick: move |_| on_select_chapter
                                                        .call((ebook_index, chapter_id)),
                                                    span { class: "chapter-item-number", "{number}." }
                                                    span { class: "chapter-item-title", "{chapter_title}" }
                                                    if is_free_preview {
                                                        span { class: "badge badge-preview", "preview" }
                                                    }
                                                    if !is_published {
                                                        span { class: "badge badge-draft", "draft" }
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
