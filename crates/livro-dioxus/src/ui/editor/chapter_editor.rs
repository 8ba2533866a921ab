use dioxus::prelude::*;
use livro_engine::models::{Chapter, Ebook, Language, Section};
use std::path::PathBuf;
use uuid::Uuid;

use crate::ui::editor::SectionEditor;

/// Admin editor for one chapter: bilingual metadata, publish flags, and the
/// section/block tree. Every mutation emits a fresh `Chapter` upward; the app
/// owns the document and the unsaved-changes state.
#[component]
pub fn ChapterEditor(
    ebook: Ebook,
    chapter_id: Uuid,
    assets_path: PathBuf,
    on_change: Callback<Chapter>,
) -> Element {
    let mut edit_language = use_signal(|| Language::En);
    let mut expanded_section = use_signal(|| None::<Uuid>);

    let Some(chapter) = ebook.chapter(chapter_id).cloned() else {
        return rsx! {
            div { class: "chapter-missing", "Chapter not found" }
        };
    };

    let editing_pt = *edit_language.read() == Language::Pt;
    let en_class = if editing_pt {
        "lang-button"
    } else {
        "lang-button active"
    };
    let pt_class = if editing_pt {
        "lang-button active"
    } else {
        "lang-button"
    };

    let number = chapter.chapter_number;
    let title_en = chapter.title_en.clone();
    let title_pt = chapter.title_pt.clone().unwrap_or_default();
    let summary_en = chapter.summary_en.clone().unwrap_or_default();
    let summary_pt = chapter.summary_pt.clone().unwrap_or_default();
    let slug = chapter.slug.clone();
    let is_free_preview = chapter.is_free_preview;
    let is_published = chapter.is_published;
    let sections: Vec<Section> = chapter.ordered_sections().into_iter().cloned().collect();
    let section_count = sections.len();

    let set_title_en = {
        let chapter = chapter.clone();
        move |e: FormEvent| {
            let mut updated = chapter.clone();
            updated.title_en = e.value();
            on_change.call(updated);
        }
    };
    let set_title_pt = {
        let chapter = chapter.clone();
        move |e: FormEvent| {
            let mut updated = chapter.clone();
            let value = e.value();
            updated.title_pt = if value.is_empty() { None } else { Some(value) };
            on_change.call(updated);
        }
    };
    let set_summary_en = {
        let chapter = chapter.clone();
        move |e: FormEvent| {
            let mut updated = chapter.clone();
            let value = e.value();
            updated.summary_en = if value.is_empty() { None } else { Some(value) };
            on_change.call(updated);
        }
    };
    let set_summary_pt = {
        let chapter = chapter.clone();
        move |e: FormEvent| {
            let mut updated = chapter.clone();
            let value = e.value();
            updated.summary_pt = if value.is_empty() { None } else { Some(value) };
            on_change.call(updated);
        }
    };
    let set_slug = {
        let chapter = chapter.clone();
        move |e: FormEvent| {
            let mut updated = chapter.clone();
            updated.slug = e.value();
            on_change.call(updated);
        }
    };
    let set_free_preview = {
        let chapter = chapter.clone();
        move |e: FormEvent| {
            let mut updated = chapter.clone();
            updated.is_free_preview = e.checked();
            on_change.call(updated);
        }
    };
    let set_published = {
        let chapter = chapter.clone();
        move |e: FormEvent| {
            let mut updated = chapter.clone();
            updated.is_published = e.checked();
            on_change.call(updated);
        }
    };
    let add_section = {
        let chapter = chapter.clone();
        move |_| {
            let mut updated = chapter.clone();
            let id = updated.push_section(Section::new(Some("New Section".to_string())));
            expanded_section.set(Some(id));
            on_change.call(updated);
        }
    };

    rsx! {
        div {
            class: "chapter-editor",
            div { class: "editor-header",
                h2 { "Editing chapter {number}" }
                div { class: "lang-toggle",
                    button {
                        class: "{en_class}",
                        onclick: move |_| edit_language.set(Language::En),
                        "EN"
                    }
                    button {
                        class: "{pt_class}",
                        onclick: move |_| edit_language.set(Language::Pt),
                        "PT"
                    }
                }
            }

            div { class: "editor-meta",
                div { class: "field-row",
                    label { class: "field-label", "Title (English)"
                        input { class: "field", value: "{title_en}", oninput: set_title_en }
                    }
                    label { class: "field-label", "Title (Portuguese)"
                        input {
                            class: "field",
                            value: "{title_pt}",
                            placeholder: "Título do capítulo",
                            oninput: set_title_pt,
                        }
                    }
                }
                div { class: "field-row",
                    label { class: "field-label", "Summary (English)"
                        textarea { class: "field", value: "{summary_en}", rows: 2, oninput: set_summary_en }
                    }
                    label { class: "field-label", "Summary (Portuguese)"
                        textarea { class: "field", value: "{summary_pt}", rows: 2, oninput: set_summary_pt }
                    }
                }
                div { class: "field-row",
                    label { class: "field-label", "Slug"
                        input { class: "field", value: "{slug}", oninput: set_slug }
                    }
                    label { class: "switch-label",
                        input {
                            r#type: "checkbox",
                            checked: is_free_preview,
                            onchange: set_free_preview,
                        }
                        "Free preview"
                    }
                    label { class: "switch-label",
                        input {
                            r#type: "checkbox",
                            checked: is_published,
                            onchange: set_published,
                        }
                        "Published"
                    }
                }
            }

            div { class: "editor-sections",
                for (index, section) in sections.iter().enumerate() {
                    {
                        let section_id = section.id;
                        let expanded = *expanded_section.read() == Some(section_id);
                        let on_section_change = {
                            let chapter = chapter.clone();
                            move |updated_section: Section| {
                                let mut updated = chapter.clone();
                                if let Some(s) = updated.section_mut(updated_section.id) {
                                    *s = updated_section;
                                }
                                on_change.call(updated);
                            }
                        };
                        let on_toggle = move |_: ()| {
                            let next = if expanded { None } else { Some(section_id) };
                            expanded_section.set(next);
                        };
                        let on_delete = {
                            let chapter = chapter.clone();
                            move |_: ()| {
                                let mut updated = chapter.clone();
                                updated.remove_section(section_id);
                                on_change.call(updated);
                            }
                        };
                        let on_move_up = {
                            let chapter = chapter.clone();
                            move |_: ()| {
                                let mut updated = chapter.clone();
                                updated.move_section_up(section_id);
                                on_change.call(updated);
                            }
                        };
                        let on_move_down = {
                            let chapter = chapter.clone();
                            move |_: ()| {
                                let mut updated = chapter.clone();
                                updated.move_section_down(section_id);
                                on_change.call(updated);
                            }
                        };
                        rsx! {
                            SectionEditor {
                                key: "{section_id}",
                                section: section.clone(),
                                edit_language: *edit_language.read(),
                                assets_path: assets_path.clone(),
                                expanded,
                                can_move_up: index > 0,
                                can_move_down: index + 1 < section_count,
                                on_toggle,
                                on_change: on_section_change,
                                on_delete,
                                on_move_up,
                                on_move_down,
                            }
                        }
                    }
                }
                button {
                    class: "add-section-button",
                    onclick: add_section,
                    "+ Add new section"
                }
            }
        }
    }
}
