use dioxus::prelude::*;
use livro_engine::models::{
    AccordionItem, BlockContent, CalloutKind, ContentBlock, DividerStyle, Language, TabPane,
    VideoKind,
};
use livro_engine::registry;
use std::path::PathBuf;

use crate::ui::editor::RichTextEditor;

const CODE_LANGUAGES: [&str; 9] = [
    "rust",
    "javascript",
    "typescript",
    "python",
    "bash",
    "json",
    "html",
    "css",
    "toml",
];

/// Edit card for one block. The EN/PT toggle decides which payload the form
/// writes: English edits replace `content_en`, Portuguese edits create or
/// replace the translation (same kind enforced by the model).
#[component]
pub fn BlockEditorCard(
    block: ContentBlock,
    edit_language: Language,
    assets_path: PathBuf,
    can_move_up: bool,
    can_move_down: bool,
    on_change: Callback<ContentBlock>,
    on_delete: Callback<()>,
    on_move_up: Callback<()>,
    on_move_down: Callback<()>,
) -> Element {
    let editing_pt = edit_language == Language::Pt;
    let label = block
        .kind()
        .map(|k| registry::descriptor(k).label)
        .unwrap_or("Unknown");
    let has_translation = block.content_pt.is_some();
    // Portuguese starts from a copy of the English payload until first edited.
    let current = if editing_pt {
        block
            .content_pt
            .clone()
            .unwrap_or_else(|| block.content_en.clone())
    } else {
        block.content_en.clone()
    };
    let translation_badge = if editing_pt && !has_translation {
        Some("PT missing — showing EN".to_string())
    } else if editing_pt {
        Some("PT".to_string())
    } else {
        None
    };

    let emit = {
        let block = block.clone();
        Callback::new(move |payload: BlockContent| {
            let mut updated = block.clone();
            if editing_pt {
                if let Err(e) = updated.set_translation(payload) {
                    log::warn!("Rejected translation edit: {e}");
                    return;
                }
            } else {
                updated.set_content(payload);
            }
            on_change.call(updated);
        })
    };

    let clear_translation = {
        let block = block.clone();
        move |_| {
            let mut updated = block.clone();
            updated.clear_translation();
            on_change.call(updated);
        }
    };

    rsx! {
        div {
            class: "block-editor-card",
            div { class: "block-editor-header",
                span { class: "block-kind-label", "{label}" }
                if let Some(badge) = translation_badge {
                    span { class: "badge", "{badge}" }
                }
                div { class: "block-editor-actions",
                    if editing_pt && has_translation {
                        button {
                            class: "icon-button",
                            title: "Remove translation, fall back to English",
                            onclick: clear_translation,
                            "clear PT"
                        }
                    }
                    button {
                        class: "icon-button",
                        disabled: !can_move_up,
                        onclick: move |_| on_move_up.call(()),
                        "↑"
                    }
                    button {
                        class: "icon-button",
                        disabled: !can_move_down,
                        onclick: move |_| on_move_down.call(()),
                        "↓"
                    }
                    button {
                        class: "icon-button delete-button",
                        onclick: move |_| on_delete.call(()),
                        "✕"
                    }
                }
            }
            div { class: "block-editor-body",
                {payload_form(current, emit, assets_path)}
            }
        }
    }
}

fn payload_form(content: BlockContent, emit: Callback<BlockContent>, assets_path: PathBuf) -> Element {
    match content {
        BlockContent::Text { html } => rsx! {
            RichTextEditor {
                value: html,
                assets_path,
                on_change: move |updated: String| emit.call(BlockContent::Text { html: updated }),
            }
        },
        BlockContent::Image { src, alt, caption } => image_form(src, alt, caption, emit),
        BlockContent::Quote { text, author } => quote_form(text, author, emit),
        BlockContent::Callout { kind, title, body } => callout_form(kind, title, body, emit),
        BlockContent::Accordion { items } => accordion_form(items, emit),
        BlockContent::Tabs { panes } => tabs_form(panes, emit),
        BlockContent::Code {
            code,
            language,
            filename,
        } => code_form(code, language, filename, emit),
        BlockContent::Video { src, kind, title } => video_form(src, kind, title, emit),
        BlockContent::Divider { style } => divider_form(style, emit),
        BlockContent::Unknown(_) => rsx! {
            p { class: "unknown-block-note",
                "This block was written by a newer version and is kept as-is."
            }
        },
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

fn image_form(src: String, alt: String, caption: Option<String>, emit: Callback<BlockContent>) -> Element {
    let caption_value = caption.clone().unwrap_or_default();
    let set_src = {
        let alt = alt.clone();
        let caption = caption.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Image {
                src: e.value(),
                alt: alt.clone(),
                caption: caption.clone(),
            })
        }
    };
    let set_alt = {
        let src = src.clone();
        let caption = caption.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Image {
                src: src.clone(),
                alt: e.value(),
                caption: caption.clone(),
            })
        }
    };
    let set_caption = {
        let src = src.clone();
        let alt = alt.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Image {
                src: src.clone(),
                alt: alt.clone(),
                caption: non_empty(e.value()),
            })
        }
    };
    rsx! {
        input { class: "field", value: "{src}", placeholder: "Image URL", oninput: set_src }
        input { class: "field", value: "{alt}", placeholder: "Alt text", oninput: set_alt }
        input { class: "field", value: "{caption_value}", placeholder: "Caption (optional)", oninput: set_caption }
    }
}

fn quote_form(text: String, author: Option<String>, emit: Callback<BlockContent>) -> Element {
    let author_value = author.clone().unwrap_or_default();
    let set_text = {
        let author = author.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Quote {
                text: e.value(),
                author: author.clone(),
            })
        }
    };
    let set_author = {
        let text = text.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Quote {
                text: text.clone(),
                author: non_empty(e.value()),
            })
        }
    };
    rsx! {
        textarea { class: "field", value: "{text}", rows: 3, placeholder: "Quote text", oninput: set_text }
        input { class: "field", value: "{author_value}", placeholder: "Attribution (optional)", oninput: set_author }
    }
}

fn callout_form(
    kind: CalloutKind,
    title: Option<String>,
    body: String,
    emit: Callback<BlockContent>,
) -> Element {
    let title_value = title.clone().unwrap_or_default();
    let set_kind = {
        let title = title.clone();
        let body = body.clone();
        move |e: FormEvent| {
            let kind = CalloutKind::parse(&e.value()).unwrap_or_default();
            emit.call(BlockContent::Callout {
                kind,
                title: title.clone(),
                body: body.clone(),
            })
        }
    };
    let set_title = {
        let body = body.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Callout {
                kind,
                title: non_empty(e.value()),
                body: body.clone(),
            })
        }
    };
    let set_body = {
        let title = title.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Callout {
                kind,
                title: title.clone(),
                body: e.value(),
            })
        }
    };
    rsx! {
        select { class: "field", onchange: set_kind,
            for callout_kind in CalloutKind::ALL {
                {
                    let tag = callout_kind.tag();
                    rsx! {
                        option {
                            key: "{tag}",
                            value: "{tag}",
                            selected: kind == callout_kind,
                            "{tag}"
                        }
                    }
                }
            }
        }
        input { class: "field", value: "{title_value}", placeholder: "Title (optional)", oninput: set_title }
        textarea { class: "field", value: "{body}", rows: 3, placeholder: "Callout content", oninput: set_body }
    }
}

fn accordion_form(items: Vec<AccordionItem>, emit: Callback<BlockContent>) -> Element {
    let item_count = items.len();
    let add_item = {
        let items = items.clone();
        move |_| {
            let mut items = items.clone();
            items.push(AccordionItem {
                title: format!("Item {}", items.len() + 1),
                body: String::new(),
            });
            emit.call(BlockContent::Accordion { items });
        }
    };
    rsx! {
        div { class: "list-editor",
            for (index, item) in items.iter().enumerate() {
                div { key: "{index}", class: "list-editor-row",
                    input {
                        class: "field",
                        value: "{item.title}",
                        placeholder: "Item title",
                        oninput: {
                            let items = items.clone();
                            move |e: FormEvent| {
                                let mut items = items.clone();
                                items[index].title = e.value();
                                emit.call(BlockContent::Accordion { items });
                            }
                        },
                    }
                    textarea {
                        class: "field",
                        value: "{item.body}",
                        rows: 2,
                        placeholder: "Item content (HTML allowed)",
                        oninput: {
                            let items = items.clone();
                            move |e: FormEvent| {
                                let mut items = items.clone();
                                items[index].body = e.value();
                                emit.call(BlockContent::Accordion { items });
                            }
                        },
                    }
                    button {
                        class: "icon-button delete-button",
                        disabled: item_count == 1,
                        onclick: {
                            let items = items.clone();
                            move |_| {
                                let mut items = items.clone();
                                items.remove(index);
                                emit.call(BlockContent::Accordion { items });
                            }
                        },
                        "✕"
                    }
                }
            }
            button { class: "add-row-button", onclick: add_item, "+ Add item" }
        }
    }
}

fn tabs_form(panes: Vec<TabPane>, emit: Callback<BlockContent>) -> Element {
    let pane_count = panes.len();
    let add_pane = {
        let panes = panes.clone();
        move |_| {
            let mut panes = panes.clone();
            panes.push(TabPane {
                label: format!("Tab {}", panes.len() + 1),
                body: String::new(),
            });
            emit.call(BlockContent::Tabs { panes });
        }
    };
    rsx! {
        div { class: "list-editor",
            for (index, pane) in panes.iter().enumerate() {
                div { key: "{index}", class: "list-editor-row",
                    input {
                        class: "field",
                        value: "{pane.label}",
                        placeholder: "Tab label",
                        oninput: {
                            let panes = panes.clone();
                            move |e: FormEvent| {
                                let mut panes = panes.clone();
                                panes[index].label = e.value();
                                emit.call(BlockContent::Tabs { panes });
                            }
                        },
                    }
                    textarea {
                        class: "field",
                        value: "{pane.body}",
                        rows: 2,
                        placeholder: "Tab content (HTML allowed)",
                        oninput: {
                            let panes = panes.clone();
                            move |e: FormEvent| {
                                let mut panes = panes.clone();
                                panes[index].body = e.value();
                                emit.call(BlockContent::Tabs { panes });
                            }
                        },
                    }
                    button {
                        class: "icon-button delete-button",
                        disabled: pane_count == 1,
                        onclick: {
                            let panes = panes.clone();
                            move |_| {
                                let mut panes = panes.clone();
                                panes.remove(index);
                                emit.call(BlockContent::Tabs { panes });
                            }
                        },
                        "✕"
                    }
                }
            }
            button { class: "add-row-button", onclick: add_pane, "+ Add tab" }
        }
    }
}

fn code_form(
    code: String,
    language: Option<String>,
    filename: Option<String>,
    emit: Callback<BlockContent>,
) -> Element {
    let language_value = language.clone().unwrap_or_default();
    let filename_value = filename.clone().unwrap_or_default();
    let set_language = {
        let code = code.clone();
        let filename = filename.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Code {
                code: code.clone(),
                language: non_empty(e.value()),
                filename: filename.clone(),
            })
        }
    };
    let set_filename = {
        let code = code.clone();
        let language = language.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Code {
                code: code.clone(),
                language: language.clone(),
                filename: non_empty(e.value()),
            })
        }
    };
    let set_code = {
        let language = language.clone();
        let filename = filename.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Code {
                code: e.value(),
                language: language.clone(),
                filename: filename.clone(),
            })
        }
    };
    rsx! {
        select { class: "field", onchange: set_language,
            for lang in CODE_LANGUAGES {
                option { value: "{lang}", selected: language_value == lang, "{lang}" }
            }
        }
        input { class: "field", value: "{filename_value}", placeholder: "Filename (optional)", oninput: set_filename }
        textarea {
            class: "field code-field",
            value: "{code}",
            rows: 6,
            placeholder: "Enter code...",
            oninput: set_code,
        }
    }
}

fn video_form(
    src: String,
    kind: VideoKind,
    title: Option<String>,
    emit: Callback<BlockContent>,
) -> Element {
    let title_value = title.clone().unwrap_or_default();
    let set_src = {
        let title = title.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Video {
                src: e.value(),
                kind,
                title: title.clone(),
            })
        }
    };
    let set_kind = {
        let src = src.clone();
        let title = title.clone();
        move |e: FormEvent| {
            let kind = VideoKind::parse(&e.value()).unwrap_or_default();
            emit.call(BlockContent::Video {
                src: src.clone(),
                kind,
                title: title.clone(),
            })
        }
    };
    let set_title = {
        let src = src.clone();
        move |e: FormEvent| {
            emit.call(BlockContent::Video {
                src: src.clone(),
                kind,
                title: non_empty(e.value()),
            })
        }
    };
    rsx! {
        input { class: "field", value: "{src}", placeholder: "Video URL (YouTube, Vimeo) or file path", oninput: set_src }
        select { class: "field", onchange: set_kind,
            option { value: "youtube", selected: kind == VideoKind::Youtube, "YouTube" }
            option { value: "vimeo", selected: kind == VideoKind::Vimeo, "Vimeo" }
            option { value: "file", selected: kind == VideoKind::File, "File" }
        }
        input { class: "field", value: "{title_value}", placeholder: "Title (optional)", oninput: set_title }
    }
}

fn divider_form(style: DividerStyle, emit: Callback<BlockContent>) -> Element {
    let set_style = move |e: FormEvent| {
        let style = match e.value().as_str() {
            "dots" => DividerStyle::Dots,
            "space" => DividerStyle::Space,
            _ => DividerStyle::Line,
        };
        emit.call(BlockContent::Divider { style });
    };
    rsx! {
        select { class: "field", onchange: set_style,
            option { value: "line", selected: style == DividerStyle::Line, "Line" }
            option { value: "dots", selected: style == DividerStyle::Dots, "Dots" }
            option { value: "space", selected: style == DividerStyle::Space, "Space" }
        }
    }
}
