use dioxus::prelude::*;
use livro_engine::io::{AssetStore, FsAssetStore, LibraryError};
use livro_engine::models::{AccordionItem, CalloutKind, TabPane, VideoKind};
use livro_engine::richtext::markup;
use std::path::{Path, PathBuf};

/// Which widget the open modal is collecting fields for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertKind {
    Link,
    Image,
    Callout,
    Accordion,
    Tabs,
    Code,
    Video,
    Quote,
}

impl InsertKind {
    fn title(&self) -> &'static str {
        match self {
            InsertKind::Link => "Insert link",
            InsertKind::Image => "Insert image",
            InsertKind::Callout => "Insert callout",
            InsertKind::Accordion => "Insert accordion",
            InsertKind::Tabs => "Insert tabs",
            InsertKind::Code => "Insert code block",
            InsertKind::Video => "Insert video",
            InsertKind::Quote => "Insert quote",
        }
    }
}

/// Modal collecting one widget's fields. Lifecycle: opened by the toolbar,
/// emits a serialized fragment on validated submit, emits nothing on cancel.
/// Validation is required-fields-non-empty only; nested HTML in bodies is
/// taken as-is.
#[component]
pub fn InsertModal(
    kind: InsertKind,
    assets_path: PathBuf,
    on_insert: Callback<String>,
    on_cancel: Callback<()>,
) -> Element {
    // Field superset across kinds; each kind reads the ones it shows.
    let title = use_signal(String::new);
    let body = use_signal(String::new);
    let mut url = use_signal(String::new);
    let label = use_signal(String::new);
    let filename = use_signal(String::new);
    let mut code_language = use_signal(|| "rust".to_string());
    let mut callout_kind = use_signal(|| CalloutKind::Info);
    let mut video_kind = use_signal(|| VideoKind::Youtube);
    let alt = use_signal(String::new);
    let caption = use_signal(String::new);
    let mut rows = use_signal(|| vec![(String::new(), String::new())]);
    let file_path = use_signal(String::new);
    let mut uploading = use_signal(|| false);
    let mut upload_error = use_signal(|| None::<String>);

    let valid = match kind {
        InsertKind::Link => !url.read().is_empty() && !label.read().is_empty(),
        InsertKind::Image => !url.read().is_empty(),
        InsertKind::Callout => !body.read().is_empty(),
        InsertKind::Accordion | InsertKind::Tabs => rows
            .read()
            .iter()
            .any(|(t, b)| !t.is_empty() && !b.is_empty()),
        InsertKind::Code => !body.read().is_empty(),
        InsertKind::Video => !url.read().is_empty(),
        InsertKind::Quote => !body.read().is_empty(),
    };

    let submit = move |_| {
        let fragment = match kind {
            InsertKind::Link => markup::link_fragment(&url.read(), &label.read()),
            InsertKind::Image => markup::figure_fragment(
                &url.read(),
                &alt.read(),
                opt(&caption.read()).as_deref(),
            ),
            InsertKind::Callout => markup::callout_fragment(
                *callout_kind.read(),
                opt(&title.read()).as_deref(),
                &body.read(),
            ),
            InsertKind::Accordion => {
                let items: Vec<AccordionItem> = rows
                    .read()
                    .iter()
                    .filter(|(t, b)| !t.is_empty() && !b.is_empty())
                    .map(|(t, b)| AccordionItem {
                        title: t.clone(),
                        body: b.clone(),
                    })
                    .collect();
                markup::accordion_fragment(&items)
            }
            InsertKind::Tabs => {
                let panes: Vec<TabPane> = rows
                    .read()
                    .iter()
                    .filter(|(t, b)| !t.is_empty() && !b.is_empty())
                    .map(|(t, b)| TabPane {
                        label: t.clone(),
                        body: b.clone(),
                    })
                    .collect();
                markup::tabs_fragment(&panes)
            }
            InsertKind::Code => markup::code_fragment(
                &body.read(),
                opt(&code_language.read()).as_deref(),
                opt(&filename.read()).as_deref(),
            ),
            InsertKind::Video => markup::video_fragment(
                &url.read(),
                *video_kind.read(),
                opt(&title.read()).as_deref(),
            ),
            InsertKind::Quote => {
                markup::quote_fragment(&body.read(), opt(&label.read()).as_deref())
            }
        };
        on_insert.call(fragment);
    };

    // Image upload goes through the asset store; the control is disabled
    // while the store call is in flight and failures stay inline.
    let do_upload = {
        let assets_path = assets_path.clone();
        move |_| {
            let source = file_path.read().clone();
            if source.is_empty() || *uploading.read() {
                return;
            }
            uploading.set(true);
            upload_error.set(None);

            let store = FsAssetStore::new(assets_path.clone());
            let stored = std::fs::read(&source)
                .map_err(LibraryError::from)
                .and_then(|bytes| {
                    let name = Path::new(&source)
                        .file_name()
                        .and_then(|n| n.to_str())
                        .unwrap_or("image");
                    store.store(name, &bytes)
                });
            match stored {
                Ok(stored_url) => url.set(stored_url),
                Err(e) => {
                    log::warn!("Image upload failed: {e}");
                    upload_error.set(Some(format!("Upload failed: {e}")));
                }
            }
            uploading.set(false);
        }
    };

    let modal_title = kind.title();
    let is_uploading = *uploading.read();
    let upload_label = if is_uploading { "Uploading..." } else { "Upload" };
    let error_message = upload_error.read().clone();
    let row_values: Vec<(String, String)> = rows.read().clone();
    let row_count = row_values.len();
    let row_title_placeholder = if kind == InsertKind::Tabs {
        "Tab label"
    } else {
        "Item title"
    };

    rsx! {
        div {
            class: "modal-backdrop",
            div { class: "modal",
                h3 { class: "modal-title", "{modal_title}" }

                div { class: "modal-fields",
                    if kind == InsertKind::Link {
                        {text_field("URL", url)}
                        {text_field("Link text", label)}
                    }
                    if kind == InsertKind::Image {
                        div { class: "upload-row",
                            {text_field("Local file path", file_path)}
                            button {
                                class: "control-button",
                                disabled: is_uploading,
                                onclick: do_upload,
                                "{upload_label}"
                            }
                        }
                        if let Some(message) = error_message {
                            p { class: "inline-error", "{message}" }
                        }
                        {text_field("Image URL", url)}
                        {text_field("Alt text", alt)}
                        {text_field("Caption (optional)", caption)}
                    }
                    if kind == InsertKind::Callout {
                        select {
                            class: "field",
                            onchange: move |e: FormEvent| {
                                callout_kind.set(CalloutKind::parse(&e.value()).unwrap_or_default());
                            },
                            for ck in CalloutKind::ALL {
                                {
                                    let tag = ck.tag();
                                    rsx! {
                                        option { key: "{tag}", value: "{tag}", selected: *callout_kind.read() == ck, "{tag}" }
                                    }
                                }
                            }
                        }
                        {text_field("Title (optional)", title)}
                        {area_field("Content", body)}
                    }
                    if kind == InsertKind::Accordion || kind == InsertKind::Tabs {
                        div { class: "list-editor",
                            for (index, (row_title, row_body)) in row_values.iter().enumerate() {
                                div { key: "{index}", class: "list-editor-row",
                                    input {
                                        class: "field",
                                        value: "{row_title}",
                                        placeholder: "{row_title_placeholder}",
                                        oninput: move |e: FormEvent| rows.write()[index].0 = e.value(),
                                    }
                                    textarea {
                                        class: "field",
                                        value: "{row_body}",
                                        rows: 2,
                                        placeholder: "Content (HTML allowed)",
                                        oninput: move |e: FormEvent| rows.write()[index].1 = e.value(),
                                    }
                                    button {
                                        class: "icon-button delete-button",
                                        disabled: row_count == 1,
                                        onclick: move |_| {
                                            rows.write().remove(index);
                                        },
                                        "✕"
                                    }
                                }
                            }
                            button {
                                class: "add-row-button",
                                onclick: move |_| rows.write().push((String::new(), String::new())),
                                "+ Add row"
                            }
                        }
                    }
                    if kind == InsertKind::Code {
                        select {
                            class: "field",
                            onchange: move |e: FormEvent| code_language.set(e.value()),
                            for lang in ["rust", "javascript", "typescript", "python", "bash", "json", "html", "css"] {
                                option { value: "{lang}", selected: *code_language.read() == lang, "{lang}" }
                            }
                        }
                        {text_field("Filename (optional)", filename)}
                        {area_field("Code", body)}
                    }
                    if kind == InsertKind::Video {
                        {text_field("Video URL", url)}
                        select {
                            class: "field",
                            onchange: move |e: FormEvent| {
                                video_kind.set(VideoKind::parse(&e.value()).unwrap_or_default());
                            },
                            option { value: "youtube", selected: *video_kind.read() == VideoKind::Youtube, "YouTube" }
                            option { value: "vimeo", selected: *video_kind.read() == VideoKind::Vimeo, "Vimeo" }
                            option { value: "file", selected: *video_kind.read() == VideoKind::File, "File" }
                        }
                        {text_field("Title (optional)", title)}
                    }
                    if kind == InsertKind::Quote {
                        {area_field("Quote text", body)}
                        {text_field("Attribution (optional)", label)}
                    }
                }

                div { class: "modal-actions",
                    button {
                        class: "control-button",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "control-button primary",
                        disabled: !valid || is_uploading,
                        onclick: submit,
                        "Insert"
                    }
                }
            }
        }
    }
}

fn opt(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn text_field(placeholder: &'static str, mut signal: Signal<String>) -> Element {
    let value = signal.read().clone();
    rsx! {
        input {
            class: "field",
            value: "{value}",
            placeholder: "{placeholder}",
            oninput: move |e: FormEvent| signal.set(e.value()),
        }
    }
}

fn area_field(placeholder: &'static str, mut signal: Signal<String>) -> Element {
    let value = signal.read().clone();
    rsx! {
        textarea {
            class: "field",
            value: "{value}",
            rows: 4,
            placeholder: "{placeholder}",
            oninput: move |e: FormEvent| signal.set(e.value()),
        }
    }
}
