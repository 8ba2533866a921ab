use dioxus::prelude::*;
use std::path::PathBuf;

use crate::ui::editor::{InsertKind, InsertModal};

/// Formatting snippets appended by the toolbar. The surface edits raw markup
/// in a textarea; structured widgets go through the insert modals instead.
const FORMAT_SNIPPETS: [(&str, &str); 8] = [
    ("H1", "<h1>Heading</h1>"),
    ("H2", "<h2>Heading</h2>"),
    ("H3", "<h3>Heading</h3>"),
    ("B", "<strong>bold text</strong>"),
    ("I", "<em>italic text</em>"),
    ("• List", "<ul><li>item</li></ul>"),
    ("1. List", "<ol><li>item</li></ol>"),
    ("❝", "<blockquote>quote</blockquote>"),
];

const INSERT_BUTTONS: [(&str, InsertKind); 8] = [
    ("Link", InsertKind::Link),
    ("Image", InsertKind::Image),
    ("Callout", InsertKind::Callout),
    ("Accordion", InsertKind::Accordion),
    ("Tabs", InsertKind::Tabs),
    ("Code", InsertKind::Code),
    ("Video", InsertKind::Video),
    ("Quote", InsertKind::Quote),
];

/// The rich-text authoring surface: a raw-markup body with a formatting
/// toolbar and insert modals that emit `data-block` fragments.
#[component]
pub fn RichTextEditor(value: String, assets_path: PathBuf, on_change: Callback<String>) -> Element {
    let mut modal = use_signal(|| None::<InsertKind>);

    let append = {
        let value = value.clone();
        Callback::new(move |fragment: String| {
            let mut next = value.clone();
            if !next.is_empty() {
                next.push('\n');
            }
            next.push_str(&fragment);
            on_change.call(next);
        })
    };

    rsx! {
        div {
            class: "rich-text-editor",
            div { class: "editor-toolbar",
                for (label, snippet) in FORMAT_SNIPPETS {
                    button {
                        key: "{label}",
                        class: "toolbar-button",
                        onclick: move |_| append.call(snippet.to_string()),
                        "{label}"
                    }
                }
                span { class: "toolbar-divider" }
                for (label, kind) in INSERT_BUTTONS {
                    button {
                        key: "{label}",
                        class: "toolbar-button insert-button",
                        onclick: move |_| modal.set(Some(kind)),
                        "{label}"
                    }
                }
            }
            textarea {
                class: "editor-body",
                value: "{value}",
                rows: 12,
                spellcheck: false,
                oninput: move |e: FormEvent| on_change.call(e.value()),
            }
            if let Some(kind) = *modal.read() {
                InsertModal {
                    kind,
                    assets_path: assets_path.clone(),
                    on_insert: move |fragment: String| {
                        append.call(fragment);
                        modal.set(None);
                    },
                    on_cancel: move |_: ()| modal.set(None),
                }
            }
        }
    }
}
