use dioxus::prelude::*;
use std::time::Duration;

/// How long the copy button shows its confirmation state.
const COPIED_RESET: Duration = Duration::from_secs(2);

/// Code snippet with a copy-to-clipboard control in the header.
///
/// The copied text is exactly the code body, never the header label. A failed
/// clipboard write is logged and the button simply stays in its normal state.
#[component]
pub fn CodeBlock(code: String, language: Option<String>, filename: Option<String>) -> Element {
    let mut copied = use_signal(|| false);

    let code_class = language
        .as_ref()
        .map(|l| format!("language-{l}"))
        .unwrap_or_else(|| "language-text".to_string());
    let header_label = filename
        .clone()
        .or_else(|| language.clone())
        .unwrap_or_default();
    let button_class = if copied() {
        "copy-button copied"
    } else {
        "copy-button"
    };
    let button_label = if copied() { "Copied!" } else { "Copy" };

    let code_for_copy = code.clone();
    let on_copy = move |_| {
        if copied() {
            return;
        }
        let text = code_for_copy.clone();
        let written = arboard::Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text));
        match written {
            Ok(()) => {
                copied.set(true);
                spawn(async move {
                    tokio::time::sleep(COPIED_RESET).await;
                    copied.set(false);
                });
            }
            Err(e) => log::warn!("Failed to copy code to clipboard: {e}"),
        }
    };

    rsx! {
        div {
            class: "code-block",
            div { class: "code-block-header",
                span { class: "code-block-label", "{header_label}" }
                button {
                    class: "{button_class}",
                    onclick: on_copy,
                    "{button_label}"
                }
            }
            pre {
                code { class: "{code_class}", "{code}" }
            }
        }
    }
}
