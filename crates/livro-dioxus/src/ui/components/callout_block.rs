use dioxus::prelude::*;
use livro_engine::models::CalloutKind;

fn glyph(kind: CalloutKind) -> &'static str {
    match kind {
        CalloutKind::Info => "ℹ",
        CalloutKind::Warning => "⚠",
        CalloutKind::Tip => "💡",
        CalloutKind::Note => "✎",
    }
}

#[component]
pub fn CalloutBlock(kind: CalloutKind, title: Option<String>, body: String) -> Element {
    let kind_class = format!("callout callout-{}", kind.tag());
    let icon = glyph(kind);

    rsx! {
        div {
            class: "{kind_class}",
            span { class: "callout-icon", aria_hidden: "true", "{icon}" }
            div { class: "callout-content",
                if let Some(title) = title {
                    h4 { class: "callout-title", "{title}" }
                }
                div { class: "callout-body", dangerous_inner_html: "{body}" }
            }
        }
    }
}
