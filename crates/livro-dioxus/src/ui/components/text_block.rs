use crate::ui::components::RichContent;
use dioxus::prelude::*;

/// Free-form rich text body. Routed through the rich-content renderer so
/// embedded widget markup authored into the body comes back interactive.
#[component]
pub fn TextBlock(html: String) -> Element {
    rsx! {
        div {
            class: "text-block",
            RichContent { html }
        }
    }
}
