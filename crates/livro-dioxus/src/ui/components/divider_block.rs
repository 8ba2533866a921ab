use dioxus::prelude::*;
use livro_engine::models::DividerStyle;

#[component]
pub fn DividerBlock(style: DividerStyle) -> Element {
    match style {
        DividerStyle::Line => rsx! {
            hr { class: "divider divider-line" }
        },
        DividerStyle::Dots => rsx! {
            div { class: "divider divider-dots", "• • •" }
        },
        DividerStyle::Space => rsx! {
            div { class: "divider divider-space" }
        },
    }
}
