use dioxus::prelude::*;
use livro_engine::models::BlockKind;
use livro_engine::registry;

/// Grid of insertable block kinds, generated from the registry descriptors.
#[component]
pub fn BlockPicker(on_pick: Callback<BlockKind>, on_cancel: Callback<()>) -> Element {
    rsx! {
        div {
            class: "block-picker",
            div { class: "block-picker-grid",
                for descriptor in registry::descriptors() {
                    {
                        let kind = descriptor.kind;
                        rsx! {
                            button {
                                key: "{descriptor.label}",
                                class: "block-picker-option",
                                onclick: move |_| on_pick.call(kind),
                                span { class: "block-picker-label", "{descriptor.label}" }
                                span { class: "block-picker-description", "{descriptor.description}" }
                            }
                        }
                    }
                }
            }
            button {
                class: "block-picker-cancel",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    }
}
