use dioxus::prelude::*;
use livro_engine::models::TabPane;

/// Exactly one pane visible at a time, the first by default.
#[component]
pub fn TabsBlock(panes: Vec<TabPane>) -> Element {
    let mut active = use_signal(|| 0usize);

    if panes.is_empty() {
        return rsx! {};
    }
    let active_index = active().min(panes.len() - 1);
    let body = panes[active_index].body.clone();

    rsx! {
        div {
            class: "tabs",
            div { class: "tab-row",
                for (index, pane) in panes.iter().enumerate() {
                    {
                        let button_class = if index == active_index {
                            "tab-button active"
                        } else {
                            "tab-button"
                        };
                        let label = pane.label.clone();
                        rsx! {
                            button {
                                key: "{index}",
                                class: "{button_class}",
                                onclick: move |_| active.set(index),
                                "{label}"
                            }
                        }
                    }
                }
            }
            div {
                class: "tab-panel",
                dangerous_inner_html: "{body}"
            }
        }
    }
}
