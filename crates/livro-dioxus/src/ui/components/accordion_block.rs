use dioxus::prelude::*;
use livro_engine::models::AccordionItem;

/// Single-open accordion: activating a trigger expands exactly that panel and
/// collapses every sibling. All panels start collapsed.
#[component]
pub fn AccordionBlock(items: Vec<AccordionItem>) -> Element {
    let mut open_item = use_signal(|| None::<usize>);

    rsx! {
        div {
            class: "accordion",
            for (index, item) in items.iter().enumerate() {
                {
                    let is_open = open_item() == Some(index);
                    let icon_class = if is_open {
                        "accordion-icon open"
                    } else {
                        "accordion-icon"
                    };
                    let title = item.title.clone();
                    let body = item.body.clone();
                    rsx! {
                        div { key: "{index}", class: "accordion-item",
                            button {
                                class: "accordion-trigger",
                                onclick: move |_| open_item.set(Some(index)),
                                span { class: "accordion-title", "{title}" }
                                span { class: "{icon_class}", aria_hidden: "true", "▾" }
                            }
                            if is_open {
                                div {
                                    class: "accordion-content",
                                    dangerous_inner_html: "{body}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
