use crate::ui::components::BlockContentView;
use dioxus::prelude::*;
use livro_engine::richtext::{RichNode, parse_rich_content};

/// Renders a stored rich-content body: plain HTML runs verbatim, recovered
/// widget payloads through the same components the structured renderer uses.
/// Interactivity comes from component state bound at mount, so re-rendering
/// the same body never stacks up listeners.
#[component]
pub fn RichContent(html: String) -> Element {
    let parsed = parse_rich_content(&html);

    rsx! {
        div {
            class: "rich-content",
            for (index, node) in parsed.nodes.into_iter().enumerate() {
                {
                    match node {
                        RichNode::Html(run) => rsx! {
                            div { key: "{index}", class: "rich-run", dangerous_inner_html: "{run}" }
                        },
                        RichNode::Block(content) => rsx! {
                            BlockContentView { key: "{index}", content }
                        },
                    }
                }
            }
        }
    }
}
