use dioxus::prelude::*;

#[component]
pub fn QuoteBlock(text: String, author: Option<String>) -> Element {
    rsx! {
        blockquote {
            class: "quote-block",
            p { "{text}" }
            if let Some(author) = author {
                footer { class: "quote-attribution", "— {author}" }
            }
        }
    }
}
