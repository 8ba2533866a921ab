use dioxus::prelude::*;

#[component]
pub fn ImageBlock(src: String, alt: String, caption: Option<String>) -> Element {
    rsx! {
        figure {
            class: "image-block",
            img { src: "{src}", alt: "{alt}" }
            if let Some(caption) = caption {
                figcaption { "{caption}" }
            }
        }
    }
}
