use dioxus::prelude::*;
use livro_engine::models::VideoKind;
use livro_engine::richtext;

#[component]
pub fn VideoBlock(src: String, kind: VideoKind, title: Option<String>) -> Element {
    let embed = richtext::embed_url(&src, kind);
    let frame_title = title.clone().unwrap_or_else(|| "Video".to_string());

    rsx! {
        figure {
            class: "video-block",
            if kind == VideoKind::File {
                video { class: "video-frame", src: "{embed}", controls: true }
            } else {
                iframe {
                    class: "video-frame",
                    src: "{embed}",
                    title: "{frame_title}",
                    allowfullscreen: true,
                }
            }
            if let Some(title) = title {
                figcaption { "{title}" }
            }
        }
    }
}
