use dioxus::prelude::*;

#[component]
pub fn EmptyLibrary() -> Element {
    rsx! {
        div {
            class: "empty-library",
            h2 { "No chapter selected" }
            p { "Pick a chapter from the library on the left to start reading." }
        }
    }
}
