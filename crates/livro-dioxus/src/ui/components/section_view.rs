use crate::ui::components::Block;
use dioxus::prelude::*;
use livro_engine::models::{Language, Section};

#[component]
pub fn SectionView(section: Section, language: Language) -> Element {
    let type_class = section.section_type.css_class();
    let heading = section.localized_heading(language).map(str::to_string);

    rsx! {
        section {
            class: "section {type_class}",
            if let Some(heading) = heading {
                h2 { class: "section-heading", "{heading}" }
            }
            for block in section.ordered_blocks() {
                Block {
                    key: "{block.id}",
                    block: (*block).clone(),
                    language,
                }
            }
        }
    }
}
