use dioxus::prelude::*;
use livro_engine::models::{BlockKind, ContentBlock, Language, Section, SectionType};
use livro_engine::registry;
use std::path::PathBuf;

use crate::ui::editor::{BlockEditorCard, BlockPicker};

#[component]
pub fn SectionEditor(
    section: Section,
    edit_language: Language,
    assets_path: PathBuf,
    expanded: bool,
    can_move_up: bool,
    can_move_down: bool,
    on_toggle: Callback<()>,
    on_change: Callback<Section>,
    on_delete: Callback<()>,
    on_move_up: Callback<()>,
    on_move_down: Callback<()>,
) -> Element {
    let mut show_picker = use_signal(|| false);

    let heading_en = section.heading_en.clone().unwrap_or_default();
    let heading_pt = section.heading_pt.clone().unwrap_or_default();
    let section_type = section.section_type;
    let blocks: Vec<ContentBlock> = section.ordered_blocks().into_iter().cloned().collect();
    let block_count = blocks.len();
    let toggle_glyph = if expanded { "▾" } else { "▸" };

    let set_heading_en = {
        let section = section.clone();
        move |e: FormEvent| {
            let mut updated = section.clone();
            let value = e.value();
            updated.heading_en = if value.is_empty() { None } else { Some(value) };
            on_change.call(updated);
        }
    };
    let set_heading_pt = {
        let section = section.clone();
        move |e: FormEvent| {
            let mut updated = section.clone();
            let value = e.value();
            updated.heading_pt = if value.is_empty() { None } else { Some(value) };
            on_change.call(updated);
        }
    };
    let set_section_type = {
        let section = section.clone();
        move |e: FormEvent| {
            let mut updated = section.clone();
            updated.section_type = match e.value().as_str() {
                "two-column" => SectionType::TwoColumn,
                "full-width" => SectionType::FullWidth,
                _ => SectionType::Standard,
            };
            on_change.call(updated);
        }
    };
    let on_pick_block = {
        let section = section.clone();
        move |kind: BlockKind| {
            let mut updated = section.clone();
            updated.push_block(ContentBlock::new(registry::default_content(kind)));
            show_picker.set(false);
            on_change.call(updated);
        }
    };

    rsx! {
        div {
            class: "section-editor",
            div { class: "section-editor-header",
                button {
                    class: "toggle-button",
                    onclick: move |_| on_toggle.call(()),
                    "{toggle_glyph}"
                }
                input {
                    class: "field section-heading-input",
                    value: "{heading_en}",
                    placeholder: "Section heading",
                    oninput: set_heading_en,
                }
                span { class: "section-block-count", "{block_count} blocks" }
                button {
                    class: "icon-button",
                    disabled: !can_move_up,
                    onclick: move |_| on_move_up.call(()),
                    "↑"
                }
                button {
                    class: "icon-button",
                    disabled: !can_move_down,
                    onclick: move |_| on_move_down.call(()),
                    "↓"
                }
                button {
                    class: "icon-button delete-button",
                    onclick: move |_| on_delete.call(()),
                    "✕"
                }
            }

            if expanded {
                div { class: "section-editor-body",
                    div { class: "field-row",
                        label { class: "field-label", "Heading (Portuguese)"
                            input {
                                class: "field",
                                value: "{heading_pt}",
                                placeholder: "Título da seção",
                                oninput: set_heading_pt,
                            }
                        }
                        label { class: "field-label", "Layout"
                            select { class: "field", onchange: set_section_type,
                                option { value: "standard", selected: section_type == SectionType::Standard, "Standard" }
                                option { value: "two-column", selected: section_type == SectionType::TwoColumn, "Two column" }
                                option { value: "full-width", selected: section_type == SectionType::FullWidth, "Full width" }
                            }
                        }
                    }

                    for (index, block) in blocks.iter().enumerate() {
                        {
                            let block_id = block.id;
                            let on_block_change = {
                                let section = section.clone();
                                move |updated_block: ContentBlock| {
                                    let mut updated = section.clone();
                                    if let Some(b) = updated.block_mut(updated_block.id) {
                                        *b = updated_block;
                                    }
                                    on_change.call(updated);
                                }
                            };
                            let on_block_delete = {
                                let section = section.clone();
                                move |_: ()| {
                                    let mut updated = section.clone();
                                    updated.remove_block(block_id);
                                    on_change.call(updated);
                                }
                            };
                            let on_block_move_up = {
                                let section = section.clone();
                                move |_: ()| {
                                    let mut updated = section.clone();
                                    updated.move_block_up(block_id);
                                    on_change.call(updated);
                                }
                            };
                            let on_block_move_down = {
                                let section = section.clone();
                                move |_: ()| {
                                    let mut updated = section.clone();
                                    updated.move_block_down(block_id);
                                    on_change.call(updated);
                                }
                            };
                            rsx! {
                                BlockEditorCard {
                                    key: "{block_id}",
                                    block: block.clone(),
                                    edit_language,
                                    assets_path: assets_path.clone(),
                                    can_move_up: index > 0,
                                    can_move_down: index + 1 < block_count,
                                    on_change: on_block_change,
                                    on_delete: on_block_delete,
                                    on_move_up: on_block_move_up,
                                    on_move_down: on_block_move_down,
                                }
                            }
                        }
                    }

                    if *show_picker.read() {
                        BlockPicker {
                            on_pick: on_pick_block,
                            on_cancel: move |_: ()| show_picker.set(false),
                        }
                    } else {
                        button {
                            class: "add-block-button",
                            onclick: move |_| show_picker.set(true),
                            "+ Add content block"
                        }
                    }
                }
            }
        }
    }
}
