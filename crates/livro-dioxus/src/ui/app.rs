use dioxus::prelude::*;
use livro_engine::io;
use livro_engine::models::{Chapter, Language, ReadingProgress};
use std::path::PathBuf;
use uuid::Uuid;

use crate::ui::components::{ChapterView, EmptyLibrary, LibraryPanel};
use crate::ui::editor::ChapterEditor;

const THEME_CSS: &str = include_str!("../assets/theme.css");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Read,
    Edit,
}

#[component]
pub fn App(library_path: PathBuf, assets_path: PathBuf, default_language: Language) -> Element {
    let mut library = use_signal(|| match io::list_ebooks(&library_path) {
        Ok(ebooks) => ebooks,
        Err(e) => {
            log::error!("Error loading library: {e}");
            Vec::new()
        }
    });

    // (index into library, chapter id)
    let mut selected = use_signal(|| None::<(usize, Uuid)>);
    let mut language = use_signal(|| default_language);
    let mut mode = use_signal(|| Mode::Read);
    let mut dirty = use_signal(|| false);

    let on_select_chapter = {
        let library_path = library_path.clone();
        move |(ebook_index, chapter_id): (usize, Uuid)| {
            selected.set(Some((ebook_index, chapter_id)));

            // Remember the reading position; losing it is not worth
            // interrupting the reader over.
            let Some(ebook_id) = library.read().get(ebook_index).map(|e| e.id) else {
                return;
            };
            let mut progress = match io::load_progress(&library_path, ebook_id) {
                Ok(Some(progress)) => progress,
                Ok(None) => ReadingProgress::new(ebook_id),
                Err(e) => {
                    log::warn!("Failed to load reading progress: {e}");
                    ReadingProgress::new(ebook_id)
                }
            };
            progress.visit_chapter(chapter_id);
            if let Err(e) = io::save_progress(&library_path, &progress) {
                log::warn!("Failed to save reading progress: {e}");
            }
        }
    };

    let on_mark_complete = {
        let library_path = library_path.clone();
        move |_: ()| {
            let Some((ebook_index, chapter_id)) = *selected.read() else {
                return;
            };
            let Some((ebook_id, total)) = library
                .read()
                .get(ebook_index)
                .map(|e| (e.id, e.total_chapters()))
            else {
                return;
            };
            let mut progress = match io::load_progress(&library_path, ebook_id) {
                Ok(Some(progress)) => progress,
                _ => ReadingProgress::new(ebook_id),
            };
            progress.complete_chapter(chapter_id, total);
            if let Err(e) = io::save_progress(&library_path, &progress) {
                log::warn!("Failed to save reading progress: {e}");
            }
        }
    };

    let on_chapter_change = move |updated: Chapter| {
        let Some((ebook_index, chapter_id)) = *selected.read() else {
            return;
        };
        let mut lib = library.write();
        if let Some(ebook) = lib.get_mut(ebook_index)
            && let Some(chapter) = ebook.chapter_mut(chapter_id)
        {
            *chapter = updated;
            dirty.set(true);
        }
    };

    let on_save = {
        let library_path = library_path.clone();
        move |_| {
            let Some((ebook_index, _)) = *selected.read() else {
                return;
            };
            let Some(ebook) = library.read().get(ebook_index).cloned() else {
                return;
            };
            match io::save_ebook(&library_path, &ebook) {
                Ok(()) => dirty.set(false),
                Err(e) => log::error!("Failed to save ebook: {e}"),
            }
        }
    };

    let language_label = format!("Language: {}", language.read().code().to_uppercase());
    let mode_label = match *mode.read() {
        Mode::Read => "Switch to editing",
        Mode::Edit => "Switch to reading",
    };
    let is_dirty = *dirty.read();

    let main_view = if let Some((ebook_index, chapter_id)) = *selected.read() {
        match library.read().get(ebook_index).cloned() {
            Some(ebook) => match *mode.read() {
                Mode::Read => rsx! {
                    ChapterView {
                        ebook,
                        chapter_id,
                        language: *language.read(),
                        on_mark_complete,
                    }
                },
                Mode::Edit => rsx! {
                    ChapterEditor {
                        ebook,
                        chapter_id,
                        assets_path: assets_path.clone(),
                        on_change: on_chapter_change,
                    }
                },
            },
            None => rsx! {
                EmptyLibrary {}
            },
        }
    } else {
        rsx! {
            EmptyLibrary {}
        }
    };

    rsx! {
        style { {THEME_CSS} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Library" }
                LibraryPanel {
                    library: ReadOnlySignal::from(library),
                    selected: *selected.read(),
                    language: *language.read(),
                    on_select_chapter,
                }
                div { class: "sidebar-controls",
                    button {
                        class: "control-button",
                        onclick: move |_| {
                            let next = language.read().toggled();
                            language.set(next);
                        },
                        "{language_label}"
                    }
                    button {
                        class: "control-button",
                        onclick: move |_| {
                            let next = match *mode.read() {
                                Mode::Read => Mode::Edit,
                                Mode::Edit => Mode::Read,
                            };
                            mode.set(next);
                        },
                        "{mode_label}"
                    }
                    if is_dirty {
                        button {
                            class: "control-button save-button",
                            onclick: on_save,
                            "Save changes"
                        }
                    }
                }
            }
            div {
                class: "main-content",
                {main_view}
            }
        }
    }
}
