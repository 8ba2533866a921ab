use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use livro_config::Config;
use livro_engine::models::{BlockContent, Chapter, Ebook, Language};
use livro_engine::io;
use livro_engine::richtext::{RichNode, parse_rich_content, text_content};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use std::{env, io::stdout, path::PathBuf, process};

/// One row in the left-hand list: a book header or a chapter under it.
enum Entry {
    Ebook(usize),
    Chapter { ebook: usize, chapter: usize },
}

struct App {
    ebooks: Vec<Ebook>,
    entries: Vec<Entry>,
    list_state: ListState,
    language: Language,
    current_content: Vec<String>,
}

impl App {
    fn new(library_path: PathBuf, language: Language) -> Result<Self> {
        let ebooks = io::list_ebooks(&library_path)?;

        let mut entries = Vec::new();
        for (ebook_index, ebook) in ebooks.iter().enumerate() {
            entries.push(Entry::Ebook(ebook_index));
            for chapter_index in 0..ebook.ordered_chapters().len() {
                entries.push(Entry::Chapter {
                    ebook: ebook_index,
                    chapter: chapter_index,
                });
            }
        }

        let mut app = Self {
            ebooks,
            entries,
            list_state: ListState::default(),
            language,
            current_content: Vec::new(),
        };

        if !app.entries.is_empty() {
            app.list_state.select(Some(0));
            app.update_content_for_selection();
        }

        Ok(app)
    }

    fn next_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => (i + 1) % self.entries.len(),
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn previous_entry(&mut self) {
        if self.entries.is_empty() {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.entries.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.list_state.select(Some(i));
        self.update_content_for_selection();
    }

    fn toggle_language(&mut self) {
        self.language = self.language.toggled();
        self.update_content_for_selection();
    }

    fn update_content_for_selection(&mut self) {
        let Some(index) = self.list_state.selected() else {
            return;
        };
        let Some(entry) = self.entries.get(index) else {
            return;
        };
        self.current_content = match entry {
            Entry::Ebook(ebook_index) => {
                let ebook = &self.ebooks[*ebook_index];
                render_ebook_overview(ebook, self.language)
            }
            Entry::Chapter {
                ebook: ebook_index,
                chapter: chapter_index,
            } => {
                let ebook = &self.ebooks[*ebook_index];
                match ebook.ordered_chapters().get(*chapter_index) {
                    Some(chapter) => render_chapter_content(chapter, self.language),
                    None => vec!["Chapter not found".to_string()],
                }
            }
        };
    }
}

fn render_ebook_overview(ebook: &Ebook, language: Language) -> Vec<String> {
    let mut lines = vec![
        ebook.localized_title(language).to_string(),
        format!(
            "status: {} · {} chapters",
            ebook.status.label(),
            ebook.total_chapters()
        ),
        String::new(),
    ];
    if let Some(description) = ebook.localized_description(language) {
        lines.push(description.to_string());
        lines.push(String::new());
    }
    lines.push("Select a chapter to read it".to_string());
    lines
}

fn render_chapter_content(chapter: &Chapter, language: Language) -> Vec<String> {
    let mut lines = Vec::new();
    lines.push(format!(
        "Chapter {}: {}",
        chapter.chapter_number,
        chapter.localized_title(language)
    ));

    let mut flags = Vec::new();
    if chapter.is_free_preview {
        flags.push("free preview");
    }
    if !chapter.is_published {
        flags.push("draft");
    }
    if !flags.is_empty() {
        lines.push(format!("[{}]", flags.join(", ")));
    }
    lines.push(String::new());

    if let Some(summary) = chapter.localized_summary(language) {
        lines.push(summary.to_string());
        lines.push(String::new());
    }

    for section in chapter.ordered_sections() {
        if let Some(heading) = section.localized_heading(language) {
            lines.push(format!("## {heading}"));
            lines.push(String::new());
        }
        for block in section.ordered_blocks() {
            lines.extend(render_block_content(block.localized(language)));
            lines.push(String::new());
        }
    }

    lines
}

/// Flattens one block payload to terminal lines, mirroring the kinds the
/// desktop renderer dispatches over.
fn render_block_content(content: &BlockContent) -> Vec<String> {
    let mut lines = Vec::new();
    match content {
        BlockContent::Text { html } => {
            for node in parse_rich_content(html).nodes {
                match node {
                    RichNode::Html(run) => {
                        let text = text_content(&run);
                        if !text.is_empty() {
                            lines.push(text);
                        }
                    }
                    RichNode::Block(embedded) => lines.extend(render_block_content(&embedded)),
                }
            }
        }
        BlockContent::Image { alt, caption, .. } => {
            lines.push(format!("[Image: {alt}]"));
            if let Some(caption) = caption {
                lines.push(caption.clone());
            }
        }
        BlockContent::Quote { text, author } => {
            for line in text.lines() {
                lines.push(format!("> {line}"));
            }
            if let Some(author) = author {
                lines.push(format!("> — {author}"));
            }
        }
        BlockContent::Callout { kind, title, body } => {
            let tag = kind.tag().to_uppercase();
            match title {
                Some(title) => lines.push(format!("[{tag}] {title}")),
                None => lines.push(format!("[{tag}]")),
            }
            let body_text = text_content(body);
            if !body_text.is_empty() {
                lines.push(body_text);
            }
        }
        BlockContent::Accordion { items } => {
            for item in items {
                lines.push(format!("▸ {}", item.title));
                let body = text_content(&item.body);
                if !body.is_empty() {
                    lines.push(format!("  {body}"));
                }
            }
        }
        BlockContent::Tabs { panes } => {
            for pane in panes {
                lines.push(format!("[{}]", pane.label));
                let body = text_content(&pane.body);
                if !body.is_empty() {
                    lines.push(format!("  {body}"));
                }
            }
        }
        BlockContent::Code {
            code, language, ..
        } => {
            lines.push(format!("```{}", language.as_deref().unwrap_or("")));
            lines.extend(code.lines().map(|s| s.to_string()));
            lines.push("```".to_string());
        }
        BlockContent::Video { src, title, .. } => {
            match title {
                Some(title) => lines.push(format!("[Video: {title}] {src}")),
                None => lines.push(format!("[Video] {src}")),
            }
        }
        BlockContent::Divider { .. } => {
            lines.push("---".to_string());
        }
        BlockContent::Unknown(_) => {
            lines.push("[unsupported block skipped]".to_string());
        }
    }
    lines
}

fn main() -> Result<()> {
    // Determine library path from CLI args or config file
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    let library_path;
    let mut language = Language::default();
    let from_config;

    if args.len() == 2 {
        library_path = PathBuf::from(&args[1]);
        from_config = false;
    } else if args.len() == 1 {
        match Config::load() {
            Ok(Some(config)) => {
                library_path = config.library_path;
                language = config.default_language;
                from_config = true;
            }
            Ok(None) => {
                eprintln!("Error: No library path provided and no config file found");
                eprintln!("Usage: {} <library-folder-path>", args[0]);
                eprintln!("Or create a config file at {}", config_path.display());
                process::exit(1);
            }
            Err(e) => {
                eprintln!("Error: Failed to load config file: {e}");
                eprintln!("Usage: {} <library-folder-path>", args[0]);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Usage: {} [library-folder-path]", args[0]);
        process::exit(1);
    };

    if let Err(e) = io::validate_library_dir(&library_path) {
        let source = if from_config {
            format!(" from config file '{}'", config_path.display())
        } else {
            String::new()
        };
        eprintln!(
            "Error: Library path '{}'{} is invalid: {e}",
            library_path.display(),
            source
        );
        process::exit(1);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(library_path, language)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as ratatui::backend::Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Down | KeyCode::Char('j') => app.next_entry(),
                KeyCode::Up | KeyCode::Char('k') => app.previous_entry(),
                KeyCode::Char('l') => app.toggle_language(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Library panel
    let items: Vec<ListItem> = app
        .entries
        .iter()
        .map(|entry| {
            let display_text = match entry {
                Entry::Ebook(ebook_index) => {
                    let ebook = &app.ebooks[*ebook_index];
                    format!("📚 {}", ebook.localized_title(app.language))
                }
                Entry::Chapter {
                    ebook: ebook_index,
                    chapter: chapter_index,
                } => {
                    let ebook = &app.ebooks[*ebook_index];
                    match ebook.ordered_chapters().get(*chapter_index) {
                        Some(chapter) => {
                            let marker = if !chapter.is_published {
                                " ✎"
                            } else if chapter.is_free_preview {
                                " ◦"
                            } else {
                                ""
                            };
                            format!(
                                "  {}. {}{marker}",
                                chapter.chapter_number,
                                chapter.localized_title(app.language)
                            )
                        }
                        None => "  ?".to_string(),
                    }
                }
            };
            ListItem::new(vec![Line::from(vec![Span::raw(display_text)])])
        })
        .collect();

    let library_title = format!("Library [{}]", app.language.code());
    let library_list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(library_title))
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(library_list, chunks[0], &mut app.list_state);

    // Content panel
    let content_text = if app.current_content.is_empty() {
        vec![Line::from("Select a chapter to view its content")]
    } else {
        app.current_content
            .iter()
            .map(|line| Line::from(vec![Span::raw(line.clone())]))
            .collect()
    };

    let content = Paragraph::new(content_text)
        .block(Block::default().borders(Borders::ALL).title("Content"))
        .wrap(ratatui::widgets::Wrap { trim: true });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("↑/k: Previous | "),
        Span::raw("↓/j: Next | "),
        Span::raw("l: Toggle language"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(Block::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use livro_engine::models::CalloutKind;

    #[test]
    fn quote_lines_carry_attribution() {
        let lines = render_block_content(&BlockContent::Quote {
            text: "Fall seven times.\nStand up eight.".to_string(),
            author: Some("Proverb".to_string()),
        });
        assert_eq!(
            lines,
            vec!["> Fall seven times.", "> Stand up eight.", "> — Proverb"]
        );
    }

    #[test]
    fn callout_lines_show_kind_tag() {
        let lines = render_block_content(&BlockContent::Callout {
            kind: CalloutKind::Tip,
            title: Some("Remember".to_string()),
            body: "<p>Small steps.</p>".to_string(),
        });
        assert_eq!(lines, vec!["[TIP] Remember", "Small steps."]);
    }

    #[test]
    fn text_block_flattens_embedded_widgets() {
        let accordion = livro_engine::richtext::markup::accordion_fragment(&[
            livro_engine::models::AccordionItem {
                title: "Why?".to_string(),
                body: "<p>Because.</p>".to_string(),
            },
        ]);
        let html = format!("<p>Intro prose.</p>{accordion}");
        let lines = render_block_content(&BlockContent::Text { html });
        assert_eq!(lines, vec!["Intro prose.", "▸ Why?", "  Because."]);
    }

    #[test]
    fn code_lines_are_fenced() {
        let lines = render_block_content(&BlockContent::Code {
            code: "let x = 1;\nlet y = 2;".to_string(),
            language: Some("rust".to_string()),
            filename: None,
        });
        assert_eq!(lines, vec!["```rust", "let x = 1;", "let y = 2;", "```"]);
    }

    #[test]
    fn unknown_block_is_noted_not_fatal() {
        let lines = render_block_content(&BlockContent::Unknown(serde_json::json!({
            "type": "hologram"
        })));
        assert_eq!(lines, vec!["[unsupported block skipped]"]);
    }
}
