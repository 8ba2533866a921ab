use dioxus::prelude::*;
use livro_config::Config;
use livro_dioxus::ui::App;
use livro_engine::io;
use livro_engine::models::Language;
use std::env;
use std::path::PathBuf;
use std::process;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("livro starting up");

    let (library_path, from_config, _, _) = resolve_settings();

    if let Err(e) = io::validate_library_dir(&library_path) {
        let config_path = Config::config_path();
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

    dioxus::LaunchBuilder::desktop()
        .with_cfg(make_window_config())
        .launch(app_root);
}

/// Library path, whether it came from the config file, the assets path, and
/// the default reading language. CLI argument overrides the config file.
fn resolve_settings() -> (PathBuf, bool, PathBuf, Language) {
    let args: Vec<String> = env::args().collect();
    let config_path = Config::config_path();

    if args.len() == 2 {
        let library_path = PathBuf::from(&args[1]);
        let assets_path = library_path.join("assets");
        return (library_path, false, assets_path, Language::default());
    }
    if args.len() > 2 {
        eprintln!("Usage: {} [library-folder-path]", args[0]);
        process::exit(1);
    }

    match Config::load() {
        Ok(Some(config)) => {
            let assets_path = config.assets_path();
            (
                config.library_path,
                true,
                assets_path,
                config.default_language,
            )
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
}

fn app_root() -> Element {
    // Launch takes a plain fn, so settings are re-resolved here.
    let (library_path, _, assets_path, default_language) = resolve_settings();

    rsx! {
        App {
            library_path,
            assets_path,
            default_language,
        }
    }
}

fn make_window_config() -> dioxus::desktop::Config {
    use dioxus::desktop::{Config, WindowBuilder};

    let window = WindowBuilder::new()
        .with_title("livro")
        .with_always_on_top(false);

    Config::default().with_window(window)
}
