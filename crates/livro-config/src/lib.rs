use livro_engine::models::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub library_path: PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assets_path: Option<PathBuf>,
    #[serde(default)]
    pub default_language: Language,
}

impl Config {
    pub fn new(library_path: PathBuf) -> Self {
        Self {
            library_path,
            assets_path: None,
            default_language: Language::default(),
        }
    }

    /// Where uploaded assets are stored; defaults to `assets/` inside the
    /// library when not configured.
    pub fn assets_path(&self) -> PathBuf {
        self.assets_path
            .clone()
            .unwrap_or_else(|| self.library_path.join("assets"))
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded paths
        config.library_path = Self::expand_path(&config.library_path).unwrap_or(config.library_path);
        config.assets_path = config
            .assets_path
            .map(|p| Self::expand_path(&p).unwrap_or(p));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/livro");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/livro/config.toml"));
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let original = Config {
            library_path: PathBuf::from("/tmp/test-library"),
            assets_path: Some(PathBuf::from("/tmp/test-assets")),
            default_language: Language::Pt,
        };

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original.library_path, deserialized.library_path);
        assert_eq!(original.assets_path, deserialized.assets_path);
        assert_eq!(original.default_language, deserialized.default_language);
    }

    #[test]
    fn test_default_language_defaults_to_english() {
        let config: Config = toml::from_str(r#"library_path = "/tmp/books""#).unwrap();
        assert_eq!(config.default_language, Language::En);
    }

    #[test]
    fn test_assets_path_defaults_inside_library() {
        let config = Config::new(PathBuf::from("/tmp/books"));
        assert_eq!(config.assets_path(), PathBuf::from("/tmp/books/assets"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("LIVRO_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$LIVRO_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("LIVRO_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config::new(PathBuf::from("/tmp/test-library"));

        test_config.save_to_path(&config_file).unwrap();

        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config.library_path, test_config.library_path);
        assert_eq!(loaded_config.default_language, Language::En);
    }

    #[test]
    fn test_config_with_tilde_in_toml() {
        let config_content = r#"
library_path = "~/test/library"
"#;

        let mut config: Config = toml::from_str(config_content).unwrap();
        config.library_path =
            Config::expand_path(&config.library_path).unwrap_or(config.library_path);

        let expanded_path = config.library_path.to_string_lossy();
        assert!(!expanded_path.starts_with('~'));
        assert!(expanded_path.contains("test/library"));
    }

    #[test]
    fn test_config_with_env_var_in_toml() {
        unsafe {
            env::set_var("LIVRO_LIBRARY_ROOT", "/custom/library");
        }

        let config_content = r#"
library_path = "$LIVRO_LIBRARY_ROOT/books"
default_language = "pt"
"#;

        let mut config: Config = toml::from_str(config_content).unwrap();
        config.library_path =
            Config::expand_path(&config.library_path).unwrap_or(config.library_path);

        assert_eq!(config.library_path, PathBuf::from("/custom/library/books"));
        assert_eq!(config.default_language, Language::Pt);

        unsafe {
            env::remove_var("LIVRO_LIBRARY_ROOT");
        }
    }
}
