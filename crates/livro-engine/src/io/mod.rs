//! Library persistence.
//!
//! A library is a directory of ebook documents, one JSON file per ebook named
//! by slug, plus `progress/` for reading positions and `assets/` for uploaded
//! images.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::models::ebook::Ebook;
use crate::models::progress::ReadingProgress;

#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    #[error("ebook not found: {0}")]
    NotFound(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed document {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("invalid library directory: {0}")]
    InvalidLibraryDir(String),
}

pub fn validate_library_dir(path: &Path) -> Result<(), LibraryError> {
    if !path.exists() || !path.is_dir() {
        return Err(LibraryError::InvalidLibraryDir(
            "directory does not exist".to_string(),
        ));
    }
    Ok(())
}

/// Paths of all ebook documents in the library, sorted for stable listings.
pub fn scan_ebooks(library_root: &Path) -> Result<Vec<PathBuf>, LibraryError> {
    validate_library_dir(library_root)?;

    let mut files = Vec::new();
    for entry in fs::read_dir(library_root)? {
        let path = entry?.path();
        if path.is_file()
            && let Some(ext) = path.extension()
            && ext == "json"
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load every ebook in the library. A single malformed document fails the
/// load; the UIs surface the error rather than silently dropping a book.
pub fn list_ebooks(library_root: &Path) -> Result<Vec<Ebook>, LibraryError> {
    let mut ebooks = Vec::new();
    for path in scan_ebooks(library_root)? {
        ebooks.push(read_document(&path)?);
    }
    ebooks.sort_by(|a, b| a.title_en.cmp(&b.title_en));
    Ok(ebooks)
}

pub fn load_ebook(library_root: &Path, slug: &str) -> Result<Ebook, LibraryError> {
    let path = ebook_path(library_root, slug);
    if !path.exists() {
        return Err(LibraryError::NotFound(slug.to_string()));
    }
    read_document(&path)
}

pub fn save_ebook(library_root: &Path, ebook: &Ebook) -> Result<(), LibraryError> {
    fs::create_dir_all(library_root)?;
    let path = ebook_path(library_root, &ebook.slug);
    let json = serde_json::to_string_pretty(ebook).map_err(|source| LibraryError::Malformed {
        path: path.clone(),
        source,
    })?;
    fs::write(&path, json)?;
    Ok(())
}

pub fn delete_ebook(library_root: &Path, slug: &str) -> Result<(), LibraryError> {
    let path = ebook_path(library_root, slug);
    if !path.exists() {
        return Err(LibraryError::NotFound(slug.to_string()));
    }
    fs::remove_file(path)?;
    Ok(())
}

fn ebook_path(library_root: &Path, slug: &str) -> PathBuf {
    library_root.join(format!("{slug}.json"))
}

fn read_document(path: &Path) -> Result<Ebook, LibraryError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|source| LibraryError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Reading progress lives beside the books, keyed by ebook id. Absence is not
/// an error: a book that was never opened has no progress file.
pub fn load_progress(
    library_root: &Path,
    ebook_id: Uuid,
) -> Result<Option<ReadingProgress>, LibraryError> {
    let path = progress_path(library_root, ebook_id);
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(&path)?;
    let progress = serde_json::from_str(&content).map_err(|source| LibraryError::Malformed {
        path,
        source,
    })?;
    Ok(Some(progress))
}

pub fn save_progress(library_root: &Path, progress: &ReadingProgress) -> Result<(), LibraryError> {
    let path = progress_path(library_root, progress.ebook_id);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(progress).map_err(|source| LibraryError::Malformed {
            path: path.clone(),
            source,
        })?;
    fs::write(&path, json)?;
    Ok(())
}

fn progress_path(library_root: &Path, ebook_id: Uuid) -> PathBuf {
    library_root.join("progress").join(format!("{ebook_id}.json"))
}

/// Destination for uploaded binaries. The authoring surface stores image
/// bytes through this seam and embeds the returned URL; tests swap in an
/// in-memory implementation.
pub trait AssetStore {
    /// Store the bytes and return the URL to embed in markup.
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, LibraryError>;
}

/// Filesystem-backed store writing into `assets/` under the library root.
/// Stored names are prefixed with a fresh id so repeated uploads of the same
/// file never overwrite each other.
pub struct FsAssetStore {
    assets_root: PathBuf,
}

impl FsAssetStore {
    pub fn new(assets_root: PathBuf) -> Self {
        Self { assets_root }
    }

    pub fn for_library(library_root: &Path) -> Self {
        Self::new(library_root.join("assets"))
    }
}

impl AssetStore for FsAssetStore {
    fn store(&self, file_name: &str, bytes: &[u8]) -> Result<String, LibraryError> {
        fs::create_dir_all(&self.assets_root)?;
        let safe_name: String = file_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '-'
                }
            })
            .collect();
        let stored = format!("{}-{safe_name}", Uuid::new_v4());
        fs::write(self.assets_root.join(&stored), bytes)?;
        Ok(format!("assets/{stored}"))
    }
}
