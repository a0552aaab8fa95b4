//! Filesystem adapter serving photo records from JSON files.
//!
//! Layout of the source directory:
//! - `page-<n>.json`: a JSON array of records for page `n`
//! - `photo-<id>.json`: a single record
//!
//! A missing page file reads as an empty page, which ends the feed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use photo_feed_core::{PhotoApi, PhotoId};
use serde_json::Value;
use tracing::{debug, warn};

/// Photo API backed by a directory of JSON files.
pub struct FsPhotoApi {
    root: PathBuf,
}

impl FsPhotoApi {
    /// Creates a source reading from `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if `root` is not a directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            anyhow::bail!("Photo source is not a directory: {}", root.display());
        }
        Ok(Self { root })
    }

    /// Directory records are read from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file holding page `page`.
    #[must_use]
    pub fn page_path(&self, page: u32) -> PathBuf {
        self.root.join(format!("page-{page}.json"))
    }

    /// Path of the file holding photo `id`.
    #[must_use]
    pub fn photo_path(&self, id: &PhotoId) -> PathBuf {
        self.root.join(format!("photo-{id}.json"))
    }
}

impl PhotoApi for FsPhotoApi {
    fn fetch_page(&self, page: u32) -> Result<Vec<Value>> {
        let path = self.page_path(page);
        if !path.exists() {
            debug!("No page file {}, treating as empty", path.display());
            return Ok(Vec::new());
        }

        match read_json(&path)? {
            Value::Array(records) => Ok(records),
            _ => anyhow::bail!("{} does not contain a JSON array", path.display()),
        }
    }

    fn fetch_photo(&self, id: &PhotoId) -> Result<Value> {
        if !is_safe_id(id) {
            warn!("Rejecting photo id {id:?}");
            anyhow::bail!("Invalid photo id: {id}");
        }
        let path = self.photo_path(id);
        if !path.exists() {
            anyhow::bail!("Photo not found: {id}");
        }
        read_json(&path)
    }
}

/// Ids become file names, so they must not reach outside the source directory.
fn is_safe_id(id: &PhotoId) -> bool {
    let id = id.as_str();
    !id.is_empty() && !id.contains(['/', '\\']) && !id.contains("..")
}

fn read_json(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid JSON in {}", path.display()))
}
