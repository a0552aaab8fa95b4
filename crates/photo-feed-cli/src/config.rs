//! Configuration file support for photo-feed.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/photo-feed/config.toml` (lowest priority)
//! - Project-local: `.photo-feed.toml` (searched up directory tree)
//! - `PHOTO_FEED_ACCESS_KEY` and CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Photo API settings.
    pub api: ApiSection,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// Photo API configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ApiSection {
    /// API base URL.
    pub base_url: Option<String>,
    /// Access key sent as `client_id`.
    pub access_key: Option<String>,
    /// Photos requested per page.
    pub per_page: Option<u32>,
    /// Request timeout in seconds.
    pub timeout_secs: Option<u64>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/photo-feed/config.toml`
    /// 2. Project-local: `.photo-feed.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        if let Some(ref url) = self.api.base_url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(format!("api.base_url must be an http(s) URL, got '{url}'"));
            }
        }
        if let Some(ref key) = self.api.access_key {
            if key.trim().is_empty() {
                return Err("api.access_key must not be blank".to_string());
            }
        }
        if self.api.per_page == Some(0) {
            return Err("api.per_page must be at least 1".to_string());
        }
        if self.api.timeout_secs == Some(0) {
            return Err("api.timeout_secs must be at least 1".to_string());
        }

        // Output format validation
        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!(
                    "output.format must be 'json' or 'jsonl', got '{f}'"
                ));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // API
        self.api.base_url = other.api.base_url.or_else(|| self.api.base_url.take());
        self.api.access_key = other.api.access_key.or_else(|| self.api.access_key.take());
        self.api.per_page = other.api.per_page.or(self.api.per_page);
        self.api.timeout_secs = other.api.timeout_secs.or(self.api.timeout_secs);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("photo-feed").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.photo-feed.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".photo-feed.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
