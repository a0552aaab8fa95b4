//! Where photos come from: the HTTP API or a local directory.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Args;
use photo_feed_adapters::{FsPhotoApi, HttpPhotoApi};
use photo_feed_core::domain::DEFAULT_BASE_URL;
use photo_feed_core::{ApiConfig, ConfigError, PhotoApi};
use tracing::debug;

use crate::config::AppConfig;

/// Arguments selecting and configuring the photo source.
#[derive(Args, Clone, Default)]
pub struct SourceArgs {
    /// Read pages from a directory of JSON files instead of the API
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// API access key
    #[arg(long, env = "PHOTO_FEED_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// API base URL
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Photos requested per page
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u32).range(1..))]
    pub per_page: Option<u32>,

    /// Request timeout in seconds (config only)
    #[arg(skip)]
    pub timeout_secs: Option<u64>,
}

impl SourceArgs {
    /// Fills unset values from the config file.
    pub fn with_config(mut self, config: &AppConfig) -> Self {
        if self.access_key.is_none() {
            self.access_key.clone_from(&config.api.access_key);
        }
        if self.base_url.is_none() {
            self.base_url.clone_from(&config.api.base_url);
        }
        self.per_page = self.per_page.or(config.api.per_page);
        self.timeout_secs = self.timeout_secs.or(config.api.timeout_secs);
        self
    }

    /// Builds the API connection settings.
    ///
    /// # Errors
    ///
    /// Returns an error if no access key is set or a value is invalid.
    pub fn api_config(&self) -> Result<ApiConfig, ConfigError> {
        let base_url = self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        let access_key = self
            .access_key
            .clone()
            .ok_or(ConfigError::MissingAccessKey)?;

        let mut config = ApiConfig::new(base_url, access_key)?;
        if let Some(per_page) = self.per_page {
            config = config.with_per_page(per_page)?;
        }
        if let Some(secs) = self.timeout_secs {
            config = config.with_timeout(Duration::from_secs(secs))?;
        }
        Ok(config)
    }

    /// Opens the selected photo source.
    ///
    /// # Errors
    ///
    /// Returns an error if the source directory is missing or the API is
    /// misconfigured.
    pub fn open(&self) -> Result<Box<dyn PhotoApi>> {
        if let Some(dir) = &self.source {
            debug!("Reading photos from {}", dir.display());
            return Ok(Box::new(FsPhotoApi::new(dir.clone())?));
        }

        let config = self
            .api_config()
            .context("Cannot connect to the photo API (set --access-key, PHOTO_FEED_ACCESS_KEY or [api] access_key)")?;
        Ok(Box::new(HttpPhotoApi::new(config)?))
    }
}
