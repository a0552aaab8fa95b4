//! HTTP adapter for the photo API.

use anyhow::{Context, Result};
use photo_feed_core::{ApiConfig, PhotoApi, PhotoId};
use reqwest::blocking::Client;
use serde_json::Value;
use tracing::{debug, info};

/// Longest slice of an error body quoted in error messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Blocking HTTP client for an Unsplash-compatible photo API.
pub struct HttpPhotoApi {
    client: Client,
    config: ApiConfig,
}

impl HttpPhotoApi {
    /// Creates a client for the configured API.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(concat!("photo-feed/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        info!("Using photo API at {}", config.base_url());
        Ok(Self { client, config })
    }

    /// The configuration this client was built from.
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues a GET and decodes the JSON body.
    ///
    /// The URL carries the access key, so only its path is logged.
    fn get_json(&self, url: reqwest::Url) -> Result<Value> {
        let path = url.path().to_string();
        debug!("GET {path}");

        let response = self
            .client
            .get(url)
            .header("Accept-Version", "v1")
            .send()
            .with_context(|| format!("Request to {path} failed"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            let snippet: String = body.chars().take(ERROR_BODY_LIMIT).collect();
            anyhow::bail!("Photo API returned {status} for {path}: {snippet}");
        }

        response
            .json()
            .with_context(|| format!("Invalid JSON from {path}"))
    }
}

impl PhotoApi for HttpPhotoApi {
    fn fetch_page(&self, page: u32) -> Result<Vec<Value>> {
        match self.get_json(self.config.page_url(page))? {
            Value::Array(records) => {
                debug!(page, records = records.len(), "Received page");
                Ok(records)
            }
            other => anyhow::bail!("Expected a JSON array of photos, got {}", json_kind(&other)),
        }
    }

    fn fetch_photo(&self, id: &PhotoId) -> Result<Value> {
        self.get_json(self.config.photo_url(id))
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
