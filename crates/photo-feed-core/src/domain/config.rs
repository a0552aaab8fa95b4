//! Photo API connection settings.

use std::fmt;
use std::time::Duration;

use thiserror::Error;
use url::Url;

use super::PhotoId;

/// Default API endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Invalid API configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// No access key was provided.
    #[error("missing API access key")]
    MissingAccessKey,
    /// The base URL could not be parsed or cannot carry a path.
    #[error("invalid base URL '{0}'")]
    InvalidBaseUrl(String),
    /// `per_page` must be at least 1.
    #[error("per_page must be at least 1")]
    InvalidPerPage,
    /// The request timeout must be non-zero.
    #[error("timeout must be greater than zero")]
    InvalidTimeout,
}

/// Connection settings for the photo API, injected into the API adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    access_key: String,
    per_page: Option<u32>,
    timeout: Duration,
}

impl ApiConfig {
    /// Creates a configuration for `base_url` authenticated with `access_key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the URL is not an absolute
    /// URL that can carry a path.
    pub fn new(base_url: &str, access_key: impl Into<String>) -> Result<Self, ConfigError> {
        let access_key = access_key.into();
        if access_key.trim().is_empty() {
            return Err(ConfigError::MissingAccessKey);
        }

        let base_url =
            Url::parse(base_url).map_err(|_| ConfigError::InvalidBaseUrl(base_url.to_string()))?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_string()));
        }

        Ok(Self {
            base_url,
            access_key,
            per_page: None,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Sets the page size requested from the API.
    ///
    /// # Errors
    ///
    /// Returns an error if `per_page` is zero.
    pub fn with_per_page(mut self, per_page: u32) -> Result<Self, ConfigError> {
        if per_page == 0 {
            return Err(ConfigError::InvalidPerPage);
        }
        self.per_page = Some(per_page);
        Ok(self)
    }

    /// Sets the per-request timeout.
    ///
    /// # Errors
    ///
    /// Returns an error if `timeout` is zero.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ConfigError> {
        if timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        self.timeout = timeout;
        Ok(self)
    }

    /// Base URL of the API.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Access key sent as `client_id`.
    #[must_use]
    pub fn access_key(&self) -> &str {
        &self.access_key
    }

    /// Requested page size, if any.
    #[must_use]
    pub const fn per_page(&self) -> Option<u32> {
        self.per_page
    }

    /// Per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// URL listing one page of photos.
    #[must_use]
    pub fn page_url(&self, page: u32) -> Url {
        let mut url = self.endpoint(&["photos"]);
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("page", &page.to_string());
            if let Some(per_page) = self.per_page {
                query.append_pair("per_page", &per_page.to_string());
            }
            query.append_pair("client_id", &self.access_key);
        }
        url
    }

    /// URL of a single photo.
    #[must_use]
    pub fn photo_url(&self, id: &PhotoId) -> Url {
        let mut url = self.endpoint(&["photos", id.as_str()]);
        url.query_pairs_mut()
            .append_pair("client_id", &self.access_key);
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("base_url", &self.base_url.as_str())
            .field("access_key", &"<redacted>")
            .field("per_page", &self.per_page)
            .field("timeout", &self.timeout)
            .finish()
    }
}
