//! Photo types shared by the feed, the detail lookup and the presentation layer.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Fallback title for photos the API left untitled.
pub const UNTITLED: &str = "Untitled";

/// Fallback description for photos without one.
pub const NO_DESCRIPTION: &str = "No description for this photo.";

/// Identifier of a photo, unique within a feed.
///
/// Numeric identifiers from the API are kept in their decimal string form so
/// that `1` and `"1"` name the same photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhotoId(String);

impl PhotoId {
    /// Creates an identifier from its string form.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhotoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PhotoId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PhotoId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Image URLs of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhotoUrls {
    /// Small image used by grid cards.
    pub thumb: String,
    /// Full-resolution image used by the detail view.
    pub regular: String,
}

/// Author of a photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Display name.
    pub name: String,
}

/// A photo received from the API, validated into its strict shape.
///
/// Immutable once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Photo {
    /// Unique identifier.
    pub id: PhotoId,
    /// Image URLs.
    pub urls: PhotoUrls,
    /// Author.
    pub user: Author,
    /// Optional title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Optional description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Photo {
    /// Title to show, falling back to [`UNTITLED`].
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or(UNTITLED)
    }

    /// Alternative text for the image.
    #[must_use]
    pub fn alt_text(&self) -> String {
        self.title
            .clone()
            .unwrap_or_else(|| format!("Photo by {}", self.user.name))
    }

    /// Description to show, falling back to [`NO_DESCRIPTION`].
    #[must_use]
    pub fn display_description(&self) -> &str {
        self.description.as_deref().unwrap_or(NO_DESCRIPTION)
    }
}
