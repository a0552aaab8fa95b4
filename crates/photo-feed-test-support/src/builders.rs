//! Builders for raw API records.

use serde_json::{json, Value};

/// Builder for photo records shaped like the API's JSON.
///
/// Produces every field the feed reads, plus a few it ignores, so tests see
/// records as loosely shaped as the real thing.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    id: Value,
    thumb: Option<String>,
    regular: Option<String>,
    author: Option<String>,
    title: Option<String>,
    description: Option<String>,
}

impl RecordBuilder {
    /// Starts a complete record with the given string id.
    #[must_use]
    pub fn new(id: &str) -> Self {
        Self {
            id: Value::String(id.to_string()),
            thumb: Some(format!("https://images.example/{id}?w=200")),
            regular: Some(format!("https://images.example/{id}?w=1080")),
            author: Some(format!("Author of {id}")),
            title: None,
            description: None,
        }
    }

    /// Starts a complete record with a numeric id.
    #[must_use]
    pub fn numeric(id: u64) -> Self {
        let mut builder = Self::new(&id.to_string());
        builder.id = json!(id);
        builder
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Sets the author name.
    #[must_use]
    pub fn author(mut self, name: &str) -> Self {
        self.author = Some(name.to_string());
        self
    }

    /// Drops the thumbnail URL, making the record malformed.
    #[must_use]
    pub fn without_thumb(mut self) -> Self {
        self.thumb = None;
        self
    }

    /// Drops the author, making the record malformed.
    #[must_use]
    pub fn without_author(mut self) -> Self {
        self.author = None;
        self
    }

    /// Builds the JSON record.
    #[must_use]
    pub fn build(self) -> Value {
        let mut urls = json!({ "raw": "https://images.example/raw", "small": "https://images.example/small" });
        if let Some(thumb) = self.thumb {
            urls["thumb"] = Value::String(thumb);
        }
        if let Some(regular) = self.regular {
            urls["regular"] = Value::String(regular);
        }

        let mut record = json!({
            "id": self.id,
            "urls": urls,
            "likes": 0,
            "title": self.title,
            "description": self.description,
        });
        if let Some(name) = self.author {
            record["user"] = json!({ "name": name, "username": "someone" });
        }
        record
    }
}

/// Builds a page of complete records with the given ids.
#[must_use]
pub fn page_of(ids: &[&str]) -> Vec<Value> {
    ids.iter().map(|id| RecordBuilder::new(id).build()).collect()
}

/// Builds a page of `count` complete records with ids `{prefix}-0`, `{prefix}-1`, …
#[must_use]
pub fn numbered_page(prefix: &str, count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| RecordBuilder::new(&format!("{prefix}-{i}")).build())
        .collect()
}
