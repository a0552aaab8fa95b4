//! Photo API port for fetching raw photo records.

use serde_json::Value;

use crate::domain::PhotoId;

/// Port for the external photo API.
///
/// Implementations return records exactly as the API shaped them; the core
/// normalizes them into [`Photo`](crate::domain::Photo).
pub trait PhotoApi: Send + Sync {
    /// Fetches one page of photo records. An empty list means the feed is
    /// exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status.
    fn fetch_page(&self, page: u32) -> anyhow::Result<Vec<Value>>;

    /// Fetches a single photo record.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the API answers with a
    /// non-success status.
    fn fetch_photo(&self, id: &PhotoId) -> anyhow::Result<Value>;
}

impl<T: PhotoApi + ?Sized> PhotoApi for Box<T> {
    fn fetch_page(&self, page: u32) -> anyhow::Result<Vec<Value>> {
        (**self).fetch_page(page)
    }

    fn fetch_photo(&self, id: &PhotoId) -> anyhow::Result<Value> {
        (**self).fetch_photo(id)
    }
}

impl<T: PhotoApi + ?Sized> PhotoApi for &T {
    fn fetch_page(&self, page: u32) -> anyhow::Result<Vec<Value>> {
        (**self).fetch_page(page)
    }

    fn fetch_photo(&self, id: &PhotoId) -> anyhow::Result<Value> {
        (**self).fetch_photo(id)
    }
}
