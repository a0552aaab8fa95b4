//! Accumulated feed state.

use std::collections::HashSet;

use thiserror::Error;

use super::{Photo, PhotoId};

/// Failure surfaced to the presentation layer.
///
/// Displays a generic message; the underlying cause is kept in `reason`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedError {
    /// The API call failed or returned a non-success status.
    #[error("failed to fetch photos")]
    FetchFailed {
        /// Page that failed.
        page: u32,
        /// Underlying cause, for logs.
        reason: String,
    },
}

/// Coarse state of the feed, derived from its flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedStatus {
    /// Ready to load the next page.
    Idle,
    /// A page request is outstanding.
    Loading,
    /// An empty page was returned. Terminal.
    Exhausted,
    /// The last request failed.
    Failed,
}

/// Ordered, deduplicated photos plus pagination flags.
#[derive(Debug, Clone)]
pub struct FeedState {
    photos: Vec<Photo>,
    seen: HashSet<PhotoId>,
    page: u32,
    pub(crate) loading: bool,
    pub(crate) has_more: bool,
    pub(crate) error: Option<FeedError>,
}

impl Default for FeedState {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedState {
    /// Creates an empty feed positioned on page 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            photos: Vec::new(),
            seen: HashSet::new(),
            page: 1,
            loading: false,
            has_more: true,
            error: None,
        }
    }

    /// Photos in arrival order.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// The most recently appended photo.
    #[must_use]
    pub fn last(&self) -> Option<&Photo> {
        self.photos.last()
    }

    /// Number of photos loaded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    /// Returns true if nothing has been loaded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Returns true if a photo with this id is already in the feed.
    #[must_use]
    pub fn contains(&self, id: &PhotoId) -> bool {
        self.seen.contains(id)
    }

    /// Page number the next request will ask for.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns true while a page request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns false once an empty page has been seen.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// The last fetch error, if the feed is in the failed state.
    #[must_use]
    pub const fn error(&self) -> Option<&FeedError> {
        self.error.as_ref()
    }

    /// Current state-machine status.
    #[must_use]
    pub const fn status(&self) -> FeedStatus {
        if self.loading {
            FeedStatus::Loading
        } else if !self.has_more {
            FeedStatus::Exhausted
        } else if self.error.is_some() {
            FeedStatus::Failed
        } else {
            FeedStatus::Idle
        }
    }

    /// Appends photos whose ids are not yet present, in order.
    ///
    /// Returns `(appended, duplicates)`. Duplicates within `incoming` itself
    /// are dropped too.
    pub(crate) fn merge(&mut self, incoming: Vec<Photo>) -> (usize, usize) {
        let mut appended = 0;
        let mut duplicates = 0;
        for photo in incoming {
            if self.seen.insert(photo.id.clone()) {
                self.photos.push(photo);
                appended += 1;
            } else {
                duplicates += 1;
            }
        }
        (appended, duplicates)
    }

    /// Moves to the next page. The last representable page ends the feed.
    pub(crate) fn advance_page(&mut self) {
        match self.page.checked_add(1) {
            Some(next) => self.page = next,
            None => self.has_more = false,
        }
    }
}
