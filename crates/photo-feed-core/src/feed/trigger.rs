//! Visibility trigger: advances the feed when the last card scrolls into view.

use tracing::{debug, trace};

use super::{FeedLoader, LoadOutcome};
use crate::domain::{FeedStatus, Photo};
use crate::ports::{IntersectionEntry, Marker, PhotoApi, ViewportObserver};

/// Watches a single marker element and asks the loader for the next page
/// when it becomes visible.
pub struct VisibilityTrigger<O> {
    observer: O,
    marker: Option<Marker>,
}

impl<O: ViewportObserver> VisibilityTrigger<O> {
    /// Creates a trigger that is not watching anything yet.
    #[must_use]
    pub const fn new(observer: O) -> Self {
        Self {
            observer,
            marker: None,
        }
    }

    /// The marker currently observed.
    #[must_use]
    pub const fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// The underlying viewport observer.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Observes `marker`, dropping any previous observation first.
    pub fn attach(&mut self, marker: Marker) {
        if self.marker.is_some() {
            self.observer.disconnect();
        }
        debug!(marker = %marker.photo_id(), "Observing marker");
        self.observer.observe(&marker);
        self.marker = Some(marker);
    }

    /// Stops observing.
    pub fn detach(&mut self) {
        if self.marker.take().is_some() {
            self.observer.disconnect();
        }
    }

    /// Moves the marker to the last photo if it changed.
    ///
    /// Returns true when the trigger was re-attached.
    pub fn rearm(&mut self, photos: &[Photo]) -> bool {
        let Some(last) = photos.last() else {
            return false;
        };
        if self.marker.as_ref().map(Marker::photo_id) == Some(&last.id) {
            return false;
        }
        self.attach(Marker::for_photo(last));
        true
    }

    /// Handles one visibility change.
    ///
    /// Fires [`on_visible`](Self::on_visible) when the observed marker
    /// entered the viewport and the loader can take another page; returns
    /// `None` when the entry was ignored.
    pub fn on_intersection<A: PhotoApi>(
        &mut self,
        entry: &IntersectionEntry,
        loader: &mut FeedLoader<A>,
    ) -> Option<LoadOutcome> {
        if !entry.is_intersecting || self.marker.as_ref() != Some(&entry.marker) {
            return None;
        }
        if loader.status() != FeedStatus::Idle {
            trace!(status = ?loader.status(), "Visibility suppressed");
            return None;
        }
        Some(self.on_visible(loader))
    }

    /// Asks the loader for the next page.
    #[allow(clippy::unused_self)]
    pub fn on_visible<A: PhotoApi>(&mut self, loader: &mut FeedLoader<A>) -> LoadOutcome {
        loader.load_next_page()
    }
}
