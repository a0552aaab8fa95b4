//! Terminal stand-in for the browser viewport.

use photo_feed_core::{Marker, ViewportObserver};
use tracing::trace;

/// Tracks which photo marks the end of the printed feed.
///
/// A terminal has no scroll position, so the feed command treats the marker
/// as visible as soon as the previous page has been printed.
#[derive(Debug, Default)]
pub struct ScrollViewport {
    observed: Option<Marker>,
}

impl ScrollViewport {
    /// The marker currently observed.
    #[allow(dead_code)] // Used by tests
    pub const fn observed(&self) -> Option<&Marker> {
        self.observed.as_ref()
    }
}

impl ViewportObserver for ScrollViewport {
    fn observe(&mut self, marker: &Marker) {
        trace!(marker = %marker.photo_id(), "Watching end of feed");
        self.observed = Some(marker.clone());
    }

    fn disconnect(&mut self) {
        self.observed = None;
    }
}
