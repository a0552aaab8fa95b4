//! Feed event port for UI integration.

/// Events emitted by the feed loader as pages settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedEvent {
    /// A page request was issued.
    PageRequested {
        /// Page number requested.
        page: u32,
    },
    /// A non-empty page was merged into the feed.
    PageLoaded {
        /// Page number loaded.
        page: u32,
        /// Photos appended to the feed.
        appended: usize,
        /// Records dropped because their id was already present.
        duplicates: usize,
        /// Records dropped because they failed validation.
        malformed: usize,
    },
    /// An empty page was returned; no further pages will be requested.
    Exhausted {
        /// The empty page.
        page: u32,
    },
    /// The page request failed.
    Failed {
        /// Page that failed.
        page: u32,
        /// Underlying cause.
        reason: String,
    },
}

/// Port for receiving feed events.
pub trait FeedEventSink: Send + Sync {
    /// Called when a feed event occurs.
    fn on_event(&self, event: FeedEvent);
}
