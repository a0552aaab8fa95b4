//! Incremental feed loader.
//!
//! Requests pages strictly in order, one at a time, and merges each page into
//! the feed without ever admitting a duplicate id.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{normalize_record, FeedError, FeedState, FeedStatus, Photo};
use crate::ports::{FeedEvent, FeedEventSink, PhotoApi};

/// Ticket for an outstanding page request.
///
/// Handed out by [`FeedLoader::begin_page`] and consumed by
/// [`FeedLoader::finish_page`]. Not `Clone`: a request settles once.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a page request must be settled with `finish_page`"]
pub struct PageRequest {
    page: u32,
}

impl PageRequest {
    /// Page number this request asks for.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }
}

/// Why a load was not started.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// A request is already outstanding.
    Loading,
    /// The feed is exhausted.
    Exhausted,
    /// The last request failed; only [`FeedLoader::retry`] resumes.
    Failed,
    /// `retry` was called while nothing had failed.
    NotFailed,
    /// The loader was torn down.
    TornDown,
}

/// Result of a load attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// No request was issued.
    Skipped(SkipReason),
    /// A non-empty page was merged.
    Loaded {
        /// Page that was loaded.
        page: u32,
        /// Photos appended to the feed.
        appended: usize,
        /// Records dropped as already present.
        duplicates: usize,
        /// Records dropped as malformed.
        malformed: usize,
    },
    /// The page was empty; the feed is exhausted.
    Exhausted {
        /// The empty page.
        page: u32,
    },
    /// The request failed; the error is recorded in the state.
    Failed {
        /// Page that failed.
        page: u32,
    },
    /// A response arrived after teardown and was ignored.
    Discarded {
        /// Page of the ignored response.
        page: u32,
    },
}

impl LoadOutcome {
    /// Returns true if the feed gained photos.
    #[must_use]
    pub const fn grew(&self) -> bool {
        matches!(self, Self::Loaded { appended, .. } if *appended > 0)
    }
}

/// Owns the feed state and drives page requests against a [`PhotoApi`].
pub struct FeedLoader<A> {
    api: A,
    state: FeedState,
    events: Option<Arc<dyn FeedEventSink>>,
    torn_down: bool,
}

impl<A: PhotoApi> FeedLoader<A> {
    /// Creates a loader positioned on page 1.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: FeedState::new(),
            events: None,
            torn_down: false,
        }
    }

    /// Attaches a sink that receives every [`FeedEvent`].
    #[must_use]
    pub fn with_events(mut self, sink: Arc<dyn FeedEventSink>) -> Self {
        self.events = Some(sink);
        self
    }

    /// The accumulated feed.
    #[must_use]
    pub const fn state(&self) -> &FeedState {
        &self.state
    }

    /// Photos in arrival order.
    #[must_use]
    pub fn photos(&self) -> &[Photo] {
        self.state.photos()
    }

    /// Current state-machine status.
    #[must_use]
    pub const fn status(&self) -> FeedStatus {
        self.state.status()
    }

    /// Returns true while a page request is outstanding.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Returns false once the feed is exhausted.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.state.has_more()
    }

    /// Returns true after [`teardown`](Self::teardown).
    #[must_use]
    pub const fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// The API this loader fetches from.
    #[must_use]
    pub const fn api(&self) -> &A {
        &self.api
    }

    /// Requests the next page and merges the result.
    ///
    /// A no-op while loading, after exhaustion, after a failure and after
    /// teardown; the returned [`LoadOutcome::Skipped`] says which.
    pub fn load_next_page(&mut self) -> LoadOutcome {
        let request = match self.begin_page() {
            Ok(request) => request,
            Err(reason) => return LoadOutcome::Skipped(reason),
        };
        let result = self.api.fetch_page(request.page);
        self.finish_page(request, result)
    }

    /// Clears a failure and requests the same page again.
    pub fn retry(&mut self) -> LoadOutcome {
        if self.torn_down {
            return LoadOutcome::Skipped(SkipReason::TornDown);
        }
        match self.state.status() {
            FeedStatus::Failed => {
                info!(page = self.state.page(), "Retrying failed page");
                self.state.error = None;
                self.load_next_page()
            }
            _ => LoadOutcome::Skipped(SkipReason::NotFailed),
        }
    }

    /// Starts a page request, marking the feed as loading.
    ///
    /// # Errors
    ///
    /// Returns the [`SkipReason`] when no request may be issued.
    pub fn begin_page(&mut self) -> Result<PageRequest, SkipReason> {
        if self.torn_down {
            return Err(SkipReason::TornDown);
        }
        match self.state.status() {
            FeedStatus::Loading => return Err(SkipReason::Loading),
            FeedStatus::Exhausted => return Err(SkipReason::Exhausted),
            FeedStatus::Failed => return Err(SkipReason::Failed),
            FeedStatus::Idle => {}
        }

        let page = self.state.page();
        self.state.loading = true;
        debug!(page, "Requesting page");
        self.emit(FeedEvent::PageRequested { page });
        Ok(PageRequest { page })
    }

    /// Settles a page request with the API result.
    pub fn finish_page(
        &mut self,
        request: PageRequest,
        result: anyhow::Result<Vec<Value>>,
    ) -> LoadOutcome {
        let page = request.page;
        // Cleared on every exit path, including the discarded ones.
        self.state.loading = false;

        if self.torn_down {
            debug!(page, "Discarding response received after teardown");
            return LoadOutcome::Discarded { page };
        }
        if page != self.state.page() {
            warn!(
                page,
                expected = self.state.page(),
                "Discarding response for unexpected page"
            );
            return LoadOutcome::Discarded { page };
        }

        match result {
            Ok(records) if records.is_empty() => {
                self.state.has_more = false;
                info!(page, total = self.state.len(), "Feed exhausted");
                self.emit(FeedEvent::Exhausted { page });
                LoadOutcome::Exhausted { page }
            }
            Ok(records) => self.merge_page(page, &records),
            Err(e) => {
                warn!(page, "Failed to fetch photos: {e:#}");
                let reason = format!("{e:#}");
                self.state.error = Some(FeedError::FetchFailed {
                    page,
                    reason: reason.clone(),
                });
                self.emit(FeedEvent::Failed { page, reason });
                LoadOutcome::Failed { page }
            }
        }
    }

    /// Stops the loader. Later requests are refused and late responses ignored.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            debug!(photos = self.state.len(), "Tearing down feed loader");
            self.torn_down = true;
        }
    }

    fn merge_page(&mut self, page: u32, records: &[Value]) -> LoadOutcome {
        let mut photos = Vec::with_capacity(records.len());
        let mut malformed = 0;
        for (index, record) in records.iter().enumerate() {
            match normalize_record(record) {
                Ok(photo) => photos.push(photo),
                Err(e) => {
                    warn!(page, index, "Dropping malformed record: {e}");
                    malformed += 1;
                }
            }
        }

        let (appended, duplicates) = self.state.merge(photos);
        self.state.advance_page();
        debug!(
            page,
            appended,
            duplicates,
            malformed,
            total = self.state.len(),
            "Merged page"
        );
        self.emit(FeedEvent::PageLoaded {
            page,
            appended,
            duplicates,
            malformed,
        });
        LoadOutcome::Loaded {
            page,
            appended,
            duplicates,
            malformed,
        }
    }

    fn emit(&self, event: FeedEvent) {
        if let Some(sink) = &self.events {
            sink.on_event(event);
        }
    }
}
