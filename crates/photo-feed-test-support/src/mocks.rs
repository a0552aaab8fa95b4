//! Mock implementations of core port traits.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

use photo_feed_core::domain::PhotoId;
use photo_feed_core::ports::{FeedEvent, FeedEventSink, Marker, PhotoApi, ViewportObserver};
use serde_json::Value;

/// One scripted answer of [`MockPhotoApi`].
#[derive(Debug, Clone)]
pub enum PageScript {
    /// Answer with these records.
    Records(Vec<Value>),
    /// Fail with this message.
    Fail(String),
}

/// Mock implementation of `PhotoApi` for testing.
///
/// Answers page requests from a script, in call order, and records every page
/// number asked for. Once the script runs out every page is empty.
#[derive(Clone)]
pub struct MockPhotoApi {
    pages: Arc<Mutex<VecDeque<PageScript>>>,
    photos: Arc<Mutex<HashMap<PhotoId, Value>>>,
    requests: Arc<Mutex<Vec<u32>>>,
    photo_requests: Arc<Mutex<Vec<PhotoId>>>,
}

impl MockPhotoApi {
    /// Creates a mock answering with the given script.
    #[must_use]
    pub fn new(pages: Vec<PageScript>) -> Self {
        Self {
            pages: Arc::new(Mutex::new(pages.into())),
            photos: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            photo_requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Creates a mock whose every page is empty.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Creates a mock answering successive pages with these records.
    #[must_use]
    pub fn with_pages(pages: Vec<Vec<Value>>) -> Self {
        Self::new(pages.into_iter().map(PageScript::Records).collect())
    }

    /// Appends another scripted answer.
    pub fn push(&self, script: PageScript) {
        self.pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(script);
    }

    /// Registers a record served by `fetch_photo`.
    #[must_use]
    pub fn with_photo(self, record: Value) -> Self {
        let id = match &record["id"] {
            Value::String(s) => PhotoId::new(s.as_str()),
            other => PhotoId::new(other.to_string()),
        };
        self.photos
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, record);
        self
    }

    /// Page numbers requested so far, in order.
    #[must_use]
    pub fn requests(&self) -> Vec<u32> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of page requests made.
    #[must_use]
    pub fn request_count(&self) -> usize {
        self.requests().len()
    }

    /// Photo ids looked up so far, in order.
    #[must_use]
    pub fn photo_requests(&self) -> Vec<PhotoId> {
        self.photo_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Default for MockPhotoApi {
    fn default() -> Self {
        Self::empty()
    }
}

impl PhotoApi for MockPhotoApi {
    fn fetch_page(&self, page: u32) -> anyhow::Result<Vec<Value>> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(page);

        let next = self
            .pages
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front();
        match next {
            Some(PageScript::Records(records)) => Ok(records),
            Some(PageScript::Fail(message)) => Err(anyhow::anyhow!(message)),
            None => Ok(Vec::new()),
        }
    }

    fn fetch_photo(&self, id: &PhotoId) -> anyhow::Result<Value> {
        self.photo_requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(id.clone());

        self.photos
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 Not Found: photo {id}"))
    }
}

/// Mock implementation of `FeedEventSink` for testing.
///
/// Captures events for later assertions.
pub struct MockFeedEventSink {
    events: Arc<Mutex<Vec<FeedEvent>>>,
}

impl MockFeedEventSink {
    /// Creates a new mock event sink.
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all captured events.
    #[must_use]
    pub fn events(&self) -> Vec<FeedEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the number of `PageRequested` events.
    #[must_use]
    pub fn requested_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, FeedEvent::PageRequested { .. }))
            .count()
    }

    /// Returns the number of `Exhausted` events.
    #[must_use]
    pub fn exhausted_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, FeedEvent::Exhausted { .. }))
            .count()
    }

    /// Returns the number of `Failed` events.
    #[must_use]
    pub fn failed_count(&self) -> usize {
        self.events()
            .iter()
            .filter(|e| matches!(e, FeedEvent::Failed { .. }))
            .count()
    }
}

impl Default for MockFeedEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedEventSink for MockFeedEventSink {
    fn on_event(&self, event: FeedEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

/// One call received by [`MockViewportObserver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObserverCall {
    /// `observe` was called with this marker.
    Observe(Marker),
    /// `disconnect` was called.
    Disconnect,
}

/// Mock implementation of `ViewportObserver` for testing.
///
/// Records calls and tracks which marker is live.
#[derive(Debug, Default)]
pub struct MockViewportObserver {
    calls: Vec<ObserverCall>,
    observed: Option<Marker>,
}

impl MockViewportObserver {
    /// Creates a new mock observer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded calls.
    #[must_use]
    pub fn calls(&self) -> &[ObserverCall] {
        &self.calls
    }

    /// The marker currently observed, if any.
    #[must_use]
    pub const fn observed(&self) -> Option<&Marker> {
        self.observed.as_ref()
    }

    /// Returns the number of `observe` calls.
    #[must_use]
    pub fn observe_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, ObserverCall::Observe(_)))
            .count()
    }
}

impl ViewportObserver for MockViewportObserver {
    fn observe(&mut self, marker: &Marker) {
        self.calls.push(ObserverCall::Observe(marker.clone()));
        self.observed = Some(marker.clone());
    }

    fn disconnect(&mut self) {
        self.calls.push(ObserverCall::Disconnect);
        self.observed = None;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::RecordBuilder;

    #[test]
    fn test_mock_photo_api_script() {
        let api = MockPhotoApi::new(vec![
            PageScript::Records(vec![RecordBuilder::new("a").build()]),
            PageScript::Fail("boom".into()),
        ]);

        assert_eq!(api.fetch_page(1).unwrap().len(), 1);
        assert!(api.fetch_page(2).is_err());
        assert!(api.fetch_page(3).unwrap().is_empty());
        assert_eq!(api.requests(), [1, 2, 3]);
    }

    #[test]
    fn test_mock_photo_api_lookup() {
        let api = MockPhotoApi::empty().with_photo(RecordBuilder::new("x").build());

        assert!(api.fetch_photo(&PhotoId::new("x")).is_ok());
        assert!(api.fetch_photo(&PhotoId::new("y")).is_err());
        assert_eq!(api.photo_requests().len(), 2);
    }

    #[test]
    fn test_mock_event_sink() {
        let sink = MockFeedEventSink::new();
        sink.on_event(FeedEvent::PageRequested { page: 1 });
        sink.on_event(FeedEvent::Exhausted { page: 1 });

        assert_eq!(sink.requested_count(), 1);
        assert_eq!(sink.exhausted_count(), 1);
        assert_eq!(sink.failed_count(), 0);
    }

    #[test]
    fn test_mock_viewport_observer() {
        let mut observer = MockViewportObserver::new();
        let marker = Marker::from(PhotoId::new("a"));
        observer.observe(&marker);
        assert_eq!(observer.observed(), Some(&marker));

        observer.disconnect();
        assert!(observer.observed().is_none());
        assert_eq!(
            observer.calls(),
            [ObserverCall::Observe(marker), ObserverCall::Disconnect]
        );
    }
}
