//! Test support utilities for photo-feed.
//!
//! Provides mocks of every core port and builders for raw API records.
//!
//! # Example
//!
//! ```
//! use photo_feed_core::FeedLoader;
//! use photo_feed_test_support::{page_of, MockPhotoApi};
//!
//! let api = MockPhotoApi::with_pages(vec![page_of(&["1", "2", "3"])]);
//! let mut loader = FeedLoader::new(api);
//! loader.load_next_page();
//! assert_eq!(loader.photos().len(), 3);
//! ```

mod builders;
mod mocks;

pub use builders::{numbered_page, page_of, RecordBuilder};
pub use mocks::{
    MockFeedEventSink, MockPhotoApi, MockViewportObserver, ObserverCall, PageScript,
};
