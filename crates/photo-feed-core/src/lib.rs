//! Photo Feed Core - Domain logic for an infinite-scroll photo feed
//!
//! This crate contains the photo and feed domain types, the paginating feed
//! loader, the visibility trigger that advances it, and the ports through
//! which adapters supply the photo API and the viewport.

pub mod domain;
pub mod feed;
pub mod ports;

pub use domain::{
    ApiConfig, Author, ConfigError, FeedError, FeedState, FeedStatus, Photo, PhotoId, PhotoUrls,
    RecordError,
};
pub use feed::{
    load_photo, DetailError, FeedLoader, FeedSession, LoadOutcome, PageRequest, SkipReason,
    VisibilityTrigger,
};
pub use ports::{FeedEvent, FeedEventSink, IntersectionEntry, Marker, PhotoApi, ViewportObserver};
