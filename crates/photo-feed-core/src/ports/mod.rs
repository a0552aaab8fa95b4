//! Port definitions for hexagonal architecture.
//!
//! These traits define the boundaries between the feed core and external adapters.

mod feed_events;
mod photo_api;
mod viewport;

pub use feed_events::{FeedEvent, FeedEventSink};
pub use photo_api::PhotoApi;
pub use viewport::{IntersectionEntry, Marker, ViewportObserver};
