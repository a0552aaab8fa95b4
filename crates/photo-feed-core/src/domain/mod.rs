//! Core domain types for the photo feed.

mod config;
mod feed;
mod photo;
mod record;

pub use config::{ApiConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use feed::{FeedError, FeedState, FeedStatus};
pub use photo::{Author, Photo, PhotoId, PhotoUrls, NO_DESCRIPTION, UNTITLED};
pub use record::{normalize_record, RecordError};
