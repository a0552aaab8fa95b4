//! Photo Feed Adapters - External adapters for photo-feed.
//!
//! This crate provides implementations of the `PhotoApi` port:
//! - HTTP client for an Unsplash-compatible API
//! - Filesystem source reading records from JSON files

pub mod fs;
pub mod http;

pub use fs::FsPhotoApi;
pub use http::HttpPhotoApi;
