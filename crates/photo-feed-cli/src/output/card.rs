//! What a rendered photo card shows.

use photo_feed_core::Photo;
use serde::Serialize;

/// A photo as the feed presents it, with title and description fallbacks
/// already applied.
#[derive(Debug, Serialize)]
pub struct PhotoCard<'a> {
    pub id: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub alt: String,
    pub author: &'a str,
    pub thumb: &'a str,
    pub regular: &'a str,
}

impl<'a> From<&'a Photo> for PhotoCard<'a> {
    fn from(photo: &'a Photo) -> Self {
        Self {
            id: photo.id.as_str(),
            title: photo.display_title(),
            description: photo.display_description(),
            alt: photo.alt_text(),
            author: &photo.user.name,
            thumb: &photo.urls.thumb,
            regular: &photo.urls.regular,
        }
    }
}
