//! Viewport visibility port.

use crate::domain::{Photo, PhotoId};

/// The element standing for the last loaded photo.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Marker(PhotoId);

impl Marker {
    /// Marker for the card of `photo`.
    #[must_use]
    pub fn for_photo(photo: &Photo) -> Self {
        Self(photo.id.clone())
    }

    /// Id of the photo the marker belongs to.
    #[must_use]
    pub const fn photo_id(&self) -> &PhotoId {
        &self.0
    }
}

impl From<PhotoId> for Marker {
    fn from(id: PhotoId) -> Self {
        Self(id)
    }
}

/// One visibility change reported by the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntersectionEntry {
    /// Element whose visibility changed.
    pub marker: Marker,
    /// True when the element entered the viewport.
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Entry reporting that `marker` became visible.
    #[must_use]
    pub const fn visible(marker: Marker) -> Self {
        Self {
            marker,
            is_intersecting: true,
        }
    }

    /// Entry reporting that `marker` left the viewport.
    #[must_use]
    pub const fn hidden(marker: Marker) -> Self {
        Self {
            marker,
            is_intersecting: false,
        }
    }
}

/// Port for whatever watches element visibility (a browser observer, a
/// terminal pager, a test double).
pub trait ViewportObserver {
    /// Starts watching `marker`.
    fn observe(&mut self, marker: &Marker);

    /// Stops watching whatever is currently observed.
    fn disconnect(&mut self);
}
