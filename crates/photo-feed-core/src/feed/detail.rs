//! Single-photo lookup for the detail view.

use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::{normalize_record, Photo, PhotoId, RecordError};
use crate::ports::PhotoApi;

/// Why a photo could not be shown.
#[derive(Debug, Error)]
pub enum DetailError {
    /// The API call failed or returned a non-success status.
    #[error("failed to fetch photo details")]
    FetchFailed(#[source] anyhow::Error),
    /// The API answered with a record that is not a valid photo.
    #[error("photo record is malformed: {0}")]
    Malformed(#[from] RecordError),
}

/// Fetches and validates one photo.
///
/// # Errors
///
/// Returns [`DetailError::FetchFailed`] when the request fails and
/// [`DetailError::Malformed`] when the record does not validate.
pub fn load_photo<A: PhotoApi + ?Sized>(api: &A, id: &PhotoId) -> Result<Photo, DetailError> {
    debug!(%id, "Fetching photo details");
    let record = api.fetch_photo(id).map_err(|e| {
        warn!(%id, "Failed to fetch photo details: {e:#}");
        DetailError::FetchFailed(e)
    })?;
    Ok(normalize_record(&record)?)
}
