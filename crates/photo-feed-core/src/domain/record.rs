//! Normalization of raw API records into [`Photo`].
//!
//! The API hands back loosely shaped JSON. Records are validated here, at the
//! boundary, and anything missing a required field is rejected instead of
//! being carried into the feed half-populated.

use serde_json::Value;
use thiserror::Error;

use super::{Author, Photo, PhotoId, PhotoUrls};

/// Why a raw record could not become a [`Photo`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    /// The record is not a JSON object.
    #[error("record is not an object")]
    NotAnObject,
    /// A required field is absent, null or empty.
    #[error("record is missing `{0}`")]
    MissingField(&'static str),
    /// The `id` field is neither a non-empty string nor an integer.
    #[error("record id must be a string or an integer")]
    InvalidId,
}

/// Validates a raw API record into a [`Photo`].
///
/// # Errors
///
/// Returns a [`RecordError`] naming the first problem found.
pub fn normalize_record(record: &Value) -> Result<Photo, RecordError> {
    if !record.is_object() {
        return Err(RecordError::NotAnObject);
    }

    let id = normalize_id(record.get("id"))?;
    let thumb = required_str(record, "/urls/thumb", "urls.thumb")?;
    let regular = required_str(record, "/urls/regular", "urls.regular")?;
    let name = required_str(record, "/user/name", "user.name")?;

    Ok(Photo {
        id,
        urls: PhotoUrls { thumb, regular },
        user: Author { name },
        title: optional_str(record, "/title"),
        description: optional_str(record, "/description"),
    })
}

fn normalize_id(value: Option<&Value>) -> Result<PhotoId, RecordError> {
    match value {
        None | Some(Value::Null) => Err(RecordError::MissingField("id")),
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(PhotoId::new(s.as_str())),
        Some(Value::Number(n)) if n.is_i64() || n.is_u64() => Ok(PhotoId::new(n.to_string())),
        Some(_) => Err(RecordError::InvalidId),
    }
}

fn required_str(record: &Value, pointer: &str, field: &'static str) -> Result<String, RecordError> {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .ok_or(RecordError::MissingField(field))
}

/// Empty strings count as absent, matching how the gallery treats them.
fn optional_str(record: &Value, pointer: &str) -> Option<String> {
    record
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn full_record() -> Value {
        json!({
            "id": "Dwu85P9SOIk",
            "urls": {
                "raw": "https://images/raw",
                "thumb": "https://images/thumb",
                "regular": "https://images/regular"
            },
            "user": { "name": "Jane Doe", "username": "jdoe" },
            "title": "Harbor",
            "description": "Boats at dawn",
            "likes": 12
        })
    }

    #[test]
    fn test_normalize_full_record() {
        let photo = normalize_record(&full_record()).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(photo.id.as_str(), "Dwu85P9SOIk");
        assert_eq!(photo.urls.thumb, "https://images/thumb");
        assert_eq!(photo.urls.regular, "https://images/regular");
        assert_eq!(photo.user.name, "Jane Doe");
        assert_eq!(photo.title.as_deref(), Some("Harbor"));
        assert_eq!(photo.description.as_deref(), Some("Boats at dawn"));
    }

    #[test]
    fn test_numeric_id_becomes_string() {
        let mut record = full_record();
        record["id"] = json!(42);
        let photo = normalize_record(&record).unwrap_or_else(|e| panic!("{e}"));
        assert_eq!(photo.id, PhotoId::new("42"));
    }

    #[test]
    fn test_null_and_empty_optionals_are_absent() {
        let mut record = full_record();
        record["title"] = Value::Null;
        record["description"] = json!("   ");
        let photo = normalize_record(&record).unwrap_or_else(|e| panic!("{e}"));
        assert!(photo.title.is_none());
        assert!(photo.description.is_none());
    }

    #[test]
    fn test_missing_required_fields() {
        let mut no_id = full_record();
        no_id["id"] = Value::Null;
        assert_eq!(normalize_record(&no_id), Err(RecordError::MissingField("id")));

        let mut no_thumb = full_record();
        no_thumb["urls"] = json!({ "regular": "https://images/regular" });
        assert_eq!(
            normalize_record(&no_thumb),
            Err(RecordError::MissingField("urls.thumb"))
        );

        let mut no_user = full_record();
        no_user.as_object_mut().map(|o| o.remove("user"));
        assert_eq!(
            normalize_record(&no_user),
            Err(RecordError::MissingField("user.name"))
        );
    }

    #[test]
    fn test_invalid_id_and_shape() {
        let mut float_id = full_record();
        float_id["id"] = json!(1.5);
        assert_eq!(normalize_record(&float_id), Err(RecordError::InvalidId));

        assert_eq!(normalize_record(&json!([1, 2])), Err(RecordError::NotAnObject));
    }
}
