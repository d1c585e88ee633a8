//! Column codecs for the SQLite rows: timestamps as RFC 3339 text, enums as
//! their lowercase wire names, and the two JSON columns (request timelines,
//! poll options) as serialized arrays.

use campus_core::types::poll::PollOption;
use campus_core::types::request::TimelineEntry;
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("bad json column: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown variant in column: {0}")]
    Variant(String),
    #[error("bad timestamp column: {0}")]
    Timestamp(String),
}

pub fn timestamp_to_sql(at: &DateTime<Utc>) -> String {
    at.to_rfc3339()
}

pub fn timestamp_from_sql(raw: &str) -> Result<DateTime<Utc>, CodecError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|at| at.with_timezone(&Utc))
        .map_err(|_| CodecError::Timestamp(raw.to_string()))
}

/// Stores an enum as the bare variant name its serde rename produces, so the
/// column holds the same value the API serves (`"pending"`, `"slides"`, ...).
pub fn variant_to_sql<T: Serialize>(value: &T) -> Result<String, CodecError> {
    match serde_json::to_value(value)? {
        Value::String(name) => Ok(name),
        other => Err(CodecError::Variant(other.to_string())),
    }
}

pub fn variant_from_sql<T: DeserializeOwned>(raw: &str) -> Result<T, CodecError> {
    Ok(serde_json::from_value(Value::String(raw.to_string()))?)
}

pub fn timeline_to_sql(timeline: &[TimelineEntry]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(timeline)?)
}

pub fn timeline_from_sql(raw: &str) -> Result<Vec<TimelineEntry>, CodecError> {
    Ok(serde_json::from_str(raw)?)
}

pub fn options_to_sql(options: &[PollOption]) -> Result<String, CodecError> {
    Ok(serde_json::to_string(options)?)
}

pub fn options_from_sql(raw: &str) -> Result<Vec<PollOption>, CodecError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::types::enums::{RequestStatus, ResourceKind};

    #[test]
    fn variants_store_their_wire_names() {
        assert_eq!(variant_to_sql(&RequestStatus::Pending).unwrap(), "pending");
        assert_eq!(variant_to_sql(&ResourceKind::Slides).unwrap(), "slides");
        let status: RequestStatus = variant_from_sql("resolved").unwrap();
        assert_eq!(status, RequestStatus::Resolved);
    }

    #[test]
    fn unknown_variant_is_an_error() {
        assert!(variant_from_sql::<RequestStatus>("archived").is_err());
    }

    #[test]
    fn bad_timestamp_is_an_error() {
        assert!(timestamp_from_sql("yesterday").is_err());
    }
}
