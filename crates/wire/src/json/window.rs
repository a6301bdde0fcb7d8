//! Time-window codec
//!
//! Timestamps are RFC 3339 strings with whole seconds and a `Z` suffix:
//! `2023-01-01T00:00:00Z`. Any RFC 3339 offset is accepted on decode and
//! normalised to UTC.
//!
//! On the wire an asset carries its interval twice: a nested `window` object
//! and top-level `start`/`end`. Only the top-level pair is read back; the
//! nested object is a display copy.

use super::decode::{string, JsonObject};
use super::error::DecodeError;
use chrono::{DateTime, SecondsFormat, Utc};
use costwire_core::Window;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Format an instant in the wire profile
pub fn format_timestamp(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parse an RFC 3339 timestamp read from `field`
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<DateTime<Utc>, DecodeError> {
    DateTime::parse_from_rfc3339(value)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|source| DecodeError::Timestamp {
            field,
            value: value.to_string(),
            source,
        })
}

/// Decode the record's top-level `start`/`end` pair
///
/// Both are required strings; a missing, mistyped or unparseable endpoint
/// fails the record.
pub fn decode_window(record: &JsonObject) -> Result<Window, DecodeError> {
    let start = string(record, "start").required("start", "string")?;
    let start = parse_timestamp("start", start)?;
    let end = string(record, "end").required("end", "string")?;
    let end = parse_timestamp("end", end)?;
    Ok(Window::new(start, end))
}

/// Serializes a [`Window`] as `{"start": ..., "end": ...}`
pub struct WireWindow<'a>(pub &'a Window);

impl Serialize for WireWindow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("start", &format_timestamp(self.0.start()))?;
        map.serialize_entry("end", &format_timestamp(self.0.end()))?;
        map.end()
    }
}
