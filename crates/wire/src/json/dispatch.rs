//! Type dispatcher
//!
//! Peeks at a record's `type` discriminator and routes it to the matching
//! per-kind decoder. A missing, non-string, empty or unrecognised
//! discriminator widens to the generic kind; that is a fallback, not an
//! error.

use super::decode::{expect_object, parse_value, string, JsonObject};
use super::error::DecodeError;
use super::record::decode_record;
use costwire_core::{Asset, AssetType};
use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::Value;

/// Kind named by a record's discriminator
pub fn discriminator_of(record: &JsonObject) -> AssetType {
    string(record, "type")
        .present()
        .map(AssetType::from_discriminator)
        .unwrap_or(AssetType::Any)
}

/// Decode a parsed record, dispatching on its discriminator
pub fn asset_from_value(value: &Value) -> Result<Asset, DecodeError> {
    let record = expect_object(value)?;
    decode_record(discriminator_of(record), record)
}

/// Decode one record from JSON bytes, dispatching on its discriminator
pub fn decode_asset(json: &[u8]) -> Result<Asset, DecodeError> {
    let value: Value =
        serde_json::from_slice(json).map_err(|e| DecodeError::from_json(e, "asset object"))?;
    asset_from_value(&value)
}

/// Decode one record from JSON bytes as `kind`, ignoring its discriminator
pub fn decode_asset_as(kind: AssetType, json: &[u8]) -> Result<Asset, DecodeError> {
    let value: Value =
        serde_json::from_slice(json).map_err(|e| DecodeError::from_json(e, "asset object"))?;
    decode_record(kind, expect_object(&value)?)
}

/// Decode one record from an unparsed fragment
pub(crate) fn decode_fragment(fragment: &str) -> Result<Asset, DecodeError> {
    asset_from_value(&parse_value(fragment)?)
}

/// Deserializes an [`Asset`] through the dispatcher
///
/// Works with any self-describing format; codec errors surface as the
/// format's custom error.
#[derive(Debug)]
pub struct DispatchedAsset(pub Asset);

impl<'de> Deserialize<'de> for DispatchedAsset {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        asset_from_value(&value)
            .map(DispatchedAsset)
            .map_err(D::Error::custom)
    }
}
