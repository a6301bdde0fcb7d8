//! Range codec
//!
//! A range is a JSON array of collections, one per time bucket. Bucket order
//! is preserved exactly; nothing here sorts. One failing bucket fails the
//! whole range.

use super::collection::{assets_from_raw, AssetSetResponse, RawCollection};
use super::error::DecodeError;
use serde::de::{Deserialize, Deserializer, Error as _};
use serde_json::value::RawValue;
use tracing::debug;

/// Decoded sequence of collections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetSetRangeResponse {
    /// One decoded collection per bucket, in input order
    pub asset_sets: Vec<AssetSetResponse>,
}

impl AssetSetRangeResponse {
    /// Number of buckets
    pub fn len(&self) -> usize {
        self.asset_sets.len()
    }

    /// Check if there are no buckets
    pub fn is_empty(&self) -> bool {
        self.asset_sets.is_empty()
    }

    /// Iterate over buckets in order
    pub fn iter(&self) -> std::slice::Iter<'_, AssetSetResponse> {
        self.asset_sets.iter()
    }

    /// Take the bucket list
    pub fn into_asset_sets(self) -> Vec<AssetSetResponse> {
        self.asset_sets
    }
}

/// Decode a range payload
pub fn decode_asset_set_range(json: &[u8]) -> Result<AssetSetRangeResponse, DecodeError> {
    let buckets: Vec<Box<RawValue>> = serde_json::from_slice(json)
        .map_err(|e| DecodeError::from_json(e, "array of asset sets"))?;
    buckets_from_raw(buckets)
}

fn buckets_from_raw(buckets: Vec<Box<RawValue>>) -> Result<AssetSetRangeResponse, DecodeError> {
    let mut asset_sets = Vec::with_capacity(buckets.len());
    for (index, bucket) in buckets.iter().enumerate() {
        let raw: RawCollection = serde_json::from_str(bucket.get())
            .map_err(|e| DecodeError::from_json(e, "object of assets").in_bucket(index))?;
        let assets = assets_from_raw(raw.unwrap_or_default()).map_err(|e| e.in_bucket(index))?;
        asset_sets.push(AssetSetResponse { assets });
    }
    debug!(buckets = asset_sets.len(), "decoded asset set range");
    Ok(AssetSetRangeResponse { asset_sets })
}

impl<'de> Deserialize<'de> for AssetSetRangeResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let buckets = Vec::<Box<RawValue>>::deserialize(deserializer)?;
        buckets_from_raw(buckets).map_err(D::Error::custom)
    }
}
