//! Collection codec
//!
//! A collection is a JSON object mapping identifier → asset record.
//!
//! Decoding runs in two phases so the discriminator can be inspected before a
//! concrete kind is chosen:
//!
//! 1. Split the top-level object into one unparsed fragment per identifier.
//! 2. Per identifier: parse the fragment, peek at `type`, dispatch.
//!
//! Decoding is all-or-nothing. Results accumulate in a map local to the call
//! and are handed out only after every entry has succeeded.
//!
//! Encoding reads an [`AssetSet`] under its shared lock for the whole
//! serialization.

use super::dispatch::decode_fragment;
use super::encode::{encode_assets_with, WireAssetMap};
use super::error::{DecodeError, EncodeError};
use crate::config::EncodeConfig;
use costwire_core::{Asset, AssetSet};
use serde::de::{Deserialize, Deserializer, Error as _};
use serde::ser::{Serialize, Serializer};
use serde_json::value::RawValue;
use std::collections::HashMap;
use tracing::debug;

/// Phase-one view of a collection: identifier → unparsed record
///
/// `null` is accepted as an empty collection.
pub(crate) type RawCollection = Option<HashMap<String, Box<RawValue>>>;

/// Decoded collection
///
/// Freshly allocated by each decode call and never shared with an
/// [`AssetSet`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetSetResponse {
    /// Decoded assets by identifier
    pub assets: HashMap<String, Asset>,
}

impl AssetSetResponse {
    /// Empty response
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode `json` into this response
    ///
    /// On failure `self` is left exactly as it was.
    pub fn decode_from(&mut self, json: &[u8]) -> Result<(), DecodeError> {
        let decoded = decode_asset_set(json)?;
        self.assets = decoded.assets;
        Ok(())
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Look up an asset
    pub fn get(&self, key: &str) -> Option<&Asset> {
        self.assets.get(key)
    }

    /// Iterate over identifier/asset pairs
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Asset)> {
        self.assets.iter()
    }

    /// Sum of `total_cost()` across all assets
    pub fn total_cost(&self) -> f64 {
        self.assets.values().map(Asset::total_cost).sum()
    }

    /// Take the decoded map
    pub fn into_assets(self) -> HashMap<String, Asset> {
        self.assets
    }
}

/// Decode a collection payload
pub fn decode_asset_set(json: &[u8]) -> Result<AssetSetResponse, DecodeError> {
    let raw: RawCollection = serde_json::from_slice(json)
        .map_err(|e| DecodeError::from_json(e, "object of assets"))?;
    let assets = assets_from_raw(raw.unwrap_or_default())?;
    Ok(AssetSetResponse { assets })
}

/// Phase two: decode each fragment, failing on the first bad entry
pub(crate) fn assets_from_raw(
    raw: HashMap<String, Box<RawValue>>,
) -> Result<HashMap<String, Asset>, DecodeError> {
    let mut assets = HashMap::with_capacity(raw.len());
    for (key, fragment) in raw {
        match decode_fragment(fragment.get()) {
            Ok(asset) => {
                assets.insert(key, asset);
            }
            Err(e) => {
                debug!(key = %key, error = %e, "asset decode failed");
                return Err(e.in_entry(key));
            }
        }
    }
    debug!(assets = assets.len(), "decoded asset set");
    Ok(assets)
}

/// Encode an [`AssetSet`] with the default configuration
pub fn encode_asset_set(set: &AssetSet) -> Result<Vec<u8>, EncodeError> {
    encode_asset_set_with(set, &EncodeConfig::default())
}

/// Encode an [`AssetSet`]
///
/// Holds the set's shared lock until serialization finishes; writers wait,
/// other encoders do not.
pub fn encode_asset_set_with(set: &AssetSet, config: &EncodeConfig) -> Result<Vec<u8>, EncodeError> {
    let bytes = set.with_assets(|assets| encode_assets_with(assets, config))?;
    debug!(bytes = bytes.len(), "encoded asset set");
    Ok(bytes)
}

impl<'de> Deserialize<'de> for AssetSetResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = RawCollection::deserialize(deserializer)?;
        assets_from_raw(raw.unwrap_or_default())
            .map(|assets| AssetSetResponse { assets })
            .map_err(D::Error::custom)
    }
}

impl Serialize for AssetSetResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireAssetMap::new(&self.assets, &EncodeConfig::default()).serialize(serializer)
    }
}
