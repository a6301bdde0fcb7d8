//! Record encoding
//!
//! Field order is fixed so encoded output diffs cleanly:
//!
//! ```text
//! type properties labels assetPricingModels window start end minutes
//! <kind-specific fields>
//! adjustment credit discount totalCost
//! ```
//!
//! - `type` is omitted for the generic kind.
//! - `assetPricingModels` is `null` when unset.
//! - Non-finite floats encode as `null`.
//! - `minutes`, `bytes`, `cpuCores` and `ramBytes` are derived display values;
//!   [`EncodeConfig`] can leave them out.

use super::error::EncodeError;
use super::window::{format_timestamp, WireWindow};
use crate::config::EncodeConfig;
use costwire_core::{Asset, AssetDetail};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Serializes an [`Asset`] in wire form
pub struct WireAsset<'a> {
    asset: &'a Asset,
    config: &'a EncodeConfig,
}

impl<'a> WireAsset<'a> {
    /// Wrap an asset for serialization
    pub fn new(asset: &'a Asset, config: &'a EncodeConfig) -> Self {
        Self { asset, config }
    }
}

impl Serialize for WireAsset<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let asset = self.asset;
        let base = &asset.base;
        let derived = self.config.derived_fields();

        let mut map = serializer.serialize_map(None)?;
        if let Some(discriminator) = asset.asset_type().discriminator() {
            map.serialize_entry("type", discriminator)?;
        }
        map.serialize_entry("properties", &base.properties)?;
        map.serialize_entry("labels", &base.labels)?;
        map.serialize_entry("assetPricingModels", &base.pricing_models)?;
        map.serialize_entry("window", &WireWindow(&base.window))?;
        map.serialize_entry("start", &format_timestamp(asset.start()))?;
        map.serialize_entry("end", &format_timestamp(asset.end()))?;
        if derived {
            map.serialize_entry("minutes", &asset.minutes())?;
        }

        match &asset.detail {
            AssetDetail::Cloud(cloud) => {
                map.serialize_entry("usageType", &cloud.usage_type)?;
                map.serialize_entry("usageDetail", &cloud.usage_detail)?;
            }
            AssetDetail::Disk(disk) => {
                map.serialize_entry("byteHours", &disk.byte_hours)?;
                if derived {
                    map.serialize_entry("bytes", &asset.bytes())?;
                }
                map.serialize_entry("breakdown", &disk.breakdown)?;
                map.serialize_entry("storageClass", &disk.storage_class)?;
            }
            AssetDetail::Node(node) => {
                map.serialize_entry("nodeType", &node.node_type)?;
                if derived {
                    map.serialize_entry("cpuCores", &asset.cpu_cores())?;
                    map.serialize_entry("ramBytes", &asset.ram_bytes())?;
                }
                map.serialize_entry("cpuCoreHours", &node.cpu_core_hours)?;
                map.serialize_entry("ramByteHours", &node.ram_byte_hours)?;
                map.serialize_entry("GPUHours", &node.gpu_hours)?;
                map.serialize_entry("cpuBreakdown", &node.cpu_breakdown)?;
                map.serialize_entry("ramBreakdown", &node.ram_breakdown)?;
                map.serialize_entry("cpuCost", &node.cpu_cost)?;
                map.serialize_entry("gpuCost", &node.gpu_cost)?;
                map.serialize_entry("gpuCount", &node.gpu_count)?;
                map.serialize_entry("ramCost", &node.ram_cost)?;
            }
            AssetDetail::Any
            | AssetDetail::ClusterManagement
            | AssetDetail::LoadBalancer
            | AssetDetail::Network
            | AssetDetail::Shared => {}
        }

        map.serialize_entry("adjustment", &base.adjustment)?;
        map.serialize_entry("credit", &base.credit)?;
        map.serialize_entry("discount", &base.discount)?;
        map.serialize_entry("totalCost", &asset.total_cost())?;
        map.end()
    }
}

/// Serializes an identifier → asset map with deterministic key ordering
pub struct WireAssetMap<'a> {
    assets: &'a HashMap<String, Asset>,
    config: &'a EncodeConfig,
}

impl<'a> WireAssetMap<'a> {
    /// Wrap a map for serialization
    pub fn new(assets: &'a HashMap<String, Asset>, config: &'a EncodeConfig) -> Self {
        Self { assets, config }
    }
}

impl Serialize for WireAssetMap<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Sort keys for deterministic output
        let mut entries: Vec<_> = self.assets.iter().collect();
        entries.sort_by_key(|(k, _)| *k);

        let mut map = serializer.serialize_map(Some(entries.len()))?;
        for (key, asset) in entries {
            map.serialize_entry(key, &WireAsset::new(asset, self.config))?;
        }
        map.end()
    }
}

/// Encode one asset with the default configuration
pub fn encode_asset(asset: &Asset) -> Result<Vec<u8>, EncodeError> {
    encode_asset_with(asset, &EncodeConfig::default())
}

/// Encode one asset
pub fn encode_asset_with(asset: &Asset, config: &EncodeConfig) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(&WireAsset::new(asset, config))?)
}

/// Encode an identifier → asset map
pub fn encode_assets_with(
    assets: &HashMap<String, Asset>,
    config: &EncodeConfig,
) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(&WireAssetMap::new(assets, config))?)
}
