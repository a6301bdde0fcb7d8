//! # Costwire
//!
//! Wire codec for cluster cost-accounting asset records.
//!
//! An asset is one billable resource over one time window: a node, a disk, a
//! load balancer, a cloud line item. Costwire turns the in-memory [`Asset`]
//! model into discriminated JSON records and back, in three shapes:
//!
//! - single records ([`encode_asset`], [`decode_asset`])
//! - collections keyed by identifier ([`encode_asset_set`], [`decode_asset_set`])
//! - ranges of collections, one per time bucket ([`decode_asset_set_range`])
//!
//! ## Quick Start
//!
//! ```
//! use costwire::prelude::*;
//! use chrono::{TimeZone, Utc};
//!
//! # fn main() -> costwire::Result<()> {
//! let window = Window::new(
//!     Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2023, 1, 2, 0, 0, 0).unwrap(),
//! );
//! let set = AssetSet::new(window);
//! let mut base = AssetBase::new(window);
//! base.cost = 12.5;
//! set.insert("lb-1", Asset::load_balancer(base));
//!
//! let bytes = encode_asset_set(&set)?;
//! let decoded = decode_asset_set(&bytes)?;
//! assert_eq!(decoded.get("lb-1").unwrap().total_cost(), 12.5);
//! # Ok(())
//! # }
//! ```
//!
//! ## Crates
//!
//! - `costwire-core`: the data model and the lock-guarded [`AssetSet`]
//! - `costwire-wire`: the JSON codec

#![warn(missing_docs)]

mod error;

pub mod prelude;

pub use error::{Error, Result};

pub use costwire_core::{
    Asset, AssetBase, AssetDetail, AssetLabels, AssetPricingModels, AssetProperties, AssetSet,
    AssetType, Breakdown, Cloud, Disk, Node, Window,
};
pub use costwire_wire::{
    asset_from_value, decode_asset, decode_asset_as, decode_asset_set, decode_asset_set_range,
    encode_asset, encode_asset_set, encode_asset_set_with, encode_asset_with, encode_assets_with,
    AssetSetRangeResponse, AssetSetResponse, DecodeError, DecodeErrorKind, DispatchedAsset,
    EncodeConfig, EncodeError, WireAsset, WireAssetMap,
};
