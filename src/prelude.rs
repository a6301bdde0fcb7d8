//! Convenient imports for costwire.
//!
//! ```
//! use costwire::prelude::*;
//!
//! let set = decode_asset_set(b"{}").unwrap();
//! assert!(set.is_empty());
//! ```

// Error handling
pub use crate::error::{Error, Result};

// Data model
pub use costwire_core::{
    Asset, AssetBase, AssetDetail, AssetLabels, AssetPricingModels, AssetProperties, AssetSet,
    AssetType, Breakdown, Cloud, Disk, Node, Window,
};

// Codec
pub use costwire_wire::{
    decode_asset, decode_asset_set, decode_asset_set_range, encode_asset, encode_asset_set,
    encode_asset_set_with, AssetSetRangeResponse, AssetSetResponse, DecodeErrorKind, EncodeConfig,
};
