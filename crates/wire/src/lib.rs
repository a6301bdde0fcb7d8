//! Wire encoding for costwire assets
//!
//! This crate converts [`costwire_core`] assets to and from their JSON wire
//! form. Records carry a `type` discriminator naming their kind:
//!
//! | Kind | `type` |
//! |------|--------|
//! | generic | *(absent)* |
//! | Cloud | `"Cloud"` |
//! | ClusterManagement | `"ClusterManagement"` |
//! | Disk | `"Disk"` |
//! | LoadBalancer | `"LoadBalancer"` |
//! | Network | `"Network"` |
//! | Node | `"Node"` |
//! | Shared | `"Shared"` |
//!
//! ## Decode policy
//!
//! `properties`, `labels`, `start` and `end` are required on every record;
//! `breakdown` on Disk, `cpuBreakdown`/`ramBreakdown` on Node. Every other
//! scalar is optional and defaults to zero when absent or mistyped.
//!
//! ## Examples
//!
//! ```
//! use costwire_wire::{decode_asset_set, DecodeErrorKind};
//!
//! let json = br#"{"d1": {
//!     "type": "Disk", "properties": {}, "labels": {},
//!     "start": "2023-01-01T00:00:00Z", "end": "2023-01-02T00:00:00Z",
//!     "breakdown": {"idle": 1, "other": 2, "system": 3, "user": 4},
//!     "totalCost": 10, "adjustment": 1, "credit": 2
//! }}"#;
//! let set = decode_asset_set(json).unwrap();
//! assert_eq!(set.get("d1").unwrap().cost(), 7.0);
//!
//! let err = decode_asset_set(br#"{"d1": {"type": "Disk"}}"#).unwrap_err();
//! assert_eq!(err.kind(), DecodeErrorKind::MissingRequiredField);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod json;

pub use config::EncodeConfig;
pub use json::{
    asset_from_value, decode_asset, decode_asset_as, decode_asset_set, decode_asset_set_range,
    encode_asset, encode_asset_set, encode_asset_set_with, encode_asset_with, encode_assets_with,
    AssetSetRangeResponse, AssetSetResponse, DecodeError, DecodeErrorKind, DispatchedAsset,
    EncodeError, WireAsset, WireAssetMap,
};
