//! Asset data model for costwire
//!
//! This crate defines the in-memory shape of cost-accounting records:
//! - [`Window`]: the interval an asset's costs are attributed to
//! - [`AssetProperties`], [`AssetPricingModels`], [`Breakdown`], [`AssetLabels`]
//! - [`Asset`]: common [`AssetBase`] plus kind-specific [`AssetDetail`]
//! - [`AssetSet`]: the engine-owned, lock-guarded collection read by encoders
//!
//! Costs are produced elsewhere; nothing here validates business semantics.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod asset;
pub mod asset_set;
pub mod properties;
pub mod window;

pub use asset::{Asset, AssetBase, AssetDetail, AssetType, Cloud, Disk, Node};
pub use asset_set::AssetSet;
pub use properties::{AssetLabels, AssetPricingModels, AssetProperties, Breakdown};
pub use window::Window;
