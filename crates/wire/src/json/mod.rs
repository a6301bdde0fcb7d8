//! JSON wire codec for assets
//!
//! Three payload shapes share one record format:
//!
//! - a single record: `{"type": "Disk", "properties": {...}, ...}`
//! - a collection: `{"<id>": <record>, ...}`
//! - a range: `[<collection>, ...]`, one collection per time bucket
//!
//! Each record names its kind in `type`; decoders dispatch on it and fall back
//! to the generic kind when it is missing or unknown.

mod collection;
mod components;
mod decode;
mod dispatch;
mod encode;
mod error;
mod range;
mod record;
mod window;

pub use collection::{decode_asset_set, encode_asset_set, encode_asset_set_with, AssetSetResponse};
pub use decode::{Field, JsonObject};
pub use dispatch::{asset_from_value, decode_asset, decode_asset_as, discriminator_of, DispatchedAsset};
pub use encode::{encode_asset, encode_asset_with, encode_assets_with, WireAsset, WireAssetMap};
pub use error::{DecodeError, DecodeErrorKind, EncodeError};
pub use range::{decode_asset_set_range, AssetSetRangeResponse};
pub use record::{decode_base, decode_record, detail_decoder, DetailDecoder, DETAIL_DECODERS};
pub use window::{format_timestamp, parse_timestamp};
