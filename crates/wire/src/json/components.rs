//! Sub-object decoders
//!
//! Converters for the nested objects every record shares. The leaf fields of
//! each object are optional scalars; whether the object itself is required
//! depends on where it appears:
//!
//! | Object | Key | Required |
//! |--------|-----|----------|
//! | properties | `properties` | yes |
//! | labels | `labels` | yes |
//! | pricing models | `assetPricingModels` | no (absent or null means unset) |
//! | breakdown | `breakdown`, `cpuBreakdown`, `ramBreakdown` | yes, where used |

use super::decode::{json_type_name, optional_f64, optional_string, required_object, JsonObject};
use super::error::DecodeError;
use costwire_core::{AssetLabels, AssetPricingModels, AssetProperties, Breakdown};
use serde_json::Value;

/// Convert a `properties` object
pub fn decode_properties(obj: &JsonObject) -> AssetProperties {
    AssetProperties {
        category: optional_string(obj, "category"),
        provider: optional_string(obj, "provider"),
        account: optional_string(obj, "account"),
        project: optional_string(obj, "project"),
        service: optional_string(obj, "service"),
        cluster: optional_string(obj, "cluster"),
        name: optional_string(obj, "name"),
        provider_id: optional_string(obj, "providerID"),
        region: optional_string(obj, "region"),
        pricing_source: optional_string(obj, "pricingSource"),
        currency: optional_string(obj, "currency"),
    }
}

/// Convert an `assetPricingModels` object
pub fn decode_pricing_models(obj: &JsonObject) -> AssetPricingModels {
    AssetPricingModels {
        preemptible: optional_f64(obj, "preemptible"),
        reserved_instance: optional_f64(obj, "reservedInstance"),
        savings_plan: optional_f64(obj, "savingsPlan"),
    }
}

/// Convert a usage breakdown object
pub fn decode_breakdown(obj: &JsonObject) -> Breakdown {
    Breakdown {
        idle: optional_f64(obj, "idle"),
        other: optional_f64(obj, "other"),
        system: optional_f64(obj, "system"),
        user: optional_f64(obj, "user"),
    }
}

/// Read the record's required `properties`
pub fn record_properties(record: &JsonObject) -> Result<AssetProperties, DecodeError> {
    required_object(record, "properties").map(decode_properties)
}

/// Read the record's optional `assetPricingModels`
pub fn record_pricing_models(
    record: &JsonObject,
) -> Result<Option<AssetPricingModels>, DecodeError> {
    match record.get("assetPricingModels") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(obj)) => Ok(Some(decode_pricing_models(obj))),
        Some(other) => Err(DecodeError::FieldType {
            field: "assetPricingModels",
            expected: "object",
            found: json_type_name(other),
        }),
    }
}

/// Read the record's required `labels`
///
/// Every value must be a string.
pub fn record_labels(record: &JsonObject) -> Result<AssetLabels, DecodeError> {
    required_object(record, "labels")?
        .iter()
        .map(|(k, v)| match v {
            Value::String(s) => Ok((k.clone(), s.clone())),
            other => Err(DecodeError::FieldType {
                field: "labels",
                expected: "object of strings",
                found: json_type_name(other),
            }),
        })
        .collect()
}

/// Read a required breakdown object under `key`
pub fn record_breakdown(record: &JsonObject, key: &'static str) -> Result<Breakdown, DecodeError> {
    required_object(record, key).map(decode_breakdown)
}
