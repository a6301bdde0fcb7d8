//! Sub-objects shared by every asset kind
//!
//! - [`AssetProperties`]: eleven opaque descriptive strings
//! - [`AssetPricingModels`]: optional pricing-model split
//! - [`Breakdown`]: idle/other/system/user usage split
//! - [`AssetLabels`]: free-form string labels
//!
//! The `Serialize` impls here define the nested wire shape. Decoding lives in
//! the wire crate because it needs field-level tolerance that a derived
//! `Deserialize` cannot express.

use serde::Serialize;
use std::collections::BTreeMap;

/// Labels attached to an asset
///
/// Ordered so that encoding is deterministic.
pub type AssetLabels = BTreeMap<String, String>;

/// Descriptive properties of an asset
///
/// Every field is opaque to this crate. Empty strings mean "unset" and are
/// left out of the encoded object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[allow(missing_docs)]
pub struct AssetProperties {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub category: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub provider: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub account: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub project: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub service: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub cluster: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(rename = "providerID", skip_serializing_if = "String::is_empty")]
    pub provider_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub region: String,
    #[serde(rename = "pricingSource", skip_serializing_if = "String::is_empty")]
    pub pricing_source: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub currency: String,
}

/// Share of an asset's cost under each pricing model
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPricingModels {
    /// Preemptible / spot share
    pub preemptible: f64,
    /// Reserved-instance share
    pub reserved_instance: f64,
    /// Savings-plan share
    pub savings_plan: f64,
}

/// Four-way split of resource usage
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[allow(missing_docs)]
pub struct Breakdown {
    pub idle: f64,
    pub other: f64,
    pub system: f64,
    pub user: f64,
}

impl Breakdown {
    /// Sum of the four categories
    pub fn total(&self) -> f64 {
        self.idle + self.other + self.system + self.user
    }
}
