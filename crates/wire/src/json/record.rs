//! Per-kind record decoders
//!
//! A record decodes in two halves: the [`AssetBase`] every kind shares, then
//! the kind-specific [`AssetDetail`] from the decoder registered for its
//! [`AssetType`] in [`DETAIL_DECODERS`].
//!
//! `cost` is never read from the wire. It is reconstructed as
//! `totalCost - adjustment - credit`, and only when `totalCost` is present as
//! a number; otherwise it stays 0.

use super::components::{record_breakdown, record_labels, record_pricing_models, record_properties};
use super::decode::{number, optional_f64, optional_string, Field, JsonObject};
use super::error::DecodeError;
use super::window::decode_window;
use costwire_core::{Asset, AssetBase, AssetDetail, AssetType, Cloud, Disk, Node};

/// Decoder for the kind-specific half of a record
pub type DetailDecoder = fn(&JsonObject) -> Result<AssetDetail, DecodeError>;

/// Kind → detail decoder
pub const DETAIL_DECODERS: [(AssetType, DetailDecoder); 8] = [
    (AssetType::Any, decode_any),
    (AssetType::Cloud, decode_cloud),
    (AssetType::ClusterManagement, decode_cluster_management),
    (AssetType::Disk, decode_disk),
    (AssetType::LoadBalancer, decode_load_balancer),
    (AssetType::Network, decode_network),
    (AssetType::Node, decode_node),
    (AssetType::Shared, decode_shared),
];

/// Detail decoder registered for `kind`
pub fn detail_decoder(kind: AssetType) -> DetailDecoder {
    DETAIL_DECODERS
        .iter()
        .find(|(t, _)| *t == kind)
        .map(|(_, decoder)| *decoder)
        .unwrap_or(decode_any)
}

/// Decode a record object as `kind`, ignoring any discriminator it carries
pub fn decode_record(kind: AssetType, record: &JsonObject) -> Result<Asset, DecodeError> {
    let base = decode_base(record)?;
    let detail = detail_decoder(kind)(record)?;
    Ok(Asset::new(base, detail))
}

/// Decode the fields every kind shares
pub fn decode_base(record: &JsonObject) -> Result<AssetBase, DecodeError> {
    let properties = record_properties(record)?;
    let pricing_models = record_pricing_models(record)?;
    let labels = record_labels(record)?;
    let window = decode_window(record)?;

    let adjustment = optional_f64(record, "adjustment");
    let credit = optional_f64(record, "credit");
    let discount = optional_f64(record, "discount");
    let cost = match number(record, "totalCost") {
        Field::Present(total) => total - adjustment - credit,
        Field::Mismatched(_) | Field::Absent => 0.0,
    };

    Ok(AssetBase {
        properties,
        labels,
        pricing_models,
        window,
        adjustment,
        credit,
        discount,
        cost,
    })
}

fn decode_any(_: &JsonObject) -> Result<AssetDetail, DecodeError> {
    Ok(AssetDetail::Any)
}

fn decode_cloud(record: &JsonObject) -> Result<AssetDetail, DecodeError> {
    Ok(AssetDetail::Cloud(Cloud {
        usage_type: optional_string(record, "usageType"),
        usage_detail: optional_string(record, "usageDetail"),
    }))
}

fn decode_cluster_management(_: &JsonObject) -> Result<AssetDetail, DecodeError> {
    Ok(AssetDetail::ClusterManagement)
}

fn decode_disk(record: &JsonObject) -> Result<AssetDetail, DecodeError> {
    let breakdown = record_breakdown(record, "breakdown")?;
    // `local` has no wire form and cannot be recovered
    Ok(AssetDetail::Disk(Disk {
        byte_hours: optional_f64(record, "byteHours"),
        storage_class: optional_string(record, "storageClass"),
        breakdown,
        local: false,
    }))
}

fn decode_load_balancer(_: &JsonObject) -> Result<AssetDetail, DecodeError> {
    Ok(AssetDetail::LoadBalancer)
}

fn decode_network(_: &JsonObject) -> Result<AssetDetail, DecodeError> {
    Ok(AssetDetail::Network)
}

fn decode_node(record: &JsonObject) -> Result<AssetDetail, DecodeError> {
    let cpu_breakdown = record_breakdown(record, "cpuBreakdown")?;
    let ram_breakdown = record_breakdown(record, "ramBreakdown")?;
    Ok(AssetDetail::Node(Node {
        node_type: optional_string(record, "nodeType"),
        cpu_core_hours: optional_f64(record, "cpuCoreHours"),
        ram_byte_hours: optional_f64(record, "ramByteHours"),
        gpu_hours: optional_f64(record, "GPUHours"),
        cpu_breakdown,
        ram_breakdown,
        cpu_cost: optional_f64(record, "cpuCost"),
        gpu_cost: optional_f64(record, "gpuCost"),
        gpu_count: optional_f64(record, "gpuCount"),
        ram_cost: optional_f64(record, "ramCost"),
    }))
}

fn decode_shared(_: &JsonObject) -> Result<AssetDetail, DecodeError> {
    Ok(AssetDetail::Shared)
}
