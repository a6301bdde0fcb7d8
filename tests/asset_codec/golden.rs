//! Golden Output Tests
//!
//! Byte-exact encoder output. Field order, float formatting and timestamp
//! format are all part of the wire contract.

use crate::*;

const WINDOW: &str = r#""window":{"start":"2023-01-01T00:00:00Z","end":"2023-01-02T00:00:00Z"},"start":"2023-01-01T00:00:00Z","end":"2023-01-02T00:00:00Z""#;

fn encoded(asset: &Asset, config: &EncodeConfig) -> String {
    String::from_utf8(costwire::encode_asset_with(asset, config).unwrap()).unwrap()
}

#[test]
fn test_golden_network() {
    let mut base = sample_base();
    base.properties.provider = "GCP".into();
    base.properties.cluster = "c1".into();
    base.labels.insert("team".into(), "a".into());
    base.labels.insert("env".into(), "prod".into());
    base.discount = 0.5;

    let expected = format!(
        r#"{{"type":"Network","properties":{{"provider":"GCP","cluster":"c1"}},"labels":{{"env":"prod","team":"a"}},"assetPricingModels":null,{WINDOW},"minutes":1440.0,"adjustment":1.0,"credit":2.0,"discount":0.5,"totalCost":10.0}}"#
    );
    assert_eq!(encoded(&Asset::network(base), &EncodeConfig::default()), expected);
}

#[test]
fn test_golden_generic_without_derived_fields() {
    let mut base = AssetBase::new(day());
    base.cost = 3.0;
    base.pricing_models = Some(AssetPricingModels {
        preemptible: 1.0,
        ..Default::default()
    });

    let expected = format!(
        r#"{{"properties":{{}},"labels":{{}},"assetPricingModels":{{"preemptible":1.0,"reservedInstance":0.0,"savingsPlan":0.0}},{WINDOW},"adjustment":0.0,"credit":0.0,"discount":0.0,"totalCost":3.0}}"#
    );
    let config = EncodeConfig::new().without_derived_fields();
    assert_eq!(encoded(&Asset::any(base), &config), expected);
}

#[test]
fn test_golden_disk() {
    let disk = Disk {
        byte_hours: 2400.0,
        storage_class: "ssd".into(),
        breakdown: Breakdown {
            idle: 0.5,
            user: 0.5,
            ..Default::default()
        },
        local: true,
    };

    let expected = format!(
        r#"{{"type":"Disk","properties":{{}},"labels":{{}},"assetPricingModels":null,{WINDOW},"minutes":1440.0,"byteHours":2400.0,"bytes":100.0,"breakdown":{{"idle":0.5,"other":0.0,"system":0.0,"user":0.5}},"storageClass":"ssd","adjustment":1.0,"credit":2.0,"discount":0.0,"totalCost":10.0}}"#
    );
    assert_eq!(encoded(&Asset::disk(sample_base(), disk), &EncodeConfig::default()), expected);
}

#[test]
fn test_golden_node() {
    let node = Node {
        node_type: "n2".into(),
        cpu_core_hours: 48.0,
        ram_byte_hours: 96.0,
        gpu_hours: 24.0,
        gpu_count: 1.0,
        cpu_cost: 4.0,
        ram_cost: 2.0,
        gpu_cost: 1.0,
        ..Default::default()
    };

    let zero = r#"{"idle":0.0,"other":0.0,"system":0.0,"user":0.0}"#;
    let expected = format!(
        r#"{{"type":"Node","properties":{{}},"labels":{{}},"assetPricingModels":null,{WINDOW},"minutes":1440.0,"nodeType":"n2","cpuCores":2.0,"ramBytes":4.0,"cpuCoreHours":48.0,"ramByteHours":96.0,"GPUHours":24.0,"cpuBreakdown":{zero},"ramBreakdown":{zero},"cpuCost":4.0,"gpuCost":1.0,"gpuCount":1.0,"ramCost":2.0,"adjustment":1.0,"credit":2.0,"discount":0.0,"totalCost":10.0}}"#
    );
    assert_eq!(encoded(&Asset::node(sample_base(), node), &EncodeConfig::default()), expected);
}

#[test]
fn test_golden_cloud_without_derived_fields() {
    let cloud = Cloud {
        usage_type: "BoxUsage".into(),
        usage_detail: "m5".into(),
    };
    let expected = format!(
        r#"{{"type":"Cloud","properties":{{}},"labels":{{}},"assetPricingModels":null,{WINDOW},"usageType":"BoxUsage","usageDetail":"m5","adjustment":1.0,"credit":2.0,"discount":0.0,"totalCost":10.0}}"#
    );
    let config = EncodeConfig::new().without_derived_fields();
    assert_eq!(encoded(&Asset::cloud(sample_base(), cloud), &config), expected);
}

#[test]
fn test_golden_non_finite_values() {
    let mut base = sample_base();
    base.discount = f64::INFINITY;
    let text = encoded(&Asset::shared(base), &EncodeConfig::default());
    assert!(text.contains(r#""discount":null"#));
}

#[test]
fn test_golden_collection_key_order() {
    let set = AssetSet::new(day());
    set.insert("b", Asset::network(AssetBase::new(day())));
    set.insert("a", Asset::shared(AssetBase::new(day())));
    let text = String::from_utf8(encode_asset_set(&set).unwrap()).unwrap();
    assert!(text.starts_with(r#"{"a":{"type":"Shared","#));
    assert!(text.contains(r#"},"b":{"type":"Network","#));
    assert!(text.ends_with("}}"));
}
