//! Collection Tests
//!
//! Tests for identifier-keyed collections:
//! - mixed kinds in one payload
//! - all-or-nothing decode
//! - encoding straight from an AssetSet

use crate::*;
use std::collections::HashMap;

fn collection(entries: &[(&str, String)]) -> String {
    let body: Vec<String> = entries
        .iter()
        .map(|(k, v)| format!("\"{k}\":{v}"))
        .collect();
    format!("{{{}}}", body.join(","))
}

#[test]
fn test_disk_collection_example() {
    let json = br#"{"d1":{"type":"Disk","properties":{},"labels":{},"start":"2023-01-01T00:00:00Z","end":"2023-01-02T00:00:00Z","breakdown":{"idle":1,"other":2,"system":3,"user":4},"totalCost":10,"adjustment":1,"credit":2}}"#;
    let set = decode_asset_set(json).unwrap();
    let d1 = set.get("d1").unwrap();

    assert_eq!(d1.asset_type(), AssetType::Disk);
    assert_eq!(d1.cost(), 7.0);
    assert_eq!(d1.adjustment(), 1.0);
    assert_eq!(d1.credit(), 2.0);
    assert!(d1.pricing_models().is_none());
    assert_eq!(
        d1.as_disk().unwrap().breakdown,
        Breakdown {
            idle: 1.0,
            other: 2.0,
            system: 3.0,
            user: 4.0
        }
    );
}

#[test]
fn test_every_kind_in_one_collection() {
    let set = AssetSet::new(day());
    for (key, asset) in one_of_each() {
        set.insert(key, asset);
    }
    let decoded = decode_asset_set(&encode_asset_set(&set).unwrap()).unwrap();
    assert_eq!(decoded.len(), AssetType::ALL.len());
    for kind in AssetType::ALL {
        assert_eq!(
            decoded.iter().filter(|(_, a)| a.asset_type() == kind).count(),
            1,
            "{kind}"
        );
    }
    set.with_assets(|assets| assert_eq!(&decoded.assets, assets));
}

#[test]
fn test_one_bad_entry_fails_collection() {
    let json = collection(&[
        ("a", minimal_record("Network", 1.0)),
        ("b", minimal_record("Disk", 1.0).replace(",\"breakdown\":{}", "")),
        ("c", minimal_record("Node", 1.0)),
    ]);
    let err = decode_asset_set(json.as_bytes()).unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::MissingRequiredField);
    assert_eq!(err.root(), &DecodeError::MissingField { field: "breakdown" });
    assert!(err.to_string().starts_with("asset \"b\""));
}

#[test]
fn test_failed_decode_keeps_previous_contents() {
    let mut target = AssetSetResponse::new();
    let good = collection(&[("keep", minimal_record("Shared", 5.0))]);
    target.decode_from(good.as_bytes()).unwrap();

    let bad = collection(&[
        ("new", minimal_record("Network", 1.0)),
        ("broken", "{\"type\":\"Network\"}".to_string()),
    ]);
    assert!(target.decode_from(bad.as_bytes()).is_err());
    assert_eq!(target.len(), 1);
    assert_eq!(target.get("keep").unwrap().total_cost(), 5.0);
}

#[test]
fn test_empty_collection() {
    assert!(decode_asset_set(b"{}").unwrap().is_empty());
    assert_eq!(encode_asset_set(&AssetSet::new(day())).unwrap(), b"{}");
}

#[test]
fn test_non_object_payload() {
    let err = decode_asset_set(b"[1,2,3]").unwrap_err();
    assert_eq!(err.kind(), DecodeErrorKind::Structural);
}

#[test]
fn test_total_cost_matches_source() {
    let assets: HashMap<String, Asset> = one_of_each().into_iter().collect();
    let set = AssetSet::from_assets(day(), assets);
    let decoded = decode_asset_set(&encode_asset_set(&set).unwrap()).unwrap();
    assert_eq!(decoded.total_cost(), set.total_cost());
}

#[test]
fn test_encode_without_derived_fields() {
    let set = AssetSet::new(day());
    for (key, asset) in one_of_each() {
        set.insert(key, asset);
    }
    let config = EncodeConfig::new().without_derived_fields();
    let bytes = encode_asset_set_with(&set, &config).unwrap();
    let text = std::str::from_utf8(&bytes).unwrap();
    for field in ["\"minutes\"", "\"bytes\"", "\"cpuCores\"", "\"ramBytes\""] {
        assert!(!text.contains(field), "{field}");
    }
    let decoded = decode_asset_set(&bytes).unwrap();
    set.with_assets(|assets| assert_eq!(&decoded.assets, assets));
}
