use serde_json::json;

use nfcmod_intent::{ActionNamespace, DataSpec, FilterEntry, IntentFilterInput};

fn normalize(v: serde_json::Value) -> nfcmod_intent::IntentFilter {
    let input: IntentFilterInput = serde_json::from_value(v).unwrap();
    input.normalize(ActionNamespace::Nfc)
}

#[test]
fn single_data_mapping_becomes_one_element_list() {
    let f = normalize(json!({"action": "NDEF_DISCOVERED", "data": {"mimeType": "text/plain"}}));
    assert_eq!(
        f.data,
        vec![DataSpec { attrs: vec![("mimeType".to_string(), "text/plain".to_string())] }]
    );
}

#[test]
fn null_and_empty_entries_are_dropped() {
    let f = normalize(json!({
        "action": "NDEF_DISCOVERED",
        "data": [null, {"scheme": "https", "port": null}],
        "category": [null, "", "DEFAULT"]
    }));

    assert_eq!(f.data.len(), 1);
    assert_eq!(f.data[0].attrs, vec![("scheme".to_string(), "https".to_string())]);
    assert_eq!(f.categories, vec!["DEFAULT".to_string()]);
}

#[test]
fn non_string_data_values_are_stringified() {
    let f = normalize(json!({"action": "NDEF_DISCOVERED", "data": {"port": 8080}}));
    assert_eq!(f.data[0].attrs, vec![("port".to_string(), "8080".to_string())]);
}

#[test]
fn missing_optional_fields_normalize_to_empty() {
    let f = normalize(json!({"action": "TAG_DISCOVERED"}));
    assert!(!f.auto_verify);
    assert!(f.data.is_empty());
    assert!(f.categories.is_empty());
}

#[test]
fn classify_only_accepts_exact_marker_value() {
    assert!(FilterEntry::classify(json!({"$": {"data-generated": "true"}})).is_generated());
    assert!(!FilterEntry::classify(json!({"$": {"data-generated": "false"}})).is_generated());
    assert!(!FilterEntry::classify(json!({"$": {"data-generated": true}})).is_generated());
    assert!(!FilterEntry::classify(json!({"action": []})).is_generated());
}
