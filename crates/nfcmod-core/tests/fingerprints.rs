use serde_json::json;

use nfcmod_core::canonical::{canonical_value, to_canonical_json_string};
use nfcmod_core::hash::{hash_bytes_hex, sha256_hex, xxh64_hex};
use nfcmod_core::model::Document;

fn is_hex(s: &str, len: usize) -> bool {
    s.len() == len && s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
}

#[test]
fn canonical_json_sorts_nested_keys_and_keeps_arrays() {
    let d: Document = serde_json::from_value(json!({"b": [3, {"n": 1, "m": 2}], "a": {"z": 1, "y": 2}})).unwrap();
    assert_eq!(
        to_canonical_json_string(&d).unwrap(),
        r#"{"a":{"y":2,"z":1},"b":[3,{"m":2,"n":1}]}"#
    );
}

#[test]
fn canonical_value_leaves_the_source_order_alone() {
    let d: Document = serde_json::from_value(json!({"b": 1, "a": 2})).unwrap();
    let sorted = canonical_value(&serde_json::Value::Object(d.as_map().clone()));

    assert_eq!(sorted.as_object().unwrap().keys().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(d.as_map().keys().collect::<Vec<_>>(), vec!["b", "a"]);
}

#[test]
fn fingerprint_ignores_key_order() {
    let d1: Document = serde_json::from_value(json!({"a": 1, "b": [1, 2]})).unwrap();
    let d2: Document = serde_json::from_value(json!({"b": [1, 2], "a": 1})).unwrap();

    assert_eq!(d1.fingerprint("xxh64"), d2.fingerprint("xxh64"));
    assert_eq!(d1.fingerprint("sha256"), d2.fingerprint("sha256"));
}

#[test]
fn fingerprint_changes_with_array_order() {
    let d1: Document = serde_json::from_value(json!({"a": ["NDEF", "TAG"]})).unwrap();
    let d2: Document = serde_json::from_value(json!({"a": ["TAG", "NDEF"]})).unwrap();
    assert_ne!(d1.fingerprint("xxh64"), d2.fingerprint("xxh64"));
}

#[test]
fn hash_widths_and_unknown_algorithm() {
    assert!(is_hex(&xxh64_hex(b"abc"), 16));
    assert!(is_hex(&sha256_hex(b"abc"), 64));
    assert_eq!(
        sha256_hex(b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert!(hash_bytes_hex("md5", b"abc").is_none());
    assert!(Document::new().fingerprint("crc32").is_none());
}
