use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{Value, json};

use nfcmod_core::model::Document;
use nfcmod_merge::array::{merge_unique_strings, merge_unique_values};

fn doc(v: Value) -> Document {
    serde_json::from_value(v).unwrap()
}

#[test]
fn appends_new_values_after_existing_and_collapses_duplicates() {
    let d = doc(json!({"formats": ["TAG", "X"]}));
    let d = merge_unique_strings(d, "formats", &["NDEF", "TAG", "NDEF"]);
    assert_eq!(d.get("formats"), Some(&json!(["TAG", "X", "NDEF"])));
}

#[test]
fn creates_absent_field() {
    let d = merge_unique_strings(Document::new(), "formats", &["NDEF", "TAG"]);
    assert_eq!(d.get("formats"), Some(&json!(["NDEF", "TAG"])));
}

#[test]
fn empty_values_leave_absent_field_absent() {
    let d = merge_unique_values(Document::new(), "formats", &[]);
    assert!(!d.contains_key("formats"));
}

#[test]
fn empty_values_leave_document_unchanged() {
    let input = doc(json!({"formats": [], "other": 1}));
    let out = merge_unique_values(input.clone(), "formats", &[]);
    assert_eq!(out, input);
}

#[test]
fn non_list_field_is_replaced_by_merged_list() {
    let d = doc(json!({"formats": "NDEF"}));
    let d = merge_unique_strings(d, "formats", &["TAG"]);
    assert_eq!(d.get("formats"), Some(&json!(["TAG"])));
}

#[test]
fn merge_keeps_key_position() {
    let d = doc(json!({"a": 1, "formats": ["TAG"], "z": 2}));
    let d = merge_unique_strings(d, "formats", &["NDEF"]);
    let keys: Vec<&str> = d.as_map().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "formats", "z"]);
}

#[test]
fn structured_values_deduplicate_by_equality() {
    let d = doc(json!({"perms": [{"$": {"android:name": "A"}}]}));
    let d = merge_unique_values(
        d,
        "perms",
        &[json!({"$": {"android:name": "A"}}), json!({"$": {"android:name": "B"}})],
    );
    assert_eq!(
        d.get("perms"),
        Some(&json!([{"$": {"android:name": "A"}}, {"$": {"android:name": "B"}}]))
    );
}

proptest! {
    #[test]
    fn merged_list_has_no_duplicates_and_contains_all_inputs(
        existing in prop::collection::vec("[A-D]{1,2}", 0..8),
        required in prop::collection::vec("[A-D]{1,2}", 1..8),
    ) {
        let d = doc(json!({"k": existing.clone()}));
        let d = merge_unique_strings(d, "k", &required);

        let merged: Vec<String> = serde_json::from_value(d.get("k").cloned().unwrap()).unwrap();
        for (i, a) in merged.iter().enumerate() {
            prop_assert!(!merged[i + 1..].contains(a), "duplicate {a} in {merged:?}");
        }
        for v in existing.iter().chain(required.iter()) {
            prop_assert!(merged.contains(v));
        }
    }

    #[test]
    fn merge_is_idempotent(
        existing in prop::collection::vec("[A-D]{1,2}", 0..8),
        required in prop::collection::vec("[A-D]{1,2}", 0..8),
    ) {
        let once = merge_unique_strings(doc(json!({"k": existing})), "k", &required);
        let twice = merge_unique_strings(once.clone(), "k", &required);
        prop_assert_eq!(once, twice);
    }
}
