use pretty_assertions::assert_eq;
use serde_json::json;

use nfcmod_core::element::{attr, children, element, find_child_mut, set_attr};
use nfcmod_core::model::Document;

fn doc(v: serde_json::Value) -> Document {
    serde_json::from_value(v).unwrap()
}

#[test]
fn remove_keeps_remaining_key_order() {
    let mut d = doc(json!({"c": 1, "a": 2, "b": 3}));
    d.remove("c");

    let keys: Vec<&str> = d.as_map().keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
}

#[test]
fn serialization_round_trips_key_order() {
    let input = r#"{"zeta":1,"alpha":{"y":true,"x":false}}"#;
    let d: Document = serde_json::from_str(input).unwrap();
    assert_eq!(serde_json::to_string(&d).unwrap(), input);
}

#[test]
fn element_helpers_read_and_write_attribute_bag() {
    let mut node = element([("android:name", ".MainActivity")]);
    assert_eq!(attr(&node, "android:name"), Some(".MainActivity"));
    assert_eq!(attr(&node, "missing"), None);

    let map = node.as_object_mut().unwrap();
    set_attr(map, "android:exported", "true");
    assert_eq!(attr(&node, "android:exported"), Some("true"));
}

#[test]
fn set_attr_replaces_non_object_bag() {
    let mut node = json!({"$": "oops"});
    set_attr(node.as_object_mut().unwrap(), "k", "v");
    assert_eq!(node, json!({"$": {"k": "v"}}));
}

#[test]
fn children_reads_missing_or_scalar_tag_as_empty() {
    let node = json!({"action": "not-an-array"});
    let map = node.as_object().unwrap();
    assert!(children(map, "action").is_empty());
    assert!(children(map, "category").is_empty());
}

#[test]
fn find_child_mut_matches_on_attribute() {
    let mut app = json!({
        "activity": [
            {"$": {"android:name": ".Settings"}},
            {"$": {"android:name": ".MainActivity"}, "intent-filter": []}
        ]
    });

    let main = find_child_mut(app.as_object_mut().unwrap(), "activity", "android:name", ".MainActivity")
        .expect("main activity");
    assert!(main.contains_key("intent-filter"));
}
