//! Byte-stable form of a document, used for fingerprints.
//!
//! A `Document` keeps insertion order so that unchanged files round-trip
//! byte for byte. Fingerprints must not depend on that order, so objects are
//! re-keyed in sorted order at every depth before writing. Arrays are ordered
//! collections in every supported document and keep their order.

use serde_json::{Map, Value};

use crate::model::Document;

/// Copy of `value` with every object's keys in sorted order.
pub fn canonical_value(value: &Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(sorted_map(map)),
        Value::Array(items) => Value::Array(items.iter().map(canonical_value).collect()),
        scalar => scalar.clone(),
    }
}

/// Minified JSON of `doc` with sorted keys.
pub fn to_canonical_json_bytes(doc: &Document) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(&sorted_map(doc.as_map()))
}

pub fn to_canonical_json_string(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string(&sorted_map(doc.as_map()))
}

fn sorted_map(map: &Map<String, Value>) -> Map<String, Value> {
    let mut keys: Vec<&String> = map.keys().collect();
    keys.sort_unstable();

    keys.into_iter()
        .map(|k| (k.clone(), canonical_value(&map[k.as_str()])))
        .collect()
}
