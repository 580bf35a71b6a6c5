use serde_json::Value;
use tracing::warn;

use nfcmod_core::model::Document;

/// Union-merge `values` into the list stored under `key`.
///
/// Semantics:
/// - empty `values`: the document is returned unchanged (an absent field stays absent)
/// - an absent or non-list field starts out as an empty list
/// - new values are appended after existing ones, then duplicates are collapsed
///   by value equality, keeping the first occurrence
/// - an empty result removes the key rather than leaving `[]` behind
pub fn merge_unique_values(mut doc: Document, key: &str, values: &[Value]) -> Document {
    if values.is_empty() {
        return doc;
    }

    let slot = doc
        .as_map_mut()
        .entry(key)
        .or_insert_with(|| Value::Array(Vec::new()));
    if !slot.is_array() {
        warn!(key, found = %slot, "replacing non-list field with a list");
        *slot = Value::Array(Vec::new());
    }

    let mut emptied = false;
    if let Value::Array(existing) = slot {
        existing.extend(values.iter().cloned());
        *existing = dedup_by_value(std::mem::take(existing));
        emptied = existing.is_empty();
    }

    if emptied {
        doc.remove(key);
    }
    doc
}

/// Convenience wrapper for string lists.
pub fn merge_unique_strings<S: AsRef<str>>(doc: Document, key: &str, values: &[S]) -> Document {
    let values: Vec<Value> = values
        .iter()
        .map(|s| Value::String(s.as_ref().to_string()))
        .collect();
    merge_unique_values(doc, key, &values)
}

/// Length of the list stored under `key`, 0 when absent or not a list.
pub fn list_len(doc: &Document, key: &str) -> usize {
    doc.get(key).and_then(Value::as_array).map_or(0, Vec::len)
}

fn dedup_by_value(values: Vec<Value>) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(values.len());
    for v in values {
        if !out.contains(&v) {
            out.push(v);
        }
    }
    out
}
