//! Helpers over the XML-to-JSON element shape.
//!
//! An element is a JSON object whose attributes live under the `$` key and whose
//! child elements are arrays keyed by tag name:
//!
//! ```json
//! { "$": { "android:name": ".MainActivity" }, "intent-filter": [ { "$": {} } ] }
//! ```

use serde_json::{Map, Value};

/// Attribute bag key.
pub const ATTRS_KEY: &str = "$";

/// Build an element carrying only attributes.
pub fn element<I, K, V>(attrs: I) -> Value
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let bag: Map<String, Value> = attrs
        .into_iter()
        .map(|(k, v)| (k.into(), Value::String(v.into())))
        .collect();

    let mut node = Map::new();
    node.insert(ATTRS_KEY.to_string(), Value::Object(bag));
    Value::Object(node)
}

/// Read a string attribute of an element.
pub fn attr<'a>(node: &'a Value, name: &str) -> Option<&'a str> {
    node.get(ATTRS_KEY)?.get(name)?.as_str()
}

/// Set a string attribute, creating the attribute bag when missing.
///
/// A non-object attribute bag is replaced.
pub fn set_attr(node: &mut Map<String, Value>, name: &str, value: impl Into<String>) {
    let bag = node
        .entry(ATTRS_KEY.to_string())
        .or_insert_with(|| Value::Object(Map::new()));
    if !bag.is_object() {
        *bag = Value::Object(Map::new());
    }
    if let Value::Object(bag) = bag {
        bag.insert(name.to_string(), Value::String(value.into()));
    }
}

/// Children of `node` with the given tag. Missing or non-array entries read as empty.
pub fn children<'a>(node: &'a Map<String, Value>, tag: &str) -> &'a [Value] {
    node.get(tag)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// First child element with the given tag, as a mutable object.
pub fn first_child_mut<'a>(
    node: &'a mut Map<String, Value>,
    tag: &str,
) -> Option<&'a mut Map<String, Value>> {
    node.get_mut(tag)?
        .as_array_mut()?
        .first_mut()?
        .as_object_mut()
}

/// Find the first child element with the given tag whose attribute `name` equals `value`.
pub fn find_child_mut<'a>(
    node: &'a mut Map<String, Value>,
    tag: &str,
    name: &str,
    value: &str,
) -> Option<&'a mut Map<String, Value>> {
    node.get_mut(tag)?
        .as_array_mut()?
        .iter_mut()
        .find(|child| attr(child, name) == Some(value))?
        .as_object_mut()
}
