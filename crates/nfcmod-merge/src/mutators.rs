//! Narrow field-path mutators. Each one is a pure transform that takes a
//! document by value and hands back the edited document.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use nfcmod_core::element::{attr, children, element};
use nfcmod_core::model::Document;
use nfcmod_vocab::{ReaderFormat, android, plist};

use crate::array::{merge_unique_strings, merge_unique_values};
use crate::error::MutationError;

/// Where the usage description came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageSource {
    Override,
    Existing,
    Default,
}

/// Set `NFCReaderUsageDescription`: override, else the existing value, else the default.
///
/// An empty existing string counts as absent.
pub fn set_usage_description(mut doc: Document, usage_override: Option<&str>) -> (Document, UsageSource) {
    let key = plist::READER_USAGE_DESCRIPTION;

    if let Some(text) = usage_override.filter(|s| !s.is_empty()) {
        doc.insert(key, Value::String(text.to_string()));
        return (doc, UsageSource::Override);
    }

    if doc.get_str(key).is_some_and(|s| !s.is_empty()) {
        return (doc, UsageSource::Existing);
    }

    doc.insert(
        key,
        Value::String(plist::DEFAULT_READER_USAGE_DESCRIPTION.to_string()),
    );
    (doc, UsageSource::Default)
}

/// Union-merge the required reader-session formats into the entitlements.
pub fn merge_reader_formats(doc: Document, include_ndef: bool) -> Document {
    let formats: Vec<&str> = ReaderFormat::required(include_ndef)
        .iter()
        .map(|f| f.as_str())
        .collect();
    merge_unique_strings(doc, plist::READER_SESSION_FORMATS, &formats)
}

pub fn merge_select_identifiers(doc: Document, identifiers: &[String]) -> Document {
    merge_unique_strings(doc, plist::SELECT_IDENTIFIERS, identifiers)
}

pub fn merge_system_codes(doc: Document, codes: &[String]) -> Document {
    merge_unique_strings(doc, plist::FELICA_SYSTEM_CODES, codes)
}

/// Ensure a `<uses-permission android:name=...>` element exists for every name.
///
/// Presence is decided by `android:name`, so a user element carrying extra
/// attributes (e.g. `android:maxSdkVersion`) already satisfies the requirement.
/// Returns the number of elements added.
pub fn ensure_permissions(
    mut manifest: Document,
    names: &[&str],
) -> Result<(Document, usize), MutationError> {
    let root = manifest
        .get_mut(android::MANIFEST)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| MutationError::MissingAnchor {
            path: android::MANIFEST.to_string(),
        })?;

    let missing: Vec<Value> = {
        let existing = root
            .get(android::USES_PERMISSION)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        names
            .iter()
            .filter(|name| !existing.iter().any(|p| attr(p, android::NAME_ATTR) == Some(**name)))
            .map(|name| element([(android::NAME_ATTR, *name)]))
            .collect()
    };
    let added = missing.len();

    let permissions = Document::from_map(std::mem::take(root));
    let permissions = merge_unique_values(permissions, android::USES_PERMISSION, &missing);
    *root = permissions.into_map();

    Ok((manifest, added))
}

/// Outcome of the build-parameter stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildParamChange {
    pub name: String,
    /// Existing raw value, rendered as JSON text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous: Option<String>,
    pub minimum: u32,
    pub raised: bool,
}

/// Ensure `name` is at least `minimum`, never lowering it.
///
/// Numbers and numeric strings are compared; anything else (absent,
/// unparseable) is treated as no value and the minimum is written. A raised
/// string value stays a string.
pub fn raise_build_param(mut doc: Document, name: &str, minimum: u32) -> (Document, BuildParamChange) {
    let previous = doc.get(name).cloned();
    let current = previous.as_ref().and_then(parse_build_number);

    if previous.is_some() && current.is_none() {
        warn!(name, "build parameter is not numeric; applying minimum");
    }

    let raised = current.is_none_or(|v| v < f64::from(minimum));
    if raised {
        let next = match &previous {
            Some(Value::String(_)) => Value::String(minimum.to_string()),
            _ => Value::from(minimum),
        };
        debug!(name, minimum, "raising build parameter");
        doc.insert(name, next);
    }

    let change = BuildParamChange {
        name: name.to_string(),
        previous: previous.as_ref().map(Value::to_string),
        minimum,
        raised,
    };
    (doc, change)
}

fn parse_build_number(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
        _ => None,
    }
}

/// `android:name` of every declared permission, in document order.
pub fn permission_names(manifest: &Document) -> Vec<String> {
    manifest
        .get(android::MANIFEST)
        .and_then(Value::as_object)
        .map(|root: &Map<String, Value>| {
            children(root, android::USES_PERMISSION)
                .iter()
                .filter_map(|p| attr(p, android::NAME_ATTR).map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
