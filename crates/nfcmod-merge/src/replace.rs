//! Idempotent replacement of engine-generated entries.
//!
//! Every pass strips all entries carrying the sentinel marker and appends a
//! freshly rendered set. Entries without the marker are user-authored and are
//! kept as-is, in their original order, ahead of the generated ones.

use serde_json::{Map, Value};

use nfcmod_core::element::{find_child_mut, first_child_mut};
use nfcmod_core::model::Document;
use nfcmod_intent::FilterEntry;
use nfcmod_intent::entry::is_generated_node;
use nfcmod_vocab::android;

use crate::error::MutationError;

/// Counts from one replacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReplaceCounts {
    pub removed: usize,
    pub added: usize,
    pub kept: usize,
}

/// Replace the generated entries of a collection.
///
/// `None` and `null` both mean the collection is absent. The result is `None` when the
/// collection ends up empty after generated entries were removed, and is the
/// input untouched when there was nothing to remove and nothing to add.
pub fn replace_generated(
    existing: Option<Value>,
    fresh: Vec<FilterEntry>,
) -> (Option<Value>, ReplaceCounts) {
    let has_generated = match &existing {
        None | Some(Value::Null) => false,
        Some(Value::Array(entries)) => entries.iter().any(is_generated_node),
        Some(other) => is_generated_node(other),
    };

    if !has_generated && fresh.is_empty() {
        let kept = match &existing {
            None | Some(Value::Null) => 0,
            Some(Value::Array(entries)) => entries.len(),
            Some(_) => 1,
        };
        return (existing, ReplaceCounts { kept, ..ReplaceCounts::default() });
    }

    let entries = match existing {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(entries)) => entries,
        // A lone element is treated as a one-element collection.
        Some(other) => vec![other],
    };

    let mut counts = ReplaceCounts {
        added: fresh.len(),
        ..ReplaceCounts::default()
    };
    let mut out = Vec::with_capacity(entries.len() + fresh.len());
    for entry in entries.into_iter().map(FilterEntry::classify) {
        match entry {
            FilterEntry::Generated(_) => counts.removed += 1,
            FilterEntry::User(v) => {
                counts.kept += 1;
                out.push(v);
            }
        }
    }
    out.extend(fresh.into_iter().map(FilterEntry::into_value));

    if out.is_empty() {
        (None, counts)
    } else {
        (Some(Value::Array(out)), counts)
    }
}

/// Locate the primary activity: `manifest.application[0].activity[android:name=<main>]`.
pub fn main_activity_mut<'a>(
    manifest: &'a mut Document,
    main_activity: &str,
) -> Result<&'a mut Map<String, Value>, MutationError> {
    let root = manifest
        .get_mut(android::MANIFEST)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| MutationError::MissingAnchor {
            path: android::MANIFEST.to_string(),
        })?;

    let application = first_child_mut(root, android::APPLICATION).ok_or_else(|| {
        MutationError::MissingAnchor {
            path: format!("{}.{}[0]", android::MANIFEST, android::APPLICATION),
        }
    })?;

    find_child_mut(application, android::ACTIVITY, android::NAME_ATTR, main_activity).ok_or_else(
        || MutationError::MissingAnchor {
            path: format!(
                "{}.{}[0].{}[{}=\"{main_activity}\"]",
                android::MANIFEST,
                android::APPLICATION,
                android::ACTIVITY,
                android::NAME_ATTR,
            ),
        },
    )
}

/// Replace the generated intent filters of the primary activity.
///
/// Fails without touching the document content when the activity cannot be
/// found; callers must discard the document in that case.
pub fn replace_intent_filters(
    mut manifest: Document,
    main_activity: &str,
    fresh: Vec<FilterEntry>,
) -> Result<(Document, ReplaceCounts), MutationError> {
    let activity = main_activity_mut(&mut manifest, main_activity)?;

    let existing = activity.get(android::INTENT_FILTER).cloned();
    let (next, counts) = replace_generated(existing, fresh);
    match next {
        Some(list) => {
            activity.insert(android::INTENT_FILTER.to_string(), list);
        }
        None => {
            activity.shift_remove(android::INTENT_FILTER);
        }
    }

    Ok((manifest, counts))
}
