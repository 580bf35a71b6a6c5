use serde_json::Value;

use nfcmod_core::element::attr;
use nfcmod_vocab::{android, is_generated_marker};

/// An element of a target collection, classified by origin.
///
/// `Generated` entries carry the sentinel marker and are owned by this engine:
/// they may be discarded and re-rendered on every pass. `User` entries are
/// everything else and are never touched.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterEntry {
    Generated(Value),
    User(Value),
}

impl FilterEntry {
    pub fn classify(node: Value) -> Self {
        if is_generated_node(&node) {
            FilterEntry::Generated(node)
        } else {
            FilterEntry::User(node)
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, FilterEntry::Generated(_))
    }

    pub fn as_value(&self) -> &Value {
        match self {
            FilterEntry::Generated(v) | FilterEntry::User(v) => v,
        }
    }

    pub fn into_value(self) -> Value {
        match self {
            FilterEntry::Generated(v) | FilterEntry::User(v) => v,
        }
    }
}

/// Whether a node carries the sentinel marker.
pub fn is_generated_node(node: &Value) -> bool {
    attr(node, android::GENERATED_ATTR).is_some_and(is_generated_marker)
}
