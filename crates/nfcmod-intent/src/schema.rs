use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use nfcmod_vocab::android;

/// A field that accepts either a single value or a list of values.
///
/// Normalized into a plain `Vec` before anything is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(v) => v,
            OneOrMany::One(t) => vec![t],
        }
    }
}

/// Intent filter as written in the configuration.
///
/// Wire shape:
/// `{ "action": "NDEF_DISCOVERED", "autoVerify": true, "data": {...} | [{...}], "category": "DEFAULT" | [...] }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentFilterInput {
    pub action: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_verify: Option<bool>,

    /// `null` entries are tolerated and dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<OneOrMany<Option<Map<String, Value>>>>,

    /// `null` and empty names are tolerated and dropped.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<OneOrMany<Option<String>>>,
}

/// Which reserved action namespace an action name is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionNamespace {
    /// `android.nfc.action.*`
    Nfc,
    /// `android.intent.action.*`
    Intent,
}

impl ActionNamespace {
    pub const fn prefix(self) -> &'static str {
        match self {
            ActionNamespace::Nfc => android::NFC_ACTION_PREFIX,
            ActionNamespace::Intent => android::INTENT_ACTION_PREFIX,
        }
    }
}

/// One `<data>` child: bare attribute names (no `android:` prefix) in input order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DataSpec {
    pub attrs: Vec<(String, String)>,
}

/// Canonical, strongly typed intent filter ready to be rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntentFilter {
    pub namespace: ActionNamespace,
    /// Bare action name, e.g. `NDEF_DISCOVERED`.
    pub action: String,
    pub auto_verify: bool,
    pub data: Vec<DataSpec>,
    /// Bare category names, e.g. `DEFAULT`.
    pub categories: Vec<String>,
}

impl IntentFilterInput {
    /// Normalize scalar-or-list fields and drop empty entries.
    pub fn normalize(&self, namespace: ActionNamespace) -> IntentFilter {
        let data = self
            .data
            .clone()
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .map(|datum| DataSpec {
                attrs: datum
                    .into_iter()
                    .filter_map(|(k, v)| attr_value(v).map(|v| (k, v)))
                    .collect(),
            })
            .collect();

        let categories = self
            .category
            .clone()
            .map(OneOrMany::into_vec)
            .unwrap_or_default()
            .into_iter()
            .flatten()
            .filter(|c| !c.is_empty())
            .collect();

        IntentFilter {
            namespace,
            action: self.action.clone(),
            auto_verify: self.auto_verify.unwrap_or(false),
            data,
            categories,
        }
    }
}

fn attr_value(v: Value) -> Option<String> {
    match v {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
