use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::mutators::{BuildParamChange, UsageSource};

/// Telemetry format version.
pub const TELEMETRY_V: u8 = 1;

/// Deterministic, machine-readable record of one mutation pass.
///
/// Contains no wall-clock timestamps, so two runs over the same inputs
/// produce identical telemetry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassTelemetry {
    pub v: u8,

    /// Stages in the order they ran.
    pub stages: Vec<String>,

    /// `"default"`, `"custom"` or `"disabled"`.
    pub permission_gate: String,

    /// Values appended per list field (after deduplication).
    pub values_added: BTreeMap<String, usize>,

    pub generated_filters_removed: usize,
    pub generated_filters_added: usize,
    pub user_filters_kept: usize,

    pub permissions_added: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_description: Option<UsageSource>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub build_param: Option<BuildParamChange>,

    /// Configuration values ignored during normalization.
    pub config_warnings: usize,

    pub fingerprint_algorithm: String,
    pub fingerprints_before: BTreeMap<String, String>,
    pub fingerprints_after: BTreeMap<String, String>,

    /// Whether any document changed.
    pub changed: bool,
}

impl PassTelemetry {
    pub fn new(permission_gate: &str, fingerprint_algorithm: &str) -> Self {
        Self {
            v: TELEMETRY_V,
            stages: Vec::new(),
            permission_gate: permission_gate.to_string(),
            values_added: BTreeMap::new(),
            generated_filters_removed: 0,
            generated_filters_added: 0,
            user_filters_kept: 0,
            permissions_added: 0,
            usage_description: None,
            build_param: None,
            config_warnings: 0,
            fingerprint_algorithm: fingerprint_algorithm.to_string(),
            fingerprints_before: BTreeMap::new(),
            fingerprints_after: BTreeMap::new(),
            changed: false,
        }
    }

    pub fn record_added(&mut self, field: &str, added: usize) {
        *self.values_added.entry(field.to_string()).or_insert(0) += added;
    }

    /// Documents whose fingerprint differs between before and after.
    pub fn changed_documents(&self) -> Vec<&str> {
        self.fingerprints_after
            .iter()
            .filter(|(name, after)| self.fingerprints_before.get(*name) != Some(*after))
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
