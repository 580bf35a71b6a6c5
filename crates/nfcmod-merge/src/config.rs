//! Configuration input and its normalization into a typed `NfcConfig`.
//!
//! Input is read loosely (every option is an arbitrary JSON value) so that a
//! malformed option can be reported with a path instead of failing the whole
//! parse. Normalization then either drops malformed values with a warning
//! diagnostic or, in strict mode, rejects the configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use nfcmod_intent::{ActionNamespace, IntentFilter, IntentFilterInput};

use crate::diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
use crate::error::ConfigError;

/// Configuration as written by the user (camelCase keys).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NfcConfigInput {
    /// Usage description override (string), or `false` to skip permissions entirely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nfc_permission: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_ndef_entitlement: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub select_identifiers: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_codes: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent_filters: Option<Value>,

    /// App-level intent filters owned by the host packaging tool.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_intent_filters: Option<Value>,
}

/// Tri-state permission gate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PermissionSetting {
    /// Inject permissions; keep an existing usage description or use the default one.
    #[default]
    Default,
    /// Inject permissions with this usage description.
    Custom(String),
    /// Skip permission and usage-description injection.
    Disabled,
}

impl PermissionSetting {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, PermissionSetting::Disabled)
    }

    pub fn usage_override(&self) -> Option<&str> {
        match self {
            PermissionSetting::Custom(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PermissionSetting::Default => "default",
            PermissionSetting::Custom(_) => "custom",
            PermissionSetting::Disabled => "disabled",
        }
    }
}

/// Normalized configuration for one pass. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NfcConfig {
    pub permission: PermissionSetting,
    pub include_ndef_entitlement: bool,
    pub select_identifiers: Vec<String>,
    pub system_codes: Vec<String>,
    pub intent_filters: Vec<IntentFilter>,
    pub host_intent_filters: Vec<IntentFilter>,
}

impl Default for NfcConfig {
    fn default() -> Self {
        Self {
            permission: PermissionSetting::Default,
            include_ndef_entitlement: true,
            select_identifiers: Vec::new(),
            system_codes: Vec::new(),
            intent_filters: Vec::new(),
            host_intent_filters: Vec::new(),
        }
    }
}

/// Result of normalizing configuration input.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedConfig {
    pub config: NfcConfig,
    /// Values that were ignored (permissive mode only; strict mode fails instead).
    pub warnings: Diagnostics,
}

impl NfcConfigInput {
    /// Normalize into a typed configuration.
    ///
    /// Permissive (`strict = false`): malformed values are treated as absent and
    /// reported in `warnings`. Strict: any malformed value fails with
    /// `ConfigError::Invalid`.
    pub fn normalize(&self, strict: bool) -> Result<NormalizedConfig, ConfigError> {
        let mut diags = Diagnostics::default();

        let config = NfcConfig {
            permission: permission_setting(self.nfc_permission.as_ref(), &mut diags),
            include_ndef_entitlement: bool_or(
                self.include_ndef_entitlement.as_ref(),
                "includeNdefEntitlement",
                true,
                &mut diags,
            ),
            select_identifiers: string_list(
                self.select_identifiers.as_ref(),
                "selectIdentifiers",
                &mut diags,
            ),
            system_codes: string_list(self.system_codes.as_ref(), "systemCodes", &mut diags),
            intent_filters: intent_filters(
                self.intent_filters.as_ref(),
                "intentFilters",
                ActionNamespace::Nfc,
                &mut diags,
            ),
            host_intent_filters: intent_filters(
                self.host_intent_filters.as_ref(),
                "hostIntentFilters",
                ActionNamespace::Intent,
                &mut diags,
            ),
        };

        if strict && !diags.is_empty() {
            return Err(ConfigError::Invalid(diags));
        }

        for d in diags.iter() {
            warn!(code = d.code.as_str(), path = ?d.path, "{}", d.message);
        }

        Ok(NormalizedConfig { config, warnings: diags })
    }
}

/// Parse configuration JSON and normalize it.
///
/// A non-object root is a shape error: strict mode rejects it, permissive mode
/// treats it as an empty configuration.
pub fn parse_config_json_str(s: &str, strict: bool) -> Result<NormalizedConfig, ConfigError> {
    let v: Value = serde_json::from_str(s).map_err(ConfigError::InvalidJson)?;
    parse_config_value(v, strict)
}

pub fn parse_config_value(v: Value, strict: bool) -> Result<NormalizedConfig, ConfigError> {
    if v.is_null() {
        return NfcConfigInput::default().normalize(strict);
    }

    if !v.is_object() {
        let diag = Diagnostic::new(
            DiagnosticCode::ConfigNotObject,
            "$",
            format!("expected a JSON object, got {}", kind(&v)),
        );
        let mut diags = Diagnostics::default();
        diags.push(diag);
        if strict {
            return Err(ConfigError::Invalid(diags));
        }
        for d in diags.iter() {
            warn!(code = d.code.as_str(), "{}", d.message);
        }
        return Ok(NormalizedConfig {
            config: NfcConfig::default(),
            warnings: diags,
        });
    }

    let input: NfcConfigInput = serde_json::from_value(v).map_err(ConfigError::InvalidJson)?;
    input.normalize(strict)
}

fn permission_setting(v: Option<&Value>, diags: &mut Diagnostics) -> PermissionSetting {
    match v {
        None | Some(Value::Null) | Some(Value::Bool(true)) => PermissionSetting::Default,
        Some(Value::Bool(false)) => PermissionSetting::Disabled,
        // An empty override falls through to the existing/default description.
        Some(Value::String(s)) if s.is_empty() => PermissionSetting::Default,
        Some(Value::String(s)) => PermissionSetting::Custom(s.clone()),
        Some(other) => {
            diags.push(Diagnostic::new(
                DiagnosticCode::InvalidPermissionSetting,
                "nfcPermission",
                format!("expected a string or false, got {}", kind(other)),
            ));
            PermissionSetting::Default
        }
    }
}

fn bool_or(v: Option<&Value>, path: &str, default: bool, diags: &mut Diagnostics) -> bool {
    match v {
        None | Some(Value::Null) => default,
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            diags.push(Diagnostic::new(
                DiagnosticCode::ExpectedBool,
                path,
                format!("expected a boolean, got {}", kind(other)),
            ));
            default
        }
    }
}

fn string_list(v: Option<&Value>, path: &str, diags: &mut Diagnostics) -> Vec<String> {
    let items = match v {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            diags.push(Diagnostic::new(
                DiagnosticCode::ExpectedList,
                path,
                format!("expected a list of strings, got {}; nothing merged", kind(other)),
            ));
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match item {
            Value::String(s) => out.push(s.clone()),
            other => diags.push(Diagnostic::new(
                DiagnosticCode::ListEntryIgnored,
                format!("{path}[{i}]"),
                format!("expected a string, got {}", kind(other)),
            )),
        }
    }
    out
}

fn intent_filters(
    v: Option<&Value>,
    path: &str,
    namespace: ActionNamespace,
    diags: &mut Diagnostics,
) -> Vec<IntentFilter> {
    let items = match v {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            diags.push(Diagnostic::new(
                DiagnosticCode::ExpectedList,
                path,
                format!("expected a list of intent filters, got {}", kind(other)),
            ));
            return Vec::new();
        }
    };

    let mut out = Vec::with_capacity(items.len());
    for (i, item) in items.iter().enumerate() {
        match serde_json::from_value::<IntentFilterInput>(item.clone()) {
            Ok(input) if input.action.is_empty() => diags.push(Diagnostic::new(
                DiagnosticCode::InvalidIntentFilter,
                format!("{path}[{i}].action"),
                "action is empty",
            )),
            Ok(input) => out.push(input.normalize(namespace)),
            Err(e) => diags.push(Diagnostic::new(
                DiagnosticCode::InvalidIntentFilter,
                format!("{path}[{i}]"),
                e.to_string(),
            )),
        }
    }
    out
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
