use serde::{Deserialize, Serialize};

/// Stable, machine-readable codes for configuration findings.
///
/// `message` stays human-oriented; tooling should match on `code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticCode {
    /// The configuration root is not a JSON object.
    ConfigNotObject,
    /// A list-valued option was given a non-list value.
    ExpectedList,
    /// A list entry had the wrong type and was dropped.
    ListEntryIgnored,
    /// A boolean option was given a non-boolean value.
    ExpectedBool,
    /// `nfcPermission` was neither a string nor `false`.
    InvalidPermissionSetting,
    /// An intent filter entry did not match the expected shape.
    InvalidIntentFilter,
}

impl DiagnosticCode {
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticCode::ConfigNotObject => "config_not_object",
            DiagnosticCode::ExpectedList => "expected_list",
            DiagnosticCode::ListEntryIgnored => "list_entry_ignored",
            DiagnosticCode::ExpectedBool => "expected_bool",
            DiagnosticCode::InvalidPermissionSetting => "invalid_permission_setting",
            DiagnosticCode::InvalidIntentFilter => "invalid_intent_filter",
        }
    }
}

/// A single finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    /// JSON-ish path such as `selectIdentifiers`, `intentFilters[2].category`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    pub message: String,
}

impl Diagnostic {
    pub fn new(code: DiagnosticCode, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code,
            path: Some(path.into()),
            message: message.into(),
        }
    }
}

/// Ordered collection of findings, serialized as `{ "diagnostics": [...] }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub diagnostics: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn push(&mut self, diag: Diagnostic) {
        self.diagnostics.push(diag);
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    pub fn has_code(&self, code: DiagnosticCode) -> bool {
        self.diagnostics.iter().any(|d| d.code == code)
    }

    /// First diagnostic's message, prefixed with its path when known.
    pub fn summary(&self) -> String {
        match self.diagnostics.first() {
            Some(Diagnostic { path: Some(p), message, .. }) => format!("{p}: {message}"),
            Some(d) => d.message.clone(),
            None => "configuration is invalid".to_string(),
        }
    }
}

impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.summary())
    }
}
