use crate::diagnostics::Diagnostics;

/// Fatal errors that abort a mutation pass.
///
/// Documents handed to a failed pass are consumed and must not be persisted.
#[derive(Debug, thiserror::Error)]
pub enum MutationError {
    /// The manifest does not contain a node the engine must anchor on.
    #[error("android manifest is missing required node `{path}`")]
    MissingAnchor { path: String },

    #[error("unsupported fingerprint algorithm '{0}'. Supported algorithms: sha256, xxh64.")]
    UnsupportedHashAlgorithm(String),
}

/// Errors produced while turning configuration input into an `NfcConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// Strict mode: malformed values are reported instead of ignored.
    #[error("invalid configuration: {0}")]
    Invalid(Diagnostics),
}

impl ConfigError {
    pub fn diagnostics(&self) -> Option<&Diagnostics> {
        match self {
            ConfigError::Invalid(d) => Some(d),
            ConfigError::InvalidJson(_) => None,
        }
    }
}
