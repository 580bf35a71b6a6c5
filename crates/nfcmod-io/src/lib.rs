//! `nfcmod-io` is the single supported public entrypoint for the NFC manifest
//! merge engine: document model, configuration parsing, and the mutation pass.
//!
//! This crate intentionally does **no** project discovery or file I/O. Callers
//! read the documents (as JSON renditions), hand them to [`apply::apply_config`]
//! and persist whatever comes back. `nfcmod-io` focuses on:
//! - stable types
//! - configuration parsing and schema validation
//! - canonical JSON and fingerprints
//! - the idempotent mutation pass

// -----------------------------------------------------------------------------
// Public API contract
// -----------------------------------------------------------------------------
//
// Consumers SHOULD import from `nfcmod_io::prelude::*`.
// Anything not re-exported via the prelude is considered internal and may change
// without notice.

// Re-export the document model.
#[doc(hidden)]
pub mod core {
    pub use nfcmod_core::element;
    pub use nfcmod_core::hash::{SUPPORTED_ALGORITHMS, hash_bytes_hex};
    pub use nfcmod_core::model::Document;
}

/// Deterministic JSON canonicalization helpers.
pub mod canonical_json {
    pub use nfcmod_core::canonical::{to_canonical_json_bytes, to_canonical_json_string};
}

/// Version constants for schema conformance and CI gating.
pub mod version;

/// Parsing documents from JSON with actionable errors.
pub mod document_json;

/// JSON Schema validation of configuration input.
pub mod config_schema;

/// Parse, validate and run a pass in one call.
pub mod apply;

// Re-export intent filter types.
#[doc(hidden)]
pub mod intent {
    pub use nfcmod_intent::render::{render_filter, render_filters};
    pub use nfcmod_intent::{
        ActionNamespace, DataSpec, FilterEntry, IntentFilter, IntentFilterInput, OneOrMany,
    };
}

// Re-export the merge engine.
#[doc(hidden)]
pub mod merge {
    pub use nfcmod_merge::array::{merge_unique_strings, merge_unique_values};
    pub use nfcmod_merge::mutators::{
        BuildParamChange, UsageSource, ensure_permissions, permission_names, raise_build_param,
        set_usage_description,
    };
    pub use nfcmod_merge::replace::{ReplaceCounts, main_activity_mut, replace_generated, replace_intent_filters};
    pub use nfcmod_merge::{
        ConfigError, Diagnostic, DiagnosticCode, Diagnostics, MergeOptions, MutationError,
        NfcConfig, NfcConfigInput, NormalizedConfig, PassOutcome, PassTelemetry,
        PermissionSetting, ProjectDocuments, Stage, parse_config_json_str, parse_config_value,
        run_pass,
    };
}

/// Fixed keys and prefixes.
pub use nfcmod_vocab as vocab;

/// Convenience prelude for consumers.
///
/// This is the **only supported** import surface for external users.
pub mod prelude {
    pub use crate::apply::{ApplyError, apply_config};
    pub use crate::core::Document;
    pub use crate::document_json::{DocumentJsonError, parse_document_json_str};
    pub use crate::intent::{FilterEntry, IntentFilter, IntentFilterInput};
    pub use crate::merge::{
        ConfigError, Diagnostic, DiagnosticCode, Diagnostics, MergeOptions, MutationError,
        NfcConfig, PassOutcome, PassTelemetry, PermissionSetting, ProjectDocuments, Stage,
    };
    pub use crate::{canonical_json, config_schema, version};
}
