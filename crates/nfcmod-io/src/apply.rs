use serde_json::Value;
use tracing::debug;

use nfcmod_merge::{
    ConfigError, MergeOptions, MutationError, PassOutcome, ProjectDocuments, parse_config_value,
    run_pass,
};

use crate::config_schema::validate_config_schema;

#[derive(Debug, thiserror::Error)]
pub enum ApplyError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Strict mode only.
    #[error("configuration does not match schema: {}", .0.join("; "))]
    Schema(Vec<String>),

    #[error(transparent)]
    Mutation(#[from] MutationError),
}

/// Normalize `config` and run one pass over `docs`.
///
/// With `opts.strict_inputs` the configuration must also satisfy the bundled
/// JSON Schema, and any malformed value fails the call before a document is
/// touched.
pub fn apply_config(
    docs: ProjectDocuments,
    config: Value,
    opts: &MergeOptions,
) -> Result<PassOutcome, ApplyError> {
    if opts.strict_inputs {
        validate_config_schema(&config).map_err(ApplyError::Schema)?;
    }

    let normalized = parse_config_value(config, opts.strict_inputs)?;
    debug!(warnings = normalized.warnings.len(), "configuration normalized");

    let mut outcome = run_pass(docs, &normalized.config, opts)?;
    outcome.telemetry.config_warnings = normalized.warnings.len();
    Ok(outcome)
}
