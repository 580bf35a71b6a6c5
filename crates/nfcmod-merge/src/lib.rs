pub mod array;
pub mod config;
pub mod diagnostics;
pub mod error;
pub mod mutators;
pub mod options;
pub mod pipeline;
pub mod replace;
pub mod telemetry;

pub use config::{
    NfcConfig, NfcConfigInput, NormalizedConfig, PermissionSetting, parse_config_json_str,
    parse_config_value,
};
pub use diagnostics::{Diagnostic, DiagnosticCode, Diagnostics};
pub use error::{ConfigError, MutationError};
pub use options::MergeOptions;
pub use pipeline::{PassOutcome, ProjectDocuments, Stage, run_pass};
pub use telemetry::PassTelemetry;
