//! Format version constants.

/// Configuration schema version (`schemas/nfc-config.v1.schema.json`).
///
/// Bump this if the schema constraints change.
pub const CONFIG_SCHEMA_V: u8 = 1;

/// Pass telemetry format version (the `v` field of `PassTelemetry`).
pub const TELEMETRY_V: u8 = nfcmod_merge::telemetry::TELEMETRY_V;
