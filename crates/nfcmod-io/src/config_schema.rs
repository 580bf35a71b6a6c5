use jsonschema::Validator;
use once_cell::sync::Lazy;
use serde_json::Value;

static CONFIG_SCHEMA_JSON: &str = include_str!("../../../schemas/nfc-config.v1.schema.json");

static CONFIG_SCHEMA: Lazy<Result<Validator, String>> = Lazy::new(|| {
    let schema_json: Value = serde_json::from_str(CONFIG_SCHEMA_JSON)
        .map_err(|e| format!("invalid config schema JSON: {e}"))?;

    Validator::new(&schema_json).map_err(|e| format!("compile config schema: {e}"))
});

/// The raw configuration schema document.
pub fn config_schema_json() -> &'static str {
    CONFIG_SCHEMA_JSON
}

/// Validate configuration JSON against `nfc-config.v1.schema.json`.
///
/// Returns every violation message; `Err` with a single message if the
/// bundled schema itself failed to compile.
pub fn validate_config_schema(instance: &Value) -> Result<(), Vec<String>> {
    let schema = CONFIG_SCHEMA.as_ref().map_err(|e| vec![e.clone()])?;

    let errors: Vec<String> = schema.iter_errors(instance).map(|e| e.to_string()).collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
