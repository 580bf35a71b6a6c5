use anyhow::Result;
use serde_json::{Value, json};

use nfcmod_io::config_schema::validate_config_schema;

fn merge_fixture(name: &str) -> Result<Value> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("nfcmod-merge")
        .join("tests")
        .join("fixtures")
        .join(name);
    Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
}

#[test]
fn full_fixture_conforms_to_config_schema() -> Result<()> {
    let config = merge_fixture("config.full.json")?;
    if let Err(errors) = validate_config_schema(&config) {
        panic!("schema validation failed:\n{}", errors.join("\n"));
    }
    Ok(())
}

#[test]
fn empty_and_all_null_configs_are_accepted() {
    assert!(validate_config_schema(&json!({})).is_ok());
    assert!(
        validate_config_schema(&json!({
            "nfcPermission": null,
            "includeNdefEntitlement": null,
            "selectIdentifiers": null,
            "systemCodes": null,
            "intentFilters": null
        }))
        .is_ok()
    );
}

#[test]
fn permission_accepts_string_and_bool() {
    for v in [json!("Scan tags"), json!(true), json!(false), json!("")] {
        assert!(validate_config_schema(&json!({ "nfcPermission": v })).is_ok());
    }
    assert!(validate_config_schema(&json!({ "nfcPermission": 3 })).is_err());
}

#[test]
fn unknown_top_level_key_is_rejected() {
    let errors = validate_config_schema(&json!({ "nfcPermisson": "typo" })).unwrap_err();
    assert!(!errors.is_empty());
}

#[test]
fn intent_filter_requires_non_empty_action() {
    assert!(validate_config_schema(&json!({ "intentFilters": [{}] })).is_err());
    assert!(validate_config_schema(&json!({ "intentFilters": [{ "action": "" }] })).is_err());
    assert!(
        validate_config_schema(&json!({
            "intentFilters": [{ "action": "NDEF_DISCOVERED", "data": [{ "scheme": "https" }, null], "category": [null, "DEFAULT"] }]
        }))
        .is_ok()
    );
}

#[test]
fn non_string_identifiers_are_rejected() {
    assert!(validate_config_schema(&json!({ "selectIdentifiers": ["A000", 7] })).is_err());
}

#[test]
fn bundled_schema_is_valid_json() -> Result<()> {
    let schema: Value = serde_json::from_str(nfcmod_io::config_schema::config_schema_json())?;
    assert_eq!(schema["type"], "object");
    Ok(())
}
