use serde_json::json;

use nfcmod_merge::{ConfigError, DiagnosticCode, PermissionSetting, parse_config_json_str, parse_config_value};

#[test]
fn empty_config_uses_defaults() {
    let n = parse_config_json_str("{}", true).unwrap();
    assert_eq!(n.config.permission, PermissionSetting::Default);
    assert!(n.config.include_ndef_entitlement);
    assert!(n.config.select_identifiers.is_empty());
    assert!(n.config.intent_filters.is_empty());
    assert!(n.warnings.is_empty());
}

#[test]
fn permission_gate_is_tri_state() {
    let p = |v: serde_json::Value| parse_config_value(json!({"nfcPermission": v}), true).unwrap().config.permission;

    assert_eq!(p(json!(false)), PermissionSetting::Disabled);
    assert_eq!(p(json!(true)), PermissionSetting::Default);
    assert_eq!(p(json!(null)), PermissionSetting::Default);
    assert_eq!(p(json!("")), PermissionSetting::Default);
    assert_eq!(p(json!("Tap a tag")), PermissionSetting::Custom("Tap a tag".to_string()));
}

#[test]
fn only_explicit_false_disables_ndef() {
    let n = parse_config_value(json!({"includeNdefEntitlement": false}), true).unwrap();
    assert!(!n.config.include_ndef_entitlement);
}

#[test]
fn malformed_list_is_ignored_with_warning_in_permissive_mode() {
    let n = parse_config_value(
        json!({"selectIdentifiers": "A0000002471001", "systemCodes": ["8008", 3]}),
        false,
    )
    .unwrap();

    assert!(n.config.select_identifiers.is_empty());
    assert_eq!(n.config.system_codes, vec!["8008".to_string()]);
    assert!(n.warnings.has_code(DiagnosticCode::ExpectedList));
    assert!(n.warnings.has_code(DiagnosticCode::ListEntryIgnored));
    assert_eq!(n.warnings.len(), 2);
}

#[test]
fn malformed_list_is_rejected_in_strict_mode() {
    let err = parse_config_value(json!({"selectIdentifiers": "A0000002471001"}), true).unwrap_err();
    let diags = err.diagnostics().expect("diagnostics");
    assert_eq!(diags.diagnostics[0].code, DiagnosticCode::ExpectedList);
    assert_eq!(diags.diagnostics[0].path.as_deref(), Some("selectIdentifiers"));
    assert!(err.to_string().contains("selectIdentifiers"));
}

#[test]
fn invalid_intent_filter_entries_are_reported_by_index() {
    let n = parse_config_value(
        json!({"intentFilters": [{"action": "NDEF_DISCOVERED"}, {"category": "DEFAULT"}, {"action": ""}]}),
        false,
    )
    .unwrap();

    assert_eq!(n.config.intent_filters.len(), 1);
    let paths: Vec<_> = n.warnings.iter().filter_map(|d| d.path.clone()).collect();
    assert_eq!(paths, vec!["intentFilters[1]".to_string(), "intentFilters[2].action".to_string()]);
}

#[test]
fn non_object_root_is_a_shape_error() {
    let n = parse_config_json_str("[1, 2]", false).unwrap();
    assert!(n.warnings.has_code(DiagnosticCode::ConfigNotObject));

    let err = parse_config_json_str("[1, 2]", true).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid(_)));
}

#[test]
fn invalid_json_is_distinguished() {
    let err = parse_config_json_str("{not json", false).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidJson(_)));
    assert!(err.to_string().starts_with("Invalid JSON"));
}
