use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn fixture(file: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(file)
}

#[test]
fn validate_config_ok_exits_0() {
    let mut cmd = cargo_bin_cmd!("nfcmod");
    cmd.args(["validate-config", fixture("config.json").to_str().unwrap(), "--strict"]);

    cmd.assert().success().stdout("OK\n").stderr("");
}

#[test]
fn validate_config_permissive_warns_but_passes() {
    let mut cmd = cargo_bin_cmd!("nfcmod");
    cmd.args(["validate-config", fixture("config.malformed.json").to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout("OK\n")
        .stderr(predicate::str::contains("warning[expected_list] selectIdentifiers:"))
        .stderr(predicate::str::contains("warning[expected_bool] includeNdefEntitlement:"));
}

#[test]
fn validate_config_strict_failure_exits_2() {
    let mut cmd = cargo_bin_cmd!("nfcmod");
    cmd.args([
        "validate-config",
        fixture("config.malformed.json").to_str().unwrap(),
        "--strict",
    ]);

    cmd.assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::contains("schema:"))
        .stderr(predicate::str::contains("error[expected_list] selectIdentifiers:"));
}

#[test]
fn validate_config_invalid_json_exits_1() {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("nfcmod_invalid_config_{pid}_{nanos}.json"));
    fs::write(&path, "{ \"intentFilters\": [").unwrap();

    let mut cmd = cargo_bin_cmd!("nfcmod");
    cmd.args(["validate-config", path.to_str().unwrap()]);

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid JSON in"));

    let _ = fs::remove_file(&path);
}
