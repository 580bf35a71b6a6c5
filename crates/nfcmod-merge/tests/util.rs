use std::path::Path;

use nfcmod_core::model::Document;

#[allow(dead_code)]
pub fn read_fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);

    std::fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!("failed to read fixture {} at {}: {e}", name, path.display())
    })
}

#[allow(dead_code)]
pub fn fixture_document(name: &str) -> Document {
    serde_json::from_str(&read_fixture(name))
        .unwrap_or_else(|e| panic!("fixture {name} is not a document: {e}"))
}

#[allow(dead_code)]
pub fn main_activity_filters(manifest: &Document) -> Vec<serde_json::Value> {
    manifest
        .get("manifest")
        .and_then(|m| m["application"][0]["activity"].as_array())
        .and_then(|acts| {
            acts.iter()
                .find(|a| a["$"]["android:name"] == ".MainActivity")
        })
        .and_then(|a| a.get("intent-filter"))
        .and_then(|f| f.as_array())
        .cloned()
        .unwrap_or_default()
}
