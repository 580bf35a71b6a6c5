//! Helpers for parsing `Document` JSON with improved diagnostics.
//!
//! serde's default errors are correct but do not say which document was being
//! read. These helpers keep strictness unchanged while naming the document and
//! distinguishing malformed JSON from a valid JSON value of the wrong shape.

use std::fmt;

use nfcmod_core::model::Document;
use serde_json::Value;

/// A structured error for parsing a Document JSON payload.
#[derive(Debug)]
pub enum DocumentJsonError {
    /// The input was not valid JSON.
    InvalidJson {
        document: String,
        source: serde_json::Error,
    },
    /// The input JSON was valid, but the root is not an object.
    NotAnObject { document: String, found: &'static str },
}

impl fmt::Display for DocumentJsonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentJsonError::InvalidJson { document, source } => {
                write!(f, "Invalid JSON in {document}: {source}")
            }
            DocumentJsonError::NotAnObject { document, found } => {
                write!(
                    f,
                    "Invalid {document} JSON shape: expected an object at the root, got {found}."
                )
            }
        }
    }
}

impl std::error::Error for DocumentJsonError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DocumentJsonError::InvalidJson { source, .. } => Some(source),
            DocumentJsonError::NotAnObject { .. } => None,
        }
    }
}

/// Parse a Document JSON string. `document` names it in error messages.
///
/// Empty (whitespace-only) input reads as an empty document, so a freshly
/// created file can be passed straight through.
pub fn parse_document_json_str(document: &str, s: &str) -> Result<Document, DocumentJsonError> {
    if s.trim().is_empty() {
        return Ok(Document::new());
    }

    let v: Value = serde_json::from_str(s).map_err(|source| DocumentJsonError::InvalidJson {
        document: document.to_string(),
        source,
    })?;

    match v {
        Value::Object(map) => Ok(Document::from_map(map)),
        other => Err(DocumentJsonError::NotAnObject {
            document: document.to_string(),
            found: kind(&other),
        }),
    }
}

/// Serialize a document as pretty JSON, keeping key order.
pub fn to_pretty_json(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

/// Serialize a document as minified JSON, keeping key order.
pub fn to_minified_json(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string(doc)
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
