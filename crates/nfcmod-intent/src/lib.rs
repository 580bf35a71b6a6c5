#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of nfcmod.

Do NOT depend on this crate directly.
Use `nfcmod-io` instead.
"#]

pub mod schema;
pub mod entry;
pub mod render;

pub use entry::FilterEntry;
pub use schema::{ActionNamespace, DataSpec, IntentFilter, IntentFilterInput, OneOrMany};
