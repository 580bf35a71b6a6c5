#![doc = r#"
⚠️ INTERNAL CRATE – NOT A STABLE API

This crate is an internal implementation detail of nfcmod.

Do NOT depend on this crate directly.
Use `nfcmod-io` instead.
"#]

pub mod model;
pub mod element;
pub mod canonical;
pub mod hash;
