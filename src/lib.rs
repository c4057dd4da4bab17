//! Generate Vue CRUD views from compact field specifications
//!
//! `crud-vue` turns a field-specification string like
//! `title#string;status#enum#Active,Inactive` into a single Vue view file
//! (a form + table component) by substituting `%%name%%`-style placeholders
//! in stub templates. Stubs ship embedded in the binary and can be exported
//! and customized with `crud-vue stubs init`.
//!
//! The pipeline is single-pass and synchronous: parse fields → derive the
//! render context → render per-field markup → substitute the index stub →
//! write the view once. Substitution is literal string replacement, gated by
//! an allow-list for computed variables and unrestricted for user-supplied
//! `key=value` pairs; inserted values are never re-scanned.

pub mod commands;
pub mod config;
pub mod error;
pub mod scaffold;
pub mod stubs;

pub use config::Config;
pub use error::ScaffoldError;
pub use scaffold::{GenerateOptions, GeneratedFile, VueGenerator};
