//! Field parsing, naming, and view generation
//!
//! This module turns a compact field-specification string into a rendered
//! Vue view: fields are parsed into [`field::FieldSpec`] values, every
//! derived string lands in an immutable [`context::RenderContext`], and
//! [`generator::VueGenerator`] renders and writes the view.

pub mod context;
pub mod field;
pub mod generator;
pub mod markup;
pub mod naming;

pub use context::RenderContext;
pub use field::{FieldSpec, InputKind};
pub use generator::{GenerateOptions, GeneratedFile, VueGenerator};
pub use naming::CrudNames;
