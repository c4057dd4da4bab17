//! Error types for view generation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort a view generation run
///
/// Every variant names the field or stub it originates from, so a failed run
/// always tells the caller what to fix. Generation renders fully in memory
/// and writes the output file once, so none of these leave a partially
/// substituted file behind.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// Field type has no entry in the input-kind lookup table
    #[error("unknown field type '{type_name}' for field '{field}'")]
    UnknownFieldType {
        /// Name of the field carrying the unknown type
        field: String,
        /// The unrecognized type name
        type_name: String,
    },

    /// Select/enum field declared without an options list
    #[error("select field '{field}' has no options list (expected '{field}#<type>#Opt1,Opt2')")]
    MissingOptions {
        /// Name of the offending field
        field: String,
    },

    /// Field entry is missing a required positional part
    #[error("malformed field spec '{segment}': expected 'name#type[#options]'")]
    MalformedFieldSpec {
        /// The raw `;`-separated segment that failed to parse
        segment: String,
    },

    /// Stub file in a custom stub directory could not be read
    #[error("failed to read stub '{stub}' from {}: {source}", .path.display())]
    StubRead {
        /// Stub name, e.g. `form-fields/select-field.vue.stub`
        stub: String,
        /// Path that was attempted
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Stub is absent from the embedded set and no custom directory supplies it
    #[error("stub '{stub}' not found for form helper '{form_helper}'")]
    StubNotFound {
        /// Stub name that could not be resolved
        stub: String,
        /// The form-helper identifier that was searched
        form_helper: String,
    },

    /// Rendered output could not be written to its destination
    #[error("failed to write '{stub}' output to {}: {source}", .dest.display())]
    StubCopy {
        /// Stub name the output was rendered from
        stub: String,
        /// Destination path that was unwritable
        dest: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}
