//! Stub resolution and placeholder substitution
//!
//! A stub is plain text carrying `%%name%%`-style placeholders. Substitution
//! is whole-text, case-sensitive, literal string replacement — never regex —
//! and runs in two passes: computed variables first (gated by an allow-list),
//! then user-defined `key=value` pairs (unrestricted). Values inserted by
//! either pass are not re-scanned, so substitution cannot recurse.

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use crate::error::ScaffoldError;

pub mod assets;

/// Form-helper identifier of the embedded stub set
pub const DEFAULT_FORM_HELPER: &str = "html";

/// Placeholder boundary markers
///
/// Configurable per run, fixed for its duration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiter {
    /// Marker preceding the placeholder name
    pub start: String,
    /// Marker following the placeholder name
    pub end: String,
}

impl Default for Delimiter {
    fn default() -> Self {
        Self {
            start: "%%".to_string(),
            end: "%%".to_string(),
        }
    }
}

impl Delimiter {
    /// Create a delimiter pair
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// The full placeholder marker for a variable name
    ///
    /// ```
    /// # use crud_vue::stubs::Delimiter;
    /// assert_eq!(Delimiter::default().wrap("crudName"), "%%crudName%%");
    /// ```
    #[must_use]
    pub fn wrap(&self, name: &str) -> String {
        format!("{}{}{}", self.start, name, self.end)
    }

    /// Replace every occurrence of one placeholder with a value
    #[must_use]
    pub fn substitute(&self, text: &str, name: &str, value: &str) -> String {
        text.replace(&self.wrap(name), value)
    }
}

/// Resolves stub names to stub text
///
/// A configured stub directory takes precedence: stubs are then read from
/// `<dir>/<form-helper>/<name>` and every read failure is reported with the
/// stub name and path. Without a directory, the embedded set serves the
/// `html` form helper; other helpers have no fallback.
#[derive(Debug, Clone)]
pub struct StubSet {
    form_helper: String,
    custom_dir: Option<PathBuf>,
}

impl StubSet {
    /// Create a stub set for one form helper
    pub fn new(form_helper: impl Into<String>, custom_dir: Option<PathBuf>) -> Self {
        Self {
            form_helper: form_helper.into(),
            custom_dir,
        }
    }

    /// The form-helper identifier this set resolves for
    #[must_use]
    pub fn form_helper(&self) -> &str {
        &self.form_helper
    }

    /// Read a stub by name
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::StubRead`] if a custom stub file cannot be
    /// read, or [`ScaffoldError::StubNotFound`] if no custom directory is
    /// configured and the embedded set does not carry the stub.
    pub fn read(&self, name: &str) -> Result<Cow<'static, str>, ScaffoldError> {
        if let Some(dir) = &self.custom_dir {
            let path = dir.join(&self.form_helper).join(name);
            return fs::read_to_string(&path)
                .map(Cow::Owned)
                .map_err(|source| ScaffoldError::StubRead {
                    stub: name.to_string(),
                    path,
                    source,
                });
        }

        if self.form_helper == DEFAULT_FORM_HELPER {
            if let Some(text) = assets::get(name) {
                return Ok(Cow::Borrowed(text));
            }
        }

        Err(ScaffoldError::StubNotFound {
            stub: name.to_string(),
            form_helper: self.form_helper.clone(),
        })
    }
}

/// Computed-variable pass: substitute allow-listed variables
///
/// `vars` is the list of names to attempt, in order; `lookup` is the
/// allow-list — a name it does not recognize is left untouched in the text.
pub fn apply_vars<'a, F>(text: &str, vars: &[String], delimiter: &Delimiter, lookup: F) -> String
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = text.to_string();
    for name in vars {
        if let Some(value) = lookup(name) {
            out = delimiter.substitute(&out, name, value);
        } else {
            tracing::debug!(name = name.as_str(), "variable not on allow-list, skipped");
        }
    }
    out
}

/// User-defined pass: substitute `key=value;key=value;...` pairs literally
///
/// No allow-list and no escaping; an inserted value is not re-scanned, so a
/// value that spells a computed placeholder stays literal. Entries without
/// a `=` are skipped.
#[must_use]
pub fn apply_custom_data(text: &str, custom_data: &str, delimiter: &Delimiter) -> String {
    let mut out = text.to_string();
    for pair in custom_data.split(';') {
        if pair.is_empty() {
            continue;
        }
        let Some((key, value)) = pair.split_once('=') else {
            tracing::debug!(pair, "custom-data entry without '=', skipped");
            continue;
        };
        out = out.replace(&delimiter.wrap(key), value);
    }
    out
}
