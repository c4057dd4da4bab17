//! Field specification parsing and the input-kind lookup table
//!
//! A field specification string encodes one form field per `;`-separated
//! segment, with `#` separating the segment's positional parts:
//!
//! ```text
//! name#type[#options]
//! ```
//!
//! # Supported Field Types
//!
//! | Column types | Input kind |
//! |---|---|
//! | `string`, `char`, `varchar` | text |
//! | `text`, `mediumtext`, `longtext`, `json`, `jsonb`, `binary` | textarea |
//! | `password` | password |
//! | `email` | email |
//! | `number`, `integer`, `bigint`, `mediumint`, `tinyint`, `smallint`, `decimal`, `double`, `float` | number |
//! | `date` | date |
//! | `datetime`, `timestamp` | datetime-local |
//! | `time` | time |
//! | `boolean` | radio (yes/no) |
//! | `enum`, `select` | select (options required) |
//! | `file` | file |
//!
//! # Examples
//!
//! ```text
//! title#string                     → required-checked text input
//! body#text                        → textarea
//! status#enum#Active,Inactive      → select with two options
//! published_at#datetime            → datetime-local input
//! ```

use std::fmt;

use crate::error::ScaffoldError;

/// One parsed form field
///
/// Immutable once parsed. The type is kept as the raw column-type string;
/// resolution to an [`InputKind`] happens at markup-generation time so that
/// aggregate strings (which only need the name and raw type) can be derived
/// even for types outside the lookup table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name (e.g. `title`, `published_at`)
    pub name: String,
    /// Raw column type name (e.g. `string`, `enum`)
    pub type_name: String,
    /// Whether the field name appears in the validation-rule string
    pub required: bool,
    /// Raw options list for select/enum fields (e.g. `Active,Inactive`)
    pub options: Option<String>,
}

impl FieldSpec {
    /// Parse a full field-specification string
    ///
    /// An empty input yields an empty list; this is not an error.
    ///
    /// Required-ness is detected by scanning `validations` for the field
    /// name as a substring, so a field named `name` also matches a rule
    /// written for `username`. Key rules to exact field names to avoid
    /// false positives.
    ///
    /// # Examples
    ///
    /// ```
    /// # use crud_vue::scaffold::field::FieldSpec;
    /// let fields = FieldSpec::parse_list("title#string;status#enum#A,B", "title").unwrap();
    /// assert_eq!(fields.len(), 2);
    /// assert!(fields[0].required);
    /// assert!(!fields[1].required);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MalformedFieldSpec`] if any segment lacks a
    /// type part.
    pub fn parse_list(fields: &str, validations: &str) -> Result<Vec<Self>, ScaffoldError> {
        if fields.is_empty() {
            return Ok(Vec::new());
        }

        fields
            .split(';')
            .map(|segment| Self::parse(segment, validations))
            .collect()
    }

    /// Parse a single `name#type[#options]` segment
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MalformedFieldSpec`] if the segment has no
    /// name or no type part.
    pub fn parse(segment: &str, validations: &str) -> Result<Self, ScaffoldError> {
        let mut parts = segment.split('#');

        let name = parts.next().unwrap_or_default().trim().to_string();
        let type_name = parts
            .next()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(ToString::to_string);

        let (name, type_name) = match (name.is_empty(), type_name) {
            (false, Some(type_name)) => (name, type_name),
            _ => {
                return Err(ScaffoldError::MalformedFieldSpec {
                    segment: segment.to_string(),
                });
            }
        };

        let options = parts
            .next()
            .map(str::trim)
            .filter(|o| !o.is_empty())
            .map(ToString::to_string);

        // Substring match: `name` also matches a rule for `username`.
        let required = validations.contains(&name);

        Ok(Self {
            name,
            type_name,
            required,
            options,
        })
    }

    /// Resolve this field's raw type name through the lookup table
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownFieldType`] naming the field and its
    /// type if the type has no entry in the table.
    pub fn input_kind(&self) -> Result<InputKind, ScaffoldError> {
        InputKind::from_column_type(&self.type_name).ok_or_else(|| {
            ScaffoldError::UnknownFieldType {
                field: self.name.clone(),
                type_name: self.type_name.clone(),
            }
        })
    }
}

/// UI input category a column type maps to
///
/// A closed enumeration: the mapping from column types is exhaustive, and a
/// name outside it is an explicit error rather than a lookup fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    /// Plain text input
    Text,
    /// Multi-line textarea
    Textarea,
    /// Masked password input
    Password,
    /// Email input
    Email,
    /// Numeric input
    Number,
    /// Date picker
    Date,
    /// Date + time picker
    DatetimeLocal,
    /// Time picker
    Time,
    /// Yes/no radio group
    Radio,
    /// Select with a fixed options list
    Select,
    /// File upload input
    File,
}

impl InputKind {
    /// Map a semantic column type name to its input kind
    ///
    /// Returns `None` for names outside the table.
    #[must_use]
    pub fn from_column_type(type_name: &str) -> Option<Self> {
        match type_name {
            "string" | "char" | "varchar" => Some(Self::Text),
            "text" | "mediumtext" | "longtext" | "json" | "jsonb" | "binary" => {
                Some(Self::Textarea)
            }
            "password" => Some(Self::Password),
            "email" => Some(Self::Email),
            "number" | "integer" | "bigint" | "mediumint" | "tinyint" | "smallint"
            | "decimal" | "double" | "float" => Some(Self::Number),
            "date" => Some(Self::Date),
            "datetime" | "timestamp" => Some(Self::DatetimeLocal),
            "time" => Some(Self::Time),
            "boolean" => Some(Self::Radio),
            "enum" | "select" => Some(Self::Select),
            "file" => Some(Self::File),
            _ => None,
        }
    }

    /// The HTML `type` attribute value for this kind
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Textarea => "textarea",
            Self::Password => "password",
            Self::Email => "email",
            Self::Number => "number",
            Self::Date => "date",
            Self::DatetimeLocal => "datetime-local",
            Self::Time => "time",
            Self::Radio => "radio",
            Self::Select => "select",
            Self::File => "file",
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_attr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_field() {
        let field = FieldSpec::parse("title#string", "").unwrap();
        assert_eq!(field.name, "title");
        assert_eq!(field.type_name, "string");
        assert!(!field.required);
        assert_eq!(field.options, None);
    }

    #[test]
    fn test_parse_trims_parts() {
        let field = FieldSpec::parse(" title # string ", "").unwrap();
        assert_eq!(field.name, "title");
        assert_eq!(field.type_name, "string");
    }

    #[test]
    fn test_parse_with_options() {
        let field = FieldSpec::parse("status#enum#Active,Inactive", "").unwrap();
        assert_eq!(field.options.as_deref(), Some("Active,Inactive"));
    }

    #[test]
    fn test_required_from_validations() {
        let field = FieldSpec::parse("title#string", "title").unwrap();
        assert!(field.required);

        let field = FieldSpec::parse("title#string", "status").unwrap();
        assert!(!field.required);
    }

    #[test]
    fn test_required_matches_substring() {
        // Known looseness of the matching rule: `name` is a substring of
        // `username`, so the rule below marks both required.
        let field = FieldSpec::parse("name#string", "username").unwrap();
        assert!(field.required);
    }

    #[test]
    fn test_parse_list_counts_segments() {
        let fields =
            FieldSpec::parse_list("title#string;body#text;status#enum#A,B", "").unwrap();
        assert_eq!(fields.len(), 3);
    }

    #[test]
    fn test_parse_list_empty_input() {
        let fields = FieldSpec::parse_list("", "title").unwrap();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_parse_missing_type() {
        let err = FieldSpec::parse("title", "").unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::MalformedFieldSpec { ref segment } if segment == "title"
        ));

        assert!(FieldSpec::parse("title#", "").is_err());
        assert!(FieldSpec::parse("#string", "").is_err());
        assert!(FieldSpec::parse("", "").is_err());
    }

    #[test]
    fn test_input_kind_lookup() {
        let cases = [
            ("string", InputKind::Text),
            ("varchar", InputKind::Text),
            ("longtext", InputKind::Textarea),
            ("jsonb", InputKind::Textarea),
            ("password", InputKind::Password),
            ("email", InputKind::Email),
            ("decimal", InputKind::Number),
            ("tinyint", InputKind::Number),
            ("date", InputKind::Date),
            ("timestamp", InputKind::DatetimeLocal),
            ("time", InputKind::Time),
            ("boolean", InputKind::Radio),
            ("enum", InputKind::Select),
            ("select", InputKind::Select),
            ("file", InputKind::File),
        ];

        for (type_name, expected) in cases {
            assert_eq!(InputKind::from_column_type(type_name), Some(expected));
        }
    }

    #[test]
    fn test_unknown_type_is_explicit_error() {
        let field = FieldSpec::parse("payload#object", "").unwrap();
        let err = field.input_kind().unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::UnknownFieldType { ref field, ref type_name }
                if field == "payload" && type_name == "object"
        ));
    }

    #[test]
    fn test_attr_values() {
        assert_eq!(InputKind::DatetimeLocal.as_attr(), "datetime-local");
        assert_eq!(InputKind::Text.to_string(), "text");
    }
}
