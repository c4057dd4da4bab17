//! Per-field markup generation
//!
//! Each field is rendered from a fragment stub selected by its input kind,
//! then wrapped in the label/field-group stub. All substitution goes through
//! the run's delimiter pair.

use crate::error::ScaffoldError;
use crate::scaffold::field::{FieldSpec, InputKind};
use crate::scaffold::naming::{human_label, CrudNames};
use crate::stubs::{Delimiter, StubSet};

/// Render the wrapped markup fragment for one field
///
/// # Errors
///
/// Returns [`ScaffoldError::UnknownFieldType`] for a type outside the lookup
/// table, [`ScaffoldError::MissingOptions`] for a select field without an
/// options list, and stub resolution errors from the configured [`StubSet`].
pub fn field_markup(
    field: &FieldSpec,
    names: &CrudNames,
    stubs: &StubSet,
    delimiter: &Delimiter,
    localize: bool,
) -> Result<String, ScaffoldError> {
    let kind = field.input_kind()?;

    let fragment = match kind {
        InputKind::Password => password_field(field, names, stubs, delimiter)?,
        InputKind::DatetimeLocal | InputKind::Time => {
            input_field(field, kind, names, stubs, delimiter)?
        }
        InputKind::Radio => radio_field(field, names, stubs, delimiter)?,
        InputKind::Textarea => textarea_field(field, names, stubs, delimiter)?,
        InputKind::Select => select_field(field, names, stubs, delimiter)?,
        _ => form_field(field, kind, names, stubs, delimiter)?,
    };

    wrap_field(field, names, &fragment, stubs, delimiter, localize)
}

/// Label expression injected into the field wrapper
///
/// A quoted title-case literal by default; a localization lookup scoped to
/// the crud name when localization is on.
#[must_use]
pub fn label_expr(field_name: &str, names: &CrudNames, localize: bool) -> String {
    if localize {
        format!("trans('{}.{}')", names.crud_name, field_name)
    } else {
        format!("'{}'", human_label(field_name))
    }
}

/// Label text for table headings and show-view rows
///
/// Unlike [`label_expr`] this is plain text, so the localized form carries
/// its own interpolation braces.
#[must_use]
pub fn heading_label(field_name: &str, names: &CrudNames, localize: bool) -> String {
    if localize {
        format!("{{{{ trans('{}.{}') }}}}", names.crud_name, field_name)
    } else {
        human_label(field_name)
    }
}

/// Substitutions shared by every fragment kind
fn base_substitutions(
    markup: &str,
    field: &FieldSpec,
    names: &CrudNames,
    delimiter: &Delimiter,
) -> String {
    let required = if field.required { "required" } else { "" };
    let markup = delimiter.substitute(markup, "required", required);
    let markup = delimiter.substitute(&markup, "itemName", &field.name);
    delimiter.substitute(&markup, "crudNameSingular", &names.crud_name_singular)
}

fn form_field(
    field: &FieldSpec,
    kind: InputKind,
    names: &CrudNames,
    stubs: &StubSet,
    delimiter: &Delimiter,
) -> Result<String, ScaffoldError> {
    let markup = stubs.read("form-fields/form-field.vue.stub")?;
    let markup = delimiter.substitute(&markup, "fieldType", kind.as_attr());
    Ok(base_substitutions(&markup, field, names, delimiter))
}

fn input_field(
    field: &FieldSpec,
    kind: InputKind,
    names: &CrudNames,
    stubs: &StubSet,
    delimiter: &Delimiter,
) -> Result<String, ScaffoldError> {
    let markup = stubs.read("form-fields/input-field.vue.stub")?;
    let markup = delimiter.substitute(&markup, "fieldType", kind.as_attr());
    Ok(base_substitutions(&markup, field, names, delimiter))
}

fn password_field(
    field: &FieldSpec,
    names: &CrudNames,
    stubs: &StubSet,
    delimiter: &Delimiter,
) -> Result<String, ScaffoldError> {
    let markup = stubs.read("form-fields/password-field.vue.stub")?;
    Ok(base_substitutions(&markup, field, names, delimiter))
}

fn radio_field(
    field: &FieldSpec,
    names: &CrudNames,
    stubs: &StubSet,
    delimiter: &Delimiter,
) -> Result<String, ScaffoldError> {
    let markup = stubs.read("form-fields/radio-field.vue.stub")?;
    Ok(base_substitutions(&markup, field, names, delimiter))
}

fn textarea_field(
    field: &FieldSpec,
    names: &CrudNames,
    stubs: &StubSet,
    delimiter: &Delimiter,
) -> Result<String, ScaffoldError> {
    let markup = stubs.read("form-fields/textarea-field.vue.stub")?;
    let markup = delimiter.substitute(&markup, "fieldType", InputKind::Textarea.as_attr());
    Ok(base_substitutions(&markup, field, names, delimiter))
}

fn select_field(
    field: &FieldSpec,
    names: &CrudNames,
    stubs: &StubSet,
    delimiter: &Delimiter,
) -> Result<String, ScaffoldError> {
    let options = field
        .options
        .as_deref()
        .ok_or_else(|| ScaffoldError::MissingOptions {
            field: field.name.clone(),
        })?;

    let markup = stubs.read("form-fields/select-field.vue.stub")?;
    let markup = delimiter.substitute(&markup, "options", options);
    Ok(base_substitutions(&markup, field, names, delimiter))
}

fn wrap_field(
    field: &FieldSpec,
    names: &CrudNames,
    fragment: &str,
    stubs: &StubSet,
    delimiter: &Delimiter,
    localize: bool,
) -> Result<String, ScaffoldError> {
    let wrapper = stubs.read("form-fields/wrap-field.vue.stub")?;
    let label = label_expr(&field.name, names, localize);

    let wrapper = delimiter.substitute(&wrapper, "itemName", &field.name);
    let wrapper = delimiter.substitute(&wrapper, "label", &label);
    Ok(delimiter.substitute(&wrapper, "field", fragment))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (CrudNames, StubSet, Delimiter) {
        (
            CrudNames::derive("Posts", "id", None, None),
            StubSet::new("html", None),
            Delimiter::default(),
        )
    }

    fn parse(segment: &str, validations: &str) -> FieldSpec {
        FieldSpec::parse(segment, validations).unwrap()
    }

    #[test]
    fn test_text_field_markup() {
        let (names, stubs, delim) = setup();
        let field = parse("title#string", "title");

        let markup = field_markup(&field, &names, &stubs, &delim, false).unwrap();
        assert!(markup.contains(r#"type="text""#));
        assert!(markup.contains(r#"name="title""#));
        assert!(markup.contains(r#"v-model="post.title""#));
        assert!(markup.contains("required"));
        assert!(markup.contains("{{ 'Title' }}"));
    }

    #[test]
    fn test_optional_field_drops_required_attribute() {
        let (names, stubs, delim) = setup();
        let field = parse("title#string", "");

        let markup = field_markup(&field, &names, &stubs, &delim, false).unwrap();
        assert!(!markup.contains("required"));
    }

    #[test]
    fn test_password_field_has_no_type_placeholder() {
        let (names, stubs, delim) = setup();
        let field = parse("secret#password", "");

        let markup = field_markup(&field, &names, &stubs, &delim, false).unwrap();
        assert!(markup.contains(r#"type="password""#));
        assert!(!markup.contains("%%fieldType%%"));
    }

    #[test]
    fn test_datetime_uses_input_stub() {
        let (names, stubs, delim) = setup();
        let field = parse("published_at#datetime", "");

        let markup = field_markup(&field, &names, &stubs, &delim, false).unwrap();
        assert!(markup.contains(r#"type="datetime-local""#));
        assert!(markup.contains(r#"id="published_at""#));
    }

    #[test]
    fn test_boolean_renders_yes_no_radio() {
        let (names, stubs, delim) = setup();
        let field = parse("published#boolean", "");

        let markup = field_markup(&field, &names, &stubs, &delim, false).unwrap();
        assert!(markup.contains(r#"type="radio""#));
        assert!(markup.contains("Yes"));
        assert!(markup.contains("No"));
    }

    #[test]
    fn test_textarea_markup() {
        let (names, stubs, delim) = setup();
        let field = parse("body#longtext", "body");

        let markup = field_markup(&field, &names, &stubs, &delim, false).unwrap();
        assert!(markup.contains("<textarea"));
        assert!(markup.contains("required"));
    }

    #[test]
    fn test_select_carries_options() {
        let (names, stubs, delim) = setup();
        let field = parse("status#enum#Active,Inactive", "");

        let markup = field_markup(&field, &names, &stubs, &delim, false).unwrap();
        assert!(markup.contains("<select"));
        assert!(markup.contains("Active,Inactive"));
    }

    #[test]
    fn test_select_without_options_fails() {
        let (names, stubs, delim) = setup();
        let field = parse("status#enum", "");

        let err = field_markup(&field, &names, &stubs, &delim, false).unwrap_err();
        assert!(matches!(
            err,
            ScaffoldError::MissingOptions { ref field } if field == "status"
        ));
    }

    #[test]
    fn test_label_expr_default_and_localized() {
        let names = CrudNames::derive("Posts", "id", None, None);
        assert_eq!(label_expr("last_name", &names, false), "'Last Name'");
        assert_eq!(
            label_expr("last_name", &names, true),
            "trans('posts.last_name')"
        );
    }

    #[test]
    fn test_heading_label_localized_is_interpolated() {
        let names = CrudNames::derive("Posts", "id", None, None);
        assert_eq!(heading_label("last_name", &names, false), "Last Name");
        assert_eq!(
            heading_label("last_name", &names, true),
            "{{ trans('posts.last_name') }}"
        );
    }
}
