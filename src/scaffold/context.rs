//! The render context: every computed substitution variable for one run
//!
//! Built once by the field model builder and handed to the renderer as an
//! immutable value; no state accumulates across rendering steps.

use crate::error::ScaffoldError;
use crate::scaffold::field::FieldSpec;
use crate::scaffold::markup;
use crate::scaffold::naming::CrudNames;
use crate::stubs::{Delimiter, StubSet};

/// Variable names eligible for computed-placeholder substitution
///
/// This is the allow-list: a name outside it is never substituted by the
/// computed pass, whatever the index variable list requests.
pub const VARS: &[&str] = &[
    "formFieldsHtml",
    "modelFieldsDefaultHtml",
    "postFieldsHtml",
    "tableColumnsHtml",
    "tableRowHtml",
    "resetHtml",
    "formHeadingHtml",
    "formBodyHtml",
    "formBodyHtmlForShowView",
    "varName",
    "crudName",
    "crudNameCap",
    "crudNameSingular",
    "primaryKey",
    "modelName",
    "modelNameCap",
    "vueName",
    "routePrefix",
    "routePrefixCap",
    "routeGroup",
    "vueTemplateDir",
];

/// Variables attempted against the index stub when no override is configured
///
/// Order is significant: aggregates first, simple names after, so an
/// aggregate value is never clipped by an earlier simple-name substitution.
pub const DEFAULT_INDEX_VARS: &[&str] = &[
    "formFieldsHtml",
    "formHeadingHtml",
    "resetHtml",
    "modelFieldsDefaultHtml",
    "postFieldsHtml",
    "formBodyHtml",
    "formBodyHtmlForShowView",
    "crudName",
    "crudNameCap",
    "tableRowHtml",
    "tableColumnsHtml",
    "modelNameCap",
    "modelName",
    "vueName",
    "routeGroup",
    "primaryKey",
];

/// All computed string variables for one generation run
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Derived naming set
    pub names: CrudNames,
    /// Wrapped markup for every field, concatenated
    pub form_fields_html: String,
    /// `name: ''` (or `name: {}` for raw type `object`) per field, comma-joined
    pub model_fields_default_html: String,
    /// `<model>: this.<model>.<field>` per field, comma-joined
    pub post_fields_html: String,
    /// `<th>field</th>` per field
    pub table_columns_html: String,
    /// `<td>{{<model>.<field>}}</td>` per field
    pub table_row_html: String,
    /// `this.<model>.<field> = '';` per field
    pub reset_html: String,
    /// `<th>Label</th>` for the visible columns
    pub form_heading_html: String,
    /// `<td>{{ item.<field> }}</td>` for the visible columns
    pub form_body_html: String,
    /// `<tr><th> Label </th><td> {{ <singular>.<field> }} </td></tr>` for the visible columns
    pub form_body_html_for_show_view: String,
}

impl RenderContext {
    /// Build the context from the parsed fields
    ///
    /// `visible_columns` caps the heading/body/show aggregates; the
    /// table-wide aggregates always cover every field.
    ///
    /// # Errors
    ///
    /// Propagates markup-generation errors ([`ScaffoldError::UnknownFieldType`],
    /// [`ScaffoldError::MissingOptions`], stub resolution failures).
    pub fn build(
        names: CrudNames,
        fields: &[FieldSpec],
        stubs: &StubSet,
        delimiter: &Delimiter,
        localize: bool,
        visible_columns: usize,
    ) -> Result<Self, ScaffoldError> {
        let model = &names.model_name;

        let model_fields_default_html = fields
            .iter()
            .map(|f| {
                let default = if f.type_name == "object" { "{}" } else { "''" };
                format!("{}: {default}", f.name)
            })
            .collect::<Vec<_>>()
            .join(",");

        let post_fields_html = fields
            .iter()
            .map(|f| format!("{model}: this.{model}.{}", f.name))
            .collect::<Vec<_>>()
            .join(",");

        let mut table_columns_html = String::new();
        let mut table_row_html = String::new();
        let mut reset_html = String::new();
        for field in fields {
            table_columns_html.push_str(&format!("<th>{}</th>", field.name));
            table_row_html.push_str(&format!("<td>{{{{{model}.{}}}}}</td>", field.name));
            reset_html.push_str(&format!("this.{model}.{} = '';", field.name));
        }

        let mut form_fields_html = String::new();
        for field in fields {
            form_fields_html.push_str(&markup::field_markup(
                field, &names, stubs, delimiter, localize,
            )?);
        }

        let mut form_heading_html = String::new();
        let mut form_body_html = String::new();
        let mut form_body_html_for_show_view = String::new();
        for field in fields.iter().take(visible_columns) {
            let label = markup::heading_label(&field.name, &names, localize);
            form_heading_html.push_str(&format!("<th>{label}</th>"));
            form_body_html.push_str(&format!("<td>{{{{ item.{} }}}}</td>", field.name));
            form_body_html_for_show_view.push_str(&format!(
                "<tr><th> {label} </th><td> {{{{ {}.{} }}}} </td></tr>",
                names.crud_name_singular, field.name
            ));
        }

        tracing::debug!(
            fields = fields.len(),
            visible = visible_columns.min(fields.len()),
            "render context built"
        );

        Ok(Self {
            names,
            form_fields_html,
            model_fields_default_html,
            post_fields_html,
            table_columns_html,
            table_row_html,
            reset_html,
            form_heading_html,
            form_body_html,
            form_body_html_for_show_view,
        })
    }

    /// Look up a variable by its placeholder name
    ///
    /// Returns `None` for names outside [`VARS`]; callers must leave those
    /// placeholders untouched.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        let value = match name {
            "formFieldsHtml" => &self.form_fields_html,
            "modelFieldsDefaultHtml" => &self.model_fields_default_html,
            "postFieldsHtml" => &self.post_fields_html,
            "tableColumnsHtml" => &self.table_columns_html,
            "tableRowHtml" => &self.table_row_html,
            "resetHtml" => &self.reset_html,
            "formHeadingHtml" => &self.form_heading_html,
            "formBodyHtml" => &self.form_body_html,
            "formBodyHtmlForShowView" => &self.form_body_html_for_show_view,
            "varName" => &self.names.var_name,
            "crudName" => &self.names.crud_name,
            "crudNameCap" => &self.names.crud_name_cap,
            "crudNameSingular" => &self.names.crud_name_singular,
            "primaryKey" => &self.names.primary_key,
            "modelName" => &self.names.model_name,
            "modelNameCap" => &self.names.model_name_cap,
            "vueName" => &self.names.vue_name,
            "routePrefix" => &self.names.route_prefix,
            "routePrefixCap" => &self.names.route_prefix_cap,
            "routeGroup" => &self.names.route_group,
            "vueTemplateDir" => &self.names.vue_template_dir,
            _ => return None,
        };
        Some(value.as_str())
    }
}
