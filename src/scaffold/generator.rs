//! View generator orchestrator
//!
//! Coordinates one generation run: parse the field specification, build the
//! render context, render the index stub fully in memory, then write the
//! finished view exactly once. A failure anywhere before the write leaves
//! nothing on disk.

use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::ScaffoldError;
use crate::scaffold::context::RenderContext;
use crate::scaffold::field::FieldSpec;
use crate::scaffold::naming::CrudNames;
use crate::stubs::{self, Delimiter, StubSet};

const INDEX_STUB: &str = "index.vue.stub";

/// Caller-supplied inputs for one generation run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Crud name (e.g. `Posts`)
    pub name: String,
    /// Field specification string (`name#type[#options];...`), may be empty
    pub fields: String,
    /// Validation-rule string scanned for field names, may be empty
    pub validations: String,
    /// Primary-key column name
    pub primary_key: String,
    /// Route-group prefix
    pub route_group: Option<String>,
    /// Output subdirectory override under the view root
    pub vue_path: Option<String>,
    /// Form-helper identifier selecting the stub set
    pub form_helper: String,
    /// Emit localization lookups instead of literal labels
    pub localize: bool,
    /// User-defined `key=value;...` substitutions
    pub custom_data: Option<String>,
}

/// A rendered view, not yet on disk
#[derive(Debug)]
pub struct GeneratedFile {
    /// Destination path
    pub path: PathBuf,
    /// Fully substituted file content
    pub content: String,
    /// One-line description for user feedback
    pub description: String,
}

/// Vue CRUD view generator
#[derive(Debug)]
pub struct VueGenerator {
    names: CrudNames,
    fields: Vec<FieldSpec>,
    stubs: StubSet,
    delimiter: Delimiter,
    index_vars: Vec<String>,
    view_dir: PathBuf,
    visible_columns: usize,
    vue_path: Option<String>,
    localize: bool,
    custom_data: Option<String>,
}

impl VueGenerator {
    /// Create a generator from run options and configuration
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::MalformedFieldSpec`] if the field string has
    /// a segment without a type part.
    pub fn new(options: GenerateOptions, config: &Config) -> Result<Self, ScaffoldError> {
        let names = CrudNames::derive(
            &options.name,
            &options.primary_key,
            options.route_group.as_deref(),
            options.vue_path.as_deref(),
        );
        let fields = FieldSpec::parse_list(&options.fields, &options.validations)?;

        tracing::debug!(
            crud = names.crud_name.as_str(),
            fields = fields.len(),
            form_helper = options.form_helper.as_str(),
            "generator created"
        );

        Ok(Self {
            names,
            fields,
            stubs: StubSet::new(options.form_helper, config.stubs.dir.clone()),
            delimiter: config.delimiter(),
            index_vars: config.index_vars(),
            view_dir: config.view.dir.clone(),
            visible_columns: config.view.columns,
            vue_path: options.vue_path,
            localize: options.localize,
            custom_data: options.custom_data,
        })
    }

    /// Render the view fully in memory
    ///
    /// Computed variables are substituted first (allow-listed), then the
    /// user-defined pairs; neither pass re-scans inserted values, so a
    /// custom value spelling a computed placeholder stays literal.
    ///
    /// # Errors
    ///
    /// Propagates field, markup, and stub resolution errors; nothing is
    /// written on failure.
    pub fn generate(&self) -> Result<GeneratedFile, ScaffoldError> {
        let ctx = RenderContext::build(
            self.names.clone(),
            &self.fields,
            &self.stubs,
            &self.delimiter,
            self.localize,
            self.visible_columns,
        )?;

        let stub = self.stubs.read(INDEX_STUB)?;
        let content = stubs::apply_vars(&stub, &self.index_vars, &self.delimiter, |name| {
            ctx.var(name)
        });
        let content = match &self.custom_data {
            Some(data) => stubs::apply_custom_data(&content, data, &self.delimiter),
            None => content,
        };

        let subdir = self
            .vue_path
            .clone()
            .unwrap_or_else(|| self.names.vue_name.clone());
        let path = self
            .view_dir
            .join(subdir)
            .join(format!("{}.vue", self.names.model_name_cap));

        Ok(GeneratedFile {
            path,
            content,
            description: format!("Vue CRUD view for {}", self.names.model_name_cap),
        })
    }

    /// Write a rendered view to its destination
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::StubCopy`] naming the index stub and the
    /// destination if the directory cannot be created or the file cannot be
    /// written.
    pub fn write(&self, file: &GeneratedFile) -> Result<(), ScaffoldError> {
        if let Some(parent) = file.path.parent() {
            fs::create_dir_all(parent).map_err(|source| ScaffoldError::StubCopy {
                stub: INDEX_STUB.to_string(),
                dest: file.path.clone(),
                source,
            })?;
        }

        fs::write(&file.path, &file.content).map_err(|source| ScaffoldError::StubCopy {
            stub: INDEX_STUB.to_string(),
            dest: file.path.clone(),
            source,
        })?;

        tracing::info!(path = %file.path.display(), "view written");
        Ok(())
    }

    /// Names derived for this run
    #[must_use]
    pub const fn names(&self) -> &CrudNames {
        &self.names
    }

    /// Parsed field specifications
    #[must_use]
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(fields: &str) -> GenerateOptions {
        GenerateOptions {
            name: "Posts".to_string(),
            fields: fields.to_string(),
            validations: "title".to_string(),
            primary_key: "id".to_string(),
            route_group: None,
            vue_path: None,
            form_helper: "html".to_string(),
            localize: false,
            custom_data: None,
        }
    }

    #[test]
    fn test_new_parses_fields() {
        let config = Config::default();
        let generator = VueGenerator::new(options("title#string;body#text"), &config).unwrap();
        assert_eq!(generator.fields().len(), 2);
        assert_eq!(generator.names().crud_name, "posts");
    }

    #[test]
    fn test_new_rejects_malformed_spec() {
        let config = Config::default();
        let err = VueGenerator::new(options("title"), &config).unwrap_err();
        assert!(matches!(err, ScaffoldError::MalformedFieldSpec { .. }));
    }

    #[test]
    fn test_generate_names_output_after_model() {
        let config = Config::default();
        let generator = VueGenerator::new(options("title#string"), &config).unwrap();
        let file = generator.generate().unwrap();
        assert!(file.path.ends_with("posts/Post.vue"));
    }

    #[test]
    fn test_vue_path_overrides_subdirectory() {
        let config = Config::default();
        let mut opts = options("title#string");
        opts.vue_path = Some("admin/posts".to_string());
        let generator = VueGenerator::new(opts, &config).unwrap();
        let file = generator.generate().unwrap();
        assert!(file.path.ends_with("admin/posts/Post.vue"));
    }

    #[test]
    fn test_unknown_type_aborts_before_output() {
        let config = Config::default();
        let generator = VueGenerator::new(options("payload#object"), &config).unwrap();
        let err = generator.generate().unwrap_err();
        assert!(matches!(err, ScaffoldError::UnknownFieldType { .. }));
    }

    #[test]
    fn test_generate_substitutes_index_placeholders() {
        let config = Config::default();
        let generator = VueGenerator::new(options("title#string"), &config).unwrap();
        let file = generator.generate().unwrap();
        assert!(file.content.contains("this.posts = response.data"));
        assert!(!file.content.contains("%%crudName%%"));
        assert!(!file.content.contains("%%formFieldsHtml%%"));
    }
}
