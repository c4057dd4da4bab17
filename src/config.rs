//! Configuration loading
//!
//! Settings merge from three layers, lowest precedence first: built-in
//! defaults, a `crud-vue.toml` file in the working directory, then
//! `CRUD_VUE_`-prefixed environment variables (`__` separates sections,
//! e.g. `CRUD_VUE_VIEW__COLUMNS=5`).
//!
//! ```toml
//! # crud-vue.toml
//! [view]
//! dir = "resources/js/views"
//! columns = 3
//!
//! [stubs]
//! dir = "stubs"            # custom stub root; omit to use the embedded set
//!
//! [delimiter]
//! start = "%%"
//! end = "%%"
//!
//! [template]
//! index_vars = []          # override of the index variable list
//! ```

use std::path::PathBuf;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::scaffold::context::DEFAULT_INDEX_VARS;
use crate::stubs::Delimiter;

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// View output settings
    pub view: ViewConfig,
    /// Stub resolution settings
    pub stubs: StubsConfig,
    /// Placeholder delimiter pair
    pub delimiter: DelimiterConfig,
    /// Index-template substitution settings
    pub template: TemplateConfig,
}

/// Where generated views land and how many columns stay visible
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    /// Root directory for generated views
    pub dir: PathBuf,
    /// Number of leading fields shown in the heading/body/show fragments
    pub columns: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("resources/js/views"),
            columns: 3,
        }
    }
}

/// Custom stub root override
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StubsConfig {
    /// Directory holding `<form-helper>/...` stub sets; `None` uses the
    /// embedded set
    pub dir: Option<PathBuf>,
}

/// Placeholder boundary markers
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DelimiterConfig {
    /// Marker preceding a placeholder name
    pub start: String,
    /// Marker following a placeholder name
    pub end: String,
}

impl Default for DelimiterConfig {
    fn default() -> Self {
        Self {
            start: "%%".to_string(),
            end: "%%".to_string(),
        }
    }
}

/// Index-template substitution settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Variable names attempted against the index stub; empty uses the
    /// built-in default list
    pub index_vars: Vec<String>,
}

impl Config {
    /// Configuration file looked up in the working directory
    pub const FILE_NAME: &'static str = "crud-vue.toml";

    /// Load configuration from defaults, file, and environment
    ///
    /// # Errors
    ///
    /// Returns a figment error if a layer fails to parse or a value has the
    /// wrong shape.
    pub fn load() -> Result<Self, figment::Error> {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(Self::FILE_NAME))
            .merge(Env::prefixed("CRUD_VUE_").split("__"))
            .extract()
    }

    /// The run's delimiter pair
    #[must_use]
    pub fn delimiter(&self) -> Delimiter {
        Delimiter::new(&self.delimiter.start, &self.delimiter.end)
    }

    /// The index variable list, falling back to the built-in default
    #[must_use]
    pub fn index_vars(&self) -> Vec<String> {
        if self.template.index_vars.is_empty() {
            DEFAULT_INDEX_VARS.iter().map(ToString::to_string).collect()
        } else {
            self.template.index_vars.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.view.dir, PathBuf::from("resources/js/views"));
        assert_eq!(config.view.columns, 3);
        assert!(config.stubs.dir.is_none());
        assert_eq!(config.delimiter.start, "%%");
        assert_eq!(config.delimiter.end, "%%");
    }

    #[test]
    fn test_index_vars_fallback() {
        let config = Config::default();
        let vars = config.index_vars();
        assert!(vars.iter().any(|v| v == "formFieldsHtml"));

        let mut config = config;
        config.template.index_vars = vec!["crudName".to_string()];
        assert_eq!(config.index_vars(), vec!["crudName".to_string()]);
    }

    #[test]
    fn test_file_and_env_layers() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                Config::FILE_NAME,
                r#"
                [view]
                columns = 5

                [delimiter]
                start = "[["
                end = "]]"
                "#,
            )?;
            jail.set_env("CRUD_VUE_VIEW__DIR", "frontend/views");

            let config = Config::load()?;
            assert_eq!(config.view.columns, 5);
            assert_eq!(config.view.dir, PathBuf::from("frontend/views"));
            assert_eq!(config.delimiter().wrap("x"), "[[x]]");
            Ok(())
        });
    }
}
