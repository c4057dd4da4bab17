//! View generation command
//!
//! # Example
//!
//! ```bash
//! crud-vue generate Posts \
//!   --fields "title#string;body#text;status#enum#Draft,Published" \
//!   --validations "title" \
//!   --route-group admin
//! ```

use anyhow::{Context, Result};
use console::style;

use crate::config::Config;
use crate::scaffold::{GenerateOptions, VueGenerator};

/// Generate one Vue CRUD view from a field specification
pub struct GenerateCommand {
    options: GenerateOptions,
}

impl GenerateCommand {
    /// Create the command from parsed CLI options
    #[must_use]
    pub const fn new(options: GenerateOptions) -> Self {
        Self { options }
    }

    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading, field parsing, rendering,
    /// or the final write fails. Rendering happens fully in memory, so a
    /// failed run writes nothing.
    pub fn execute(&self) -> Result<()> {
        println!(
            "\n{} {} {}",
            style("Generating Vue view for").cyan().bold(),
            style(&self.options.name).green().bold(),
            style("...").cyan().bold()
        );

        let config = Config::load().context("Failed to load configuration")?;

        let generator = VueGenerator::new(self.options.clone(), &config)
            .context("Failed to parse field specification")?;

        let file = generator.generate().context("Failed to render view")?;
        generator.write(&file).context("Failed to write view")?;

        println!(
            "  {} {} ({})",
            style("✓").green(),
            style(file.path.display()).dim(),
            style(&file.description).dim()
        );

        println!(
            "\n{} Vue view for {} is ready!",
            style("✨").green().bold(),
            style(&generator.names().model_name_cap).green().bold()
        );

        println!("\n{}", style("Next steps:").cyan().bold());
        println!(
            "  1. Register the component: {}",
            style(format!(
                "Vue.component('{0}-index', require('./{0}/{1}.vue'));",
                generator.names().vue_name,
                generator.names().model_name_cap
            ))
            .yellow()
        );
        println!(
            "  2. Route it under: {}",
            style(format!(
                "/{}{}",
                generator.names().route_group,
                generator.names().vue_name
            ))
            .yellow()
        );

        Ok(())
    }
}
