//! Stub set management commands
//!
//! `stubs init` writes the embedded stub set out to a directory so its files
//! can be customized; pointing `[stubs] dir` at that directory makes the
//! generator read them instead of the embedded set.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::stubs::{assets, DEFAULT_FORM_HELPER};

/// Stub management subcommands
pub enum StubsCommand {
    /// Install the embedded stub set into a directory
    Init {
        /// Target stub root; the set lands under `<dir>/html/`
        dir: PathBuf,
        /// Overwrite an existing installation
        force: bool,
    },
    /// Print the stub names of the embedded set
    List,
}

impl StubsCommand {
    /// Execute the command
    ///
    /// # Errors
    ///
    /// Returns an error if the target directory already holds a stub set
    /// (without `--force`) or a file cannot be written.
    pub fn execute(&self) -> Result<()> {
        match self {
            Self::Init { dir, force } => Self::init(dir, *force),
            Self::List => {
                Self::list();
                Ok(())
            }
        }
    }

    fn init(dir: &Path, force: bool) -> Result<()> {
        let helper_dir = dir.join(DEFAULT_FORM_HELPER);

        if helper_dir.exists() && !force {
            anyhow::bail!(
                "Stub set already exists at {}. Re-run with --force to overwrite.",
                helper_dir.display()
            );
        }

        println!(
            "{} {} {}",
            style("Installing").green().bold(),
            style("stub set to:").bold(),
            style(helper_dir.display()).cyan().bold()
        );
        println!();

        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .context("Failed to set progress style")?,
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));
        spinner.set_message("Writing stub files...");

        for name in assets::STUB_NAMES {
            let content = assets::get(name)
                .with_context(|| format!("Embedded stub missing: {name}"))?;

            let path = helper_dir.join(name);
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(&path, content)
                .with_context(|| format!("Failed to write stub: {}", path.display()))?;

            spinner.suspend(|| println!("  {} {name}", style("✓").green()));
        }

        spinner.finish_and_clear();

        println!();
        println!("{}", style("✓ Stub set installed!").green().bold());
        println!();
        println!("{}", style("Next steps:").bold());
        println!(
            "  Point {} at it:",
            style(Config::FILE_NAME).cyan()
        );
        println!();
        println!("    {}", style("[stubs]").dim());
        println!(
            "    {}",
            style(format!("dir = \"{}\"", dir.display())).dim()
        );

        Ok(())
    }

    fn list() {
        println!(
            "{} ({}):",
            style("Embedded stubs").bold(),
            style(DEFAULT_FORM_HELPER).cyan()
        );
        for name in assets::STUB_NAMES {
            println!("  {name}");
        }
    }
}
