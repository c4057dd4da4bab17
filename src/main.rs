//! crud-vue CLI tool

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic, clippy::nursery)]

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crud_vue::commands::{GenerateCommand, StubsCommand};
use crud_vue::GenerateOptions;

#[derive(Parser)]
#[command(name = "crud-vue")]
#[command(version)]
#[command(about = "Generate Vue CRUD views from field specifications", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Vue CRUD view
    Generate {
        /// Crud name (e.g. `Posts`)
        name: String,
        /// Field specification: `name#type[#options];...`
        #[arg(long, default_value = "")]
        fields: String,
        /// Validation rules scanned for field names to mark fields required
        #[arg(long, default_value = "")]
        validations: String,
        /// Primary-key column name
        #[arg(long, default_value = "id")]
        pk: String,
        /// Route-group prefix
        #[arg(long)]
        route_group: Option<String>,
        /// Output subdirectory under the configured view root
        #[arg(long)]
        vue_path: Option<String>,
        /// Form helper selecting the stub set
        #[arg(long, default_value = "html")]
        form_helper: String,
        /// Emit localization lookups instead of literal labels
        #[arg(long, value_enum, default_value = "no")]
        localize: Localize,
        /// Extra substitutions: `key=value;key=value;...`
        #[arg(long)]
        custom_data: Option<String>,
    },
    /// Manage stub templates
    Stubs {
        #[command(subcommand)]
        command: StubsCommands,
    },
}

#[derive(Subcommand)]
enum StubsCommands {
    /// Install the embedded stub set into a directory for customization
    Init {
        /// Target stub root directory
        #[arg(long, default_value = "stubs")]
        dir: PathBuf,
        /// Overwrite an existing stub set
        #[arg(long)]
        force: bool,
    },
    /// List the stub names of the embedded set
    List,
}

#[derive(Clone, Copy, ValueEnum)]
enum Localize {
    /// Labels become localization lookups
    Yes,
    /// Labels stay literal title-case text
    No,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            name,
            fields,
            validations,
            pk,
            route_group,
            vue_path,
            form_helper,
            localize,
            custom_data,
        } => {
            let options = GenerateOptions {
                name,
                fields,
                validations,
                primary_key: pk,
                route_group,
                vue_path,
                form_helper,
                localize: matches!(localize, Localize::Yes),
                custom_data,
            };
            GenerateCommand::new(options).execute()?;
        }
        Commands::Stubs { command } => {
            let stubs_cmd = match command {
                StubsCommands::Init { dir, force } => StubsCommand::Init { dir, force },
                StubsCommands::List => StubsCommand::List,
            };
            stubs_cmd.execute()?;
        }
    }

    Ok(())
}
