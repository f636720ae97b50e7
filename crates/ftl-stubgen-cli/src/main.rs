//! ftl-stubgen CLI - Kotlin stubs for foreign FTL modules
//!
//! Commands:
//! - `ftl-stubgen generate` - Generate stubs for every module except the home module
//! - `ftl-stubgen check` - Decode a schema and validate it without writing anything

use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "ftl-stubgen")]
#[command(author, version, about = "Generate Kotlin stubs for foreign FTL modules", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate stubs for foreign modules
    Generate {
        /// Path to the JSON schema
        #[arg(short, long)]
        schema: PathBuf,

        /// Home module; every other module is generated
        #[arg(short, long)]
        module: String,

        /// Output directory (overrides `[output] directory` in the config file)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Path to stubgen.toml
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Fail on references to unknown declarations
        #[arg(long)]
        validate_references: bool,

        /// Log level or filter directive (default: RUST_LOG, then info)
        #[arg(long)]
        log_level: Option<String>,
    },

    /// Validate a schema without writing anything
    Check {
        /// Path to the JSON schema
        #[arg(short, long)]
        schema: PathBuf,

        /// Home module (default: none, every module is checked)
        #[arg(short, long)]
        module: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            schema,
            module,
            output,
            config,
            validate_references,
            log_level,
        } => {
            logging::init_logging(log_level.as_deref())?;
            generate::run(generate::GenerateArgs {
                schema,
                module,
                output,
                config,
                validate_references,
            })?;
        }
        Commands::Check { schema, module } => {
            logging::init_logging(None)?;
            generate::check(&schema, module.as_deref())?;
        }
    }

    Ok(())
}
