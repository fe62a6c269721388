#![deny(missing_docs)]

//! # Scaffold CLI
//!
//! Command Line Interface for resolving resource template values.
//!
//! Supported Commands:
//! - `values`: Resolves and prints the template values for one resource.
//! - `models`: Lists schema models and their primary-key validation types.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::CliResult;

mod error;
mod models;
mod project;
mod values;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Scaffold template value resolver")]
struct Cli {
    /// Log resolution steps at debug level.
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Resolve the template values for a resource and print them as JSON.
    Values(values::ValuesArgs),
    /// List schema models with their primary-key types.
    Models(models::ModelsArgs),
}

/// Logs go to stderr so JSON on stdout stays clean. `RUST_LOG` wins unless `--verbose`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn main() -> CliResult<()> {
    // A missing .env is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Values(args) => values::execute(args)?,
        Commands::Models(args) => models::execute(args)?,
    }

    Ok(())
}
