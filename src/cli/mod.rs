//! Command-line interface for funconf
//!
//! Provides `show`, `get` and `kwargs` subcommands over merged config files.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod get;
mod kwargs;
mod show;
mod utils;

/// Inspect and merge YAML configuration files
#[derive(Parser)]
#[command(name = "funconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the merged configuration as YAML
    Show(show::ShowArgs),

    /// Print a single value addressed as section.field
    Get(get::GetArgs),

    /// Print the flattened keyword arguments a wrapped function would receive
    Kwargs(kwargs::KwargsArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    match cli.command {
        Commands::Show(args) => show::run(args),
        Commands::Get(args) => get::run(args),
        Commands::Kwargs(args) => kwargs::run(args),
    }
}
