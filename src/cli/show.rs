//! Show command implementation

use anyhow::{Context, Result};
use clap::Args;
use funconf::Config;
use std::path::PathBuf;

use super::utils::parse_assignment;

#[derive(Args)]
pub struct ShowArgs {
    /// Config files; later files override earlier ones, missing files are skipped
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Override an existing field, coerced to its current type
    #[arg(
        short = 's',
        long = "set",
        value_name = "SECTION.FIELD=VALUE",
        value_parser = parse_assignment
    )]
    pub overrides: Vec<(String, String)>,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let mut config = load_config(&args.files)?;
    for (path, text) in &args.overrides {
        config
            .assign_str(path, text)
            .with_context(|| format!("Failed applying override {path}={text}"))?;
    }
    print!("{}", config.to_yaml()?);
    Ok(())
}

/// Merge the given files, warning when none of them exist.
pub(super) fn load_config(files: &[PathBuf]) -> Result<Config> {
    let mut config = Config::new();
    let read = config.read(files).context("Failed loading config files")?;
    if read.is_empty() {
        tracing::warn!("None of the {} config files could be read", files.len());
    }
    tracing::debug!("Read {} of {} config files", read.len(), files.len());
    Ok(config)
}
