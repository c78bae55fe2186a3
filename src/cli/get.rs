//! Get command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use super::show::load_config;

#[derive(Args)]
pub struct GetArgs {
    /// Field to print, as section.field
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Config files to merge before the lookup
    #[arg(short = 'c', long = "config", value_name = "FILE", required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: GetArgs) -> Result<()> {
    let config = load_config(&args.files)?;
    let value = config.get(&args.path).with_context(|| format!("No value at {}", args.path))?;
    println!("{value}");
    Ok(())
}
