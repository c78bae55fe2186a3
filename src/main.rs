//! funconf: inspect and merge YAML configuration files

use anyhow::Result;

mod cli;

fn main() -> Result<()> {
    cli::run()
}
