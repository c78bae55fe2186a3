//! Kwargs command implementation
//!
//! Wraps a catch-all function with the config's flattened keywords and calls
//! it with the given overrides, printing what the body receives.

use anyhow::{Context, Result};
use clap::Args;
use funconf::{lazy_string_cast, Args as CallArgs, Callable, Function, Signature, Value};
use std::path::PathBuf;

use super::show::load_config;
use super::utils::parse_assignment;

#[derive(Args)]
pub struct KwargsArgs {
    /// Config files; later files override earlier ones
    #[arg(value_name = "FILE", required = true)]
    pub files: Vec<PathBuf>,

    /// Keyword override passed at call time (section_field=value)
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", value_parser = parse_assignment)]
    pub overrides: Vec<(String, String)>,
}

pub fn run(args: KwargsArgs) -> Result<()> {
    let config = load_config(&args.files)?;

    let body = Function::new(Signature::new().var_kwargs("kwargs"), |bound| {
        bound.into_var_kwargs()
    });
    let wrapped = lazy_string_cast(config.kwargs(), config.wraps(body));

    let call = args
        .overrides
        .into_iter()
        .fold(CallArgs::new(), |call, (key, text)| call.kwarg(key, Value::Str(text)));
    let received = wrapped.call(call).context("Failed binding keyword overrides")?;

    for (key, value) in received {
        println!("{key}={value}");
    }
    Ok(())
}
