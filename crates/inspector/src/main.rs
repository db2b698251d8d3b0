//! Print the gradient line geometry of a computed `background-image` value as JSON.

use anyhow::{Context as _, Result};
use env_logger::{Builder, Env};
use gradient_inspector::{InspectorConfig, inspect_value, render_report};
use log::error;
use std::env;
use std::io::{Write as _, stdout};
use std::process::exit;

fn run() -> Result<()> {
    let (config, value) = InspectorConfig::from_env().apply_args(env::args().skip(1))?;
    let report = inspect_value(&value, &config)?;
    let json = render_report(&report, config.pretty)?;
    let mut out = stdout().lock();
    writeln!(out, "{json}").context("writing report to stdout")?;
    Ok(())
}

fn main() {
    let _log_init: Result<(), _> = Builder::from_env(Env::default().filter_or("RUST_LOG", "warn"))
        .is_test(false)
        .try_init();
    if let Err(err) = run() {
        error!("error: {err:#}");
        exit(1);
    }
}
