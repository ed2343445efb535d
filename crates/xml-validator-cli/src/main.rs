//! CLI that checks the app's XML resource files exist and parse as XML
//!
//! Takes no arguments. Prints one line per file and a summary line, and
//! exits 0 only if every file was found and well-formed. Only clap's own
//! `--help`/`--version` are recognised; anything else is a usage error
//! (exit 2) and no check is run.

use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use xml_validator::Validator;

#[derive(Parser, Debug)]
#[command(name = "validate-xml", version, about)]
struct Cli {}

fn main() -> anyhow::Result<ExitCode> {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    let mut validator = Validator::default();
    log::debug!("validating {:?}", validator.files());
    let overall = validator
        .run(&mut out)
        .context("failed to write validation report")?;
    out.flush().context("failed to flush stdout")?;

    Ok(ExitCode::from(overall.exit_code()))
}
