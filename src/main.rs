//! autopush - stage, commit and push in one step
//!
//! CLI binary. Takes no arguments.

use anstream::eprintln;
use anyhow::{Context, Result};
use autopush::RunConfig;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::{CliProgress, Stylize};

#[derive(Parser)]
#[command(name = "autopush")]
#[command(about = "Stage everything, commit with a fixed message and push to origin/main")]
#[command(version)]
struct Cli {}

fn main() -> ExitCode {
    let Cli {} = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    let code = match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}: {e:#}", "error".error());
            ExitCode::FAILURE
        }
    };

    cli::pause();
    code
}

/// Run the sequence and print the summary.
///
/// Git's exit codes never make this fail; only a missing or unenterable
/// working directory does.
fn run() -> Result<()> {
    let report = autopush::run(&RunConfig::default(), &CliProgress)
        .context("could not prepare the working directory")?;

    cli::print_summary(&report);
    Ok(())
}
