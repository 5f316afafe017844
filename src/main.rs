//! Sift CLI - refactoring candidate triage.

use std::io::{stdout, Write};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use sift::analyzers::candidates::Analyzer;
use sift::cli::Cli;
use sift::config::Config;
use sift::output;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let mut out = stdout().lock();
    match run(&cli, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = writeln!(out, "Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run<W: Write>(cli: &Cli, out: &mut W) -> sift::core::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default(&cli.dir)?,
    };

    let report = sift::report::load(cli.dir.join(&config.report))?;

    output::write_header(&config.display_namespace(), out)?;
    let analysis = Analyzer::from_config(&config).analyze(&report)?;
    output::write_analysis(&analysis, out)?;
    out.flush()?;
    Ok(())
}
