use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use todo_sync::{cli, config, gitlab, sync};

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let cli = cli::Cli::parse();

    let config = config::load_config().context("Failed to load configuration")?;

    if cli.dry_run {
        sync::run_dry(&cli.path, &config, cli.verbose)?;
        return Ok(ExitCode::SUCCESS);
    }

    let gateway = gitlab::GitLabClient::new(&config);
    let outcome = sync::run(&cli.path, &config, &gateway, cli.verbose)?;

    if !outcome.failures.is_empty() {
        eprintln!("{} tracker operation(s) failed:", outcome.failures.len());
        for failure in &outcome.failures {
            eprintln!("  {failure}");
        }
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
