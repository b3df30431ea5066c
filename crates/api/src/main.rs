//! `sdc` - command-line client for the Data Collector REST API
//!
//! This is a CLI tool, so `println!` and `eprintln!` are used for user-facing
//! output; diagnostics go through `tracing`.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::process::ExitCode;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use sdc_lib::{AppContext, Cli, Command};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        if let Err(e) = Cli::command().print_help() {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
        return ExitCode::SUCCESS;
    };

    match run(command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run(command: Command) -> anyhow::Result<()> {
    // A missing .env is fine; variables may come from the shell or a config file
    let dotenv = dotenvy::dotenv();

    let ctx = AppContext::startup().context("failed to initialise client")?;

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env"),
        Err(e) => tracing::debug!(error = %e, "no .env loaded"),
    }

    let output = command.execute(&ctx.client).await?;
    println!("{output}");
    Ok(())
}
