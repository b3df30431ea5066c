//! Development automation tasks for the SDC client workspace.
//!
//! Run with: `cargo xtask <command>`
//!
//! This is a CLI tool for developers, so `println!` and `eprintln!` are
//! used for user-facing output rather than structured logging.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::env;
use std::process::{Command, ExitCode};

use anyhow::Context;

fn main() -> ExitCode {
    let task = env::args().nth(1);

    let result = match task.as_deref() {
        Some("ci") => run_ci(),
        Some("fmt") => run_fmt(),
        Some("clippy") => run_clippy(),
        Some("check-bin") => check_bin(),
        Some("test") => run_test(),
        Some("deny") => run_deny(),
        Some("audit") => run_audit(),
        Some("help") | None => {
            print_help();
            Ok(())
        }
        Some(unknown) => {
            eprintln!("Unknown task: {unknown}");
            eprintln!();
            print_help();
            Err(anyhow::anyhow!("Unknown task"))
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Task failed: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn print_help() {
    println!("SDC Client Development Tasks");
    println!();
    println!("USAGE:");
    println!("    cargo xtask <TASK>");
    println!();
    println!("TASKS:");
    println!("    ci         Run all CI checks (fmt, clippy, check-bin, test, deny, audit)");
    println!("    fmt        Check Rust code formatting");
    println!("    clippy     Run Clippy lints");
    println!("    check-bin  Verify the sdc binary (sdc-app) compiles");
    println!("    test       Run all tests");
    println!("    deny       Check dependencies with cargo-deny");
    println!("    audit      Audit dependencies for security vulnerabilities");
    println!("    help       Show this help message");
}

/// Run all CI checks in sequence
fn run_ci() -> anyhow::Result<()> {
    let steps: [(&str, fn() -> anyhow::Result<()>); 6] = [
        ("Checking Rust format", run_fmt),
        ("Running Clippy", run_clippy),
        ("Verifying sdc binary", check_bin),
        ("Running tests", run_test),
        ("Checking dependencies", run_deny),
        ("Auditing dependencies", run_audit),
    ];

    println!("==> Running CI checks...");
    for (index, (label, step)) in steps.iter().enumerate() {
        println!("\n==> Step {}/{}: {label}...", index + 1, steps.len());
        step()?;
    }

    println!("\n✓ All CI checks passed!");
    Ok(())
}

fn run_fmt() -> anyhow::Result<()> {
    cargo(&["fmt", "--all", "--", "--check"], "Format check failed. Run 'cargo fmt --all' to fix.")
}

fn run_clippy() -> anyhow::Result<()> {
    cargo(&["clippy", "--workspace", "--all-targets"], "Clippy run failed. See output above.")
}

fn check_bin() -> anyhow::Result<()> {
    cargo(&["check", "-p", "sdc-app", "--bin", "sdc"], "sdc-app check failed")?;
    println!("✓ sdc compiles successfully");
    Ok(())
}

fn run_test() -> anyhow::Result<()> {
    cargo(&["test", "--workspace"], "Tests failed")
}

fn run_deny() -> anyhow::Result<()> {
    require_cargo_tool("deny", "cargo-deny")?;
    cargo(&["deny", "check"], "cargo-deny found issues")
}

fn run_audit() -> anyhow::Result<()> {
    require_cargo_tool("audit", "cargo-audit")?;
    cargo(&["audit"], "cargo-audit found vulnerabilities")
}

/// Run `cargo <args>` and fail with `failure` on a non-zero exit
fn cargo(args: &[&str], failure: &str) -> anyhow::Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .status()
        .with_context(|| format!("Failed to run cargo {}", args.join(" ")))?;

    if !status.success() {
        anyhow::bail!("{failure}");
    }

    Ok(())
}

/// Bail with install instructions if `cargo <subcommand>` is unavailable
fn require_cargo_tool(subcommand: &str, package: &str) -> anyhow::Result<()> {
    let installed = Command::new("cargo")
        .args([subcommand, "--version"])
        .output()
        .is_ok_and(|output| output.status.success());

    if !installed {
        eprintln!("{package} is not installed.");
        eprintln!("Install it with: cargo install {package}");
        anyhow::bail!("{package} not found");
    }

    Ok(())
}
