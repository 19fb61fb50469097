//! depreview - changed dependency detector CLI tool
//!
//! Reports dependencies changed between two revisions:
//! - Go (go.mod, go.sum)
//! - Rust (Cargo.toml, Cargo.lock)
//!
//! Results go to stdout and, inside GitHub Actions, to the output and step
//! summary files.

use clap::Parser;
use depreview::cli::CliArgs;
use depreview::detector::detect;
use depreview::domain::EcosystemReport;
use depreview::force::resolve_forced;
use depreview::output::create_formatter;
use depreview::vcs::GitRepository;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = CliArgs::parse();

    init_logging(&args);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout carries the report
fn init_logging(args: &CliArgs) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Main application logic
fn run(args: CliArgs) -> anyhow::Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    let report = build_report(&args)?;

    args.github_output().publish(&report)?;

    let formatter = create_formatter(args.output_config());
    let mut stdout = io::stdout().lock();
    formatter.format(&report, &mut stdout)?;
    stdout.flush()?;

    Ok(())
}

fn build_report(args: &CliArgs) -> anyhow::Result<EcosystemReport> {
    if let Some(dependencies) = args.forced_dependencies() {
        info!(dependencies, "force mode: dependencies provided explicitly");
        return Ok(resolve_forced(
            dependencies,
            args.explicit_ecosystem(),
            &args.path,
        )?);
    }

    info!(path = %args.path.display(), "auto-detect mode");
    let ctx = args.detection_context()?;
    let repo = GitRepository::discover(&ctx.root)?;
    Ok(detect(&ctx, &repo)?)
}
