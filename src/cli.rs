//! CLI argument parsing module for depreview
//!
//! Every option can also be supplied through the environment variable the
//! GitHub Actions runtime sets for it. Unused action inputs arrive as empty
//! strings, so empty values are treated as not provided.

use crate::config::DetectionContext;
use crate::error::ConfigError;
use crate::output::{GithubOutput, OutputConfig, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

/// Changed dependency detector for Go and Rust projects
#[derive(Parser, Debug, Clone)]
#[command(
    name = "depreview",
    version,
    about = "Detect changed Go and Rust dependencies between two revisions"
)]
pub struct CliArgs {
    /// Working tree root (default: current directory)
    #[arg(default_value = ".", env = "GITHUB_WORKSPACE")]
    pub path: PathBuf,

    // Revisions
    /// Base revision (default: merge base with the default branch, then HEAD~1)
    #[arg(long, env = "BASE_SHA")]
    pub base: Option<String>,

    /// Head revision (default: HEAD)
    #[arg(long, env = "HEAD_SHA")]
    pub head: Option<String>,

    // Force mode
    /// Comma-separated dependencies to report as changed, skipping detection
    #[arg(long, env = "INPUT_DEPENDENCY")]
    pub dependency: Option<String>,

    /// Ecosystem of the forced dependencies: go, rust or mixed
    #[arg(long, env = "INPUT_ECOSYSTEM")]
    pub ecosystem: Option<String>,

    /// Only consider changed files under this repository sub-directory
    #[arg(long, env = "INPUT_PROJECT_PATH")]
    pub project_path: Option<String>,

    // Publishing
    /// File receiving has_changes/ecosystem/dependencies outputs
    #[arg(long, env = "GITHUB_OUTPUT")]
    pub github_output: Option<String>,

    /// File receiving the Markdown summary
    #[arg(long, env = "GITHUB_STEP_SUMMARY")]
    pub step_summary: Option<String>,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - minimal output
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output (NO_COLOR is honored as well)
    #[arg(long)]
    pub no_color: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl CliArgs {
    /// Force-mode dependency list, if force mode was requested
    pub fn forced_dependencies(&self) -> Option<&str> {
        non_empty(&self.dependency)
    }

    /// Explicit ecosystem override
    pub fn explicit_ecosystem(&self) -> Option<&str> {
        non_empty(&self.ecosystem)
    }

    /// Build the auto-detection context
    pub fn detection_context(&self) -> Result<DetectionContext, ConfigError> {
        DetectionContext::new(&self.path)
            .with_revisions(self.base.as_deref(), self.head.as_deref())
            .with_project_path(non_empty(&self.project_path))
    }

    /// Output formatting configuration
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::from_cli(self.format, self.verbose, self.quiet, self.no_color)
    }

    /// Action output and step summary writer
    pub fn github_output(&self) -> GithubOutput {
        GithubOutput::new(
            non_empty(&self.github_output).map(PathBuf::from),
            non_empty(&self.step_summary).map(PathBuf::from),
        )
    }

    /// Default log filter directive for the chosen verbosity
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            "warn"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
