//! GitHub Actions output publishing
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT` as
//! `key=value` lines. The Markdown report is appended to the step summary.

use crate::domain::EcosystemReport;
use crate::error::IoError;
use crate::output::{MarkdownFormatter, OutputFormatter};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Strip characters that would let a value start a new output line
pub fn sanitize_value(value: &str) -> String {
    value.chars().filter(|c| *c != '\r' && *c != '\n').collect()
}

/// Writer for the action's output and step summary files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GithubOutput {
    output: Option<PathBuf>,
    step_summary: Option<PathBuf>,
}

impl GithubOutput {
    pub fn new(output: Option<PathBuf>, step_summary: Option<PathBuf>) -> Self {
        Self {
            output,
            step_summary,
        }
    }

    /// Publish `has_changes`, `ecosystem` and `dependencies`, then the summary
    pub fn publish(&self, report: &EcosystemReport) -> Result<(), IoError> {
        self.write_outputs(report)?;
        self.write_step_summary(report)
    }

    fn write_outputs(&self, report: &EcosystemReport) -> Result<(), IoError> {
        let Some(path) = &self.output else {
            debug!("no output file configured, skipping action outputs");
            return Ok(());
        };

        let lines = [
            ("has_changes", report.has_changes.to_string()),
            ("ecosystem", report.ecosystem.to_string()),
            ("dependencies", report.dependencies_csv()),
        ];

        let mut content = String::new();
        for (key, value) in &lines {
            content.push_str(&format!("{}={}\n", key, sanitize_value(value)));
        }

        append(path, content.as_bytes())?;
        debug!(path = %path.display(), "wrote action outputs");
        Ok(())
    }

    fn write_step_summary(&self, report: &EcosystemReport) -> Result<(), IoError> {
        let Some(path) = &self.step_summary else {
            return Ok(());
        };

        let mut content = Vec::new();
        MarkdownFormatter::new()
            .format(report, &mut content)
            .map_err(|e| IoError::write(path, e))?;
        content.push(b'\n');

        append(path, &content)?;
        debug!(path = %path.display(), "wrote step summary");
        Ok(())
    }
}

fn append(path: &Path, content: &[u8]) -> Result<(), IoError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| IoError::write(path, e))?;
    file.write_all(content).map_err(|e| IoError::write(path, e))
}
