//! JSON output formatter for machine processing
//!
//! The document mirrors the action outputs (`ecosystem`, `has_changes`,
//! `dependencies`) and adds the structured change list.

use crate::domain::{ChangeKind, DetectionMode, EcosystemLabel, EcosystemReport, ReportedChange};
use crate::output::OutputFormatter;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use std::io::Write;

/// JSON formatter for machine-readable output
#[derive(Debug, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Create a new JSON formatter
    pub fn new() -> Self {
        Self
    }
}

/// JSON representation of a report
#[derive(Serialize)]
struct JsonOutput<'a> {
    ecosystem: EcosystemLabel,
    has_changes: bool,
    /// Same value as the `dependencies` action output
    dependencies: String,
    mode: DetectionMode,
    changes: Vec<JsonChange<'a>>,
    removed: Vec<JsonChange<'a>>,
    /// RFC 3339 UTC timestamp
    generated_at: String,
}

/// JSON representation of one change
#[derive(Serialize)]
struct JsonChange<'a> {
    name: &'a str,
    old: Option<&'a str>,
    new: Option<&'a str>,
    kind: ChangeKind,
    ecosystem: EcosystemLabel,
}

impl<'a> From<&'a ReportedChange> for JsonChange<'a> {
    fn from(entry: &'a ReportedChange) -> Self {
        Self {
            name: &entry.change.name,
            old: entry.change.old.as_deref(),
            new: entry.change.new.as_deref(),
            kind: entry.change.kind,
            ecosystem: entry.ecosystem,
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &EcosystemReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let output = JsonOutput {
            ecosystem: report.ecosystem,
            has_changes: report.has_changes,
            dependencies: report.dependencies_csv(),
            mode: report.mode,
            changes: report.changes.iter().map(JsonChange::from).collect(),
            removed: report.removed.iter().map(JsonChange::from).collect(),
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };

        let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;

        writeln!(writer, "{}", json)?;

        Ok(())
    }
}
