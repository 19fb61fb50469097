//! Markdown formatter for the "Dependency changes" PR comment section

use crate::domain::{EcosystemReport, ReportedChange};
use crate::output::OutputFormatter;
use std::io::Write;

/// Hidden marker identifying the section in an existing comment
pub const COMMENT_MARKER: &str = "<!-- depreview:dependency-changes -->";

/// Markdown formatter
#[derive(Debug, Default)]
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_bullet(entry: &ReportedChange, writer: &mut dyn Write) -> std::io::Result<()> {
        let change = &entry.change;
        writeln!(
            writer,
            "- {}: {} -> {} ({})",
            change.name,
            change.old.as_deref().unwrap_or("none"),
            change.new.as_deref().unwrap_or("none"),
            change.kind
        )
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format(&self, report: &EcosystemReport, writer: &mut dyn Write) -> std::io::Result<()> {
        writeln!(writer, "## Dependency changes")?;
        writeln!(writer)?;
        writeln!(writer, "{}", COMMENT_MARKER)?;
        writeln!(writer)?;

        if !report.has_changes {
            writeln!(writer, "No dependency changes detected.")?;
            return Ok(());
        }

        writeln!(writer, "**Ecosystem:** {}", report.ecosystem)?;
        writeln!(writer)?;
        for entry in &report.changes {
            Self::write_bullet(entry, writer)?;
        }

        if !report.removed.is_empty() {
            writeln!(writer)?;
            writeln!(writer, "**Removed**")?;
            writeln!(writer)?;
            for entry in &report.removed {
                Self::write_bullet(entry, writer)?;
            }
        }

        Ok(())
    }
}
