//! Text output formatter for human-readable display
//!
//! This module provides:
//! - Colored change lines with a major/minor/patch bump indication
//! - Removed package listing
//! - The raw `dependencies` value, ready to copy

use crate::domain::{DetectionMode, EcosystemReport, ReportedChange};
use crate::output::{OutputFormatter, Verbosity};
use colored::Colorize;
use std::io::Write;

/// Semantic version bump between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChangeType {
    /// Major version change (breaking)
    Major,
    /// Minor version change (features)
    Minor,
    /// Patch version change (fixes)
    Patch,
    /// Unknown or unparseable
    Unknown,
}

impl VersionChangeType {
    /// Determine the change type between two versions
    pub fn from_versions(old: &str, new: &str) -> Self {
        let parse = |v: &str| -> Option<(u64, u64)> {
            let v = v.strip_prefix('v').unwrap_or(v);
            // Go pseudo-versions and pre-releases carry `-` suffixes
            let mut parts = v.split(['.', '-', '+']);
            let major = parts.next()?.parse().ok()?;
            let minor = parts.next().map_or(Some(0), |p| p.parse().ok())?;
            Some((major, minor))
        };

        match (parse(old), parse(new)) {
            (Some((old_major, old_minor)), Some((new_major, new_minor))) => {
                if new_major != old_major {
                    VersionChangeType::Major
                } else if new_minor != old_minor {
                    VersionChangeType::Minor
                } else {
                    VersionChangeType::Patch
                }
            }
            _ => VersionChangeType::Unknown,
        }
    }

    /// Get the display label with color
    pub fn colored_label(&self) -> String {
        match self {
            VersionChangeType::Major => "major".red().bold().to_string(),
            VersionChangeType::Minor => "minor".yellow().to_string(),
            VersionChangeType::Patch => "patch".green().to_string(),
            VersionChangeType::Unknown => "?".dimmed().to_string(),
        }
    }

    /// Get the plain label
    pub fn label(&self) -> &'static str {
        match self {
            VersionChangeType::Major => "major",
            VersionChangeType::Minor => "minor",
            VersionChangeType::Patch => "patch",
            VersionChangeType::Unknown => "?",
        }
    }
}

/// Text formatter for human-readable output
pub struct TextFormatter {
    /// Verbosity level
    verbosity: Verbosity,
    /// Whether to use colors
    color: bool,
}

impl TextFormatter {
    /// Create a new text formatter
    pub fn new(verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            color: true,
        }
    }

    /// Create a new text formatter with color option
    pub fn with_color(verbosity: Verbosity, color: bool) -> Self {
        Self { verbosity, color }
    }

    /// Maximum package name length for alignment
    fn max_name_length(entries: &[ReportedChange]) -> usize {
        entries
            .iter()
            .map(|e| e.change.name.len())
            .max()
            .unwrap_or(0)
    }

    /// Format a single change line
    fn format_change_line(
        &self,
        entry: &ReportedChange,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let change = &entry.change;
        let old = change.old.as_deref().unwrap_or("none");
        let new = change.new.as_deref().unwrap_or("none");

        let bump = match (change.old.as_deref(), change.new.as_deref()) {
            (Some(old), Some(new)) => Some(VersionChangeType::from_versions(old, new)),
            _ => None,
        };

        if self.color {
            let name_display = format!("{:width$}", change.name, width = max_name_len);
            let label = match bump {
                Some(bump) => format!("{}, {}", change.kind, bump.colored_label()),
                None => change.kind.to_string(),
            };
            writeln!(
                writer,
                "  {} {} {} {} [{}] {}",
                name_display,
                old.dimmed(),
                "→".dimmed(),
                new.bright_white().bold(),
                label,
                format!("({})", entry.ecosystem).dimmed()
            )
        } else {
            let label = match bump {
                Some(bump) => format!("{}, {}", change.kind, bump.label()),
                None => change.kind.to_string(),
            };
            writeln!(
                writer,
                "  {:width$} {} -> {} [{}] ({})",
                change.name,
                old,
                new,
                label,
                entry.ecosystem,
                width = max_name_len
            )
        }
    }

    /// Format a removed package line
    fn format_removed_line(
        &self,
        entry: &ReportedChange,
        max_name_len: usize,
        writer: &mut dyn Write,
    ) -> std::io::Result<()> {
        let old = entry.change.old.as_deref().unwrap_or("none");
        if self.color {
            let name_display = format!("{:width$}", entry.change.name, width = max_name_len);
            writeln!(writer, "  {} {}", name_display.red(), old.dimmed())
        } else {
            writeln!(
                writer,
                "  {:width$} {}",
                entry.change.name,
                old,
                width = max_name_len
            )
        }
    }

    fn format_header(&self, report: &EcosystemReport, writer: &mut dyn Write) -> std::io::Result<()> {
        let mode = match report.mode {
            DetectionMode::Auto => "auto-detected",
            DetectionMode::Force => "forced",
        };

        if self.color {
            writeln!(
                writer,
                "{} {}",
                "Dependency changes".bold(),
                format!("({})", mode).dimmed()
            )?;
            writeln!(writer, "  ecosystem:   {}", report.ecosystem.to_string().cyan())?;
            let has_changes = if report.has_changes {
                "true".green()
            } else {
                "false".dimmed()
            };
            writeln!(writer, "  has_changes: {}", has_changes)?;
        } else {
            writeln!(writer, "Dependency changes ({})", mode)?;
            writeln!(writer, "  ecosystem:   {}", report.ecosystem)?;
            writeln!(writer, "  has_changes: {}", report.has_changes)?;
        }
        writeln!(writer)
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &EcosystemReport, writer: &mut dyn Write) -> std::io::Result<()> {
        if self.verbosity == Verbosity::Quiet {
            if report.has_changes {
                writeln!(writer, "{}", report.dependencies_csv())?;
            }
            return Ok(());
        }

        self.format_header(report, writer)?;

        if !report.has_changes {
            if self.color {
                writeln!(writer, "{}", "No dependency changes detected.".dimmed())?;
            } else {
                writeln!(writer, "No dependency changes detected.")?;
            }
            return Ok(());
        }

        let max_name_len = Self::max_name_length(&report.changes)
            .max(Self::max_name_length(&report.removed))
            .max(20);

        for entry in &report.changes {
            self.format_change_line(entry, max_name_len, writer)?;
        }

        if !report.removed.is_empty() {
            writeln!(writer)?;
            if self.color {
                writeln!(writer, "  {}", "Removed:".dimmed())?;
            } else {
                writeln!(writer, "  Removed:")?;
            }
            for entry in &report.removed {
                self.format_removed_line(entry, max_name_len, writer)?;
            }
        }

        writeln!(writer)?;
        if self.verbosity == Verbosity::Verbose {
            writeln!(writer, "{} change(s)", report.changes.len())?;
        }
        writeln!(writer, "dependencies={}", report.dependencies_csv())?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ChangeKind, Ecosystem, EcosystemLabel, VersionChange};

    fn render(formatter: &TextFormatter, report: &EcosystemReport) -> String {
        let mut buf = Vec::new();
        formatter.format(report, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn sample_report() -> EcosystemReport {
        EcosystemReport::detected(
            &[Ecosystem::Go, Ecosystem::Rust],
            vec![
                (
                    Ecosystem::Go,
                    VersionChange::new(
                        "github.com/lib/pq",
                        Some("v1.10.9".to_string()),
                        Some("v1.10.10".to_string()),
                        ChangeKind::Updated,
                    ),
                ),
                (
                    Ecosystem::Rust,
                    VersionChange::new("tokio", None, Some("1.36.0".to_string()), ChangeKind::Added),
                ),
            ],
            vec![(Ecosystem::Rust, VersionChange::removed("rand", Some("0.8.5".to_string())))],
        )
    }

    #[test]
    fn test_version_change_type_major() {
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "2.0.0"),
            VersionChangeType::Major
        );
    }

    #[test]
    fn test_version_change_type_minor() {
        assert_eq!(
            VersionChangeType::from_versions("1.0.0", "1.1.0"),
            VersionChangeType::Minor
        );
    }

    #[test]
    fn test_version_change_type_patch() {
        assert_eq!(
            VersionChangeType::from_versions("v1.10.9", "v1.10.10"),
            VersionChangeType::Patch
        );
    }

    #[test]
    fn test_version_change_type_short_and_pseudo_versions() {
        assert_eq!(
            VersionChangeType::from_versions("1.0", "1.0.210"),
            VersionChangeType::Patch
        );
        assert_eq!(
            VersionChangeType::from_versions("0.8", "0.9"),
            VersionChangeType::Minor
        );
        assert_eq!(
            VersionChangeType::from_versions(
                "v0.0.0-20230101000000-abcdef123456",
                "v0.1.0"
            ),
            VersionChangeType::Minor
        );
    }

    #[test]
    fn test_version_change_type_unknown() {
        assert_eq!(
            VersionChangeType::from_versions("latest", "1.0.0"),
            VersionChangeType::Unknown
        );
        assert_eq!(VersionChangeType::Unknown.label(), "?");
    }

    #[test]
    fn test_format_no_changes() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let output = render(
            &formatter,
            &EcosystemReport::none(crate::domain::DetectionMode::Auto),
        );
        assert!(output.contains("Dependency changes (auto-detected)"));
        assert!(output.contains("ecosystem:   none"));
        assert!(output.contains("has_changes: false"));
        assert!(output.contains("No dependency changes detected."));
    }

    #[test]
    fn test_format_changes_plain() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let output = render(&formatter, &sample_report());

        assert!(output.contains("ecosystem:   mixed"));
        assert!(output.contains("v1.10.9 -> v1.10.10 [updated, patch] (go)"));
        assert!(output.contains("none -> 1.36.0 [added] (rust)"));
        assert!(output.contains("Removed:"));
        assert!(output.contains("rand"));
        assert!(output.contains("dependencies=github.com/lib/pq@v1.10.9..v1.10.10,tokio@1.36.0"));
    }

    #[test]
    fn test_format_quiet_prints_only_list() {
        let formatter = TextFormatter::with_color(Verbosity::Quiet, false);
        let output = render(&formatter, &sample_report());
        assert_eq!(output, "github.com/lib/pq@v1.10.9..v1.10.10,tokio@1.36.0\n");

        let output = render(
            &formatter,
            &EcosystemReport::none(crate::domain::DetectionMode::Auto),
        );
        assert!(output.is_empty());
    }

    #[test]
    fn test_format_verbose_counts() {
        let formatter = TextFormatter::with_color(Verbosity::Verbose, false);
        let output = render(&formatter, &sample_report());
        assert!(output.contains("2 change(s)"));
    }

    #[test]
    fn test_format_forced_report() {
        let formatter = TextFormatter::with_color(Verbosity::Normal, false);
        let report = EcosystemReport::forced(
            EcosystemLabel::Rust,
            vec![(EcosystemLabel::Rust, "serde@1.0.1..1.0.2".to_string())],
        );
        let output = render(&formatter, &report);
        assert!(output.contains("(forced)"));
        assert!(output.contains("1.0.1 -> 1.0.2 [updated, patch] (rust)"));
    }

    #[test]
    fn test_new_defaults_to_color() {
        let formatter = TextFormatter::new(Verbosity::Normal);
        assert!(formatter.color);
    }
}
