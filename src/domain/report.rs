//! Aggregate detection report published to the surrounding workflow

use super::{Ecosystem, EcosystemLabel, VersionChange};
use serde::Serialize;

/// How the dependency list was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectionMode {
    /// Diff-based detection between two revisions
    Auto,
    /// Dependencies supplied by the caller
    Force,
}

/// A change together with the ecosystem it belongs to
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportedChange {
    pub ecosystem: EcosystemLabel,
    #[serde(flatten)]
    pub change: VersionChange,
}

/// Result of one detection run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcosystemReport {
    pub mode: DetectionMode,
    pub ecosystem: EcosystemLabel,
    pub has_changes: bool,
    /// Formatted change strings, in extraction order
    pub dependencies: Vec<String>,
    pub changes: Vec<ReportedChange>,
    /// Packages that disappeared; informational only
    pub removed: Vec<ReportedChange>,
}

impl EcosystemReport {
    /// Report for a run that found nothing to review
    pub fn none(mode: DetectionMode) -> Self {
        Self {
            mode,
            ecosystem: EcosystemLabel::None,
            has_changes: false,
            dependencies: Vec::new(),
            changes: Vec::new(),
            removed: Vec::new(),
        }
    }

    /// Builds an auto-detection report from per-ecosystem results.
    ///
    /// `present` lists the ecosystems whose files changed. An empty change
    /// list yields the `none` report even when files changed.
    pub fn detected(
        present: &[Ecosystem],
        changes: Vec<(Ecosystem, VersionChange)>,
        removed: Vec<(Ecosystem, VersionChange)>,
    ) -> Self {
        if changes.is_empty() {
            return Self::none(DetectionMode::Auto);
        }

        let tag = |(ecosystem, change): (Ecosystem, VersionChange)| ReportedChange {
            ecosystem: ecosystem.into(),
            change,
        };
        let changes: Vec<ReportedChange> = changes.into_iter().map(tag).collect();

        Self {
            mode: DetectionMode::Auto,
            ecosystem: EcosystemLabel::aggregate(present.iter().map(|&e| EcosystemLabel::from(e))),
            has_changes: true,
            dependencies: changes.iter().map(|c| c.change.format()).collect(),
            changes,
            removed: removed.into_iter().map(tag).collect(),
        }
    }

    /// Builds a force-mode report. Identifiers are published as given.
    pub fn forced(ecosystem: EcosystemLabel, identifiers: Vec<(EcosystemLabel, String)>) -> Self {
        let changes = identifiers
            .iter()
            .map(|(label, id)| ReportedChange {
                ecosystem: *label,
                change: VersionChange::from_entry(id),
            })
            .collect();

        Self {
            mode: DetectionMode::Force,
            ecosystem,
            has_changes: true,
            dependencies: identifiers.into_iter().map(|(_, id)| id).collect(),
            changes,
            removed: Vec::new(),
        }
    }

    /// The `dependencies` output value
    pub fn dependencies_csv(&self) -> String {
        self.dependencies.join(",")
    }
}
