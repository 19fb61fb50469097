//! Version change types and the canonical change string format
//!
//! A change is rendered as:
//! - `name@old..new` when both versions are known and differ
//! - `name@new` when only the new version is known
//! - `name` when no new version is known

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification of a single package change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Package did not exist before
    Added,
    /// Package no longer exists
    Removed,
    /// Package exists on both sides with a different version
    Updated,
    /// Package exists on both sides with the same version
    Unchanged,
}

impl ChangeKind {
    /// Classify a manifest entry from its presence on each side.
    ///
    /// The outer `Option` is presence of the name, the inner one its
    /// declared version.
    pub fn classify(previous: Option<Option<&str>>, current: Option<Option<&str>>) -> Self {
        match (previous, current) {
            (None, Some(_)) => ChangeKind::Added,
            (Some(_), None) => ChangeKind::Removed,
            (Some(old), Some(new)) if old != new => ChangeKind::Updated,
            _ => ChangeKind::Unchanged,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Added => "added",
            ChangeKind::Removed => "removed",
            ChangeKind::Updated => "updated",
            ChangeKind::Unchanged => "unchanged",
        }
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One package's version delta between two revisions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionChange {
    /// Package or module name
    pub name: String,
    /// Version at the base revision, if known
    pub old: Option<String>,
    /// Version at the head revision, if known
    pub new: Option<String>,
    /// Change classification
    pub kind: ChangeKind,
}

impl VersionChange {
    /// Creates a new VersionChange
    pub fn new(
        name: impl Into<String>,
        old: Option<String>,
        new: Option<String>,
        kind: ChangeKind,
    ) -> Self {
        Self {
            name: name.into(),
            old,
            new,
            kind,
        }
    }

    /// Creates a change for a package that disappeared
    pub fn removed(name: impl Into<String>, old: Option<String>) -> Self {
        Self::new(name, old, None, ChangeKind::Removed)
    }

    /// Builds a change from a user-supplied change string.
    ///
    /// `name@old..new` is an update, anything else is treated as an addition.
    pub fn from_entry(entry: &str) -> Self {
        let (name, old, new) = parse_change(entry);
        let kind = if old.is_some() && new.is_some() {
            ChangeKind::Updated
        } else {
            ChangeKind::Added
        };
        Self::new(name, old, new, kind)
    }

    /// Returns the canonical change string
    pub fn format(&self) -> String {
        match (self.old.as_deref(), self.new.as_deref()) {
            (Some(old), Some(new)) if old != new => format!("{}@{}..{}", self.name, old, new),
            (_, Some(new)) => format!("{}@{}", self.name, new),
            _ => self.name.clone(),
        }
    }
}

impl fmt::Display for VersionChange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

/// Splits a change string back into `(name, old, new)`.
///
/// Splits once on the first `@`, then once on the first `..` of the
/// remainder. Empty version tokens are treated as unknown.
pub fn parse_change(entry: &str) -> (String, Option<String>, Option<String>) {
    let entry = entry.trim();
    let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());

    match entry.split_once('@') {
        None => (entry.to_string(), None, None),
        Some((name, versions)) => match versions.split_once("..") {
            Some((old, new)) => (name.to_string(), non_empty(old), non_empty(new)),
            None => (name.to_string(), None, non_empty(versions)),
        },
    }
}
