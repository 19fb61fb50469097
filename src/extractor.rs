//! Per-ecosystem change extraction
//!
//! Lock files are diffed first and manifests second, all into one change
//! set per ecosystem, so a manifest entry replaces a lock entry for the same
//! name. Across files the last processed file wins.

use crate::diff::{diff_lock, diff_manifest, removed_from_lock, removed_from_manifest};
use crate::domain::{DependencyChangeSet, Ecosystem};
use crate::lockfile;
use crate::manifest;
use crate::vcs::RevisionStore;
use tracing::debug;

/// Changes found for one ecosystem
#[derive(Debug, Default)]
pub struct ExtractedChanges {
    /// Added and updated packages, manifest entries taking priority
    pub changes: DependencyChangeSet,
    /// Packages that disappeared and were not re-reported as changes
    pub removed: DependencyChangeSet,
}

/// Reads dependency files at two revisions and diffs them
pub struct ChangeExtractor<'a> {
    store: &'a dyn RevisionStore,
    base: &'a str,
    head: &'a str,
}

impl<'a> ChangeExtractor<'a> {
    pub fn new(store: &'a dyn RevisionStore, base: &'a str, head: &'a str) -> Self {
        Self { store, base, head }
    }

    /// Extract changes for `ecosystem` from the given changed paths
    pub fn extract(&self, ecosystem: Ecosystem, changed: &[String]) -> ExtractedChanges {
        let mut result = ExtractedChanges::default();

        let lock_parser = lockfile::get_parser(ecosystem);
        for path in changed.iter().filter(|p| ecosystem.is_lock_file(p)) {
            let (old, new) = self.read_pair(path);
            let old = lockfile::parse_lenient(lock_parser.as_ref(), path, &old);
            let new = lockfile::parse_lenient(lock_parser.as_ref(), path, &new);

            let changes = diff_lock(&old, &new);
            debug!(path = path.as_str(), changes = changes.len(), "diffed lock file");
            result.changes.extend(changes);
            result.removed.extend(removed_from_lock(&old, &new));
        }

        let manifest_parser = manifest::get_parser(ecosystem);
        for path in changed.iter().filter(|p| ecosystem.is_manifest(p)) {
            let (old, new) = self.read_pair(path);
            let old = manifest::parse_lenient(manifest_parser.as_ref(), path, &old);
            let new = manifest::parse_lenient(manifest_parser.as_ref(), path, &new);

            let changes = diff_manifest(&old, &new);
            debug!(path = path.as_str(), changes = changes.len(), "diffed manifest");
            result.changes.extend(changes);
            result.removed.extend(removed_from_manifest(&old, &new));
        }

        let reported: Vec<String> = result
            .removed
            .iter()
            .filter(|r| result.changes.contains(&r.name))
            .map(|r| r.name.clone())
            .collect();
        for name in reported {
            result.removed.remove(&name);
        }

        result
    }

    /// File content at base and head; a missing file reads as empty
    fn read_pair(&self, path: &str) -> (String, String) {
        let old = self.store.file_at(self.base, path).unwrap_or_default();
        let new = self.store.file_at(self.head, path).unwrap_or_default();
        (old, new)
    }
}
