//! Parsed dependency maps for a single file at a single revision
//!
//! Both maps are ordered by package name so that diffing is deterministic.

use std::collections::{BTreeMap, BTreeSet};

/// Declared versions from a manifest: `name -> version`.
///
/// A `None` version records a dependency without a version requirement
/// (path, git or workspace-inherited entries).
pub type ManifestVersions = BTreeMap<String, Option<String>>;

/// Resolved versions from a lock file: `name -> {versions}`.
///
/// A lock file may pin several versions of the same package at once.
/// The set orders versions as plain strings, not as semantic versions.
pub type LockVersions = BTreeMap<String, BTreeSet<String>>;
