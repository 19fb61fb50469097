//! Diff engine for parsed manifest and lock file maps
//!
//! Only names whose representation differs between the two revisions are
//! reported. Lock file versions are compared as sets: a package is reported
//! when the new revision adds at least one version, with the highest added
//! version as `new` and the lowest removed version as `old`. "Highest" and
//! "lowest" use plain string ordering.

use crate::domain::{ChangeKind, LockVersions, ManifestVersions, VersionChange};

/// Declared-version changes between two manifest maps
pub fn diff_manifest(old: &ManifestVersions, new: &ManifestVersions) -> Vec<VersionChange> {
    new.iter()
        .filter_map(|(name, new_version)| {
            let previous = old.get(name).map(|v| v.as_deref());
            let kind = ChangeKind::classify(previous, Some(new_version.as_deref()));
            (kind != ChangeKind::Unchanged).then(|| {
                VersionChange::new(
                    name.clone(),
                    previous.flatten().map(String::from),
                    new_version.clone(),
                    kind,
                )
            })
        })
        .collect()
}

/// Resolved-version changes between two lock file maps
pub fn diff_lock(old: &LockVersions, new: &LockVersions) -> Vec<VersionChange> {
    let mut changes = Vec::new();

    for (name, new_versions) in new {
        let old_versions = old.get(name);
        let added = new_versions
            .iter()
            .filter(|v| old_versions.is_none_or(|o| !o.contains(*v)));
        let Some(newest) = added.max() else {
            continue;
        };

        let oldest_removed = old_versions.and_then(|o| o.difference(new_versions).next());
        let kind = if old_versions.is_some_and(|o| !o.is_empty()) {
            ChangeKind::Updated
        } else {
            ChangeKind::Added
        };

        changes.push(VersionChange::new(
            name.clone(),
            oldest_removed.cloned(),
            Some(newest.clone()),
            kind,
        ));
    }

    changes
}

/// Manifest entries declared in `old` that are gone from `new`
pub fn removed_from_manifest(old: &ManifestVersions, new: &ManifestVersions) -> Vec<VersionChange> {
    old.iter()
        .filter(|(name, _)| !new.contains_key(*name))
        .map(|(name, version)| VersionChange::removed(name.clone(), version.clone()))
        .collect()
}

/// Lock packages present in `old` with no remaining version in `new`
pub fn removed_from_lock(old: &LockVersions, new: &LockVersions) -> Vec<VersionChange> {
    old.iter()
        .filter(|(name, _)| new.get(*name).is_none_or(|v| v.is_empty()))
        .map(|(name, versions)| VersionChange::removed(name.clone(), versions.first().cloned()))
        .collect()
}
