//! Ordered, name-keyed collection of version changes for one ecosystem

use super::VersionChange;
use std::collections::HashMap;

/// Version changes keyed by package name.
///
/// Inserting a change for a name that is already present replaces the
/// existing entry in place: a name appears at most once and keeps the
/// position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyChangeSet {
    entries: Vec<VersionChange>,
    index: HashMap<String, usize>,
}

impl DependencyChangeSet {
    /// Creates an empty change set
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a change, returning the entry it replaced
    pub fn insert(&mut self, change: VersionChange) -> Option<VersionChange> {
        match self.index.get(&change.name) {
            Some(&pos) => Some(std::mem::replace(&mut self.entries[pos], change)),
            None => {
                self.index.insert(change.name.clone(), self.entries.len());
                self.entries.push(change);
                None
            }
        }
    }

    /// Removes the entry for a name, if any
    pub fn remove(&mut self, name: &str) -> Option<VersionChange> {
        let pos = self.index.remove(name)?;
        let removed = self.entries.remove(pos);
        for slot in self.index.values_mut() {
            if *slot > pos {
                *slot -= 1;
            }
        }
        Some(removed)
    }

    pub fn get(&self, name: &str) -> Option<&VersionChange> {
        self.index.get(name).map(|&pos| &self.entries[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VersionChange> {
        self.entries.iter()
    }

    /// Canonical change strings, in set order
    pub fn formatted(&self) -> Vec<String> {
        self.entries.iter().map(VersionChange::format).collect()
    }

    pub fn into_vec(self) -> Vec<VersionChange> {
        self.entries
    }
}

impl Extend<VersionChange> for DependencyChangeSet {
    fn extend<T: IntoIterator<Item = VersionChange>>(&mut self, iter: T) {
        for change in iter {
            self.insert(change);
        }
    }
}

impl FromIterator<VersionChange> for DependencyChangeSet {
    fn from_iter<T: IntoIterator<Item = VersionChange>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
