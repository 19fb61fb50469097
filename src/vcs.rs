//! Version control access
//!
//! This module provides:
//! - The `RevisionStore` trait: the only repository operations detection needs
//! - A git2-backed implementation
//!
//! Query failures are logged and surface as empty results; they only become
//! fatal when they prevent resolving the revision range.

use crate::error::VcsError;
use git2::{Commit, Repository};
use std::path::Path;
use tracing::{debug, warn};

/// Read-only access to two points of version-controlled history
pub trait RevisionStore {
    /// Paths changed between the merge base of `base` and `head`, and `head`.
    ///
    /// Deleted and renamed files are listed under their old path as well.
    fn changed_files(&self, base: &str, head: &str) -> Vec<String>;

    /// Content of `path` as of `rev`, or `None` if it did not exist
    fn file_at(&self, rev: &str, path: &str) -> Option<String>;

    /// Resolves a revision expression to a full commit id
    fn rev_parse(&self, spec: &str) -> Option<String>;

    /// Best common ancestor of two revisions
    fn merge_base(&self, a: &str, b: &str) -> Option<String>;

    /// Branch `origin/HEAD` points to, without the remote prefix
    fn default_remote_branch(&self) -> Option<String>;
}

/// Git repository accessed through libgit2
pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Open the repository containing `path`
    pub fn discover(path: &Path) -> Result<Self, VcsError> {
        let repo = Repository::discover(path).map_err(|e| VcsError::open(path, e.message()))?;
        Ok(Self { repo })
    }

    fn commit(&self, spec: &str) -> Result<Commit<'_>, git2::Error> {
        self.repo.revparse_single(spec)?.peel_to_commit()
    }

    fn try_changed_files(&self, base: &str, head: &str) -> Result<Vec<String>, git2::Error> {
        let base_commit = self.commit(base)?;
        let head_commit = self.commit(head)?;
        let fork_point = self.repo.merge_base(base_commit.id(), head_commit.id())?;
        let old_tree = self.repo.find_commit(fork_point)?.tree()?;
        let new_tree = head_commit.tree()?;

        let diff = self
            .repo
            .diff_tree_to_tree(Some(&old_tree), Some(&new_tree), None)?;

        let mut paths: Vec<String> = Vec::new();
        for delta in diff.deltas() {
            for file in [delta.old_file(), delta.new_file()] {
                if let Some(path) = file.path() {
                    let path = path.to_string_lossy().into_owned();
                    if !paths.contains(&path) {
                        paths.push(path);
                    }
                }
            }
        }

        Ok(paths)
    }

    fn try_file_at(&self, rev: &str, path: &str) -> Result<String, git2::Error> {
        let tree = self.commit(rev)?.tree()?;
        let entry = tree.get_path(Path::new(path))?;
        let blob = entry.to_object(&self.repo)?.peel_to_blob()?;
        Ok(String::from_utf8_lossy(blob.content()).into_owned())
    }
}

impl RevisionStore for GitRepository {
    fn changed_files(&self, base: &str, head: &str) -> Vec<String> {
        self.try_changed_files(base, head).unwrap_or_else(|e| {
            warn!(base, head, error = %e, "failed to list changed files");
            Vec::new()
        })
    }

    fn file_at(&self, rev: &str, path: &str) -> Option<String> {
        match self.try_file_at(rev, path) {
            Ok(content) => Some(content),
            Err(e) => {
                debug!(rev, path, error = %e, "file not readable at revision");
                None
            }
        }
    }

    fn rev_parse(&self, spec: &str) -> Option<String> {
        self.commit(spec).ok().map(|c| c.id().to_string())
    }

    fn merge_base(&self, a: &str, b: &str) -> Option<String> {
        let a = self.commit(a).ok()?.id();
        let b = self.commit(b).ok()?.id();
        self.repo.merge_base(a, b).ok().map(|oid| oid.to_string())
    }

    fn default_remote_branch(&self) -> Option<String> {
        let reference = self.repo.find_reference("refs/remotes/origin/HEAD").ok()?;
        let target = reference.symbolic_target()?;
        target
            .strip_prefix("refs/remotes/origin/")
            .map(String::from)
    }
}

/// In-memory revision store for unit tests
#[cfg(test)]
pub mod mock {
    use super::RevisionStore;
    use std::collections::HashMap;

    #[derive(Default)]
    pub struct MockRevisionStore {
        changed: Vec<String>,
        files: HashMap<(String, String), String>,
        refs: HashMap<String, String>,
        merge_bases: HashMap<(String, String), String>,
        default_branch: Option<String>,
    }

    impl MockRevisionStore {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_file(mut self, rev: &str, path: &str, content: &str) -> Self {
            self.files
                .insert((rev.to_string(), path.to_string()), content.to_string());
            self
        }

        pub fn with_changed(mut self, paths: &[&str]) -> Self {
            self.changed = paths.iter().map(|p| p.to_string()).collect();
            self
        }

        pub fn with_ref(mut self, spec: &str, sha: &str) -> Self {
            self.refs.insert(spec.to_string(), sha.to_string());
            self
        }

        pub fn with_merge_base(mut self, a: &str, b: &str, sha: &str) -> Self {
            self.merge_bases
                .insert((a.to_string(), b.to_string()), sha.to_string());
            self
        }

        pub fn with_default_branch(mut self, branch: &str) -> Self {
            self.default_branch = Some(branch.to_string());
            self
        }
    }

    impl RevisionStore for MockRevisionStore {
        fn changed_files(&self, _base: &str, _head: &str) -> Vec<String> {
            self.changed.clone()
        }

        fn file_at(&self, rev: &str, path: &str) -> Option<String> {
            self.files
                .get(&(rev.to_string(), path.to_string()))
                .cloned()
        }

        fn rev_parse(&self, spec: &str) -> Option<String> {
            self.refs.get(spec).cloned()
        }

        fn merge_base(&self, a: &str, b: &str) -> Option<String> {
            self.merge_bases
                .get(&(a.to_string(), b.to_string()))
                .cloned()
        }

        fn default_remote_branch(&self) -> Option<String> {
            self.default_branch.clone()
        }
    }
}
