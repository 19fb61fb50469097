//! Explicit detection context
//!
//! Everything the detector needs from its surroundings is carried here,
//! so nothing below the binary entry point reads the environment or depends
//! on the process working directory.

use crate::domain::Ecosystem;
use crate::error::ConfigError;
use std::path::{Component, Path, PathBuf};

/// Inputs for one auto-detection run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionContext {
    /// Working tree root
    pub root: PathBuf,
    /// Repository-relative sub-directory that limits detection, if any
    pub project_path: Option<String>,
    /// Requested base revision; resolved by fallback when absent
    pub base: Option<String>,
    /// Requested head revision; defaults to `HEAD` when absent
    pub head: Option<String>,
    /// Ecosystems considered, in reporting order
    pub ecosystems: Vec<Ecosystem>,
}

impl DetectionContext {
    /// Context over the whole repository at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            project_path: None,
            base: None,
            head: None,
            ecosystems: Ecosystem::all().to_vec(),
        }
    }

    /// Sets the revision pair. Empty strings count as not provided.
    pub fn with_revisions(mut self, base: Option<&str>, head: Option<&str>) -> Self {
        self.base = non_empty(base);
        self.head = non_empty(head);
        self
    }

    /// Restricts detection to a repository-relative sub-directory
    pub fn with_project_path(mut self, path: Option<&str>) -> Result<Self, ConfigError> {
        self.project_path = match path {
            Some(p) => normalize_project_path(p)?,
            None => None,
        };
        Ok(self)
    }

    /// Whether a repository path participates in detection
    pub fn in_scope(&self, path: &str) -> bool {
        match &self.project_path {
            None => true,
            Some(prefix) => path
                .strip_prefix(prefix.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.starts_with('/')),
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(String::from)
}

/// Normalizes a project path to `a/b` form; `.` and empty mean the whole repository
fn normalize_project_path(raw: &str) -> Result<Option<String>, ConfigError> {
    let trimmed = raw.trim();
    let mut parts: Vec<String> = Vec::new();

    for component in Path::new(trimmed).components() {
        match component {
            Component::CurDir => {}
            Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
            Component::ParentDir => {
                return Err(ConfigError::InvalidPath {
                    path: PathBuf::from(trimmed),
                    message: "project path must not leave the repository".to_string(),
                })
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ConfigError::InvalidPath {
                    path: PathBuf::from(trimmed),
                    message: "project path must be relative to the repository root".to_string(),
                })
            }
        }
    }

    if parts.is_empty() {
        Ok(None)
    } else {
        Ok(Some(parts.join("/")))
    }
}
