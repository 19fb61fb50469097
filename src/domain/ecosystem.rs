//! Ecosystem type definitions for supported package managers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::ConfigError;

/// Supported package ecosystems
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ecosystem {
    /// Go modules (go.mod / go.sum)
    Go,
    /// Rust crates (Cargo.toml / Cargo.lock)
    Rust,
}

impl Ecosystem {
    /// Returns the manifest filenames for this ecosystem
    pub fn manifest_filenames(&self) -> &'static [&'static str] {
        match self {
            Ecosystem::Go => &["go.mod"],
            Ecosystem::Rust => &["Cargo.toml"],
        }
    }

    /// Returns the lock filenames for this ecosystem
    pub fn lock_filenames(&self) -> &'static [&'static str] {
        match self {
            Ecosystem::Go => &["go.sum"],
            Ecosystem::Rust => &["Cargo.lock"],
        }
    }

    /// Returns the display name for this ecosystem
    pub fn display_name(&self) -> &'static str {
        match self {
            Ecosystem::Go => "Go",
            Ecosystem::Rust => "Rust",
        }
    }

    /// Returns the lowercase label used in outputs
    pub fn as_str(&self) -> &'static str {
        match self {
            Ecosystem::Go => "go",
            Ecosystem::Rust => "rust",
        }
    }

    /// Returns all supported ecosystems, in reporting order
    pub fn all() -> &'static [Ecosystem] {
        &[Ecosystem::Go, Ecosystem::Rust]
    }

    /// Whether the path's basename is one of this ecosystem's manifests
    pub fn is_manifest(&self, path: &str) -> bool {
        basename_in(path, self.manifest_filenames())
    }

    /// Whether the path's basename is one of this ecosystem's lock files
    pub fn is_lock_file(&self, path: &str) -> bool {
        basename_in(path, self.lock_filenames())
    }

    /// Whether the path is any dependency file of this ecosystem.
    ///
    /// Matching is by basename only, so nested manifests anywhere in the
    /// tree count.
    pub fn owns_file(&self, path: &str) -> bool {
        self.is_manifest(path) || self.is_lock_file(path)
    }
}

fn basename_in(path: &str, names: &[&str]) -> bool {
    Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .map(|n| names.contains(&n))
        .unwrap_or(false)
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Ecosystem label published with a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EcosystemLabel {
    /// No dependency changes
    None,
    /// Only Go changes
    Go,
    /// Only Rust changes
    Rust,
    /// Changes in more than one ecosystem
    Mixed,
    /// Ecosystem could not be inferred
    Unknown,
}

impl EcosystemLabel {
    /// Labels accepted as an explicit force-mode override
    pub const OVERRIDES: &'static [&'static str] = &["go", "rust", "mixed"];

    pub fn as_str(&self) -> &'static str {
        match self {
            EcosystemLabel::None => "none",
            EcosystemLabel::Go => "go",
            EcosystemLabel::Rust => "rust",
            EcosystemLabel::Mixed => "mixed",
            EcosystemLabel::Unknown => "unknown",
        }
    }

    /// Aggregate the ecosystems present in one run.
    ///
    /// Nothing present yields `None`; a single distinct ecosystem yields that
    /// ecosystem; anything else is `Mixed`.
    pub fn aggregate<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = EcosystemLabel>,
    {
        let mut result = EcosystemLabel::None;
        for label in labels {
            result = match (result, label) {
                (EcosystemLabel::None, l) => l,
                (current, l) if current == l => current,
                _ => return EcosystemLabel::Mixed,
            };
        }
        result
    }
}

impl From<Ecosystem> for EcosystemLabel {
    fn from(ecosystem: Ecosystem) -> Self {
        match ecosystem {
            Ecosystem::Go => EcosystemLabel::Go,
            Ecosystem::Rust => EcosystemLabel::Rust,
        }
    }
}

impl FromStr for EcosystemLabel {
    type Err = ConfigError;

    /// Parses an explicit ecosystem override; only `go`, `rust` and `mixed`
    /// are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "go" => Ok(EcosystemLabel::Go),
            "rust" => Ok(EcosystemLabel::Rust),
            "mixed" => Ok(EcosystemLabel::Mixed),
            _ => Err(ConfigError::InvalidEcosystem {
                value: s.to_string(),
                valid: Self::OVERRIDES.join(", "),
            }),
        }
    }
}

impl fmt::Display for EcosystemLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
