//! Application error types using thiserror
//!
//! Error hierarchy:
//! - ParseError: A manifest or lock file could not be parsed
//! - VcsError: Repository access and revision resolution failures
//! - ConfigError: Invalid CLI / action input
//! - IoError: File system operation failures

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Dependency file parsing errors
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Version control errors
    #[error(transparent)]
    Vcs(#[from] VcsError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// IO related errors
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Errors raised while parsing a dependency file.
///
/// These never abort a run: callers log them and treat the file as
/// contributing no entries.
#[derive(Error, Debug)]
pub enum ParseError {
    /// TOML parsing error (Cargo.toml, Cargo.lock)
    #[error("failed to parse TOML in {file}: {message}")]
    Toml { file: &'static str, message: String },
}

impl ParseError {
    /// Creates a new Toml error
    pub fn toml(file: &'static str, message: impl Into<String>) -> Self {
        ParseError::Toml {
            file,
            message: message.into(),
        }
    }
}

/// Which side of the revision range an error refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevisionSide {
    Base,
    Head,
}

impl std::fmt::Display for RevisionSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RevisionSide::Base => f.write_str("base"),
            RevisionSide::Head => f.write_str("head"),
        }
    }
}

/// Errors related to the version control collaborator
#[derive(Error, Debug)]
pub enum VcsError {
    /// Repository could not be opened
    #[error("failed to open git repository at {path}: {message}")]
    Open { path: PathBuf, message: String },

    /// A revision could not be determined by any fallback
    #[error("could not determine the {side} revision; pass it explicitly with --{side}")]
    UnresolvedRevision { side: RevisionSide },
}

impl VcsError {
    /// Creates a new Open error
    pub fn open(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        VcsError::Open {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new UnresolvedRevision error
    pub fn unresolved(side: RevisionSide) -> Self {
        VcsError::UnresolvedRevision { side }
    }
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Explicit ecosystem is not a recognized label
    #[error("invalid ecosystem '{value}': expected one of {valid}")]
    InvalidEcosystem { value: String, valid: String },

    /// Force mode was requested with nothing to review
    #[error("dependency list is empty: provide at least one dependency identifier")]
    EmptyDependencyList,

    /// Invalid path
    #[error("invalid path '{path}': {message}")]
    InvalidPath { path: PathBuf, message: String },
}

/// Errors related to IO operations
#[derive(Error, Debug)]
pub enum IoError {
    /// Failed to write an output file
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    /// Creates a new Write error
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IoError::Write {
            path: path.into(),
            source,
        }
    }
}
