//! Lock file parsing
//!
//! Lock files pin resolved versions, including transitive dependencies,
//! and may hold several versions of one package at the same time:
//! - go.sum (`module version hash` lines)
//! - Cargo.lock (`[[package]]` tables)

mod cargo_lock;
mod go_sum;

pub use cargo_lock::CargoLockParser;
pub use go_sum::GoSumParser;

use crate::domain::{Ecosystem, LockVersions};
use crate::error::ParseError;
use tracing::warn;

/// Trait for parsing lock files
pub trait LockfileParser {
    /// Parse resolved package versions from lock file content
    fn parse(&self, content: &str) -> Result<LockVersions, ParseError>;

    /// Returns the ecosystem this parser handles
    fn ecosystem(&self) -> Ecosystem;
}

/// Get a lock file parser for the specified ecosystem
pub fn get_parser(ecosystem: Ecosystem) -> Box<dyn LockfileParser> {
    match ecosystem {
        Ecosystem::Go => Box::new(GoSumParser),
        Ecosystem::Rust => Box::new(CargoLockParser),
    }
}

/// Parse lock file content, logging and swallowing parse failures
pub fn parse_lenient(parser: &dyn LockfileParser, path: &str, content: &str) -> LockVersions {
    if content.trim().is_empty() {
        return LockVersions::new();
    }
    parser.parse(content).unwrap_or_else(|e| {
        warn!(path, error = %e, "ignoring unparseable lock file");
        LockVersions::new()
    })
}
