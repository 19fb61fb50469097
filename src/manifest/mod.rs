//! Manifest parsing
//!
//! This module provides functionality to:
//! - Parse declared dependency versions from go.mod
//! - Parse declared dependency versions from Cargo.toml
//! - Degrade malformed manifests to an empty map with a logged warning

mod cargo_toml;
mod go_mod;

pub use cargo_toml::CargoTomlParser;
pub use go_mod::GoModParser;

use crate::domain::{Ecosystem, ManifestVersions};
use crate::error::ParseError;
use tracing::warn;

/// Trait for parsing manifest files
pub trait ManifestParser {
    /// Parse declared dependency versions from manifest content
    fn parse(&self, content: &str) -> Result<ManifestVersions, ParseError>;

    /// Returns the ecosystem this parser handles
    fn ecosystem(&self) -> Ecosystem;
}

/// Get a manifest parser for the specified ecosystem
pub fn get_parser(ecosystem: Ecosystem) -> Box<dyn ManifestParser> {
    match ecosystem {
        Ecosystem::Go => Box::new(GoModParser),
        Ecosystem::Rust => Box::new(CargoTomlParser),
    }
}

/// Parse manifest content, logging and swallowing parse failures.
///
/// Empty content (file absent at that revision) parses to an empty map.
pub fn parse_lenient(parser: &dyn ManifestParser, path: &str, content: &str) -> ManifestVersions {
    if content.trim().is_empty() {
        return ManifestVersions::new();
    }
    parser.parse(content).unwrap_or_else(|e| {
        warn!(path, error = %e, "ignoring unparseable manifest");
        ManifestVersions::new()
    })
}
