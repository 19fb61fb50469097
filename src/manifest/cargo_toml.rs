//! Cargo.toml parser for Rust projects
//!
//! Handles:
//! - dependencies
//! - dev-dependencies
//! - build-dependencies
//! - workspace.dependencies
//! - target-specific tables (`[target.'cfg(..)'.dependencies]` and variants)
//! - Inline table format: { version = "1.0" }
//!
//! Entries without a version (path, git or `workspace = true`) are recorded
//! with an unknown version.

use crate::domain::{Ecosystem, ManifestVersions};
use crate::error::ParseError;
use crate::manifest::ManifestParser;
use toml::{Table, Value};

/// Dependency tables read at the top level and under each `[target.*]`
const DEPENDENCY_TABLES: &[&str] = &["dependencies", "dev-dependencies", "build-dependencies"];

/// Parser for Cargo.toml files
pub struct CargoTomlParser;

impl ManifestParser for CargoTomlParser {
    fn parse(&self, content: &str) -> Result<ManifestVersions, ParseError> {
        let toml: Table =
            toml::from_str(content).map_err(|e| ParseError::toml("Cargo.toml", e.to_string()))?;

        let mut versions = ManifestVersions::new();

        for key in DEPENDENCY_TABLES {
            if let Some(deps) = toml.get(*key).and_then(|d| d.as_table()) {
                collect_versions(deps, &mut versions);
            }
        }

        if let Some(deps) = toml
            .get("workspace")
            .and_then(|w| w.get("dependencies"))
            .and_then(|d| d.as_table())
        {
            collect_versions(deps, &mut versions);
        }

        if let Some(target) = toml.get("target").and_then(|t| t.as_table()) {
            for target_config in target.values() {
                for key in DEPENDENCY_TABLES {
                    if let Some(deps) = target_config.get(*key).and_then(|d| d.as_table()) {
                        collect_versions(deps, &mut versions);
                    }
                }
            }
        }

        Ok(versions)
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Rust
    }
}

fn collect_versions(deps: &Table, output: &mut ManifestVersions) {
    for (name, value) in deps {
        let version = match value {
            // Simple string: package = "1.0.0"
            Value::String(s) => Some(s.clone()),
            // Inline table: package = { version = "1.0.0", features = [...] }
            Value::Table(t) => t.get("version").and_then(|v| v.as_str()).map(String::from),
            _ => continue,
        };
        output.insert(name.clone(), version);
    }
}
