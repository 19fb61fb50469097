//! Cargo.lock parser
//!
//! Cargo.lock is TOML with a `[[package]]` array containing name and version.
//! Entries missing either field are skipped.

use crate::domain::{Ecosystem, LockVersions};
use crate::error::ParseError;
use crate::lockfile::LockfileParser;
use serde::Deserialize;

/// Parser for Cargo.lock files
pub struct CargoLockParser;

#[derive(Deserialize)]
struct CargoLockfile {
    #[serde(default)]
    package: Vec<CargoPackage>,
}

#[derive(Deserialize)]
struct CargoPackage {
    name: Option<String>,
    version: Option<String>,
}

impl LockfileParser for CargoLockParser {
    fn parse(&self, content: &str) -> Result<LockVersions, ParseError> {
        let lockfile: CargoLockfile =
            toml::from_str(content).map_err(|e| ParseError::toml("Cargo.lock", e.to_string()))?;

        let mut packages = LockVersions::new();
        for pkg in lockfile.package {
            match (pkg.name, pkg.version) {
                (Some(name), Some(version)) if !name.is_empty() && !version.is_empty() => {
                    packages.entry(name).or_default().insert(version);
                }
                _ => continue,
            }
        }

        Ok(packages)
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Rust
    }
}
