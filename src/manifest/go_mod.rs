//! go.mod parser for Go projects
//!
//! Handles:
//! - single-line `require module version` statements
//! - `require ( ... )` blocks
//! - trailing comments such as `// indirect`
//!
//! Only the first two whitespace-separated tokens of an entry are used, and
//! the version token must start with `v`.

use crate::domain::{Ecosystem, ManifestVersions};
use crate::error::ParseError;
use crate::manifest::ManifestParser;
use regex::Regex;
use std::sync::LazyLock;

/// Parser for go.mod files
pub struct GoModParser;

// Opening of a require block: `require (`
static REQUIRE_BLOCK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^require\s*\(").expect("valid regex"));

// Single require: `require module/path v1.2.3`
static SINGLE_REQUIRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^require\s+(\S+)\s+(\S+)").expect("valid regex"));

impl ManifestParser for GoModParser {
    fn parse(&self, content: &str) -> Result<ManifestVersions, ParseError> {
        let mut versions = ManifestVersions::new();
        let mut in_require_block = false;

        for line in content.lines() {
            let trimmed = line.trim();

            if trimmed.is_empty() || trimmed.starts_with("//") {
                continue;
            }

            if trimmed == ")" {
                in_require_block = false;
                continue;
            }

            if REQUIRE_BLOCK_RE.is_match(trimmed) {
                in_require_block = true;
                continue;
            }

            if !in_require_block {
                if let Some(caps) = SINGLE_REQUIRE_RE.captures(trimmed) {
                    insert_versioned(&mut versions, &caps[1], &caps[2]);
                }
                continue;
            }

            let mut tokens = trimmed.split_whitespace();
            if let (Some(module), Some(version)) = (tokens.next(), tokens.next()) {
                insert_versioned(&mut versions, module, version);
            }
        }

        Ok(versions)
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }
}

fn insert_versioned(versions: &mut ManifestVersions, module: &str, version: &str) {
    if version.starts_with('v') {
        versions.insert(module.to_string(), Some(version.to_string()));
    }
}
