//! Force mode: report caller-supplied dependencies without diffing
//!
//! Ecosystem inference per identifier:
//! - a name with a `.` before its first `/` looks like a Go module path
//! - otherwise a Cargo.toml near the working tree root means Rust
//! - otherwise Go

use crate::domain::{parse_change, EcosystemLabel, EcosystemReport};
use crate::error::ConfigError;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// How many directory levels below the root are searched for Cargo.toml
const CARGO_TOML_SEARCH_DEPTH: usize = 3;

/// Build a force-mode report from a comma-separated identifier list
pub fn resolve_forced(
    dependencies: &str,
    ecosystem: Option<&str>,
    root: &Path,
) -> Result<EcosystemReport, ConfigError> {
    let identifiers: Vec<&str> = dependencies
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    if identifiers.is_empty() {
        return Err(ConfigError::EmptyDependencyList);
    }

    let explicit = match ecosystem.map(str::trim).filter(|e| !e.is_empty()) {
        Some(value) => Some(value.parse::<EcosystemLabel>()?),
        None => None,
    };

    let mut cargo_probe: Option<bool> = None;
    let mut infer = |id: &str| -> EcosystemLabel {
        match explicit {
            Some(EcosystemLabel::Mixed) | None => {
                infer_ecosystem(id, || *cargo_probe.get_or_insert_with(|| has_cargo_toml(root)))
            }
            Some(label) => label,
        }
    };

    let tagged: Vec<(EcosystemLabel, String)> = identifiers
        .iter()
        .map(|id| (infer(id), id.to_string()))
        .collect();

    let label = explicit
        .unwrap_or_else(|| EcosystemLabel::aggregate(tagged.iter().map(|(label, _)| *label)));

    info!(
        ecosystem = %label,
        explicit = explicit.is_some(),
        dependencies = identifiers.len(),
        "force mode"
    );
    Ok(EcosystemReport::forced(label, tagged))
}

/// Infer the ecosystem of one identifier.
///
/// `has_cargo_toml` is only consulted when the name does not look like a
/// Go module path.
pub fn infer_ecosystem(identifier: &str, has_cargo_toml: impl FnOnce() -> bool) -> EcosystemLabel {
    let (name, _, _) = parse_change(identifier);
    if looks_like_go_module(&name) {
        EcosystemLabel::Go
    } else if has_cargo_toml() {
        EcosystemLabel::Rust
    } else {
        debug!(identifier, "no Cargo.toml found, assuming go");
        EcosystemLabel::Go
    }
}

/// Domain-like first path segment, e.g. `github.com/lib/pq`
fn looks_like_go_module(name: &str) -> bool {
    match name.find('/') {
        Some(slash) if slash > 0 => name[..slash].contains('.'),
        _ => false,
    }
}

/// Whether a Cargo.toml exists in `root` or up to three levels below it
pub fn has_cargo_toml(root: &Path) -> bool {
    search_cargo_toml(root, CARGO_TOML_SEARCH_DEPTH)
}

fn search_cargo_toml(dir: &Path, depth_left: usize) -> bool {
    if dir.join("Cargo.toml").is_file() {
        return true;
    }
    if depth_left == 0 {
        return false;
    }

    let Ok(entries) = fs::read_dir(dir) else {
        return false;
    };

    entries.flatten().any(|entry| {
        let path = entry.path();
        let hidden = entry.file_name().to_string_lossy().starts_with('.');
        !hidden && path.is_dir() && search_cargo_toml(&path, depth_left - 1)
    })
}
