//! Core domain models for depreview
//!
//! This module contains the fundamental types used throughout the application:
//! - Ecosystem types and the published ecosystem label
//! - Parsed manifest and lock file version maps
//! - Version changes and their canonical string format
//! - The per-ecosystem change set and the aggregate report

mod change_set;
mod ecosystem;
mod package_map;
mod report;
mod version_change;

pub use change_set::DependencyChangeSet;
pub use ecosystem::{Ecosystem, EcosystemLabel};
pub use package_map::{LockVersions, ManifestVersions};
pub use report::{DetectionMode, EcosystemReport, ReportedChange};
pub use version_change::{parse_change, ChangeKind, VersionChange};
