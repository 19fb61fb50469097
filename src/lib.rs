//! depreview - changed dependency detection for Go and Rust projects
//!
//! Given two revisions of a repository, this library reports which
//! dependencies changed, using the manifest and lock files of each ecosystem:
//! - Go (go.mod, go.sum)
//! - Rust (Cargo.toml, Cargo.lock)
//!
//! A force mode reports caller-supplied dependencies without diffing.

pub mod cli;
pub mod config;
pub mod detector;
pub mod diff;
pub mod domain;
pub mod error;
pub mod extractor;
pub mod force;
pub mod lockfile;
pub mod manifest;
pub mod output;
pub mod vcs;
