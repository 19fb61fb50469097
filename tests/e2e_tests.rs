//! End-to-end tests for the depreview CLI
//!
//! These tests verify:
//! - Force mode output and ecosystem inference
//! - GITHUB_OUTPUT and step summary file contents
//! - JSON output schema
//! - Exit codes and error messages for fatal errors

use assert_cmd::Command;
use git2::{Commit, IndexAddOption, Repository, Signature};
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Variables the Actions runtime may set in the test environment
const ACTION_ENV: &[&str] = &[
    "GITHUB_WORKSPACE",
    "GITHUB_OUTPUT",
    "GITHUB_STEP_SUMMARY",
    "BASE_SHA",
    "HEAD_SHA",
    "INPUT_DEPENDENCY",
    "INPUT_ECOSYSTEM",
    "INPUT_PROJECT_PATH",
    "RUST_LOG",
];

/// Binary command with a clean action environment
fn depreview() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_depreview"));
    for var in ACTION_ENV {
        cmd.env_remove(var);
    }
    cmd.arg("--no-color");
    cmd
}

fn commit_all(repo: &Repository, message: &str) -> String {
    let mut index = repo.index().unwrap();
    index
        .add_all(["*"].iter(), IndexAddOption::DEFAULT, None)
        .unwrap();
    index.write().unwrap();
    let tree = repo.find_tree(index.write_tree().unwrap()).unwrap();
    let sig = Signature::now("Test", "test@example.com").unwrap();
    let parents: Vec<Commit> = repo
        .head()
        .ok()
        .and_then(|h| h.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs)
        .unwrap()
        .to_string()
}

/// Repository with a go.mod bump between two commits
fn create_go_repo() -> (TempDir, String, String) {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let repo = Repository::init(dir.path()).unwrap();

    fs::write(
        dir.path().join("go.mod"),
        "module example.com/app\n\ngo 1.21\n\nrequire github.com/lib/pq v1.10.9\n",
    )
    .unwrap();
    let base = commit_all(&repo, "base");

    fs::write(
        dir.path().join("go.mod"),
        "module example.com/app\n\ngo 1.21\n\nrequire github.com/lib/pq v1.10.10\n",
    )
    .unwrap();
    let head = commit_all(&repo, "bump");

    (dir, base, head)
}

fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}

mod force_mode_tests {
    use super::*;

    #[test]
    fn test_force_go_dependency() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output");

        depreview()
            .arg(dir.path())
            .args(["--dependency", "github.com/lib/pq"])
            .arg("--github-output")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("(forced)"))
            .stdout(predicate::str::contains("dependencies=github.com/lib/pq"));

        assert_eq!(
            read(&output),
            "has_changes=true\necosystem=go\ndependencies=github.com/lib/pq\n"
        );
    }

    #[test]
    fn test_force_rust_inferred_from_cargo_toml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Cargo.toml"), "[package]\nname = \"x\"\n").unwrap();
        let output = dir.path().join("output");

        depreview()
            .arg(dir.path())
            .args(["--dependency", "serde@1.0.197..1.0.210"])
            .arg("--github-output")
            .arg(&output)
            .assert()
            .success();

        assert!(read(&output).contains("ecosystem=rust\n"));
        assert!(read(&output).contains("dependencies=serde@1.0.197..1.0.210\n"));
    }

    #[test]
    fn test_force_mode_from_action_inputs() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("output");

        depreview()
            .env("GITHUB_WORKSPACE", dir.path())
            .env("INPUT_DEPENDENCY", "serde, github.com/lib/pq")
            .env("INPUT_ECOSYSTEM", "mixed")
            .env("GITHUB_OUTPUT", &output)
            .assert()
            .success();

        assert_eq!(
            read(&output),
            "has_changes=true\necosystem=mixed\ndependencies=serde,github.com/lib/pq\n"
        );
    }

    #[test]
    fn test_force_invalid_ecosystem() {
        let dir = tempfile::tempdir().unwrap();

        depreview()
            .arg(dir.path())
            .args(["--dependency", "serde", "--ecosystem", "npm"])
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("invalid ecosystem 'npm'"))
            .stderr(predicate::str::contains("go, rust, mixed"));
    }

    #[test]
    fn test_force_empty_list() {
        let dir = tempfile::tempdir().unwrap();

        depreview()
            .arg(dir.path())
            .args(["--dependency", " , "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("dependency list is empty"));
    }

    #[test]
    fn test_force_json_output() {
        let dir = tempfile::tempdir().unwrap();

        let assert = depreview()
            .arg(dir.path())
            .args(["--dependency", "github.com/lib/pq@v1.10.9..v1.10.10"])
            .args(["--format", "json"])
            .assert()
            .success();

        let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
        let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(json["ecosystem"], "go");
        assert_eq!(json["has_changes"], true);
        assert_eq!(json["mode"], "force");
        assert_eq!(json["dependencies"], "github.com/lib/pq@v1.10.9..v1.10.10");
        assert_eq!(json["changes"][0]["name"], "github.com/lib/pq");
        assert_eq!(json["changes"][0]["old"], "v1.10.9");
        assert_eq!(json["changes"][0]["new"], "v1.10.10");
        assert!(json["generated_at"].is_string());
    }
}

mod auto_mode_tests {
    use super::*;

    #[test]
    fn test_auto_detects_bump() {
        let (dir, base, head) = create_go_repo();
        let output = dir.path().join("output.txt");

        depreview()
            .arg(dir.path())
            .args(["--base", &base, "--head", &head])
            .arg("--github-output")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("v1.10.9 -> v1.10.10"));

        assert_eq!(
            read(&output),
            "has_changes=true\necosystem=go\ndependencies=github.com/lib/pq@v1.10.9..v1.10.10\n"
        );
    }

    #[test]
    fn test_auto_revisions_from_environment() {
        let (dir, base, head) = create_go_repo();

        depreview()
            .arg(dir.path())
            .env("BASE_SHA", &base)
            .env("HEAD_SHA", &head)
            .arg("--quiet")
            .assert()
            .success()
            .stdout("github.com/lib/pq@v1.10.9..v1.10.10\n");
    }

    #[test]
    fn test_auto_no_changes() {
        let (dir, _base, head) = create_go_repo();
        let output = dir.path().join("output.txt");

        depreview()
            .arg(dir.path())
            .args(["--base", &head, "--head", &head])
            .arg("--github-output")
            .arg(&output)
            .assert()
            .success()
            .stdout(predicate::str::contains("No dependency changes detected."));

        assert_eq!(
            read(&output),
            "has_changes=false\necosystem=none\ndependencies=\n"
        );
    }

    #[test]
    fn test_auto_writes_step_summary() {
        let (dir, base, head) = create_go_repo();
        let summary = dir.path().join("summary.md");

        depreview()
            .arg(dir.path())
            .args(["--base", &base, "--head", &head])
            .arg("--step-summary")
            .arg(&summary)
            .assert()
            .success();

        let content = read(&summary);
        assert!(content.contains("<!-- depreview:dependency-changes -->"));
        assert!(content.contains("- github.com/lib/pq: v1.10.9 -> v1.10.10 (updated)"));
    }

    #[test]
    fn test_auto_markdown_format() {
        let (dir, base, head) = create_go_repo();

        depreview()
            .arg(dir.path())
            .args(["--base", &base, "--head", &head, "--format", "markdown"])
            .assert()
            .success()
            .stdout(predicate::str::starts_with("## Dependency changes"));
    }
}

mod exit_code_tests {
    use super::*;

    #[test]
    fn test_not_a_repository() {
        let dir = tempfile::tempdir().unwrap();

        depreview()
            .arg(dir.path())
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("failed to open git repository"));
    }

    #[test]
    fn test_unknown_revision_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        fs::write(dir.path().join("go.mod"), "module m\n").unwrap();
        commit_all(&repo, "only");

        depreview()
            .arg(dir.path())
            .assert()
            .failure()
            .stderr(predicate::str::contains("could not determine the base revision"));
    }

    #[test]
    fn test_help() {
        depreview()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains("--dependency"));
    }

    #[test]
    fn test_version() {
        depreview()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("depreview"));
    }
}
