//! go.sum parser
//!
//! go.sum format: `<module path> <version>[/go.mod] <hash>`. The `/go.mod`
//! lines only checksum the module's go.mod and are skipped so they do not
//! add a second entry for the same version.

use crate::domain::{Ecosystem, LockVersions};
use crate::error::ParseError;
use crate::lockfile::LockfileParser;

/// Parser for go.sum files
pub struct GoSumParser;

impl LockfileParser for GoSumParser {
    fn parse(&self, content: &str) -> Result<LockVersions, ParseError> {
        let mut modules = LockVersions::new();

        for line in content.lines() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() < 3 {
                continue;
            }

            let (module, version) = (parts[0], parts[1]);
            if version.ends_with("/go.mod") {
                continue;
            }

            modules
                .entry(module.to_string())
                .or_default()
                .insert(version.to_string());
        }

        Ok(modules)
    }

    fn ecosystem(&self) -> Ecosystem {
        Ecosystem::Go
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> LockVersions {
        GoSumParser.parse(content).unwrap()
    }

    #[test]
    fn test_parse_go_sum_basic() {
        let content = r#"
github.com/lib/pq v1.10.9 h1:abc123=
golang.org/x/crypto v0.18.0 h1:def456=
"#;

        let modules = parse(content);
        assert_eq!(modules.len(), 2);
        assert!(modules["github.com/lib/pq"].contains("v1.10.9"));
        assert!(modules["golang.org/x/crypto"].contains("v0.18.0"));
    }

    #[test]
    fn test_parse_skips_go_mod_checksums() {
        let content = r#"
github.com/lib/pq v1.10.9 h1:abc123=
github.com/lib/pq v1.10.9/go.mod h1:xyz789=
golang.org/x/net v0.20.0/go.mod h1:only=
"#;

        let modules = parse(content);
        assert_eq!(modules["github.com/lib/pq"].len(), 1);
        assert!(!modules.contains_key("golang.org/x/net"));
    }

    #[test]
    fn test_parse_multiple_versions() {
        let content = r#"
golang.org/x/sys v0.15.0 h1:one=
golang.org/x/sys v0.16.0 h1:two=
"#;

        let modules = parse(content);
        let versions: Vec<&str> = modules["golang.org/x/sys"]
            .iter()
            .map(String::as_str)
            .collect();
        assert_eq!(versions, vec!["v0.15.0", "v0.16.0"]);
    }

    #[test]
    fn test_parse_skips_short_lines() {
        let modules = parse("github.com/lib/pq v1.10.9\n\n   \n");
        assert!(modules.is_empty());
    }

    #[test]
    fn test_ecosystem() {
        assert_eq!(GoSumParser.ecosystem(), Ecosystem::Go);
    }
}
