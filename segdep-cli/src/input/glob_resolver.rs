//! Corpus file resolution using glob

use crate::error::CliError;
use anyhow::{Context, Result};
use glob::glob;
use std::collections::HashSet;
use std::path::PathBuf;

/// Resolve corpus patterns to file paths
///
/// Sentence order follows file order, so patterns keep the order they were
/// given in and the matches of each pattern are sorted. A file matched by
/// more than one pattern is read once. Every pattern must match at least one
/// file.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut seen = HashSet::new();

    for pattern in patterns {
        let mut matched = Vec::new();
        let paths = glob(pattern)
            .map_err(|e| CliError::InvalidPattern(format!("{pattern}: {e}")))?;

        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                matched.push(path);
            }
        }

        if matched.is_empty() {
            return Err(CliError::FileNotFound(pattern.clone()).into());
        }

        matched.sort();
        files.extend(matched.into_iter().filter(|path| seen.insert(path.clone())));
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, name: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, "[]").unwrap();
        path
    }

    fn pattern(dir: &TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_matches_sorted_within_pattern() {
        let dir = TempDir::new().unwrap();
        let b = touch(&dir, "b.json");
        let a = touch(&dir, "a.json");

        let files = resolve_patterns(&[pattern(&dir, "*.json")]).unwrap();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_pattern_order_preserved_and_deduplicated() {
        let dir = TempDir::new().unwrap();
        let a = touch(&dir, "a.json");
        let z = touch(&dir, "z.json");

        let files =
            resolve_patterns(&[pattern(&dir, "z.json"), pattern(&dir, "*.json")]).unwrap();
        assert_eq!(files, vec![z, a]);
    }

    #[test]
    fn test_unmatched_pattern_is_an_error() {
        let dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&dir, "missing.conllu")]).unwrap_err();
        assert!(err.to_string().starts_with("File not found:"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[invalid".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern:"));
    }
}
