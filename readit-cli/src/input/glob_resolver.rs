//! File pattern resolution using glob

use anyhow::{Context, Result};
use glob::glob;
use std::path::PathBuf;

use crate::error::CliError;

/// Resolve file patterns to actual file paths
///
/// Matches of each pattern are sorted; patterns keep the order they were
/// given in, which becomes the reading order. Duplicates are dropped.
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = Vec::new();

    for pattern in patterns {
        let paths =
            glob(pattern).map_err(|e| CliError::InvalidPattern(format!("{pattern} ({e})")))?;

        let mut matched = Vec::new();
        for path_result in paths {
            let path =
                path_result.with_context(|| format!("Error resolving pattern: {}", pattern))?;

            if path.is_file() {
                matched.push(path);
            }
        }
        matched.sort();

        for path in matched {
            if !files.contains(&path) {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn pattern(dir: &TempDir, tail: &str) -> String {
        dir.path().join(tail).display().to_string()
    }

    #[test]
    fn test_pattern_order_and_dedup() {
        let dir = TempDir::new().unwrap();
        for name in ["ch02.xhtml", "ch01.xhtml", "intro.txt"] {
            fs::write(dir.path().join(name), "x").unwrap();
        }

        let files = resolve_patterns(&[
            pattern(&dir, "intro.txt"),
            pattern(&dir, "ch*.xhtml"),
            pattern(&dir, "ch01.xhtml"),
        ])
        .unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["intro.txt", "ch01.xhtml", "ch02.xhtml"]);
    }

    #[test]
    fn test_no_matches() {
        let dir = TempDir::new().unwrap();
        let err = resolve_patterns(&[pattern(&dir, "*.epub")]).unwrap_err();
        assert!(err.to_string().contains("No files found"));
    }

    #[test]
    fn test_invalid_pattern() {
        let err = resolve_patterns(&["[unclosed".to_string()]).unwrap_err();
        assert!(err.to_string().starts_with("Invalid file pattern"));
    }
}
