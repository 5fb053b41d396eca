use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::core::error::LoadError;

/// Suffix every scanned source file must carry.
pub const SOURCE_SUFFIX: &str = ".ts";

/// Suffix of declaration-only files (no emitted code).
pub const DECLARATION_SUFFIX: &str = ".d.ts";

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

/// Compiled exclusion list.
struct IgnoreSet {
    literal_paths: Vec<PathBuf>,
    patterns: Vec<Pattern>,
}

impl IgnoreSet {
    fn new(base_dir: &Path, ignore_patterns: &[String]) -> Result<Self, LoadError> {
        let mut literal_paths = Vec::new();
        let mut patterns = Vec::new();

        for p in ignore_patterns {
            if is_glob_pattern(p) {
                let pattern = Pattern::new(p).map_err(|e| LoadError::InvalidPattern {
                    pattern: p.clone(),
                    message: e.to_string(),
                })?;
                patterns.push(pattern);
            } else {
                literal_paths.push(base_dir.join(p));
            }
        }

        Ok(Self {
            literal_paths,
            patterns,
        })
    }

    /// Patterns match either the full path or the path relative to the base dir,
    /// so both `**/generated/**` and `generated/*.ts` work.
    fn is_ignored(&self, base_dir: &Path, path: &Path) -> bool {
        if self.literal_paths.iter().any(|p| path.starts_with(p)) {
            return true;
        }

        let relative = path.strip_prefix(base_dir).unwrap_or(path);
        self.patterns
            .iter()
            .any(|p| p.matches_path(path) || p.matches_path(relative))
    }
}

/// Resolve every `.ts` file under `base_dir` that no ignore pattern excludes.
///
/// Entries are visited in file-name order, so the returned list is the
/// file-enumeration order of the whole run.
pub fn scan_files(
    base_dir: &Path,
    ignore_patterns: &[String],
    verbose: bool,
) -> Result<Vec<PathBuf>, LoadError> {
    if !base_dir.is_dir() {
        return Err(LoadError::MissingRoot(base_dir.to_path_buf()));
    }

    let ignore = IgnoreSet::new(base_dir, ignore_patterns)?;
    let mut files = Vec::new();

    for entry in WalkDir::new(base_dir).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();

        if ignore.is_ignored(base_dir, path) {
            continue;
        }

        if entry.file_type().is_file() && is_source_file(path) {
            files.push(path.to_path_buf());
        }
    }

    if files.is_empty() {
        return Err(LoadError::NoSourceFiles(base_dir.to_path_buf()));
    }

    Ok(files)
}

pub fn is_source_file(path: &Path) -> bool {
    path.to_str().is_some_and(|p| p.ends_with(SOURCE_SUFFIX))
}

pub fn is_declaration_file(path: &Path) -> bool {
    path.to_str().is_some_and(|p| p.ends_with(DECLARATION_SUFFIX))
}
