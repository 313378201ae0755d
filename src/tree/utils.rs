//! Shared utility functions for tree walking

use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use ignore::WalkBuilder;
use tracing::debug;

/// Size units, in binary multiples of 1024. Nothing beyond TB is used.
const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a size in bytes to human-readable format.
///
/// The value is rounded to two decimals, half away from zero, and printed
/// without trailing zeros: `1024` is `"1 KB"`, `1536` is `"1.5 KB"`.
pub fn format_size(bytes: u64) -> String {
    let mut unit = 0;
    let mut scale: u64 = 1;
    while unit < UNITS.len() - 1 && bytes / scale >= 1024 {
        scale *= 1024;
        unit += 1;
    }

    let value = bytes as f64 / scale as f64;
    let rounded = (value * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[unit])
}

/// Format a possibly negative byte count; negatives clamp to zero.
pub fn format_size_signed(bytes: i64) -> String {
    format_size(bytes.max(0) as u64)
}

/// Total bytes of every regular file anywhere beneath `path`.
///
/// The walk is unbounded in depth. Symlinks to files are counted at their
/// target's size, but symlinked folders are never entered, so nothing outside
/// the subtree is summed. Unreadable parts of the tree contribute nothing, and
/// a path that cannot be walked at all yields 0.
pub fn subtree_size(path: &Path, ignore_patterns: &[String]) -> u64 {
    let patterns = ignore_patterns.to_vec();
    let walker = WalkBuilder::new(path)
        .standard_filters(false)
        .follow_links(false)
        .filter_entry(move |entry| {
            entry.depth() == 0 || !should_ignore_path(entry.path(), &patterns)
        })
        .build();

    let mut total: u64 = 0;
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                debug!(root = %path.display(), error = %err, "skipping unreadable entry while sizing");
                continue;
            }
        };

        let Some(file_type) = entry.file_type() else {
            continue;
        };

        if file_type.is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(meta) if meta.is_file() => total = total.saturating_add(meta.len()),
                Ok(_) => {}
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "cannot resolve link");
                }
            }
        } else if file_type.is_file() {
            match entry.metadata() {
                Ok(meta) => total = total.saturating_add(meta.len()),
                Err(err) => {
                    debug!(path = %entry.path().display(), error = %err, "cannot stat file");
                }
            }
        }
    }

    total
}

/// Path of `path` relative to `base`, or `path` itself when it lies outside.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Check if a path should be ignored based on name and ignore patterns.
pub fn should_ignore_path(path: &Path, ignore_patterns: &[String]) -> bool {
    if ignore_patterns.is_empty() {
        return false;
    }

    let name = path
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    ignore_patterns
        .iter()
        .any(|pattern| name == *pattern || glob_match(pattern, &name))
}

/// Match a glob pattern against a name.
pub fn glob_match(pattern: &str, name: &str) -> bool {
    Pattern::new(pattern)
        .map(|p| p.matches(name))
        .unwrap_or(false)
}
