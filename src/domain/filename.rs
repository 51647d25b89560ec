//! Filename checks applied before a document is written.

use std::path::{Component, Path, PathBuf, is_separator};

/// Characters that may not appear in the final path segment of a document filename.
pub const PROHIBITED_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Final path segment of `filename`, ignoring trailing separators.
///
/// Splits on the host's path separators only, so on Unix a `\` stays part of the basename.
pub fn basename(filename: &str) -> &str {
    let trimmed = filename.trim_end_matches(is_separator);
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

fn is_prohibited(c: char) -> bool {
    PROHIBITED_CHARS.contains(&c) || ('\u{0}'..='\u{1f}').contains(&c)
}

/// Validates the basename of a document filename.
///
/// Only the final segment is checked; directory segments may contain anything
/// the host filesystem accepts.
pub fn validate_basename(filename: &str) -> bool {
    !basename(filename).chars().any(is_prohibited)
}

/// Collapse `.` and `..` segments without touching the filesystem.
///
/// `..` never climbs above the root or prefix of an absolute path.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(Component::ParentDir),
            },
            other => out.push(other),
        }
    }
    out
}
