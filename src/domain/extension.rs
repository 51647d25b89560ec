//! Default file extensions.

use std::path::Path;

use crate::domain::AppError;

/// Validates an extension string.
///
/// Checks:
/// - Starts with a single '.'
/// - Followed by at least one character
/// - Remaining characters are ASCII alphanumeric
pub fn validate_extension(extension: &str) -> bool {
    match extension.strip_prefix('.') {
        Some(rest) => !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric()),
        None => false,
    }
}

/// Whether the last path segment of `filename` carries a non-empty extension.
///
/// Dots in directory names and a leading dot on the final segment (`.env`) do not count.
pub fn has_extension(filename: &str) -> bool {
    Path::new(filename).extension().is_some_and(|ext| !ext.is_empty())
}

/// Append `extension` to `filename` unless it already has one.
///
/// `extension` must include its leading dot (e.g. `.txt`); it is appended verbatim.
/// An existing extension is never replaced.
pub fn set_default_extension(filename: &str, extension: &str) -> Result<String, AppError> {
    if filename.trim().is_empty() {
        return Err(AppError::empty_filename());
    }
    if !validate_extension(extension) {
        return Err(AppError::malformed_extension());
    }

    if has_extension(filename) {
        Ok(filename.to_string())
    } else {
        Ok(format!("{}{}", filename, extension))
    }
}
