//! Entry points for untyped arguments.
//!
//! Callers holding JSON values (front matter, request payloads) get the same
//! runtime type checks a dynamically typed caller would: a non-string argument
//! is reported before any transformation or side effect.

use std::path::Path;

use serde_json::Value;

use crate::app::save;
use crate::domain::{self, AppError};
use crate::services::FilesystemDocumentStore;

/// [`domain::slug()`] for an untyped input.
pub fn slug_value(input: &Value) -> Result<String, AppError> {
    let input = input.as_str().ok_or_else(AppError::slug_input_not_string)?;
    Ok(domain::slug(input))
}

/// [`domain::set_default_extension()`] for untyped inputs.
///
/// Checks, in order: `filename` is a string, `extension` is a string, then the
/// content rules of the typed function.
pub fn set_default_extension_value(filename: &Value, extension: &Value) -> Result<String, AppError> {
    let filename = filename.as_str().ok_or_else(AppError::filename_not_string)?;
    let extension = extension.as_str().ok_or_else(AppError::extension_not_string)?;
    domain::set_default_extension(filename, extension)
}

/// Save untyped arguments relative to the current directory.
pub fn save_document_value(filename: &Value, content: &Value) -> Result<(), AppError> {
    let (filename, content) = document_arguments(filename, content)?;
    let store = FilesystemDocumentStore::current()?;
    save::save_with(&store, Path::new(filename), content)
}

/// Save untyped arguments relative to `root`.
pub fn save_document_value_at(root: &Path, filename: &Value, content: &Value) -> Result<(), AppError> {
    let (filename, content) = document_arguments(filename, content)?;
    let store = FilesystemDocumentStore::new(root.to_path_buf());
    save::save_with(&store, Path::new(filename), content)
}

fn document_arguments<'a>(
    filename: &'a Value,
    content: &'a Value,
) -> Result<(&'a str, &'a str), AppError> {
    match (filename.as_str(), content.as_str()) {
        (Some(filename), Some(content)) => Ok((filename, content)),
        _ => Err(AppError::document_arguments_not_strings()),
    }
}
