//! file-easy: persist user-authored text under generated, filesystem-safe names.
//!
//! Three independent operations, composed by the caller:
//! - [`slug`] turns a title into a `[a-z0-9_-]` identifier.
//! - [`set_default_extension`] attaches an extension when a filename has none.
//! - [`save_document`] writes text to a file, creating missing parent directories.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;

pub use app::dynamic::{
    save_document_value, save_document_value_at, set_default_extension_value, slug_value,
};
pub use domain::{AppError, ErrorKind, StoreConfig, is_slug, set_default_extension, slug};
pub use ports::DocumentStore;
pub use services::{FilesystemDocumentStore, MemoryDocumentStore};

/// Save `content` to `filename`, resolving relative paths against the current directory.
///
/// Missing parent directories are created and an existing file is replaced.
/// Fails with a validation error when the basename contains `< > : " / \ | ? *`
/// or an ASCII control character.
pub fn save_document(filename: impl AsRef<Path>, content: &str) -> Result<(), AppError> {
    let store = FilesystemDocumentStore::current()?;
    app::save::save_with(&store, filename.as_ref(), content)
}

/// Save `content` to `filename`, resolving relative paths against `root`.
pub fn save_document_at(
    root: &Path,
    filename: impl AsRef<Path>,
    content: &str,
) -> Result<(), AppError> {
    let store = FilesystemDocumentStore::new(root.to_path_buf());
    app::save::save_with(&store, filename.as_ref(), content)
}
