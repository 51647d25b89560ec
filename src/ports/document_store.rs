//! Filesystem seam for document saves.
//!
//! The save algorithm validates and resolves paths itself; implementations
//! only perform the primitive operations against their backing storage.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, normalize_lexically};

/// Port for the storage operations a document save needs.
///
/// Relative paths are resolved against `root()` with `.` and `..` collapsed;
/// absolute paths are used as given.
pub trait DocumentStore {
    /// Directory relative filenames resolve against.
    fn root(&self) -> &Path;

    /// Resolve `path` to an absolute path.
    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            normalize_lexically(&self.root().join(path))
        }
    }

    /// Check whether a file or directory exists at an absolute path.
    fn exists(&self, path: &Path) -> bool;

    /// Create a directory and all missing ancestors. Existing directories are not an error.
    fn create_dir_all(&self, path: &Path) -> Result<(), AppError>;

    /// Write UTF-8 text, truncating any existing file.
    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError>;

    /// Read a file as UTF-8 text.
    fn read_text(&self, path: &Path) -> Result<String, AppError>;
}
