use std::fs;
use std::path::{Path, PathBuf};

use crate::app::save;
use crate::domain::{AppError, StoreConfig};
use crate::ports::DocumentStore;

/// Filesystem-backed document store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FilesystemDocumentStore {
    root: PathBuf,
    default_extension: String,
}

impl FilesystemDocumentStore {
    /// Create a store that resolves relative filenames against `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root, default_extension: StoreConfig::default().documents.default_extension }
    }

    /// Create a store for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Create a store from configuration.
    ///
    /// A relative configured root is taken relative to the current directory.
    pub fn from_config(config: &StoreConfig) -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        let root = match &config.documents.root {
            Some(root) => cwd.join(root),
            None => cwd,
        };
        Ok(Self { root, default_extension: config.documents.default_extension.clone() })
    }

    /// Extension attached by [`Self::save_titled`].
    pub fn default_extension(&self) -> &str {
        &self.default_extension
    }

    /// Validate and write `content` to `filename`, creating parent directories.
    pub fn save(&self, filename: impl AsRef<Path>, content: &str) -> Result<(), AppError> {
        save::save_with(self, filename.as_ref(), content)
    }

    /// Save under `slug(title)` plus the default extension; returns the written path.
    pub fn save_titled(&self, title: &str, content: &str) -> Result<PathBuf, AppError> {
        save::save_titled_with(self, title, &self.default_extension, content)
    }
}

impl DocumentStore for FilesystemDocumentStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        fs::create_dir_all(path)?;
        Ok(())
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        Ok(fs::read_to_string(path)?)
    }
}
