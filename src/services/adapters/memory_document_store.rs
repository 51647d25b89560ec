use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::AppError;
use crate::ports::DocumentStore;

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

/// In-memory document store.
///
/// Mirrors the filesystem rules the save path relies on: writes need an
/// existing parent directory, and files and directories cannot share a path.
/// Useful for dry runs and tests.
#[derive(Debug, Clone)]
pub struct MemoryDocumentStore {
    root: PathBuf,
    // Shared so clones observe the same tree
    tree: Arc<Mutex<Tree>>,
}

impl MemoryDocumentStore {
    /// Create an empty store whose root directory (and its ancestors) exist.
    pub fn new(root: PathBuf) -> Self {
        let mut tree = Tree::default();
        tree.dirs.extend(root.ancestors().map(Path::to_path_buf));
        Self { root, tree: Arc::new(Mutex::new(tree)) }
    }

    fn tree(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of every file written so far, keyed by absolute path.
    pub fn files(&self) -> BTreeMap<PathBuf, String> {
        self.tree().files.clone()
    }

    /// Whether `path` is a known directory.
    pub fn is_dir(&self, path: &Path) -> bool {
        self.tree().dirs.contains(path)
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn exists(&self, path: &Path) -> bool {
        let tree = self.tree();
        tree.dirs.contains(path) || tree.files.contains_key(path)
    }

    fn create_dir_all(&self, path: &Path) -> Result<(), AppError> {
        let mut tree = self.tree();
        if let Some(file) = path.ancestors().find(|p| tree.files.contains_key(*p)) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} exists and is not a directory", file.display()),
            )
            .into());
        }
        tree.dirs.extend(path.ancestors().map(Path::to_path_buf));
        Ok(())
    }

    fn write_text(&self, path: &Path, content: &str) -> Result<(), AppError> {
        let mut tree = self.tree();
        if tree.dirs.contains(path) {
            return Err(io::Error::other(format!("{} is a directory", path.display())).into());
        }
        let parent_exists = path.parent().is_none_or(|parent| tree.dirs.contains(parent));
        if !parent_exists {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("parent directory of {} does not exist", path.display()),
            )
            .into());
        }
        tree.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn read_text(&self, path: &Path) -> Result<String, AppError> {
        self.tree().files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display())).into()
        })
    }
}
