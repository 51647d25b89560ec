//! Shared testing utilities for file-easy integration tests.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    original_cwd: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        let original_cwd = env::current_dir().expect("Failed to get current directory");

        Self { root, work_dir, original_cwd }
    }

    /// Directory relative document paths are resolved against.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Absolute path of a file under the work directory.
    pub fn path(&self, relative: &str) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Read a file under the work directory.
    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.path(relative))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", relative, e))
    }

    /// Assert that nothing was created inside the work directory.
    pub fn assert_work_dir_empty(&self) {
        let count = fs::read_dir(&self.work_dir).expect("Failed to list work directory").count();
        assert_eq!(count, 0, "work directory should be empty");
    }

    /// Execute a closure after temporarily switching into the work directory.
    pub fn with_work_dir<F, R>(&self, action: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::current_dir().expect("Failed to capture current dir");
        env::set_current_dir(&self.work_dir).expect("Failed to switch current dir");
        let result = action();
        env::set_current_dir(original).expect("Failed to restore current dir");
        result
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        // Restore original CWD in case a closure panicked inside the temp dir
        let _ = env::set_current_dir(&self.original_cwd);
    }
}
