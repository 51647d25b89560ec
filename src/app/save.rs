//! Document saves, written once against the [`DocumentStore`] port.

use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::domain::{AppError, set_default_extension, slug, validate_basename};
use crate::ports::DocumentStore;

/// Save `content` to `filename` through `store`.
///
/// 1. Reject basenames containing `< > : " / \ | ? *` or ASCII control characters.
/// 2. Resolve a relative `filename` against the store root.
/// 3. Create the parent directory tree when it is missing.
/// 4. Write the content as UTF-8, replacing any existing file.
///
/// The write is not atomic and concurrent saves to one path are last-writer-wins.
pub fn save_with<S: DocumentStore + ?Sized>(
    store: &S,
    filename: &Path,
    content: &str,
) -> Result<(), AppError> {
    let name = filename.to_str().ok_or_else(AppError::document_arguments_not_strings)?;
    if !validate_basename(name) {
        return Err(AppError::prohibited_filename());
    }

    let path = store.resolve(filename);
    if path.as_path() != filename {
        trace!(filename = name, resolved = %path.display(), "resolved relative document path");
    }

    if let Some(dir) = path.parent()
        && !store.exists(dir)
    {
        debug!(dir = %dir.display(), "creating document directory");
        store.create_dir_all(dir)?;
    }

    store.write_text(&path, content)?;
    debug!(path = %path.display(), bytes = content.len(), "saved document");
    Ok(())
}

/// Save `content` under a name derived from `title`; returns the resolved path.
///
/// The name is `slug(title)` with `extension` attached when the slug has none.
pub fn save_titled_with<S: DocumentStore + ?Sized>(
    store: &S,
    title: &str,
    extension: &str,
    content: &str,
) -> Result<PathBuf, AppError> {
    let filename = set_default_extension(&slug(title), extension)?;
    save_with(store, Path::new(&filename), content)?;
    Ok(store.resolve(Path::new(&filename)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorKind;
    use crate::services::MemoryDocumentStore;

    fn store() -> MemoryDocumentStore {
        MemoryDocumentStore::new(PathBuf::from("/work"))
    }

    #[test]
    fn creates_missing_directories_before_writing() {
        let store = store();
        save_with(&store, Path::new("nested/deeply/test.txt"), "Nested test content").unwrap();
        assert!(store.is_dir(Path::new("/work/nested")));
        assert!(store.is_dir(Path::new("/work/nested/deeply")));
        assert_eq!(
            store.read_text(Path::new("/work/nested/deeply/test.txt")).unwrap(),
            "Nested test content"
        );
    }

    #[test]
    fn overwrites_existing_documents() {
        let store = store();
        save_with(&store, Path::new("test.txt"), "Initial content").unwrap();
        save_with(&store, Path::new("test.txt"), "New content").unwrap();
        assert_eq!(store.files().len(), 1);
        assert_eq!(store.read_text(Path::new("/work/test.txt")).unwrap(), "New content");
    }

    #[test]
    fn absolute_paths_ignore_the_root() {
        let store = store();
        save_with(&store, Path::new("/elsewhere/doc.md"), "abs").unwrap();
        assert!(store.files().contains_key(Path::new("/elsewhere/doc.md")));
    }

    #[test]
    fn rejects_prohibited_basename_without_side_effects() {
        let store = store();
        let err = save_with(&store, Path::new("out/invalid<>file.txt"), "Content").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "Invalid filename: contains prohibited characters.");
        assert!(!store.is_dir(Path::new("/work/out")));
        assert!(store.files().is_empty());
    }

    #[test]
    fn titled_save_composes_slug_and_extension() {
        let store = store();
        let path = save_titled_with(&store, "  My First Title!! ", ".md", "body").unwrap();
        assert_eq!(path, PathBuf::from("/work/my-first-title.md"));
        assert_eq!(store.read_text(&path).unwrap(), "body");
    }

    #[test]
    fn titled_save_rejects_empty_slug() {
        let store = store();
        let err = save_titled_with(&store, "~!@#", ".md", "body").unwrap_err();
        assert_eq!(err.to_string(), "Invalid input: `filename` cannot be empty.");
        assert!(store.files().is_empty());
    }
}
