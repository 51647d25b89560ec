pub mod adapters;
mod document_filesystem;

pub use adapters::MemoryDocumentStore;
pub use document_filesystem::FilesystemDocumentStore;
