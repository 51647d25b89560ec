pub mod config;
pub mod error;
pub mod extension;
pub mod filename;
pub mod slug;

pub use config::{CONFIG_FILE, DocumentSettings, StoreConfig};
pub use error::{AppError, ErrorKind};
pub use extension::{has_extension, set_default_extension, validate_extension};
pub use filename::{PROHIBITED_CHARS, basename, normalize_lexically, validate_basename};
pub use slug::{is_slug, slug};
