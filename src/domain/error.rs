use std::io;

use thiserror::Error;

/// Library-wide error type for file-easy operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// An argument is not of the required string type.
    #[error("{0}")]
    InvalidArgumentType(String),

    /// An argument is a string but violates a content rule.
    #[error("{0}")]
    InvalidArgumentValue(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file missing or unusable.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

/// Error taxonomy exposed to callers that branch on the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Validation,
    Filesystem,
    Configuration,
}

impl AppError {
    pub(crate) fn slug_input_not_string() -> Self {
        AppError::InvalidArgumentType("Input must be a string".to_string())
    }

    pub(crate) fn filename_not_string() -> Self {
        AppError::InvalidArgumentType("Invalid input: `filename` must be a string.".to_string())
    }

    pub(crate) fn extension_not_string() -> Self {
        AppError::InvalidArgumentType("Invalid input: `extension` must be a string.".to_string())
    }

    pub(crate) fn empty_filename() -> Self {
        AppError::InvalidArgumentValue("Invalid input: `filename` cannot be empty.".to_string())
    }

    pub(crate) fn malformed_extension() -> Self {
        AppError::InvalidArgumentValue(
            "Invalid extension: must start with a dot and contain only alphanumeric characters."
                .to_string(),
        )
    }

    pub(crate) fn document_arguments_not_strings() -> Self {
        AppError::InvalidArgumentValue(
            "Invalid input: `filename` and `content` must be strings.".to_string(),
        )
    }

    pub(crate) fn prohibited_filename() -> Self {
        AppError::InvalidArgumentValue(
            "Invalid filename: contains prohibited characters.".to_string(),
        )
    }

    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::InvalidArgumentType(_) => ErrorKind::Type,
            AppError::InvalidArgumentValue(_) => ErrorKind::Validation,
            AppError::Io(_) => ErrorKind::Filesystem,
            AppError::Configuration(_) | AppError::TomlParseError(_) => ErrorKind::Configuration,
        }
    }

    /// Provide an `io::ErrorKind` view for callers that already speak `std::io`.
    pub fn io_kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::InvalidArgumentType(_)
            | AppError::InvalidArgumentValue(_)
            | AppError::Configuration(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
        }
    }
}
