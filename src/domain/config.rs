//! Document store configuration loaded from TOML.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::AppError;
use crate::domain::extension::validate_extension;

/// Conventional name of the configuration file.
pub const CONFIG_FILE: &str = "file-easy.toml";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Document placement settings.
    #[serde(default)]
    pub documents: DocumentSettings,
}

/// Where and how documents are written.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentSettings {
    /// Directory relative filenames resolve against. Defaults to the working directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Extension attached to titled documents that have none.
    #[serde(default = "default_extension")]
    pub default_extension: String,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self { root: None, default_extension: default_extension() }
    }
}

fn default_extension() -> String {
    ".md".to_string()
}

impl StoreConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, AppError> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        if !path.exists() {
            return Err(AppError::config_error(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load [`CONFIG_FILE`] from `dir`.
    pub fn load_from_dir(dir: &Path) -> Result<Self, AppError> {
        Self::load(&dir.join(CONFIG_FILE))
    }

    fn validate(&self) -> Result<(), AppError> {
        if !validate_extension(&self.documents.default_extension) {
            return Err(AppError::malformed_extension());
        }
        Ok(())
    }
}
