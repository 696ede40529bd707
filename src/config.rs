//! Service metadata and its configuration file format.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default service title published in the API documentation.
pub const DEFAULT_TITLE: &str = "FastAPI 模板项目";
/// Default service description published in the API documentation.
pub const DEFAULT_DESCRIPTION: &str = "这是一个 FastAPI 项目模板，展示了项目结构和基本用法";
/// Default service version published in the API documentation.
pub const DEFAULT_VERSION: &str = "1.0.0";

/// Errors that can occur when loading or validating service configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error while reading the configuration file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// YAML parsing error.
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    /// A field holds a value the service cannot publish.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Descriptive metadata attached to the service.
///
/// Every field is optional in the YAML file; absent fields keep their
/// defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ServiceInfo {
    /// Human readable service title.
    pub title: String,
    /// Longer description shown under the title.
    pub description: String,
    /// Published API version.
    pub version: String,
}

impl Default for ServiceInfo {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            version: DEFAULT_VERSION.to_string(),
        }
    }
}

impl ServiceInfo {
    /// Load service metadata from a YAML file.
    ///
    /// # Parameters
    ///
    /// - `path` - Path to the YAML configuration file
    ///
    /// # Returns
    ///
    /// Returns `Ok(ServiceInfo)` on success, or `ConfigError` if the file cannot be read,
    /// parsed, or holds an empty title or version.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let txt = fs::read_to_string(path)?;
        // An empty document parses as unit, not as a mapping.
        if txt.trim().is_empty() {
            return Ok(Self::default());
        }
        let info: Self = serde_yaml::from_str(&txt)?;
        info.validate()?;
        Ok(info)
    }

    /// Check that the metadata can be published.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` if the title or version is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.title.trim().is_empty() {
            return Err(ConfigError::Invalid("title must not be empty".into()));
        }
        if self.version.trim().is_empty() {
            return Err(ConfigError::Invalid("version must not be empty".into()));
        }
        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(
        mut self,
        title: Option<String>,
        description: Option<String>,
        version: Option<String>,
    ) -> Self {
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(version) = version {
            self.version = version;
        }
        self
    }
}
