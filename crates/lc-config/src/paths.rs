//! Problem and test directory layout.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_problems_dir() -> String {
    "problems".to_string()
}

fn default_tests_dir() -> String {
    "tests".to_string()
}

/// The only extension the signature extractor understands.
pub const SUPPORTED_EXTENSION: &str = "go";

fn default_extension() -> String {
    SUPPORTED_EXTENSION.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Directory holding solution files, relative to the project root.
    #[serde(default = "default_problems_dir")]
    pub problems_dir: String,

    /// Directory generated test files are written to.
    #[serde(default = "default_tests_dir")]
    pub tests_dir: String,

    /// Solution file extension, without the leading dot. Only Go is parsed.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            problems_dir: default_problems_dir(),
            tests_dir: default_tests_dir(),
            extension: default_extension(),
        }
    }
}

impl PathsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.problems_dir.trim().is_empty() {
            return Err(ConfigError::empty("paths.problems_dir"));
        }
        if self.tests_dir.trim().is_empty() {
            return Err(ConfigError::empty("paths.tests_dir"));
        }
        if self.extension.trim().is_empty() {
            return Err(ConfigError::empty("paths.extension"));
        }
        if self.extension.starts_with('.') {
            return Err(ConfigError::InvalidValue {
                field: "paths.extension".to_string(),
                reason: format!("'{}' must not start with a dot", self.extension),
            });
        }
        if self.extension != SUPPORTED_EXTENSION {
            return Err(ConfigError::InvalidValue {
                field: "paths.extension".to_string(),
                reason: format!(
                    "'{}' is not supported; problem files must be Go (`{SUPPORTED_EXTENSION}`)",
                    self.extension
                ),
            });
        }
        Ok(())
    }
}
