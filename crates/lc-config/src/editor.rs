//! External editor configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_command() -> String {
    "nvim".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EditorConfig {
    /// Editor executable, looked up on `PATH`.
    #[serde(default = "default_command")]
    pub command: String,

    /// Extra arguments placed before the file path.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            command: default_command(),
            args: Vec::new(),
        }
    }
}

impl EditorConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.command.trim().is_empty() {
            return Err(ConfigError::empty("editor.command"));
        }
        Ok(())
    }
}
