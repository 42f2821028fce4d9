//! Test runner configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_program() -> String {
    "go".to_string()
}

fn default_args() -> Vec<String> {
    vec!["test".to_string(), "-v".to_string()]
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RunnerConfig {
    /// Test runner executable.
    #[serde(default = "default_program")]
    pub program: String,

    /// Arguments placed before the test file path.
    #[serde(default = "default_args")]
    pub args: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
            args: default_args(),
        }
    }
}

impl RunnerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::empty("runner.program"));
        }
        Ok(())
    }
}
