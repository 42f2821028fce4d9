//! # lc-config
//!
//! Layered configuration loading for the `lc` practice CLI using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LEETCODE_*` prefix, `__` as separator)
//! 2. Project-level `.leetcode/config.toml`
//! 3. User-level `~/.config/leetcode-cli/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LEETCODE_EDITOR__COMMAND` -> `editor.command`,
//! `LEETCODE_GENTEST__STYLE` -> `gentest.style`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//! use lc_config::LcConfig;
//!
//! let config = LcConfig::load(Path::new(".")).expect("config");
//! println!("problems live in {}", config.paths.problems_dir);
//! ```

mod editor;
mod error;
mod gentest;
mod paths;
mod runner;

pub use editor::EditorConfig;
pub use error::ConfigError;
pub use gentest::{GentestConfig, TemplateStyle};
pub use paths::{PathsConfig, SUPPORTED_EXTENSION};
pub use runner::RunnerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory under the project root holding project-local settings.
pub const PROJECT_DIR: &str = ".leetcode";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LcConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub editor: EditorConfig,
    #[serde(default)]
    pub runner: RunnerConfig,
    #[serde(default)]
    pub gentest: GentestConfig,
}

impl LcConfig {
    /// Load and validate configuration for the project rooted at `project_root`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a source fails to parse or a value is invalid.
    pub fn load(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("LEETCODE_").split("__"))
    }

    /// Check cross-section invariants that serde defaults cannot express.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.paths.validate()?;
        self.editor.validate()?;
        self.runner.validate()?;
        self.gentest.validate()
    }

    /// Path of the project-local config file.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_DIR).join("config.toml")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("leetcode-cli").join("config.toml"))
    }
}
