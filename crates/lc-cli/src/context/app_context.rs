use std::path::{Path, PathBuf};

use lc_config::LcConfig;

use crate::launcher::{Launcher, ProcessLauncher};
use crate::picker::{Picker, TerminalPicker};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub project_root: PathBuf,
    pub config: LcConfig,
    pub picker: Box<dyn Picker>,
    pub launcher: Box<dyn Launcher>,
}

impl AppContext {
    /// Wire the interactive picker and the process launcher for `config`.
    pub fn init(project_root: PathBuf, config: LcConfig) -> Self {
        let launcher = ProcessLauncher::new(
            project_root.clone(),
            config.editor.clone(),
            config.runner.clone(),
        );
        Self {
            project_root,
            config,
            picker: Box::new(TerminalPicker),
            launcher: Box::new(launcher),
        }
    }

    pub fn problems_dir(&self) -> PathBuf {
        self.project_root.join(&self.config.paths.problems_dir)
    }

    pub fn tests_dir(&self) -> PathBuf {
        self.project_root.join(&self.config.paths.tests_dir)
    }

    /// `path` relative to the project root when it lives underneath it.
    pub fn display_path(&self, path: &Path) -> String {
        path.strip_prefix(&self.project_root)
            .unwrap_or(path)
            .display()
            .to_string()
    }
}
