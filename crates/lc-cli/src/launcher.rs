//! External processes: the editor and the test runner.
//!
//! Both inherit the terminal and block until the child exits.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use lc_config::{EditorConfig, RunnerConfig};

/// Exit status of a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunStatus {
    pub success: bool,
    /// `None` when the child was killed by a signal.
    pub code: Option<i32>,
}

impl From<ExitStatus> for RunStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            code: status.code(),
        }
    }
}

/// Launches the processes a command hands control to.
pub trait Launcher {
    /// Open `path` in the editor.
    ///
    /// # Errors
    /// Fails if the editor cannot be spawned or exits unsuccessfully.
    fn edit(&mut self, path: &Path) -> Result<()>;

    /// Run the test runner on `test_file`.
    ///
    /// # Errors
    /// Fails only if the runner cannot be spawned.
    fn run_tests(&mut self, test_file: &Path) -> Result<RunStatus>;
}

/// [`Launcher`] backed by `std::process::Command`.
pub struct ProcessLauncher {
    project_root: PathBuf,
    editor: EditorConfig,
    runner: RunnerConfig,
}

impl ProcessLauncher {
    pub const fn new(project_root: PathBuf, editor: EditorConfig, runner: RunnerConfig) -> Self {
        Self {
            project_root,
            editor,
            runner,
        }
    }

    pub fn editor_command(&self, path: &Path) -> Command {
        let mut cmd = Command::new(&self.editor.command);
        cmd.args(&self.editor.args).arg(path);
        cmd
    }

    /// The runner runs from the project root so module-relative imports resolve.
    pub fn runner_command(&self, test_file: &Path) -> Command {
        let relative = test_file.strip_prefix(&self.project_root).unwrap_or(test_file);
        let mut cmd = Command::new(&self.runner.program);
        cmd.args(&self.runner.args)
            .arg(relative)
            .current_dir(&self.project_root);
        cmd
    }
}

impl Launcher for ProcessLauncher {
    fn edit(&mut self, path: &Path) -> Result<()> {
        let mut cmd = self.editor_command(path);
        tracing::debug!(?cmd, "launching editor");
        let status = cmd
            .status()
            .with_context(|| format!("failed to launch editor: {}", self.editor.command))?;
        if !status.success() {
            anyhow::bail!("editor exited with status: {status}");
        }
        Ok(())
    }

    fn run_tests(&mut self, test_file: &Path) -> Result<RunStatus> {
        let mut cmd = self.runner_command(test_file);
        tracing::debug!(?cmd, "launching test runner");
        let status = cmd
            .status()
            .with_context(|| format!("failed to launch test runner: {}", self.runner.program))?;
        Ok(status.into())
    }
}
