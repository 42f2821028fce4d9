//! # lc-gentest
//!
//! Turns parsed Go declarations into `_test.go` skeletons and manages the
//! files the practice workflow touches.
//!
//! - [`render`]: header and per-function skeleton text
//! - [`problem`]: `<number>_<name>` naming and test path derivation
//! - [`writer`]: atomic writes and no-clobber problem creation

pub mod error;
pub mod problem;
pub mod render;
pub mod writer;

use std::path::{Path, PathBuf};

pub use error::GenTestError;
pub use problem::{ProblemId, test_file_path};
pub use render::{RenderOptions, describe_signature, generate_test_file, render_header, render_skeleton};
pub use writer::{CreateOutcome, WriteMode, create_problem_file, write_atomic};

/// Text generated for one problem file, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    pub source: PathBuf,
    pub target: PathBuf,
    pub contents: String,
    /// Names of the `Test*` functions in `contents`, in order.
    pub tests: Vec<String>,
}

impl Generated {
    /// Persist the generated text at [`Generated::target`].
    ///
    /// # Errors
    /// See [`write_atomic`].
    pub fn write(&self, mode: WriteMode) -> Result<(), GenTestError> {
        write_atomic(&self.target, &self.contents, mode)?;
        tracing::info!(path = %self.target.display(), tests = self.tests.len(), "test file written");
        Ok(())
    }
}

/// Parse `problem` and render its test file destined for `tests_dir`.
///
/// Nothing touches the filesystem besides reading `problem`.
///
/// # Errors
/// [`GenTestError::Parse`] if the source cannot be read or parsed,
/// [`GenTestError::NoFileName`] if `problem` has no stem.
pub fn generate_for_problem(
    problem: &Path,
    tests_dir: &Path,
    options: &RenderOptions,
) -> Result<Generated, GenTestError> {
    let target = test_file_path(tests_dir, problem)?;
    let file = lc_parser::parse_file(problem).map_err(|source| GenTestError::Parse {
        path: problem.to_path_buf(),
        source,
    })?;
    let tests: Vec<String> = file
        .exported_functions()
        .map(|decl| format!("Test{}", decl.name))
        .collect();
    tracing::debug!(
        source = %problem.display(),
        target = %target.display(),
        count = tests.len(),
        "rendering test skeletons"
    );
    Ok(Generated {
        source: problem.to_path_buf(),
        target,
        contents: generate_test_file(&file, options),
        tests,
    })
}
