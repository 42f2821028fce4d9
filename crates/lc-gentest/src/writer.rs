//! Filesystem writes for generated and scaffolded files.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::GenTestError;

/// Whether an existing target may be replaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    CreateNew,
    Overwrite,
}

/// Outcome of scaffolding a problem file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    AlreadyExists,
}

fn write_error(path: &Path) -> impl FnOnce(io::Error) -> GenTestError + '_ {
    move |source| GenTestError::Write {
        path: path.to_path_buf(),
        source,
    }
}

fn parent_dir(path: &Path) -> &Path {
    path.parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

/// Write `contents` to `path` through a temp file in the same directory.
///
/// The target either keeps its old state or holds the full new contents.
/// Missing parent directories are created.
///
/// # Errors
/// [`GenTestError::AlreadyExists`] in [`WriteMode::CreateNew`] when the
/// target exists, [`GenTestError::Write`] for any IO failure.
pub fn write_atomic(path: &Path, contents: &str, mode: WriteMode) -> Result<(), GenTestError> {
    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(write_error(path))?;

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error(path))?;
    tmp.write_all(contents.as_bytes()).map_err(write_error(path))?;
    tmp.as_file().sync_all().map_err(write_error(path))?;

    let persisted = match mode {
        WriteMode::CreateNew => tmp.persist_noclobber(path),
        WriteMode::Overwrite => tmp.persist(path),
    };
    match persisted {
        Ok(_) => {
            tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote file");
            Ok(())
        }
        Err(err) if err.error.kind() == io::ErrorKind::AlreadyExists => {
            Err(GenTestError::AlreadyExists(path.to_path_buf()))
        }
        Err(err) => Err(write_error(path)(err.error)),
    }
}

/// Create a new problem file holding `contents`, leaving existing files alone.
///
/// # Errors
/// Returns [`GenTestError::Write`] if the directory or file cannot be created.
pub fn create_problem_file(path: &Path, contents: &str) -> Result<CreateOutcome, GenTestError> {
    fs::create_dir_all(parent_dir(path)).map_err(write_error(path))?;
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            return Ok(CreateOutcome::AlreadyExists);
        }
        Err(err) => return Err(write_error(path)(err)),
    };
    file.write_all(contents.as_bytes())
        .map_err(write_error(path))?;
    Ok(CreateOutcome::Created)
}
