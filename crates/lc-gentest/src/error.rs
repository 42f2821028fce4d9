use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenTestError {
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: lc_parser::ParserError,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("refusing to overwrite existing file {0}")]
    AlreadyExists(PathBuf),

    #[error("invalid problem {field} '{value}': {reason}")]
    InvalidProblem {
        field: &'static str,
        value: String,
        reason: &'static str,
    },

    #[error("path has no file name: {0}")]
    NoFileName(PathBuf),
}
