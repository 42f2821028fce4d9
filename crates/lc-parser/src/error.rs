//! Parser error types for lc-parser.

/// Errors that can occur while parsing a Go source file.
#[derive(Debug, thiserror::Error)]
pub enum ParserError {
    #[error("syntax error at line {line}: {snippet}")]
    Syntax { line: usize, snippet: String },

    #[error("missing package clause")]
    MissingPackage,

    #[error("Language not supported: {0}")]
    UnsupportedLanguage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
