//! ast-grep wrapper and language detection from file extensions.

use std::path::Path;

use ast_grep_core::tree_sitter::StrDoc;
use ast_grep_language::SupportLang;

use crate::error::ParserError;
use crate::extractors;
use crate::types::SourceFile;

/// The concrete AST tree type returned by `parse_source`.
pub type AstTree = ast_grep_core::AstGrep<StrDoc<SupportLang>>;

/// Detect the language from a file path extension.
///
/// Returns `None` for anything but Go, the only language with an extractor.
#[must_use]
pub fn detect_language(path: &Path) -> Option<SupportLang> {
    match path.extension()?.to_str()? {
        "go" => Some(SupportLang::Go),
        _ => None,
    }
}

/// Parse source code into an ast-grep tree for the given language.
#[must_use]
pub fn parse_source(source: &str, lang: SupportLang) -> AstTree {
    use ast_grep_language::LanguageExt;
    lang.ast_grep(source)
}

/// Parse Go source text into its package name and top-level declarations.
///
/// # Errors
/// Returns [`ParserError`] if the text is not valid Go.
pub fn parse_go(source: &str) -> Result<SourceFile, ParserError> {
    let tree = parse_source(source, SupportLang::Go);
    extractors::go::extract(&tree)
}

/// Read and parse a Go file from disk.
///
/// # Errors
/// Returns [`ParserError::UnsupportedLanguage`] for non-Go paths,
/// [`ParserError::Io`] if the file cannot be read, and a syntax error if
/// it does not parse.
pub fn parse_file(path: &Path) -> Result<SourceFile, ParserError> {
    if detect_language(path).is_none() {
        return Err(ParserError::UnsupportedLanguage(path.display().to_string()));
    }
    let source = std::fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = source.len(), "parsing go source");
    parse_go(&source)
}
