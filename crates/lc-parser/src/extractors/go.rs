//! Go declaration extractor.
//!
//! Walks the direct children of `source_file` so nested declarations inside
//! function bodies are never reported as top-level. Functions and methods
//! carry their signature; types, consts and vars carry only name and line.

use ast_grep_core::{AstGrep, Doc};
use ast_grep_language::SupportLang;

use crate::error::ParserError;
use crate::types::SourceFile;

mod helpers;
mod processors;

/// Extract the package name and all top-level declarations from a Go tree.
///
/// # Errors
/// Returns [`ParserError::Syntax`] if the tree contains error or missing
/// nodes, and [`ParserError::MissingPackage`] if there is no package clause.
pub fn extract<D: Doc<Lang = SupportLang>>(root: &AstGrep<D>) -> Result<SourceFile, ParserError> {
    let root = root.root();
    helpers::check_syntax(&root)?;
    let package = helpers::package_name(&root).ok_or(ParserError::MissingPackage)?;

    let mut declarations = Vec::new();
    for node in root.children() {
        let kind = node.kind();
        match kind.as_ref() {
            "function_declaration" => {
                declarations.extend(processors::process_function(&node));
            }
            "method_declaration" => {
                declarations.extend(processors::process_method(&node));
            }
            "type_declaration" => {
                declarations.extend(processors::process_type_declaration(&node));
            }
            "const_declaration" => {
                declarations.extend(processors::process_const_declaration(&node));
            }
            "var_declaration" => {
                declarations.extend(processors::process_var_declaration(&node));
            }
            _ => {}
        }
    }

    tracing::debug!(
        package = %package,
        declarations = declarations.len(),
        "extracted go declarations"
    );
    Ok(SourceFile {
        package,
        declarations,
    })
}

#[cfg(test)]
mod tests;
