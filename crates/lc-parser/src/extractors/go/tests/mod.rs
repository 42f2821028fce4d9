use ast_grep_language::LanguageExt;

use super::*;
pub(super) use crate::types::{DeclKind, Declaration, Parameter, TypeExpr};


const SAMPLE: &str = include_str!("../../../../tests/fixtures/sample.go");

fn parse_and_extract(source: &str) -> SourceFile {
    let root = SupportLang::Go.ast_grep(source);
    extract(&root).expect("extraction should succeed")
}

fn find_by_name<'a>(file: &'a SourceFile, name: &str) -> &'a Declaration {
    file.declarations
        .iter()
        .find(|d| d.name == name)
        .unwrap_or_else(|| panic!("should find declaration named '{name}'"))
}

fn params_of(file: &SourceFile, name: &str) -> Vec<Parameter> {
    find_by_name(file, name)
        .signature
        .as_ref()
        .map(|s| s.params.clone())
        .unwrap_or_else(|| panic!("'{name}' should carry a signature"))
}

fn results_of(file: &SourceFile, name: &str) -> Vec<TypeExpr> {
    find_by_name(file, name)
        .signature
        .as_ref()
        .map(|s| s.results.clone())
        .unwrap_or_else(|| panic!("'{name}' should carry a signature"))
}
