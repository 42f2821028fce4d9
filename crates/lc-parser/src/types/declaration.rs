use serde::{Deserialize, Serialize};

use super::Signature;

/// The kind of a top-level Go declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclKind {
    Function,
    Method,
    Type,
    Const,
    Var,
}

impl std::fmt::Display for DeclKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Function => "function",
            Self::Method => "method",
            Self::Type => "type",
            Self::Const => "const",
            Self::Var => "var",
        };
        write!(f, "{s}")
    }
}

/// A named top-level construct of a Go source file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Declaration {
    pub kind: DeclKind,
    pub name: String,
    /// 1-based line of the declaration.
    pub line: usize,
    /// Present for functions and methods.
    pub signature: Option<Signature>,
}

impl Declaration {
    /// Go visibility: a name starting with an uppercase letter is exported.
    #[must_use]
    pub fn is_exported(&self) -> bool {
        self.name.starts_with(char::is_uppercase)
    }

    /// Exported plain function. Methods, types, consts and vars never qualify.
    #[must_use]
    pub fn is_exported_function(&self) -> bool {
        self.kind == DeclKind::Function && self.is_exported()
    }
}

/// Result of parsing one Go file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceFile {
    /// Name from the `package` clause.
    pub package: String,
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
}

impl SourceFile {
    /// Exported functions in declaration order.
    pub fn exported_functions(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations
            .iter()
            .filter(|decl| decl.is_exported_function())
    }
}
