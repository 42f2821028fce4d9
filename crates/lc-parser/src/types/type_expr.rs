use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder emitted for type shapes the generator does not model.
pub const UNTYPED: &str = "interface{}";

/// Best-effort model of a Go type expression.
///
/// Only the shapes a test table needs are kept: bare identifiers, slices
/// (arrays fold into slices) and pointers. Everything else collapses into
/// [`TypeExpr::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeExpr {
    Named(String),
    Slice(Box<TypeExpr>),
    Pointer(Box<TypeExpr>),
    Other,
}

impl TypeExpr {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    #[must_use]
    pub fn slice_of(elem: Self) -> Self {
        Self::Slice(Box::new(elem))
    }

    #[must_use]
    pub fn pointer_to(elem: Self) -> Self {
        Self::Pointer(Box::new(elem))
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Slice(elem) => write!(f, "[]{elem}"),
            Self::Pointer(elem) => write!(f, "*{elem}"),
            Self::Other => f.write_str(UNTYPED),
        }
    }
}

/// Render a type expression as Go source text.
#[must_use]
pub fn type_to_string(ty: &TypeExpr) -> String {
    ty.to_string()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(TypeExpr::named("int"), "int")]
    #[case(TypeExpr::slice_of(TypeExpr::named("int")), "[]int")]
    #[case(TypeExpr::pointer_to(TypeExpr::named("ListNode")), "*ListNode")]
    #[case(
        TypeExpr::slice_of(TypeExpr::slice_of(TypeExpr::named("byte"))),
        "[][]byte"
    )]
    #[case(TypeExpr::slice_of(TypeExpr::pointer_to(TypeExpr::named("TreeNode"))), "[]*TreeNode")]
    #[case(TypeExpr::Other, "interface{}")]
    #[case(TypeExpr::slice_of(TypeExpr::Other), "[]interface{}")]
    fn renders_go_text(#[case] ty: TypeExpr, #[case] expected: &str) {
        assert_eq!(type_to_string(&ty), expected);
    }

    #[test]
    fn named_rendering_is_stable() {
        let ty = TypeExpr::named("string");
        assert_eq!(type_to_string(&ty), type_to_string(&ty));
    }
}
