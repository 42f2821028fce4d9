use serde::{Deserialize, Serialize};

use super::TypeExpr;

/// One named parameter of a function signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    /// Declared type. For a variadic parameter this is the element type.
    pub ty: TypeExpr,
    pub variadic: bool,
}

impl Parameter {
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            variadic: false,
        }
    }

    #[must_use]
    pub fn variadic(name: impl Into<String>, ty: TypeExpr) -> Self {
        Self {
            name: name.into(),
            ty,
            variadic: true,
        }
    }

    /// Type as it would appear in a struct field: variadics become slices.
    #[must_use]
    pub fn field_type(&self) -> TypeExpr {
        if self.variadic {
            TypeExpr::slice_of(self.ty.clone())
        } else {
            self.ty.clone()
        }
    }
}

/// Ordered parameters and results of a function declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    pub params: Vec<Parameter>,
    pub results: Vec<TypeExpr>,
}
