//! Core data types for declarations extracted from Go source.

mod declaration;
mod signature;
mod type_expr;

pub use declaration::{DeclKind, Declaration, SourceFile};
pub use signature::{Parameter, Signature};
pub use type_expr::{TypeExpr, UNTYPED, type_to_string};
