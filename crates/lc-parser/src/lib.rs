//! # lc-parser
//!
//! ast-grep-based Go parsing for the `lc` practice CLI.
//!
//! Turns a Go source file into its package name and an ordered list of
//! top-level [`Declaration`]s. Functions and methods carry a [`Signature`]
//! whose parameter and result types are reduced to the closed
//! [`TypeExpr`] set used by the test generator.

pub mod error;
pub mod extractors;
pub mod parser;
pub mod types;

pub use error::ParserError;
pub use parser::{detect_language, parse_file, parse_go};
pub use types::{
    DeclKind, Declaration, Parameter, Signature, SourceFile, TypeExpr, UNTYPED, type_to_string,
};
