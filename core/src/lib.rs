#![deny(missing_docs)]

//! # genstructs core
//!
//! Locates a struct declaration in a Rust source file, describes its fields and
//! renders that description through a code template.

/// Shared error types.
pub mod error;

/// AST parsing and field extraction.
pub mod parser;

/// Template rendering and formatting of generated code.
pub mod codegen;

pub use codegen::{format_source, Generator, Provenance};
pub use error::{InspectError, InspectResult};
pub use parser::{
    inspect_file, inspect_source, locate_and_extract, FieldDescription, TypeDescription,
};
