//! # Parser Module
//!
//! Parses Rust source with `syn`, locates a named declaration and extracts its
//! member fields together with their doc comments.

pub mod extractors;
mod locator;
pub mod models;

pub use extractors::{inspect_file, inspect_source, locate_and_extract};
pub use models::{FieldDescription, TypeDescription};
