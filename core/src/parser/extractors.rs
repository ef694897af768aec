//! # Extraction Logic
//!
//! Entry points that parse Rust source and run the locator over it, plus the
//! per-field extraction rules.

use crate::error::{InspectError, InspectResult};
use crate::parser::locator::Locator;
use crate::parser::models::{FieldDescription, TypeDescription};
use quote::ToTokens;
use std::fs;
use std::path::{Path, PathBuf};
use syn::ext::IdentExt;
use syn::visit::Visit;
use syn::{Attribute, Expr, ExprLit, Field, Ident, Lit, Meta, MetaNameValue, PathArguments, Type};
use tracing::trace;

/// Placeholder file name used in diagnostics for source that did not come from disk.
const INLINE_SOURCE: &str = "<inline>";

/// Reads `file_path`, finds the declaration named `type_name` and extracts its fields.
///
/// Only the given file is parsed. Fails with `NotFound` when no declaration has
/// that exact name, `EmptyType` when it has no fields, and `UnsupportedShape`
/// when a field is unnamed or its type is not a plain identifier.
///
/// # Examples
/// ```no_run
/// use genstructs_core::locate_and_extract;
///
/// let point = locate_and_extract("Point", "src/point.rs").unwrap();
/// for field in &point.fields {
///     println!("{}: {}", field.name, field.declared_type);
/// }
/// ```
pub fn locate_and_extract(
    type_name: &str,
    file_path: impl AsRef<Path>,
) -> InspectResult<TypeDescription> {
    let filepath = file_path.as_ref();
    if type_name.is_empty() {
        return Err(InspectError::NotFound(String::new()));
    }

    let code = fs::read_to_string(filepath).map_err(|error| InspectError::Io {
        path: filepath.to_path_buf(),
        error,
    })?;
    parse_and_inspect(type_name, code, filepath.to_path_buf())
}

/// Runs the same extraction as [`locate_and_extract`] over source text already in memory.
///
/// # Examples
/// ```
/// use genstructs_core::inspect_source;
///
/// let code = r#"
///     struct Point {
///         /// X coordinate
///         x: i32,
///         y: i32,
///     }
/// "#;
/// let point = inspect_source("Point", code).unwrap();
/// assert_eq!(point.fields[0].doc, "X coordinate");
/// assert_eq!(point.fields[1].doc, "");
/// ```
pub fn inspect_source(type_name: &str, code: &str) -> InspectResult<TypeDescription> {
    if type_name.is_empty() {
        return Err(InspectError::NotFound(String::new()));
    }
    parse_and_inspect(type_name, code.to_string(), PathBuf::from(INLINE_SOURCE))
}

/// Extracts `type_name` from an already parsed file.
pub fn inspect_file(type_name: &str, file: &syn::File) -> InspectResult<TypeDescription> {
    let mut locator = Locator::new(type_name);
    locator.visit_file(file);
    locator.finish()
}

fn parse_and_inspect(
    type_name: &str,
    code: String,
    filepath: PathBuf,
) -> InspectResult<TypeDescription> {
    let syntax = syn::parse_file(&code).map_err(|error| InspectError::Syntax {
        path: filepath,
        error,
        source_code: code,
    })?;
    inspect_file(type_name, &syntax)
}

/// Builds the description of one member field of `type_name`.
///
/// `position` is the index the field would take, used to name unnamed fields in errors.
pub(crate) fn extract_field(
    type_name: &str,
    position: usize,
    field: &Field,
) -> InspectResult<FieldDescription> {
    let names = usize::from(field.ident.is_some());
    trace!(type_name = type_name, position = position, names = names, "member field");

    let Some(ident) = &field.ident else {
        return Err(unsupported(
            type_name,
            format!("field #{position} declares no name"),
        ));
    };

    let declared_type = plain_identifier(&field.ty).ok_or_else(|| {
        unsupported(
            type_name,
            format!(
                "field `{}` has type `{}`, only plain identifier types are supported",
                ident,
                field.ty.to_token_stream()
            ),
        )
    })?;

    Ok(FieldDescription::new(
        declared_type.to_string(),
        ident.unraw().to_string(),
        extract_doc_comment(&field.attrs),
    ))
}

fn unsupported(type_name: &str, reason: String) -> InspectError {
    InspectError::UnsupportedShape {
        type_name: type_name.to_string(),
        reason,
    }
}

/// Returns the identifier when `ty` is a bare single-segment path such as `i32` or `Point`.
fn plain_identifier(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            let path = &type_path.path;
            if path.leading_colon.is_some() || path.segments.len() != 1 {
                return None;
            }
            let segment = path.segments.first()?;
            matches!(segment.arguments, PathArguments::None).then_some(&segment.ident)
        }
        _ => None,
    }
}

/// Collects `///` and `#[doc = "..."]` lines into one trimmed string.
pub(crate) fn extract_doc_comment(attrs: &[Attribute]) -> String {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            Meta::NameValue(MetaNameValue {
                value:
                    Expr::Lit(ExprLit {
                        lit: Lit::Str(text),
                        ..
                    }),
                ..
            }) => Some(text.value()),
            _ => None,
        })
        .map(|line| match line.strip_prefix(' ') {
            Some(stripped) => stripped.to_owned(),
            None => line,
        })
        .collect();

    lines.join("\n").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(code: &str) -> Field {
        let item: syn::ItemStruct = syn::parse_str(code).unwrap();
        item.fields.into_iter().next().unwrap()
    }

    #[test]
    fn test_plain_identifier_type() {
        let f = extract_field("S", 0, &field("struct S { count: usize }")).unwrap();
        assert_eq!(f.declared_type, "usize");
        assert_eq!(f.name, "count");
        assert_eq!(f.doc, "");
        assert!(f.metadata.is_empty());
    }

    #[test]
    fn test_raw_identifier_name_is_unraw() {
        let f = extract_field("S", 0, &field("struct S { r#type: u8 }")).unwrap();
        assert_eq!(f.name, "type");
    }

    #[test]
    fn test_rejects_composite_types() {
        for code in [
            "struct S { a: Vec<u8> }",
            "struct S { a: &'static str }",
            "struct S { a: *const u8 }",
            "struct S { a: std::string::String }",
            "struct S { a: ::core::primitive::u8 }",
            "struct S { a: (u8, u8) }",
            "struct S { a: [u8; 4] }",
            "struct S { a: <T as Trait>::Output }",
        ] {
            let err = extract_field("S", 0, &field(code)).unwrap_err();
            assert!(
                matches!(err, InspectError::UnsupportedShape { .. }),
                "{code} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_unnamed_field() {
        let err = extract_field("S", 2, &field("struct S(u8);")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "type `S` has an unsupported field: field #2 declares no name"
        );
    }

    #[test]
    fn test_multi_line_doc_comment() {
        let f = field(
            r#"
            struct S {
                /// First line.
                ///
                ///   Indented line.
                a: u8,
            }
            "#,
        );
        assert_eq!(
            extract_doc_comment(&f.attrs),
            "First line.\n\n  Indented line."
        );
    }

    #[test]
    fn test_doc_attribute_and_block_comment() {
        let f = field(r#"struct S { #[doc = "  padded  "] a: u8 }"#);
        assert_eq!(extract_doc_comment(&f.attrs), "padded");

        let f = field("struct S { /** block doc */ a: u8 }");
        assert_eq!(extract_doc_comment(&f.attrs), "block doc");
    }

    #[test]
    fn test_non_doc_attributes_are_ignored() {
        let f = field(r#"struct S { #[serde(rename = "b")] a: u8 }"#);
        assert_eq!(extract_doc_comment(&f.attrs), "");
    }

    #[test]
    fn test_empty_type_name_is_not_found() {
        assert!(matches!(
            inspect_source("", "struct S { a: u8 }"),
            Err(InspectError::NotFound(_))
        ));
    }
}
