//! # Error Handling
//!
//! Provides the `InspectError` enum shared by the inspector and the generator.

use derive_more::{Display, From};
use owo_colors::{OwoColorize, Stream, Style};
use std::path::{Path, PathBuf};

/// Everything that can go wrong while inspecting a file or generating code from it.
///
/// Only `Template` converts implicitly; the other variants carry context
/// (the file or the type name) that must be supplied where they are raised.
#[derive(Debug, Display, From)]
pub enum InspectError {
    /// The source file could not be read.
    #[from(ignore)]
    #[display("Unable to read {}: {error}", path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying IO failure.
        error: std::io::Error,
    },

    /// The source file is not valid Rust.
    #[from(ignore)]
    #[display("{}", render_syntax_error(path, error, source_code, None))]
    Syntax {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser diagnostic.
        error: syn::Error,
        /// Full text of the file, used to point at the offending line.
        source_code: String,
    },

    /// No declaration with the requested name exists in the file.
    #[from(ignore)]
    #[display("type `{_0}` not found")]
    NotFound(String),

    /// The declaration exists but has no fields to extract.
    #[from(ignore)]
    #[display("type `{_0}` has 0 fields")]
    EmptyType(String),

    /// A field of the declaration has a shape the extractor cannot represent.
    #[from(ignore)]
    #[display("type `{type_name}` has an unsupported field: {reason}")]
    UnsupportedShape {
        /// Declaration being extracted.
        type_name: String,
        /// What was rejected.
        reason: String,
    },

    /// The code template failed to compile or render.
    #[display("Template Error: {_0}")]
    Template(minijinja::Error),
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InspectError::Io { error, .. } => Some(error),
            InspectError::Syntax { error, .. } => Some(error),
            InspectError::Template(error) => Some(error),
            _ => None,
        }
    }
}

/// Helper type alias for Result using InspectError.
pub type InspectResult<T> = Result<T, InspectError>;

impl InspectError {
    /// Renders the error for a terminal `stream`.
    ///
    /// Same text as `Display`, except that the syntax snippet is coloured when
    /// `stream` supports it (honouring `NO_COLOR`, `CLICOLOR` and friends).
    pub fn report_for(&self, stream: Stream) -> String {
        match self {
            InspectError::Syntax {
                path,
                error,
                source_code,
            } => render_syntax_error(path, error, source_code, Some(stream)),
            other => other.to_string(),
        }
    }
}

/// Applies a style only when a stream was given and it supports colour.
fn paint(text: &str, style: Style, stream: Option<Stream>) -> String {
    match stream {
        Some(stream) => text
            .if_supports_color(stream, move |t| t.style(style))
            .to_string(),
        None => text.to_string(),
    }
}

/// Points at the offending line of `code`, compiler style.
///
/// Falls back to a one-line message naming the file when the span carries no
/// usable location (e.g. unbalanced delimiters fail before any token is placed).
fn render_syntax_error(
    filepath: &Path,
    err: &syn::Error,
    code: &str,
    stream: Option<Stream>,
) -> String {
    let start = err.span().start();
    let end = err.span().end();
    let code_line = match start.line.checked_sub(1).and_then(|n| code.lines().nth(n)) {
        Some(line) if start != end => line,
        _ => return format!("Unable to parse {}: {err}", filepath.display()),
    };

    let width = if end.line > start.line {
        code_line.len().saturating_sub(start.column)
    } else {
        end.column.saturating_sub(start.column)
    };
    let gutter = " ".repeat(start.line.to_string().len());
    let accent = Style::new().blue().bold();
    let pipe = paint("|", accent, stream);

    format!(
        "{error}: unable to parse {path}\n\
         {gutter}{arrow} {path}:{line}:{column}\n\
         {gutter} {pipe}\n\
         {label} {pipe} {code}\n\
         {gutter} {pipe} {offset}{underline} {message}",
        error = paint("error", Style::new().red().bold(), stream),
        path = filepath.display(),
        arrow = paint("-->", accent, stream),
        line = start.line,
        column = start.column,
        label = paint(&start.line.to_string(), accent, stream),
        code = code_line.trim_end(),
        offset = " ".repeat(start.column),
        underline = paint(&"^".repeat(width.max(1)), Style::new().red().bold(), stream),
        message = paint(&err.to_string(), Style::new().red(), stream),
    )
}
