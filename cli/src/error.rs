#![deny(missing_docs)]

//! # CLI Errors
//!
//! Error types for the CLI crate.

use derive_more::{Display, From};
use genstructs_core::InspectError;
use owo_colors::Stream;

/// Main error enum for CLI operations.
#[derive(Debug, Display, From)]
pub enum CliError {
    /// Inspection or generation failure from the core library.
    #[display("{}", _0)]
    Inspect(InspectError),

    /// IO Error wrapper.
    #[display("IO Error: {}", _0)]
    Io(std::io::Error),

    /// JSON serialization failure.
    #[display("JSON Error: {}", _0)]
    Json(serde_json::Error),

    /// The tracing subscriber could not be installed.
    #[display("Failed to initialize logging: {}", _0)]
    Logging(String),
}

/// Manual implementation of the standard Error trait.
///
/// We implement this manually (instead of `derive(Error)`) because the `Logging(String)`
/// variant contains a `String`, which does not implement `std::error::Error`.
impl std::error::Error for CliError {}

impl CliError {
    /// Message printed on stderr; syntax errors get a coloured snippet when stderr supports it.
    pub fn report(&self) -> String {
        match self {
            CliError::Inspect(error) => error.report_for(Stream::Stderr),
            other => other.to_string(),
        }
    }
}

/// Result type alias.
pub type CliResult<T> = Result<T, CliError>;
