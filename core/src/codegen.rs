//! # Code Generation
//!
//! Renders a [`TypeDescription`] through a `minijinja` template, formats the
//! result with `prettyplease` and stamps it with a provenance header.
//!
//! The template sees the description as its whole context:
//!
//! ```text
//! impl {{ name }} {
//!     pub const FIELDS: &'static [&'static str] = &[
//!     {% for field in fields %}"{{ field.name }}",{% endfor %}
//!     ];
//! }
//! ```
//!
//! Each entry of `fields` exposes `type`, `name`, `doc` and `metadata`.
//!
//! Formatting is best-effort: output that does not parse as a Rust file is
//! returned as rendered, with a warning.

use crate::error::{InspectError, InspectResult};
use crate::parser::models::TypeDescription;
use minijinja::{Environment, UndefinedBehavior};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Identifies the tool and invocation that produced a generated file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Program name as invoked.
    pub tool: String,
    /// Full command line.
    pub command: String,
}

impl Provenance {
    /// Creates a provenance record from explicit values.
    pub fn new(tool: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            command: command.into(),
        }
    }

    /// Builds the record from the arguments of the running process.
    pub fn from_env() -> Self {
        let args: Vec<String> = std::env::args().collect();
        let tool = args
            .first()
            .cloned()
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        Self::new(tool, args.join(" "))
    }

    /// The two header comment lines followed by a blank line.
    pub fn header(&self) -> String {
        format!(
            "// This file has been generated by \"{}\"; DO NOT EDIT\n// command: \"{}\"\n\n",
            self.tool, self.command
        )
    }
}

/// Turns type descriptions into source files using a single template.
#[derive(Debug, Clone)]
pub struct Generator {
    template: String,
    provenance: Provenance,
    debug: bool,
}

impl Generator {
    /// Creates a generator for `template`, attributing output to the running process.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            provenance: Provenance::from_env(),
            debug: false,
        }
    }

    /// Loads the template from a file.
    pub fn from_path(path: impl AsRef<Path>) -> InspectResult<Self> {
        let path = path.as_ref();
        let template = fs::read_to_string(path).map_err(|error| InspectError::Io {
            path: path.to_path_buf(),
            error,
        })?;
        Ok(Self::new(template))
    }

    /// Overrides the provenance written into the header.
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Logs the generated source at debug level.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Executes the template with `description` as its context, without formatting.
    ///
    /// Unknown variables are errors rather than empty strings.
    pub fn render(&self, description: &TypeDescription) -> InspectResult<String> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        Ok(env.render_str(&self.template, description)?)
    }

    /// Renders, formats and prefixes the provenance header.
    pub fn generate(&self, description: &TypeDescription) -> InspectResult<String> {
        let rendered = self.render(description)?;

        let body = match format_source(&rendered) {
            Ok(formatted) => {
                if self.debug {
                    debug!("Generated source:\n{formatted}");
                }
                formatted
            }
            Err(error) => {
                warn!("internal error: invalid Rust generated: {error}");
                if !self.debug {
                    warn!("compile the output to analyze the error");
                } else {
                    debug!("Unformatted source:\n{rendered}");
                }
                rendered
            }
        };

        Ok(format!("{}{}", self.provenance.header(), body))
    }
}

/// Canonicalizes Rust source text.
///
/// Plain `//` comments are dropped by the round-trip; doc comments survive.
pub fn format_source(code: &str) -> Result<String, syn::Error> {
    let file = syn::parse_file(code)?;
    Ok(prettyplease::unparse(&file))
}
