//! # Logging
//!
//! Installs the `tracing` subscriber used by every command.

use crate::error::{CliError, CliResult};
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive that overrides the flags.
pub const LOG_ENV: &str = "GENSTRUCTS_LOG";

/// Picks the default filter directive from the global flags.
pub fn default_level(quiet: bool, verbose: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Initializes a stderr subscriber. `GENSTRUCTS_LOG` wins over the flags when set.
pub fn init(quiet: bool, verbose: bool) -> CliResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_level(quiet, verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| CliError::Logging(error.to_string()))
}
