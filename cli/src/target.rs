//! # Target Arguments
//!
//! The type/file pair shared by every command.

use clap::builder::NonEmptyStringValueParser;
use std::path::PathBuf;

/// Which declaration to inspect, and where.
#[derive(clap::Args, Debug, Clone)]
pub struct TargetArgs {
    /// Name of the struct to inspect.
    #[clap(short = 't', long = "type", value_name = "TYPE", value_parser = NonEmptyStringValueParser::new())]
    pub type_name: String,

    /// Rust source file declaring the struct.
    ///
    /// Falls back to `GENSTRUCTS_FILE`, which a driving tool (a build script,
    /// a task runner) can set so the invocation only has to name the type.
    #[clap(value_name = "FILE", env = "GENSTRUCTS_FILE")]
    pub file: PathBuf,
}
