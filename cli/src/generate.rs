#![deny(missing_docs)]

//! # Generate Command
//!
//! Renders a template with the description of a declaration and writes the
//! formatted result.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use genstructs_core::{locate_and_extract, Generator, Provenance};
use tracing::info;

use crate::error::CliResult;
use crate::target::TargetArgs;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Declaration to generate code for.
    #[clap(flatten)]
    pub target: TargetArgs,

    /// Path to the minijinja template rendered with the type description.
    #[clap(long, value_name = "PATH")]
    pub template: PathBuf,

    /// Where to write the generated code; stdout when omitted.
    #[clap(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Log the generated source.
    #[clap(long)]
    pub debug: bool,
}

/// Executes the generation.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `provenance` - Tool name and invocation written into the header.
/// * `stdout` - Destination used when no output path is given.
pub fn execute(
    args: &GenerateArgs,
    provenance: Provenance,
    stdout: &mut impl Write,
) -> CliResult<()> {
    let description = locate_and_extract(&args.target.type_name, &args.target.file)?;

    let code = Generator::from_path(&args.template)?
        .with_provenance(provenance)
        .with_debug(args.debug)
        .generate(&description)?;

    match &args.output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, code)?;
            info!(output = %path.display(), type_name = %description.name, "generated");
        }
        None => stdout.write_all(code.as_bytes())?,
    }

    Ok(())
}
