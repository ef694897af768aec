#![deny(missing_docs)]

//! # Inspect Command
//!
//! Prints the extracted description of a declaration.

use std::io::Write;

use genstructs_core::{locate_and_extract, TypeDescription};

use crate::error::CliResult;
use crate::target::TargetArgs;

/// Arguments for the inspect command.
#[derive(clap::Args, Debug, Clone)]
pub struct InspectArgs {
    /// Declaration to inspect.
    #[clap(flatten)]
    pub target: TargetArgs,

    /// Print the description as JSON instead of a field listing.
    #[clap(long)]
    pub json: bool,
}

/// Executes the inspection, writing the result to `out`.
pub fn execute(args: &InspectArgs, out: &mut impl Write) -> CliResult<()> {
    let description = locate_and_extract(&args.target.type_name, &args.target.file)?;

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &description)?;
        writeln!(out)?;
    } else {
        write_listing(&description, out)?;
    }

    Ok(())
}

fn write_listing(description: &TypeDescription, out: &mut impl Write) -> std::io::Result<()> {
    writeln!(out, "{}", description.name)?;
    for field in &description.fields {
        if field.doc.is_empty() {
            writeln!(out, "    {}: {}", field.name, field.declared_type)?;
        } else {
            let doc = field.doc.replace('\n', " ");
            writeln!(out, "    {}: {}  // {}", field.name, field.declared_type, doc)?;
        }
    }
    Ok(())
}
