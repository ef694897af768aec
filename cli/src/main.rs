#![deny(missing_docs)]

//! # genstructs CLI
//!
//! Command line front-end for the struct inspector and code generator.
//!
//! Supported Commands:
//! - `inspect`: prints the fields extracted from a struct declaration.
//! - `generate`: renders a template with those fields and writes formatted Rust code.
//!
//! The source file may be omitted when `GENSTRUCTS_FILE` is set by the invoking tool.

use std::io;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use genstructs_core::Provenance;

use crate::error::CliResult;

mod error;
mod generate;
mod inspect;
mod logging;
mod target;

#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Generate Rust code from Rust struct declarations"
)]
struct Cli {
    /// Log debug output.
    #[clap(short, long, global = true)]
    verbose: bool,

    /// Only log errors.
    #[clap(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the fields of a struct declaration.
    Inspect(inspect::InspectArgs),
    /// Render a template with the fields of a struct declaration.
    Generate(generate::GenerateArgs),
}

fn run(cli: &Cli) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Inspect(args) => inspect::execute(args, &mut out),
        Commands::Generate(args) => generate::execute(args, Provenance::from_env(), &mut out),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(cli.quiet, cli.verbose) {
        eprintln!("genstructs: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("genstructs: {}", err.report());
            ExitCode::FAILURE
        }
    }
}
