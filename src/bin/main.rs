//! This is the main entry point for the MBR dump tool.
//!
//! The program loads a sector of at most 512 bytes and prints its regions as an
//! annotated hex dump. Diagnostics go to stderr through the logger.

use clap::Parser;
use log::error;
use mbr_tool::Sector;
use mbr_tool::cli::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(err) = stderrlog::new()
        .module(module_path!())
        .quiet(args.quiet)
        .verbosity(usize::from(args.verbose))
        .init()
    {
        eprintln!("Failed to initialise logging: {err}");
        return ExitCode::FAILURE;
    }

    let sector = match Sector::from_file(&args.file) {
        Ok(sector) => sector,
        Err(err) => {
            error!("{}: {err}", args.file.display());
            return ExitCode::FAILURE;
        }
    };

    match args.render(&sector) {
        Ok(dump) => {
            print!("{dump}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("Rendering failed: {err}");
            ExitCode::FAILURE
        }
    }
}
