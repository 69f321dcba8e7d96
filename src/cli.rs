//! Command line surface of the `mbr-tool` binary.
//!
//! Parsing is handled by `clap`; this module only maps the parsed flags onto
//! [`DisplayOptions`] and the styler used for the dump.

use clap::Parser;
use log::warn;
use std::fmt;
use std::path::PathBuf;

use crate::dump::options::{DisplayOptions, MaskMode};
use crate::dump::style::HtmlStyler;
use crate::sector::buffer::Sector;
use crate::sector::layout;

/// Dump the regions of a Master Boot Record as annotated hex.
#[derive(Parser, Debug)]
#[command(name = "mbr-tool", version)]
pub struct Args {
    /// Input file, at most 512 bytes.
    #[arg(short, long, value_name = "FILE")]
    pub file: PathBuf,

    /// Output colored text to console.
    #[arg(short, long)]
    pub color: bool,

    /// Use tilde to mask extra data.
    #[arg(short, long, overrides_with = "blank")]
    pub tilde: bool,

    /// Use blank to mask extra data.
    #[arg(short, long, overrides_with = "tilde")]
    pub blank: bool,

    /// Wrap the dump in HTML spans instead of terminal colors.
    #[arg(long)]
    pub html: bool,

    /// Only print the dump, never log.
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase logging verbosity (repeatable).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Masking selected on the command line. Tilde and blank override each other.
    pub fn mask(&self) -> MaskMode {
        if self.tilde {
            MaskMode::Tilde
        } else if self.blank {
            MaskMode::Blank
        } else {
            MaskMode::None
        }
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::new(self.color && !self.html, self.mask())
    }

    /// Renders the whole sector the way the flags ask for.
    pub fn render(&self, sector: &Sector) -> Result<String, fmt::Error> {
        let options = self.display_options();

        if !self.html {
            return layout::render(sector, &options);
        }

        if self.color {
            warn!("--color has no effect together with --html");
        }

        let styler = HtmlStyler;
        let body = layout::render_with(sector, &options, &styler)?;
        Ok(format!(
            "{}{}{}",
            styler.document_start(),
            body,
            styler.document_end()
        ))
    }
}
