//! Styling of dump cells.
//!
//! The dumper only decides whether a cell belongs to the region; a [`Styler`]
//! turns that decision into terminal escape codes, HTML spans, or nothing.
//! Stylers wrap the visible text of a cell and never add visible characters,
//! so column alignment is the same with every styler.

use ansi_term::{Color, Style};
use std::fmt::{self, Write};

/// Membership of a cell relative to the region being dumped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// The byte lies inside the region.
    Inside,
    /// The byte only shares a line with the region.
    Outside,
}

/// Wraps the text of one dump cell.
pub trait Styler {
    fn paint<W: Write>(&self, out: &mut W, span: Span, text: &str) -> fmt::Result;
}

/// Writes cells unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainStyler;

impl Styler for PlainStyler {
    fn paint<W: Write>(&self, out: &mut W, _span: Span, text: &str) -> fmt::Result {
        out.write_str(text)
    }
}

/// Highlights region cells in bold cyan and dims the others.
#[derive(Debug, Clone, Copy)]
pub struct AnsiStyler {
    inside: Style,
    outside: Style,
}

impl Default for AnsiStyler {
    fn default() -> Self {
        AnsiStyler {
            inside: Style::new().bold().fg(Color::Cyan),
            outside: Style::new().dimmed().fg(Color::White),
        }
    }
}

impl Styler for AnsiStyler {
    fn paint<W: Write>(&self, out: &mut W, span: Span, text: &str) -> fmt::Result {
        let style = match span {
            Span::Inside => self.inside,
            Span::Outside => self.outside,
        };
        write!(out, "{}", style.paint(text))
    }
}

/// Wraps cells in `<span>` elements for embedding in a web page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlStyler;

impl HtmlStyler {
    /// Opening markup for a complete dump.
    pub fn document_start(&self) -> &'static str {
        "<pre class=\"mbr-dump\">"
    }

    /// Closing markup for a complete dump.
    pub fn document_end(&self) -> &'static str {
        "</pre>\n"
    }
}

impl Styler for HtmlStyler {
    fn paint<W: Write>(&self, out: &mut W, span: Span, text: &str) -> fmt::Result {
        let class = match span {
            Span::Inside => "inside",
            Span::Outside => "outside",
        };
        write!(out, "<span class=\"{class}\">")?;
        for c in text.chars() {
            match c {
                '&' => out.write_str("&amp;")?,
                '<' => out.write_str("&lt;")?,
                '>' => out.write_str("&gt;")?,
                '"' => out.write_str("&quot;")?,
                _ => out.write_char(c)?,
            }
        }
        out.write_str("</span>")
    }
}
