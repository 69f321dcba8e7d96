//! Rendering of one region as address, hex and ASCII columns.

use log::trace;
use std::fmt::{self, Write};

use super::options::{DisplayOptions, MaskMode};
use super::style::{Span, Styler};
use crate::constants::{ADDR_WIDTH, BYTES_PER_LINE, HALF_LINE, LABEL_INDENT};
use crate::printable;
use crate::sector::buffer::Sector;
use crate::sector::region::Region;

/// Dumps regions of a sector with fixed display options.
///
/// Every line covers 16 aligned bytes:
///
/// ```text
/// 00000000  EB 3C 90 4D 53 44 4F 53  35 2E 30 00 02 08 20 00  |.<.MSDOS5.0... .|
/// ```
///
/// Bytes of the line that fall outside the region are masked when the options
/// ask for it, and styled as [`Span::Outside`].
pub struct RegionDumper<'a, S: Styler> {
    sector: &'a Sector,
    options: DisplayOptions,
    styler: &'a S,
}

impl<'a, S: Styler> RegionDumper<'a, S> {
    pub fn new(sector: &'a Sector, options: DisplayOptions, styler: &'a S) -> Self {
        RegionDumper {
            sector,
            options,
            styler,
        }
    }

    /// Renders `region` into a new string.
    pub fn dump(&self, region: &Region) -> Result<String, fmt::Error> {
        let mut out = String::new();
        self.write_region(&mut out, region)?;
        Ok(out)
    }

    /// Writes the label, the lines covering `region` and a trailing blank line.
    pub fn write_region<W: Write>(&self, out: &mut W, region: &Region) -> fmt::Result {
        trace!(
            "Dumping {} [{}, {})",
            region.label(),
            region.start(),
            region.end()
        );

        writeln!(out, "{:indent$}{}", "", region.label(), indent = LABEL_INDENT)?;
        for line_start in region.line_starts() {
            self.write_line(out, region, line_start)?;
        }
        writeln!(out)
    }

    fn write_line<W: Write>(&self, out: &mut W, region: &Region, line_start: usize) -> fmt::Result {
        let offsets = line_start..line_start + BYTES_PER_LINE;

        write!(out, "{:0width$X}  ", line_start, width = ADDR_WIDTH)?;

        for offset in offsets.clone() {
            let column = offset - line_start;
            if column > 0 {
                out.write_char(' ')?;
            }
            if column == HALF_LINE {
                out.write_char(' ')?;
            }

            let (span, masked) = self.cell(region, offset);
            match masked.and_then(|m| m.byte_replacement()) {
                Some(replacement) => self.styler.paint(out, span, replacement)?,
                None => {
                    let hex = format!("{:02X}", self.sector.byte_at(offset));
                    self.styler.paint(out, span, &hex)?;
                }
            }
        }

        out.write_str("  |")?;

        let mut buf = [0; 4];
        for offset in offsets {
            let (span, masked) = self.cell(region, offset);
            let c = masked
                .and_then(|m| m.char_replacement())
                .unwrap_or_else(|| printable::classify(self.sector.byte_at(offset)));
            self.styler.paint(out, span, c.encode_utf8(&mut buf))?;
        }

        out.write_str("|\n")
    }

    /// Returns the span of the byte at `offset` and the mask to apply, if any.
    fn cell(&self, region: &Region, offset: usize) -> (Span, Option<MaskMode>) {
        if region.contains(offset) {
            (Span::Inside, None)
        } else if self.options.masks() {
            (Span::Outside, Some(self.options.mask()))
        } else {
            (Span::Outside, None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dump::style::{AnsiStyler, PlainStyler};

    fn boot_sector() -> Sector {
        let mut bytes = vec![0u8; 512];
        bytes[..3].copy_from_slice(&[0xEB, 0x3C, 0x90]);
        bytes[3..11].copy_from_slice(b"MSDOS5.0");
        bytes[510] = 0x55;
        bytes[511] = 0xAA;
        Sector::from_bytes(bytes).unwrap()
    }

    fn dump(sector: &Sector, region: Region, mask: MaskMode) -> String {
        RegionDumper::new(sector, DisplayOptions::new(false, mask), &PlainStyler)
            .dump(&region)
            .unwrap()
    }

    #[test]
    fn zero_sector_jump_instruction() {
        let sector = Sector::from_bytes(vec![0; 512]).unwrap();
        let out = dump(&sector, Region::new(0, 3, "Jump Instruction"), MaskMode::None);

        assert_eq!(
            out,
            "          Jump Instruction\n\
             00000000  00 00 00 00 00 00 00 00  00 00 00 00 00 00 00 00  |................|\n\
             \n"
        );
    }

    #[test]
    fn oem_name_is_readable_in_ascii_column() {
        let out = dump(&boot_sector(), Region::new(3, 11, "OEM Name"), MaskMode::None);
        let line = out.lines().nth(1).unwrap();

        assert!(line.starts_with("00000000  EB 3C 90 4D 53 44 4F 53  35 2E 30 00"));
        assert!(line.ends_with("  |.<.MSDOS5.0.....|"));
    }

    #[test]
    fn tilde_masks_everything_outside_the_region() {
        let out = dump(&boot_sector(), Region::new(3, 11, "OEM Name"), MaskMode::Tilde);

        assert_eq!(
            out.lines().nth(1).unwrap(),
            "00000000  ~~ ~~ ~~ 4D 53 44 4F 53  35 2E 30 ~~ ~~ ~~ ~~ ~~  |~~~MSDOS5.0~~~~~|"
        );
    }

    #[test]
    fn blank_masks_with_spaces() {
        let region = Region::new(510, 512, "Boot Signature");
        let out = dump(&boot_sector(), region, MaskMode::Blank);

        let expected = format!("000001F0{}55 AA  |{}U.|", " ".repeat(45), " ".repeat(14));
        assert_eq!(out.lines().nth(1).unwrap(), expected);
    }

    #[test]
    fn lines_cover_the_aligned_span() {
        let sector = boot_sector();
        let out = dump(&sector, Region::new(11, 101, "BPB"), MaskMode::None);
        let addresses: Vec<&str> = out
            .lines()
            .skip(1)
            .filter(|l| !l.is_empty())
            .map(|l| &l[..8])
            .collect();

        assert_eq!(
            addresses,
            ["00000000", "00000010", "00000020", "00000030", "00000040", "00000050", "00000060"]
        );
        assert!(out.ends_with("|\n\n"));
    }

    #[test]
    fn straddling_short_region_takes_two_lines() {
        let sector = boot_sector();
        let region = Region::try_new(14, 18, "straddle").unwrap();
        let out = dump(&sector, region, MaskMode::None);
        assert_eq!(out.lines().filter(|l| l.ends_with('|')).count(), 2);
    }

    #[test]
    fn empty_region_prints_only_its_label() {
        let sector = boot_sector();
        let out = dump(&sector, Region::new(32, 32, "nothing"), MaskMode::Tilde);
        assert_eq!(out, "          nothing\n\n");
    }

    #[test]
    fn color_keeps_columns_aligned() {
        let sector = boot_sector();
        let region = Region::new(446, 509, "Partition Table");
        let styler = AnsiStyler::default();
        let options = DisplayOptions::new(true, MaskMode::Tilde);
        let colored = RegionDumper::new(&sector, options, &styler)
            .dump(&region)
            .unwrap();
        let plain = dump(&sector, region, MaskMode::Tilde);

        assert!(colored.contains("\x1b[1;36m00\x1b[0m"));
        assert!(colored.contains("\x1b[2;37m~~\x1b[0m"));

        let stripped = colored
            .replace("\x1b[1;36m", "")
            .replace("\x1b[2;37m", "")
            .replace("\x1b[0m", "");
        assert_eq!(stripped, plain);
    }
}
