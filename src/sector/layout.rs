//! The fixed region layout of a Master Boot Record.

use log::debug;
use std::fmt::{self, Write};

use super::buffer::Sector;
use super::region::Region;
use crate::dump::dumper::RegionDumper;
use crate::dump::options::DisplayOptions;
use crate::dump::style::{AnsiStyler, PlainStyler, Styler};

/// The regions of an MBR, in dump order. They tile the whole sector.
pub const MBR_LAYOUT: [Region<'static>; 7] = [
    Region::new(0, 3, "Jump Instruction"),
    Region::new(3, 11, "OEM Name"),
    Region::new(11, 101, "BPB"),
    Region::new(101, 446, "Code"),
    Region::new(446, 509, "Partition Table"),
    Region::new(509, 510, "Physical Drive Number"),
    Region::new(510, 512, "Boot Signature"),
];

/// Renders every MBR region, colored with ANSI codes if `options` asks for it.
pub fn render(sector: &Sector, options: &DisplayOptions) -> Result<String, fmt::Error> {
    if options.color() {
        render_with(sector, options, &AnsiStyler::default())
    } else {
        render_with(sector, options, &PlainStyler)
    }
}

/// Renders every MBR region with a caller-supplied styler.
///
/// The output starts with a blank line, then each region in [`MBR_LAYOUT`] order.
/// Nothing is returned unless all regions rendered.
pub fn render_with<S: Styler>(
    sector: &Sector,
    options: &DisplayOptions,
    styler: &S,
) -> Result<String, fmt::Error> {
    debug!(
        "Rendering {} regions over {} loaded bytes",
        MBR_LAYOUT.len(),
        sector.len()
    );

    let dumper = RegionDumper::new(sector, *options, styler);
    let mut out = String::new();

    writeln!(out)?;
    for region in MBR_LAYOUT.iter() {
        dumper.write_region(&mut out, region)?;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECTOR_SIZE;
    use crate::dump::options::MaskMode;

    #[test]
    fn layout_offsets_are_fixed() {
        let bounds: Vec<(usize, usize, &str)> = MBR_LAYOUT
            .iter()
            .map(|r| (r.start(), r.end(), r.label()))
            .collect();

        assert_eq!(
            bounds,
            vec![
                (0, 3, "Jump Instruction"),
                (3, 11, "OEM Name"),
                (11, 101, "BPB"),
                (101, 446, "Code"),
                (446, 509, "Partition Table"),
                (509, 510, "Physical Drive Number"),
                (510, 512, "Boot Signature"),
            ]
        );
    }

    #[test]
    fn layout_tiles_the_sector() {
        assert_eq!(MBR_LAYOUT[0].start(), 0);
        assert_eq!(MBR_LAYOUT[MBR_LAYOUT.len() - 1].end(), SECTOR_SIZE);
        assert!(MBR_LAYOUT.windows(2).all(|w| w[0].end() == w[1].start()));
    }

    #[test]
    fn labels_appear_in_order() {
        let sector = Sector::from_bytes(vec![0; 512]).unwrap();
        let out = render(&sector, &DisplayOptions::default()).unwrap();

        assert!(out.starts_with("\n          Jump Instruction\n"));
        let positions: Vec<usize> = MBR_LAYOUT
            .iter()
            .map(|r| out.find(&format!("          {}\n", r.label())).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn rendering_is_deterministic() {
        let sector = Sector::from_bytes((0..=255).chain(0..=255).collect()).unwrap();
        let options = DisplayOptions::new(true, MaskMode::Tilde);

        assert_eq!(
            render(&sector, &options).unwrap(),
            render(&sector, &options).unwrap()
        );
    }
}
