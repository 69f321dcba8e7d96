//! Named, validated byte ranges within a sector.

use getset::CopyGetters;

use super::sector_error::SectorError;
use crate::constants::{BYTES_PER_LINE, SECTOR_SIZE};

/// A labeled half-open byte range `[start, end)` inside a sector.
///
/// A region always satisfies `start <= end <= SECTOR_SIZE`: [`Region::new`]
/// enforces it at compile time for constants, [`Region::try_new`] at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters)]
pub struct Region<'a> {
    /// First byte of the region.
    #[get_copy = "pub"]
    start: usize,
    /// One past the last byte of the region.
    #[get_copy = "pub"]
    end: usize,
    /// Name printed above the region dump.
    #[get_copy = "pub"]
    label: &'a str,
}

impl<'a> Region<'a> {
    /// Builds a region, panicking on an invalid range.
    ///
    /// Meant for `const` items, where the panic becomes a compile error.
    pub const fn new(start: usize, end: usize, label: &'a str) -> Self {
        assert!(start <= end, "region start is after its end");
        assert!(end <= SECTOR_SIZE, "region ends past the sector");
        Region { start, end, label }
    }

    /// Builds a region from runtime values.
    ///
    /// # Errors
    /// - `SectorError::InvalidRegion` if `start > end` or `end > SECTOR_SIZE`.
    pub fn try_new(start: usize, end: usize, label: &'a str) -> Result<Self, SectorError> {
        if start > end || end > SECTOR_SIZE {
            return Err(SectorError::InvalidRegion { start, end });
        }
        Ok(Region { start, end, label })
    }

    /// Returns whether `offset` lies inside the region.
    pub fn contains(&self, offset: usize) -> bool {
        (self.start..self.end).contains(&offset)
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Offset of the first dump line, aligned down on a line boundary.
    pub fn first_line(&self) -> usize {
        self.start / BYTES_PER_LINE * BYTES_PER_LINE
    }

    /// End of the dumped span, aligned up on a line boundary.
    pub fn line_end(&self) -> usize {
        self.end.div_ceil(BYTES_PER_LINE) * BYTES_PER_LINE
    }

    /// Offsets of every line needed to cover the region.
    pub fn line_starts(&self) -> impl Iterator<Item = usize> + use<> {
        (self.first_line()..self.line_end()).step_by(BYTES_PER_LINE)
    }
}
