//! Error types for sector loading and region construction.

use std::io;
use std::path::PathBuf;

/// Represents errors that can occur while loading a sector or building a region.
#[derive(thiserror::Error, Debug)]
pub enum SectorError {
    /// Wraps an I/O error that occurred while reading the input.
    #[error("I/O error: {0}")]
    Io(io::Error),
    /// The input holds more bytes than a sector.
    #[error("file size is larger than 512: {0}")]
    TooLarge(u64),
    /// The input path does not name a regular file.
    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),
    /// The range is reversed or reaches past the end of the sector.
    #[error("invalid region [{start}, {end}): must satisfy start <= end <= 512")]
    InvalidRegion { start: usize, end: usize },
}

/// Converts standard I/O errors into SectorError.
impl From<io::Error> for SectorError {
    fn from(err: io::Error) -> Self {
        SectorError::Io(err)
    }
}
