//! The in-memory copy of the inspected sector.

use getset::Getters;
use log::{debug, warn};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use super::sector_error::SectorError;
use crate::constants::SECTOR_SIZE;

/// Up to [`SECTOR_SIZE`] bytes loaded once and never modified afterwards.
///
/// Offsets past the loaded length read as zero, so a short input still renders
/// as a full sector.
#[derive(Debug, Clone, PartialEq, Eq, Default, Getters)]
pub struct Sector {
    /// The bytes actually loaded.
    #[get = "pub"]
    bytes: Vec<u8>,
}

impl Sector {
    /// Wraps an owned byte vector.
    ///
    /// # Errors
    /// - `SectorError::TooLarge` if `bytes` holds more than a sector.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, SectorError> {
        if bytes.len() > SECTOR_SIZE {
            return Err(SectorError::TooLarge(bytes.len() as u64));
        }

        if bytes.len() < SECTOR_SIZE {
            warn!(
                "Sector holds {} bytes, the remaining {} are zero-filled",
                bytes.len(),
                SECTOR_SIZE - bytes.len()
            );
        }

        Ok(Sector { bytes })
    }

    /// Reads a sector from a file.
    ///
    /// The size is checked before any byte is read.
    ///
    /// # Errors
    /// - `SectorError::Io` if the file cannot be opened or read
    /// - `SectorError::NotAFile` if the path is not a regular file
    /// - `SectorError::TooLarge` if the file is larger than a sector
    pub fn from_file(path: &Path) -> Result<Self, SectorError> {
        let metadata = fs::metadata(path)?;

        if !metadata.is_file() {
            return Err(SectorError::NotAFile(path.to_path_buf()));
        }

        let size = metadata.len();
        if size > SECTOR_SIZE as u64 {
            return Err(SectorError::TooLarge(size));
        }

        let mut bytes = Vec::with_capacity(size as usize);
        // The file may have grown since the stat, never read more than a sector.
        File::open(path)?
            .take(SECTOR_SIZE as u64 + 1)
            .read_to_end(&mut bytes)?;
        debug!("Loaded {} bytes from {}", bytes.len(), path.display());

        Self::from_bytes(bytes)
    }

    /// Returns the byte at `offset`, or zero past the loaded length.
    pub fn byte_at(&self, offset: usize) -> u8 {
        self.bytes.get(offset).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
