/// The size of a sector in bytes.
pub const SECTOR_SIZE: usize = 512;

/// Number of bytes rendered on a single dump line.
pub const BYTES_PER_LINE: usize = 16;

/// Byte index inside a line after which an extra gap is inserted.
pub const HALF_LINE: usize = 8;

/// Number of hex digits in the address column.
pub const ADDR_WIDTH: usize = 8;

/// Indentation of a region label, aligned on the first hex column.
pub const LABEL_INDENT: usize = ADDR_WIDTH + 2;
