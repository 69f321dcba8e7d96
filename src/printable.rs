//! Classification of byte values for the ASCII column of a dump.

/// Character shown in place of a non-printable byte.
pub const PLACEHOLDER: char = '.';

/// Returns the character shown for `byte` in the ASCII column.
///
/// Only the printable ASCII span from space (0x20) to tilde (0x7E) is shown as is.
/// Control characters, DEL and every byte above 0x7F map to [`PLACEHOLDER`].
pub const fn classify(byte: u8) -> char {
    match byte {
        0x20..=0x7E => byte as char,
        _ => PLACEHOLDER,
    }
}
