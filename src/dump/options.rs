//! Display settings shared by every region dump.

use getset::CopyGetters;

/// How bytes outside the dumped region are shown on its lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaskMode {
    /// Show the real byte values.
    #[default]
    None,
    /// Replace them with tildes.
    Tilde,
    /// Replace them with spaces.
    Blank,
}

impl MaskMode {
    /// Text shown in a hex cell for a masked byte.
    pub fn byte_replacement(self) -> Option<&'static str> {
        match self {
            MaskMode::None => None,
            MaskMode::Tilde => Some("~~"),
            MaskMode::Blank => Some("  "),
        }
    }

    /// Character shown in the ASCII column for a masked byte.
    pub fn char_replacement(self) -> Option<char> {
        match self {
            MaskMode::None => None,
            MaskMode::Tilde => Some('~'),
            MaskMode::Blank => Some(' '),
        }
    }
}

/// Options fixed once from the command line and passed to the dumper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, CopyGetters)]
#[get_copy = "pub"]
pub struct DisplayOptions {
    /// Colorize cells with terminal escape sequences.
    color: bool,
    /// Masking applied to bytes outside the region.
    mask: MaskMode,
}

impl DisplayOptions {
    pub fn new(color: bool, mask: MaskMode) -> Self {
        DisplayOptions { color, mask }
    }

    /// Returns whether bytes outside the region are replaced.
    pub fn masks(&self) -> bool {
        self.mask != MaskMode::None
    }
}
