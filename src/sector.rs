//! Sector loading and the fixed region layout of a Master Boot Record.

pub mod buffer;
pub mod layout;
pub mod region;
pub mod sector_error;
