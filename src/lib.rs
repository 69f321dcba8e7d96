//!
//! mbr_tool: A library and CLI for inspecting a Master Boot Record sector.
//!
//! This crate provides tools for:
//! - Loading a sector of at most 512 bytes, zero-filling a short input
//! - Splitting it into the named regions of an MBR
//! - Rendering each region as an address/hex/ASCII dump, optionally colored
//!   and with the bytes around the region masked
//!
//! # Re-exports
//! - [`Sector`]: the loaded bytes
//! - [`Region`]: a labeled, validated byte range
//! - [`DisplayOptions`] and [`MaskMode`]: how a dump looks
//! - [`RegionDumper`]: renders one region

pub mod cli;
pub mod constants;
pub mod dump;
pub mod printable;
pub mod sector;

/// Renders one region (see [`dump::dumper::RegionDumper`]).
pub use crate::dump::dumper::RegionDumper;
/// Display settings (see [`dump::options::DisplayOptions`]).
pub use crate::dump::options::{DisplayOptions, MaskMode};
/// Loaded sector bytes (see [`sector::buffer::Sector`]).
pub use crate::sector::buffer::Sector;
/// The MBR layout and its renderers (see [`sector::layout`]).
pub use crate::sector::layout::{MBR_LAYOUT, render, render_with};
/// Validated byte range (see [`sector::region::Region`]).
pub use crate::sector::region::Region;
