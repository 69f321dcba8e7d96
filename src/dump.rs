//! Rendering of sector regions as annotated hex/ASCII dumps.

pub mod dumper;
pub mod options;
pub mod style;
