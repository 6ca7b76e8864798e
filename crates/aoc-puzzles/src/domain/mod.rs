//! Domain layer - Pure computational logic
//!
//! This module contains parsers and algorithms without I/O dependencies.

pub mod bingo;
pub mod boarding;
pub mod crabs;
pub mod golden_section;
pub mod input_format;
pub mod raster;
pub mod vents;
