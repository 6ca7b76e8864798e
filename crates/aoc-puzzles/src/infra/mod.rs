//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles reading puzzle input.

pub mod input_io;
