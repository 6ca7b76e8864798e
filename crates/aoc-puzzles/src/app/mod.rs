//! Application layer - Use case implementations
//!
//! This module coordinates domain and infrastructure layers to solve puzzles.

pub mod puzzle;
pub mod solver;
