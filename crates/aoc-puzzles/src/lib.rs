//! aoc-puzzles - Solvers for a handful of Advent of Code puzzles
//!
//! This crate provides:
//! - Integer line rasterization (Bresenham) and golden-section search
//! - Boarding pass decoding (2020/05)
//! - Bingo simulation (2021/04)
//! - Vent line overlap counting (2021/05)
//! - Crab alignment fuel minimization (2021/07)

pub mod app;
pub mod constants;
pub mod domain;
pub mod infra;

// Re-export commonly used types
pub use app::puzzle::{Answers, Puzzle};
pub use app::solver::{SolveError, solve, solve_from_source};
pub use domain::golden_section::{Minimum, SearchError, SearchOptions, minimize};
pub use domain::raster::{MAX_COORDINATE, Point, rasterize_line};
pub use infra::input_io::{InputError, InputSource};
