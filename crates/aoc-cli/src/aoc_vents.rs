//! Vent line CLI (2021 day 5)
//!
//! Usage: aoc_vents [INPUT] [--input-dir <DIR>] [--verbose]
//!
//! Prints the number of overlapping points, first for horizontal and vertical
//! lines only, then for all lines.
//!
//! Example:
//!   aoc_vents inputs/2021_05.txt
//!   cat input.txt | aoc_vents

use aoc_puzzles::Puzzle;

fn main() {
    aoc_cli::run(Puzzle::HydrothermalVenture);
}
