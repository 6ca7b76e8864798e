//! Seat decoding CLI (2020 day 5)
//!
//! Usage: aoc_boarding [INPUT] [--input-dir <DIR>] [--verbose]
//!
//! Prints the highest seat id and the id of the free seat.
//!
//! Example:
//!   aoc_boarding inputs/2020_05.txt
//!   cat input.txt | aoc_boarding

use aoc_puzzles::Puzzle;

fn main() {
    aoc_cli::run(Puzzle::BinaryBoarding);
}
