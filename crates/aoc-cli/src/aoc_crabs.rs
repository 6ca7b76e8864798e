//! Crab alignment CLI (2021 day 7)
//!
//! Usage: aoc_crabs [INPUT] [--input-dir <DIR>] [--verbose]
//!
//! Prints the least fuel needed to align all crabs, first with constant then
//! with increasing cost per step.
//!
//! Example:
//!   aoc_crabs inputs/2021_07.txt
//!   cat input.txt | aoc_crabs

use aoc_puzzles::Puzzle;

fn main() {
    aoc_cli::run(Puzzle::TreacheryOfWhales);
}
