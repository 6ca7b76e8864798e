//! Bingo CLI (2021 day 4)
//!
//! Usage: aoc_bingo [INPUT] [--input-dir <DIR>] [--verbose]
//!
//! Prints the score of the first and the last board to win.
//!
//! Example:
//!   aoc_bingo inputs/2021_04.txt
//!   cat input.txt | aoc_bingo

use aoc_puzzles::Puzzle;

fn main() {
    aoc_cli::run(Puzzle::GiantSquid);
}
