//! Puzzle input format errors and shared parsing helpers
//!
//! Line numbers in errors are 1-based.

use std::str::FromStr;
use thiserror::Error;

/// Input format errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputFormatError {
    /// Input has no content
    #[error("input is empty")]
    Empty,
    /// A value could not be parsed as a number
    #[error("line {line}: invalid number '{value}'")]
    InvalidNumber { line: usize, value: String },
    /// Boarding pass has the wrong number of characters
    #[error("line {line}: boarding pass must be {expected} characters, found {found}")]
    InvalidPassLength {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Boarding pass contains a character outside F/B/L/R
    #[error("line {line}: unexpected character '{found}' in boarding pass")]
    InvalidPassChar { line: usize, found: char },
    /// Bingo board row does not have the expected width
    #[error("line {line}: bingo row must have {expected} numbers, found {found}")]
    InvalidBoardRow {
        line: usize,
        expected: usize,
        found: usize,
    },
    /// Bingo board ends before all rows were read
    #[error("board {board}: expected {expected} rows, found {found}")]
    IncompleteBoard {
        board: usize,
        expected: usize,
        found: usize,
    },
    /// Vent line is not of the form `x1,y1 -> x2,y2`
    #[error("line {line}: invalid vent line '{text}'")]
    InvalidSegment { line: usize, text: String },
    /// Vent coordinates span more cells than a diagram may hold
    #[error("vent diagram of {width}x{height} cells exceeds the limit of {limit} cells")]
    DiagramTooLarge { width: u64, height: u64, limit: u64 },
}

/// Parse a single number, reporting the line on failure
pub fn parse_number<T: FromStr>(value: &str, line: usize) -> Result<T, InputFormatError> {
    let value = value.trim();
    value.parse().map_err(|_| InputFormatError::InvalidNumber {
        line,
        value: value.to_string(),
    })
}

/// Parse a comma separated list of numbers from one line
pub fn parse_number_list<T: FromStr>(text: &str, line: usize) -> Result<Vec<T>, InputFormatError> {
    text.trim()
        .split(',')
        .map(|value| parse_number(value, line))
        .collect()
}

/// First non-blank line with its 1-based line number
pub fn first_content_line(input: &str) -> Result<(usize, &str), InputFormatError> {
    input
        .lines()
        .enumerate()
        .find(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| (index + 1, line))
        .ok_or(InputFormatError::Empty)
}
