//! Boarding pass decoding (2020/05)
//!
//! A pass encodes the seat with binary space partitioning: 7 characters pick
//! the row (F = lower half, B = upper half), then 3 characters pick the
//! column (L = lower half, R = upper half).

use crate::constants::{BOARDING_PASS_LEN, ROW_CHARS, SEATS_PER_ROW};
use crate::domain::input_format::InputFormatError;

/// Decoded seat position
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Seat {
    pub row: u32,
    pub column: u32,
}

impl Seat {
    /// Seat id (row * 8 + column)
    pub fn id(&self) -> u32 {
        self.row * SEATS_PER_ROW + self.column
    }
}

/// Narrow `[0, 2^n - 1]` down to one value
///
/// `lower` picks the lower half, `upper` the upper half.
fn partition(code: &str, lower: char, upper: char, line: usize) -> Result<u32, InputFormatError> {
    let mut low = 0u32;
    let mut high = (1u32 << code.len()) - 1;

    for ch in code.chars() {
        let split = (low + high) / 2;
        if ch == lower {
            high = split;
        } else if ch == upper {
            low = split + 1;
        } else {
            return Err(InputFormatError::InvalidPassChar { line, found: ch });
        }
    }

    Ok(low)
}

/// Decode a single boarding pass
///
/// `line` is only used for error reporting.
pub fn parse_boarding_pass(pass: &str, line: usize) -> Result<Seat, InputFormatError> {
    let pass = pass.trim();
    let found = pass.chars().count();
    if found != BOARDING_PASS_LEN {
        return Err(InputFormatError::InvalidPassLength {
            line,
            expected: BOARDING_PASS_LEN,
            found,
        });
    }
    if let Some(ch) = pass.chars().find(|ch| !ch.is_ascii()) {
        return Err(InputFormatError::InvalidPassChar { line, found: ch });
    }

    let (row_code, column_code) = pass.split_at(ROW_CHARS);
    Ok(Seat {
        row: partition(row_code, 'F', 'B', line)?,
        column: partition(column_code, 'L', 'R', line)?,
    })
}

/// Decode every non-blank line of the input
pub fn parse_boarding_passes(input: &str) -> Result<Vec<Seat>, InputFormatError> {
    let seats = input
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| parse_boarding_pass(line, index + 1))
        .collect::<Result<Vec<_>, _>>()?;

    if seats.is_empty() {
        return Err(InputFormatError::Empty);
    }

    Ok(seats)
}

/// Highest seat id, if any
pub fn highest_seat_id(seats: &[Seat]) -> Option<u32> {
    seats.iter().map(Seat::id).max()
}

/// Find the free seat between taken ones
///
/// Returns the first id between the lowest and highest taken id that is not
/// itself taken.
pub fn find_missing_seat(ids: &[u32]) -> Option<u32> {
    let mut sorted = ids.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    sorted
        .windows(2)
        .find(|pair| pair[1] - pair[0] > 1)
        .map(|pair| pair[0] + 1)
}
