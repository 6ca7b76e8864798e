//! Bingo simulation (2021/04)
//!
//! Instead of marking boards draw by draw, every number gets the index of
//! the draw that calls it. A line completes on the latest draw among its
//! cells, and a board wins on the earliest completed line.

use crate::constants::BOARD_SIZE;
use crate::domain::input_format::{
    InputFormatError, first_content_line, parse_number, parse_number_list,
};
use rustc_hash::FxHashMap;

/// A BOARD_SIZE x BOARD_SIZE bingo board
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    cells: [[u32; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Create a board from its rows
    pub fn new(cells: [[u32; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Number at (row, column)
    pub fn get(&self, row: usize, column: usize) -> u32 {
        self.cells[row][column]
    }

    /// Iterate over all numbers on the board
    pub fn numbers(&self) -> impl Iterator<Item = u32> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Draw index on which this board wins, if it ever does
    ///
    /// `draw_index` maps a number to the index of the draw that calls it.
    fn winning_turn(&self, draw_index: &FxHashMap<u32, usize>) -> Option<usize> {
        let rows = (0..BOARD_SIZE)
            .filter_map(|r| line_turn((0..BOARD_SIZE).map(|c| self.cells[r][c]), draw_index));
        let columns = (0..BOARD_SIZE)
            .filter_map(|c| line_turn((0..BOARD_SIZE).map(|r| self.cells[r][c]), draw_index));

        rows.chain(columns).min()
    }
}

/// Draw index completing a line, `None` if some number is never called
fn line_turn(
    mut cells: impl Iterator<Item = u32>,
    draw_index: &FxHashMap<u32, usize>,
) -> Option<usize> {
    cells.try_fold(0, |latest, n| draw_index.get(&n).map(|&turn| latest.max(turn)))
}

/// A board completing a line
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Win {
    /// Index of the board in input order
    pub board_index: usize,
    /// Index of the winning draw
    pub turn: usize,
    /// The number called on the winning draw
    pub last_number: u32,
    /// Sum of unmarked numbers times the last number
    pub score: u64,
}

/// Draw order plus boards
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BingoGame {
    pub draws: Vec<u32>,
    pub boards: Vec<Board>,
}

impl BingoGame {
    /// Parse the puzzle input
    ///
    /// The first non-blank line holds the draws. Boards follow as groups of
    /// BOARD_SIZE rows separated by blank lines.
    pub fn parse(input: &str) -> Result<Self, InputFormatError> {
        let (draw_line, draw_text) = first_content_line(input)?;
        let draws = parse_number_list(draw_text, draw_line)?;

        let mut boards = Vec::new();
        let mut rows: Vec<[u32; BOARD_SIZE]> = Vec::with_capacity(BOARD_SIZE);

        for (index, text) in input.lines().enumerate().skip(draw_line) {
            let line = index + 1;
            if text.trim().is_empty() {
                if !rows.is_empty() {
                    return Err(InputFormatError::IncompleteBoard {
                        board: boards.len() + 1,
                        expected: BOARD_SIZE,
                        found: rows.len(),
                    });
                }
                continue;
            }

            let values = text
                .split_whitespace()
                .map(|value| parse_number(value, line))
                .collect::<Result<Vec<u32>, _>>()?;
            let row: [u32; BOARD_SIZE] = values.try_into().map_err(|values: Vec<u32>| {
                InputFormatError::InvalidBoardRow {
                    line,
                    expected: BOARD_SIZE,
                    found: values.len(),
                }
            })?;
            rows.push(row);

            if rows.len() == BOARD_SIZE {
                let mut cells = [[0; BOARD_SIZE]; BOARD_SIZE];
                cells.copy_from_slice(&rows);
                boards.push(Board::new(cells));
                rows.clear();
            }
        }

        if !rows.is_empty() {
            return Err(InputFormatError::IncompleteBoard {
                board: boards.len() + 1,
                expected: BOARD_SIZE,
                found: rows.len(),
            });
        }

        log::debug!("parsed {} draws and {} boards", draws.len(), boards.len());
        Ok(Self { draws, boards })
    }

    /// All wins in the order they happen
    ///
    /// Boards winning on the same draw keep their input order. Boards are
    /// told apart by index, so duplicate boards each win on their own.
    pub fn winners(&self) -> Vec<Win> {
        let mut draw_index = FxHashMap::default();
        for (turn, &number) in self.draws.iter().enumerate() {
            // A number called twice counts from its first call
            draw_index.entry(number).or_insert(turn);
        }

        let mut wins: Vec<Win> = self
            .boards
            .iter()
            .enumerate()
            .filter_map(|(board_index, board)| {
                let turn = board.winning_turn(&draw_index)?;
                let last_number = self.draws[turn];
                let unmarked: u64 = board
                    .numbers()
                    .filter(|n| draw_index.get(n).is_none_or(|&t| t > turn))
                    .map(u64::from)
                    .sum();

                Some(Win {
                    board_index,
                    turn,
                    last_number,
                    score: unmarked * u64::from(last_number),
                })
            })
            .collect();

        wins.sort_by_key(|win| win.turn);
        wins
    }

    /// The first board to win
    pub fn first_winner(&self) -> Option<Win> {
        self.winners().first().copied()
    }

    /// The last board to win
    pub fn last_winner(&self) -> Option<Win> {
        self.winners().last().copied()
    }
}
