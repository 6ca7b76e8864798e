//! Puzzle solving workflow
//!
//! Parse the input, run both parts and collect the answers.

use crate::app::puzzle::{Answers, Puzzle};
use crate::domain::bingo::BingoGame;
use crate::domain::boarding::{Seat, find_missing_seat, highest_seat_id, parse_boarding_passes};
use crate::domain::crabs::{AlignmentError, CostModel, cheapest_alignment, parse_positions};
use crate::domain::golden_section::SearchOptions;
use crate::domain::input_format::InputFormatError;
use crate::domain::vents::{Diagram, SegmentFilter, parse_segments};
use crate::infra::input_io::{InputError, InputSource, read_input};
use thiserror::Error;

/// Solve errors
#[derive(Debug, Error)]
pub enum SolveError {
    /// Input could not be read
    #[error(transparent)]
    Input(#[from] InputError),
    /// Input is malformed
    #[error("malformed input: {0}")]
    Format(#[from] InputFormatError),
    /// Crab alignment search failed
    #[error("alignment failed: {0}")]
    Alignment(#[from] AlignmentError),
}

/// Solve a puzzle from its input text
pub fn solve(puzzle: Puzzle, input: &str) -> Result<Answers, SolveError> {
    let answers = match puzzle {
        Puzzle::BinaryBoarding => solve_boarding(input)?,
        Puzzle::GiantSquid => solve_bingo(input)?,
        Puzzle::HydrothermalVenture => solve_vents(input)?,
        Puzzle::TreacheryOfWhales => solve_crabs(input)?,
    };

    log::debug!("{}: {:?}", puzzle, answers);
    Ok(answers)
}

/// Read the input from `source` and solve the puzzle
pub fn solve_from_source(puzzle: Puzzle, source: &InputSource) -> Result<Answers, SolveError> {
    let input = read_input(source)?;
    solve(puzzle, &input)
}

/// Highest seat id and the free seat
pub fn solve_boarding(input: &str) -> Result<Answers, SolveError> {
    let seats = parse_boarding_passes(input)?;
    let ids: Vec<u32> = seats.iter().map(Seat::id).collect();

    Ok(Answers::new(
        highest_seat_id(&seats).map(u64::from),
        find_missing_seat(&ids).map(u64::from),
    ))
}

/// Score of the first and last winning boards
pub fn solve_bingo(input: &str) -> Result<Answers, SolveError> {
    let game = BingoGame::parse(input)?;
    let winners = game.winners();

    Ok(Answers::new(
        winners.first().map(|win| win.score),
        winners.last().map(|win| win.score),
    ))
}

/// Overlapping points without and with diagonal lines
pub fn solve_vents(input: &str) -> Result<Answers, SolveError> {
    let segments = parse_segments(input)?;
    let count = |filter| {
        Diagram::from_segments(&segments, filter).map(|d| d.count_overlaps() as u64)
    };

    Ok(Answers::new(
        Some(count(SegmentFilter::AxisAligned)?),
        Some(count(SegmentFilter::All)?),
    ))
}

/// Cheapest alignment fuel for the linear and triangular cost models
pub fn solve_crabs(input: &str) -> Result<Answers, SolveError> {
    let positions = parse_positions(input)?;
    let options = SearchOptions::for_integer_domain();

    let linear = cheapest_alignment(&positions, CostModel::Linear, &options)?;
    let triangular = cheapest_alignment(&positions, CostModel::Triangular, &options)?;

    Ok(Answers::new(Some(linear.fuel), Some(triangular.fuel)))
}
