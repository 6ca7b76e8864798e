//! Puzzle related constants
//!
//! Note: golden-section search defaults live next to `SearchOptions` in
//! domain/golden_section.rs.

// =============================================================================
// Binary Boarding (2020/05)
// =============================================================================

/// Number of row characters at the start of a boarding pass (F/B)
pub const ROW_CHARS: usize = 7;

/// Number of column characters at the end of a boarding pass (L/R)
pub const COLUMN_CHARS: usize = 3;

/// Total boarding pass length
pub const BOARDING_PASS_LEN: usize = ROW_CHARS + COLUMN_CHARS;

/// Seat id = row * SEATS_PER_ROW + column
pub const SEATS_PER_ROW: u32 = 1 << COLUMN_CHARS; // 8

// =============================================================================
// Giant Squid (2021/04)
// =============================================================================

/// Bingo boards are BOARD_SIZE x BOARD_SIZE
pub const BOARD_SIZE: usize = 5;

// =============================================================================
// Hydrothermal Venture (2021/05)
// =============================================================================

/// Separator between the two endpoints of a vent line
pub const SEGMENT_SEPARATOR: &str = "->";

/// A cell counts as dangerous from this many overlapping lines
pub const DANGER_THRESHOLD: u32 = 2;

/// Largest diagram, in cells, that will be allocated
pub const MAX_DIAGRAM_CELLS: u64 = 1 << 24;

// =============================================================================
// Input files
// =============================================================================

/// Default directory for puzzle input files
pub const DEFAULT_INPUT_DIR: &str = "inputs";

/// Extension of puzzle input files
pub const INPUT_FILE_EXTENSION: &str = "txt";
