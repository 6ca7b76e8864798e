//! Puzzle catalogue and answer reporting

use crate::constants::DEFAULT_INPUT_DIR;
use crate::infra::input_io::get_input_path;
use std::fmt;
use std::path::{Path, PathBuf};

/// Supported puzzles
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Puzzle {
    /// 2020 day 5
    BinaryBoarding,
    /// 2021 day 4
    GiantSquid,
    /// 2021 day 5
    HydrothermalVenture,
    /// 2021 day 7
    TreacheryOfWhales,
}

impl Puzzle {
    /// Every puzzle, in calendar order
    pub const ALL: [Puzzle; 4] = [
        Self::BinaryBoarding,
        Self::GiantSquid,
        Self::HydrothermalVenture,
        Self::TreacheryOfWhales,
    ];

    /// Event year and day
    pub fn date(&self) -> (u16, u8) {
        match self {
            Self::BinaryBoarding => (2020, 5),
            Self::GiantSquid => (2021, 4),
            Self::HydrothermalVenture => (2021, 5),
            Self::TreacheryOfWhales => (2021, 7),
        }
    }

    /// Puzzle title
    pub fn title(&self) -> &'static str {
        match self {
            Self::BinaryBoarding => "Binary Boarding",
            Self::GiantSquid => "Giant Squid",
            Self::HydrothermalVenture => "Hydrothermal Venture",
            Self::TreacheryOfWhales => "The Treachery of Whales",
        }
    }

    /// Input file stem, e.g. `2021_05`
    pub fn input_stem(&self) -> String {
        let (year, day) = self.date();
        format!("{}_{:02}", year, day)
    }

    /// Default input file inside `dir`
    pub fn input_path(&self, dir: impl AsRef<Path>) -> PathBuf {
        get_input_path(dir, &self.input_stem())
    }

    /// Default input file inside the default input directory
    pub fn default_input_path(&self) -> PathBuf {
        self.input_path(DEFAULT_INPUT_DIR)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, day) = self.date();
        write!(f, "{} day {}: {}", year, day, self.title())
    }
}

/// Answers to both parts of a puzzle
///
/// `None` means the input has no answer (e.g. no board ever wins).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Answers {
    pub part1: Option<u64>,
    pub part2: Option<u64>,
}

impl Answers {
    /// Create answers for both parts
    pub fn new(part1: Option<u64>, part2: Option<u64>) -> Self {
        Self { part1, part2 }
    }

    /// Answer lines as printed by the CLI
    pub fn lines(&self) -> [String; 2] {
        let show = |answer: Option<u64>| match answer {
            Some(value) => value.to_string(),
            None => "no answer".to_string(),
        };
        [
            format!("Part 1: {}", show(self.part1)),
            format!("Part 2: {}", show(self.part2)),
        ]
    }
}

impl fmt::Display for Answers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [part1, part2] = self.lines();
        write!(f, "{}\n{}", part1, part2)
    }
}
