//! Crab alignment against an exhaustive scan
//!
//! Positions come from a seeded RNG so failures are reproducible.

use aoc_puzzles::SearchOptions;
use aoc_puzzles::domain::crabs::{AlignmentError, CostModel, cheapest_alignment, total_fuel};
use aoc_puzzles::{Puzzle, SolveError, solve};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SEED: u64 = 0xC2AB_0007;
const CASES: usize = 3_000;

fn exhaustive_best(positions: &[u64], model: CostModel) -> u64 {
    let min = *positions.iter().min().unwrap();
    let max = *positions.iter().max().unwrap();
    (min..=max)
        .filter_map(|target| total_fuel(positions, target, model))
        .min()
        .unwrap()
}

#[test]
fn test_matches_exhaustive_scan() {
    let mut rng = StdRng::seed_from_u64(SEED);
    let options = SearchOptions::for_integer_domain();

    for _ in 0..CASES {
        let count = rng.gen_range(1..=8);
        let positions: Vec<u64> = (0..count).map(|_| rng.gen_range(0..=60)).collect();

        for model in [CostModel::Linear, CostModel::Triangular] {
            let alignment = cheapest_alignment(&positions, model, &options).unwrap();
            assert_eq!(
                alignment.fuel,
                exhaustive_best(&positions, model),
                "{:?} {:?}",
                positions,
                model
            );
            assert_eq!(
                total_fuel(&positions, alignment.position, model),
                Some(alignment.fuel)
            );
        }
    }
}

#[test]
fn test_wide_spread_positions() {
    let mut rng = StdRng::seed_from_u64(SEED ^ 1);
    let options = SearchOptions::for_integer_domain();

    for _ in 0..50 {
        let positions: Vec<u64> = (0..20).map(|_| rng.gen_range(0..=2_000)).collect();
        for model in [CostModel::Linear, CostModel::Triangular] {
            let alignment = cheapest_alignment(&positions, model, &options).unwrap();
            assert_eq!(alignment.fuel, exhaustive_best(&positions, model), "{:?}", positions);
        }
    }
}

#[test]
fn test_solve_reports_fuel_overflow() {
    let result = solve(Puzzle::TreacheryOfWhales, "0,10000000000");
    assert!(matches!(
        result,
        Err(SolveError::Alignment(AlignmentError::Overflow))
    ));
}
