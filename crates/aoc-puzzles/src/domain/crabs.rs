//! Crab alignment (2021/07)
//!
//! Total fuel as a function of the target position is unimodal for both
//! cost models, so the cheapest position is located with golden-section
//! search on the continuous cost. The whole positions around the final
//! bracket are then re-evaluated exactly and the cheapest one is kept.
//!
//! Exact fuel uses checked arithmetic; totals beyond `u64` are an error.

use crate::domain::golden_section::{SearchError, SearchOptions, minimize};
use crate::domain::input_format::{InputFormatError, first_content_line, parse_number_list};
use thiserror::Error;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fuel cost for moving a given distance
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CostModel {
    /// One unit per step
    Linear,
    /// Step n costs n units: d * (d + 1) / 2
    Triangular,
}

impl CostModel {
    /// Exact fuel for an integer distance, `None` on overflow
    pub fn fuel(&self, distance: u64) -> Option<u64> {
        match self {
            Self::Linear => Some(distance),
            Self::Triangular => {
                // One of d, d + 1 is even, so halve that one before multiplying
                let next = distance.checked_add(1)?;
                if distance % 2 == 0 {
                    (distance / 2).checked_mul(next)
                } else {
                    distance.checked_mul(next / 2)
                }
            }
        }
    }

    /// Continuous extension used by the search
    pub fn fuel_continuous(&self, distance: f64) -> f64 {
        match self {
            Self::Linear => distance,
            Self::Triangular => (distance * distance + distance) / 2.0,
        }
    }
}

/// Cheapest alignment found
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Alignment {
    /// Target position
    pub position: u64,
    /// Total fuel to move every crab there
    pub fuel: u64,
}

/// Alignment errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AlignmentError {
    /// No crab positions were given
    #[error("no crab positions")]
    NoPositions,
    /// Total fuel does not fit in a u64
    #[error("total fuel overflows u64")]
    Overflow,
    /// The underlying search failed
    #[error(transparent)]
    Search(#[from] SearchError),
}

/// Parse the comma separated crab positions
///
/// Positions are returned sorted.
pub fn parse_positions(input: &str) -> Result<Vec<u64>, InputFormatError> {
    let (line, text) = first_content_line(input)?;
    let mut positions: Vec<u64> = parse_number_list(text, line)?;
    positions.sort_unstable();
    Ok(positions)
}

/// Exact total fuel to align every crab at `target`
///
/// Returns `None` if the total does not fit in a u64.
pub fn total_fuel(positions: &[u64], target: u64, model: CostModel) -> Option<u64> {
    let cost = |&p: &u64| model.fuel(p.abs_diff(target));

    #[cfg(feature = "parallel")]
    let total = positions
        .par_iter()
        .map(cost)
        .try_reduce(|| 0, |a, b| a.checked_add(b));
    #[cfg(not(feature = "parallel"))]
    let total = positions
        .iter()
        .map(cost)
        .try_fold(0u64, |acc, fuel| acc.checked_add(fuel?));

    total
}

/// Continuous total fuel at a real-valued target
pub fn total_fuel_continuous(positions: &[u64], target: f64, model: CostModel) -> f64 {
    positions
        .iter()
        .map(|&p| model.fuel_continuous((p as f64 - target).abs()))
        .sum()
}

/// Find the cheapest position between the outermost crabs
///
/// The total cost is convex, so the best whole position is the floor or the
/// ceiling of the continuous minimizer, which lies inside the final bracket.
/// Every whole position from `floor(lower)` to `ceil(upper)` of that bracket
/// (at most three, clamped to the crab range) is evaluated exactly and the
/// cheapest wins; ties go to the lower position.
///
/// # Errors
///
/// Returns an error if `positions` is empty, the search fails, or every
/// candidate total overflows a u64.
pub fn cheapest_alignment(
    positions: &[u64],
    model: CostModel,
    options: &SearchOptions,
) -> Result<Alignment, AlignmentError> {
    let (Some(&min), Some(&max)) = (positions.iter().min(), positions.iter().max()) else {
        return Err(AlignmentError::NoPositions);
    };

    let minimum = minimize(
        |x| total_fuel_continuous(positions, x, model),
        min as f64,
        max as f64,
        options,
    )?;

    let first = (minimum.lower.floor().max(0.0) as u64).clamp(min, max);
    let last = (minimum.upper.ceil().max(0.0) as u64).clamp(min, max);
    let Alignment { position, fuel } = (first..=last)
        .filter_map(|position| {
            total_fuel(positions, position, model).map(|fuel| Alignment { position, fuel })
        })
        .min_by_key(|a| (a.fuel, a.position))
        .ok_or(AlignmentError::Overflow)?;

    log::debug!(
        "{:?} alignment: search midpoint {:.3} after {} evaluations, position {}, fuel {}",
        model,
        minimum.x,
        minimum.evaluations,
        position,
        fuel
    );

    Ok(Alignment { position, fuel })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "16,1,2,0,4,2,7,1,2,14\n";

    #[test]
    fn test_parse_positions_sorted() {
        let positions = parse_positions(EXAMPLE).unwrap();
        assert_eq!(positions, vec![0, 1, 1, 2, 2, 2, 4, 7, 14, 16]);
    }

    #[test]
    fn test_fuel_models() {
        assert_eq!(CostModel::Linear.fuel(11), Some(11));
        assert_eq!(CostModel::Triangular.fuel(11), Some(66));
        assert_eq!(CostModel::Triangular.fuel(10), Some(55));
        assert_eq!(CostModel::Triangular.fuel(0), Some(0));
        assert_eq!(CostModel::Triangular.fuel_continuous(11.0), 66.0);
    }

    #[test]
    fn test_total_fuel_known_targets() {
        let positions = parse_positions(EXAMPLE).unwrap();
        assert_eq!(total_fuel(&positions, 2, CostModel::Linear), Some(37));
        assert_eq!(total_fuel(&positions, 10, CostModel::Linear), Some(71));
        assert_eq!(total_fuel(&positions, 5, CostModel::Triangular), Some(168));
        assert_eq!(total_fuel(&positions, 2, CostModel::Triangular), Some(206));
    }

    #[test]
    fn test_triangular_fuel_overflow() {
        // 2^32 * (2^32 + 1) / 2 still fits, 2^33 steps do not
        assert_eq!(
            CostModel::Triangular.fuel(1 << 32),
            Some((1u64 << 31) * ((1u64 << 32) + 1))
        );
        assert_eq!(CostModel::Triangular.fuel(1 << 33), None);
        assert_eq!(CostModel::Triangular.fuel(u64::MAX), None);
        assert_eq!(CostModel::Linear.fuel(u64::MAX), Some(u64::MAX));
    }

    #[test]
    fn test_total_fuel_overflow() {
        let positions = [0, u64::MAX, u64::MAX];
        assert_eq!(total_fuel(&positions, 0, CostModel::Linear), None);
        assert_eq!(total_fuel(&positions, u64::MAX, CostModel::Linear), Some(u64::MAX));
    }

    #[test]
    fn test_alignment_overflow_is_an_error() {
        let result = cheapest_alignment(
            &[0, 10_000_000_000],
            CostModel::Triangular,
            &SearchOptions::for_integer_domain(),
        );
        assert_eq!(result, Err(AlignmentError::Overflow));
    }

    #[test]
    fn test_narrow_range_picks_best_neighbour() {
        // Bracket [13, 14] is never searched; its midpoint 13.5 rounds to 14
        let alignment = cheapest_alignment(
            &[13, 13, 14],
            CostModel::Linear,
            &SearchOptions::for_integer_domain(),
        )
        .unwrap();
        assert_eq!(alignment, Alignment { position: 13, fuel: 1 });
    }

    #[test]
    fn test_triangular_not_at_rounded_midpoint() {
        let alignment = cheapest_alignment(
            &[22, 5, 21, 5],
            CostModel::Triangular,
            &SearchOptions::for_integer_domain(),
        )
        .unwrap();
        assert_eq!(alignment.fuel, 153);
    }

    #[test]
    fn test_cheapest_linear() {
        let positions = parse_positions(EXAMPLE).unwrap();
        let alignment =
            cheapest_alignment(&positions, CostModel::Linear, &SearchOptions::for_integer_domain())
                .unwrap();
        assert_eq!(alignment, Alignment { position: 2, fuel: 37 });
    }

    #[test]
    fn test_cheapest_triangular() {
        let positions = parse_positions(EXAMPLE).unwrap();
        let alignment = cheapest_alignment(
            &positions,
            CostModel::Triangular,
            &SearchOptions::for_integer_domain(),
        )
        .unwrap();
        assert_eq!(alignment, Alignment { position: 5, fuel: 168 });
    }

    #[test]
    fn test_single_crab() {
        let alignment =
            cheapest_alignment(&[42], CostModel::Linear, &SearchOptions::for_integer_domain())
                .unwrap();
        assert_eq!(alignment, Alignment { position: 42, fuel: 0 });
    }

    #[test]
    fn test_no_positions() {
        let result = cheapest_alignment(&[], CostModel::Linear, &SearchOptions::default());
        assert_eq!(result, Err(AlignmentError::NoPositions));
    }
}
