//! Golden-section search
//!
//! Finds the minimizer of a unimodal function on a closed interval. Each
//! iteration shrinks the bracket by `1/φ` and keeps one of the two interior
//! points from the previous step, so only one new evaluation is needed per
//! iteration.

use thiserror::Error;

/// The golden ratio φ = (1 + √5) / 2
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Default convergence tolerance (bracket width)
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

/// Default iteration cap
///
/// 1/φ^100 is far below f64 resolution for any finite bracket, so hitting
/// this means the tolerance cannot be reached.
pub const DEFAULT_MAX_ITERATIONS: u32 = 500;

/// Search configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    /// Stop once the bracket width is at most this value
    pub tolerance: f64,
    /// Give up after this many narrowing steps
    pub max_iterations: u32,
}

impl SearchOptions {
    /// Options with a custom tolerance and the default iteration cap
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }

    /// Options for a search whose answer is rounded to an integer afterwards
    pub fn for_integer_domain() -> Self {
        Self::with_tolerance(1.0)
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Result of a search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Minimum {
    /// Midpoint of the final bracket
    pub x: f64,
    /// Final bracket lower bound
    pub lower: f64,
    /// Final bracket upper bound
    pub upper: f64,
    /// Number of narrowing steps performed
    pub iterations: u32,
    /// Number of objective evaluations
    pub evaluations: u32,
}

impl Minimum {
    /// Width of the final bracket
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Search errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SearchError {
    /// Tolerance is not a positive finite number
    #[error("invalid tolerance {0}: must be positive and finite")]
    InvalidTolerance(f64),
    /// Bracket bound is not finite
    #[error("invalid bracket [{lower}, {upper}]: bounds must be finite")]
    InvalidBracket { lower: f64, upper: f64 },
    /// Iteration cap reached before the tolerance
    #[error("no convergence after {iterations} iterations (bracket width {width})")]
    NotConverged { iterations: u32, width: f64 },
}

/// Minimize a unimodal function on `[lower, upper]`
///
/// Bounds given in the wrong order are swapped. When the bracket is already
/// within tolerance the midpoint is returned without evaluating `f`.
///
/// # Errors
///
/// Returns an error if the options or the bracket are invalid, or if the
/// iteration cap is reached first.
pub fn minimize<F>(
    mut f: F,
    lower: f64,
    upper: f64,
    options: &SearchOptions,
) -> Result<Minimum, SearchError>
where
    F: FnMut(f64) -> f64,
{
    if !options.tolerance.is_finite() || options.tolerance <= 0.0 {
        return Err(SearchError::InvalidTolerance(options.tolerance));
    }
    if !lower.is_finite() || !upper.is_finite() {
        return Err(SearchError::InvalidBracket { lower, upper });
    }

    let (mut a, mut b) = if lower <= upper {
        (lower, upper)
    } else {
        (upper, lower)
    };

    if b - a <= options.tolerance {
        return Ok(Minimum {
            x: (a + b) / 2.0,
            lower: a,
            upper: b,
            iterations: 0,
            evaluations: 0,
        });
    }

    let mut c = b - (b - a) / GOLDEN_RATIO;
    let mut d = a + (b - a) / GOLDEN_RATIO;
    let mut fc = f(c);
    let mut fd = f(d);
    let mut evaluations = 2;
    let mut iterations = 0;

    while b - a > options.tolerance {
        if iterations >= options.max_iterations {
            return Err(SearchError::NotConverged {
                iterations,
                width: b - a,
            });
        }

        if fc < fd {
            // Minimum lies in [a, d]; old c becomes the new d
            b = d;
            d = c;
            fd = fc;
            c = b - (b - a) / GOLDEN_RATIO;
            fc = f(c);
        } else {
            // Minimum lies in [c, b]; old d becomes the new c
            a = c;
            c = d;
            fc = fd;
            d = a + (b - a) / GOLDEN_RATIO;
            fd = f(d);
        }

        evaluations += 1;
        iterations += 1;
        log::trace!("golden section step {}: [{}, {}]", iterations, a, b);
    }

    Ok(Minimum {
        x: (a + b) / 2.0,
        lower: a,
        upper: b,
        iterations,
        evaluations,
    })
}
