//! Coarse bracket discovery on a unit-step grid.
//!
//! # Algorithm
//!
//! Starting at `low`, the scanner evaluates `f(x)` and `f(x + 1)` for
//! `x = low, low + 1, …` while `x < high`. For each step:
//!
//! - if `f(x)` is exactly zero, it emits the zero-width interval `[x, x]`;
//! - if `f(x)` and `f(x + 1)` are non-zero with opposite signs, it emits the
//!   bracket `[x, x + 1]`.
//!
//! The two rules are checked independently. The last step may reach past
//! `high`, since only its left edge is required to lie below `high`.
//!
//! # Limitations
//!
//! The step is fixed at one unit. It is a heuristic, not an adaptive search:
//! two roots within the same unit step cancel out, and a root touched without
//! a sign change (an even-multiplicity root off the grid) is never reported.
//! An empty result is a normal outcome, not an error.

mod error;

pub use error::Error;

use rootscan_core::{Function, Interval};
use tracing::{debug, info};

use crate::sign::strictly_opposite;

/// Distance between consecutive grid points.
pub const STEP: f64 = 1.0;

/// Bound magnitude (2⁵³) at and beyond which a unit step no longer moves `x`.
pub const MAX_MAGNITUDE: f64 = 9_007_199_254_740_992.0;

/// Scans `[low, high]` in unit steps and returns candidate intervals.
///
/// Candidates are ordered by increasing `x`. Zero-width intervals mark exact
/// roots on the grid; the rest are sign-change brackets of width [`STEP`].
///
/// # Errors
///
/// Returns [`Error::InvalidRange`] if either bound is non-finite or
/// `low >= high`, and [`Error::StepTooSmall`] if a bound reaches
/// [`MAX_MAGNITUDE`], where `x + 1 == x` would stall the grid. The scan does
/// not run in either case.
pub fn scan<F>(function: &F, low: f64, high: f64) -> Result<Vec<Interval>, Error>
where
    F: Function + ?Sized,
{
    let steps = step_count(low, high)?;

    let mut candidates = Vec::new();
    let mut x = low;
    while x < high {
        let next = x + STEP;
        let fx = function.call(x);
        let f_next = function.call(next);

        if fx == 0.0 {
            debug!(x, "exact root on grid");
            candidates.push(Interval::point(x)?);
        }
        if strictly_opposite(fx, f_next) {
            debug!(left = x, right = next, fx, f_next, "sign change");
            candidates.push(Interval::new(x, next)?);
        }

        x = next;
    }

    info!(low, high, steps, found = candidates.len(), "scan complete");
    Ok(candidates)
}

/// Validates the range and returns the number of grid steps it spans.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn step_count(low: f64, high: f64) -> Result<usize, Error> {
    if !low.is_finite() || !high.is_finite() || low >= high {
        return Err(Error::InvalidRange { low, high });
    }

    // Below 2⁵³ in magnitude every `x + 1` is strictly greater than `x`.
    if low.abs() >= MAX_MAGNITUDE || high.abs() >= MAX_MAGNITUDE {
        return Err(Error::StepTooSmall { low, high });
    }

    // At most 2⁵⁴ steps, which fits in a `usize`.
    Ok(((high - low) / STEP).ceil() as usize)
}
