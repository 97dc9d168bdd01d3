//! Bisection refinement of a single bracket.
//!
//! # Algorithm
//!
//! Given an interval `[a, b]` whose endpoint values fall on opposite sides of
//! zero, the solver repeatedly evaluates the midpoint `m` and keeps the half
//! that still changes sign. Each step appends an [`Iteration`] to the trace.
//!
//! The loop runs while the half-width `(b - a) / 2` exceeds the tolerance and
//! fewer than [`MAX_ITERS`] updates have been made. It exits early when
//! `|f(m)|` falls below the tolerance. The reported root is always the
//! midpoint of the final bracket and the error bound its half-width.
//!
//! # Special cases
//!
//! - A zero-width interval whose value is within tolerance is returned
//!   immediately as [`Status::Exact`], with an empty trace.
//! - An endpoint value of exactly zero takes the side opposite the other
//!   endpoint. Brackets like `[1, 2]` and `[2, 3]` for `x² - 4` are accepted
//!   and converge onto `x = 2`.
//! - Endpoint values on the same side of zero, both zero, or `NaN` are
//!   rejected with [`Error::InvalidBracket`], and no trace is produced.
//! - Reaching [`MAX_ITERS`] is not an error; the result is flagged
//!   [`Status::MaxIters`].
//!
//! # Iteration count
//!
//! [`Solution::iters`] is the number of completed bracket updates plus one.
//! A solve that converges on the width test reports one more than the number
//! of trace rows, and one that stops on a midpoint value reports exactly the
//! number of rows.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per midpoint evaluation, after the row is
//! recorded and before the convergence check. Observers can return
//! [`Action::StopEarly`] to finish with [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod iteration;
mod solution;


pub use action::Action;
pub use config::{Config, DEFAULT_TOLERANCE};
pub use error::Error;
pub use event::Event;
pub use iteration::Iteration;
pub use solution::{Solution, Status};

use rootscan_core::{Function, Interval, Observer};
use tracing::{debug, trace};

use bracket::Bracket;

/// Maximum number of bracket updates per solve.
pub const MAX_ITERS: usize = 100;

/// Refines `interval` to a root of `function` using bisection.
///
/// The observer receives an [`Event`] for every midpoint evaluation.
/// See the [module docs](self) for termination rules.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the endpoint values do not fall on
/// opposite sides of zero and the interval is not an exact root.
pub fn solve<F, Obs>(
    function: &F,
    interval: Interval,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let tolerance = config.tolerance();
    let [left, right] = interval.as_array();
    let left_value = function.call(left);
    let right_value = function.call(right);

    if interval.is_degenerate() && left_value.abs() < tolerance {
        debug!(x = left, value = left_value, "exact root at point");
        return Ok(Solution::exact(left));
    }

    let mut bracket = Bracket::new(interval, left_value, right_value)?;
    let mut trace = Vec::new();
    let mut completed = 0;
    let mut stopped = false;
    let mut value_converged = false;

    while bracket.half_width() > tolerance && completed < MAX_ITERS {
        let midpoint = bracket.midpoint();
        let value = function.call(midpoint);

        let iteration = Iteration {
            index: completed + 1,
            left: bracket.left(),
            right: bracket.right(),
            midpoint,
            value,
        };
        trace!(
            index = iteration.index,
            left = iteration.left,
            right = iteration.right,
            midpoint,
            value,
            "bisection step"
        );
        trace.push(iteration);

        let event = Event {
            iteration: &iteration,
            left_value: bracket.left_value(),
            right_value: bracket.right_value(),
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            stopped = true;
            break;
        }

        if value.abs() < tolerance {
            value_converged = true;
            break;
        }

        bracket.shrink(midpoint, value);
        completed += 1;
    }

    let status = if stopped {
        Status::StoppedByObserver
    } else if value_converged || bracket.half_width() <= tolerance {
        Status::Converged
    } else {
        Status::MaxIters
    };

    let solution = Solution {
        status,
        root: bracket.midpoint(),
        error_bound: bracket.half_width(),
        iters: completed + 1,
        trace,
    };
    debug!(
        status = ?solution.status,
        root = solution.root,
        error_bound = solution.error_bound,
        iters = solution.iters,
        "bisection finished"
    );
    Ok(solution)
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns [`Error::InvalidBracket`] if the endpoint values do not fall on
/// opposite sides of zero and the interval is not an exact root.
pub fn solve_unobserved<F>(
    function: &F,
    interval: Interval,
    config: &Config,
) -> Result<Solution, Error>
where
    F: Function + ?Sized,
{
    solve(function, interval, config, ())
}
