use super::Iteration;

/// How the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize),
    serde(rename_all = "snake_case")
)]
pub enum Status {
    /// The interval was a single point whose value is within tolerance.
    Exact,

    /// The bracket half-width or a midpoint value met the tolerance.
    Converged,

    /// Reached the iteration limit without meeting the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Midpoint of the final bracket.
    pub root: f64,

    /// Half-width of the final bracket.
    pub error_bound: f64,

    /// Completed bracket updates plus one; zero for an exact point.
    pub iters: usize,

    /// Every step taken, in order.
    pub trace: Vec<Iteration>,
}

impl Solution {
    /// Builds the result for a zero-width interval that is already a root.
    pub(super) fn exact(x: f64) -> Self {
        Self {
            status: Status::Exact,
            root: x,
            error_bound: 0.0,
            iters: 0,
            trace: Vec::new(),
        }
    }

    /// Returns true if the root was found exactly at a point, without iterating.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.status == Status::Exact
    }
}
