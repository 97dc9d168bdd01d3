use std::fmt;

use thiserror::Error;

/// Errors that can occur when creating an [`Interval`].
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum IntervalError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint in [{left}, {right}]")]
    NonFinite { left: f64, right: f64 },

    /// The left endpoint is greater than the right endpoint.
    #[error("reversed endpoints: {left} > {right}")]
    Reversed { left: f64, right: f64 },
}

/// A closed interval `[left, right]` with finite endpoints and `left <= right`.
///
/// A zero-width interval marks an exact root found while scanning. A
/// non-degenerate interval is a candidate bracket for bisection.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Interval {
    left: f64,
    right: f64,
}

impl Interval {
    /// Creates a validated interval.
    ///
    /// # Errors
    ///
    /// Returns an error if either endpoint is non-finite or `left > right`.
    pub fn new(left: f64, right: f64) -> Result<Self, IntervalError> {
        if !left.is_finite() || !right.is_finite() {
            return Err(IntervalError::NonFinite { left, right });
        }
        if left > right {
            return Err(IntervalError::Reversed { left, right });
        }
        Ok(Self { left, right })
    }

    /// Creates the zero-width interval `[x, x]`.
    ///
    /// # Errors
    ///
    /// Returns an error if `x` is non-finite.
    pub fn point(x: f64) -> Result<Self, IntervalError> {
        Self::new(x, x)
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns true if both endpoints are equal.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        #[allow(clippy::float_cmp)]
        let equal = self.left == self.right;
        equal
    }

    /// Returns the interval width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns the midpoint of the interval.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.left, self.right)
    }
}
