use rootscan_core::Interval;

use crate::sign::{Sign, bracket_sides};

use super::Error;

/// Current bracket bounds, their function values, and the side of zero each
/// end is on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
    right_value: f64,
    left_sign: Sign,
    right_sign: Sign,
}

impl Bracket {
    /// Creates a bracket whose endpoint values fall on opposite sides of zero.
    ///
    /// An endpoint value of exactly zero takes the side opposite the other
    /// endpoint, so a bracket with one root endpoint is accepted whatever the
    /// sign of the other value.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidBracket` if the values are on the same side,
    /// both zero, or either is `NaN`.
    pub(super) fn new(
        interval: Interval,
        left_value: f64,
        right_value: f64,
    ) -> Result<Self, Error> {
        let [left, right] = interval.as_array();
        let Some((left_sign, right_sign)) = bracket_sides(left_value, right_value) else {
            return Err(Error::InvalidBracket {
                left,
                right,
                left_value,
                right_value,
            });
        };

        Ok(Self {
            left,
            right,
            left_value,
            right_value,
            left_sign,
            right_sign,
        })
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }

    pub(super) fn left_value(&self) -> f64 {
        self.left_value
    }

    pub(super) fn right_value(&self) -> f64 {
        self.right_value
    }

    /// Returns `(left + right) / 2`.
    pub(super) fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns `(right - left) / 2`, the error bound of the midpoint.
    pub(super) fn half_width(&self) -> f64 {
        (self.right - self.left) / 2.0
    }

    /// Replaces the endpoint on the same side of zero as `value` with `x`.
    ///
    /// A `NaN` value replaces the left endpoint and keeps its side.
    pub(super) fn shrink(&mut self, x: f64, value: f64) {
        match Sign::of(value) {
            Some(sign) if sign == self.right_sign => {
                self.right = x;
                self.right_value = value;
            }
            _ => {
                self.left = x;
                self.left_value = value;
            }
        }
    }
}
