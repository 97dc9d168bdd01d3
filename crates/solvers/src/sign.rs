/// The side of zero a function value falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Sign {
    /// Value is positive (or zero).
    NonNegative,
    /// Value is negative.
    Negative,
}

impl Sign {
    /// Returns the side of zero for `value`, or `None` for `NaN`.
    pub(crate) fn of(value: f64) -> Option<Self> {
        if value >= 0.0 {
            Some(Sign::NonNegative)
        } else if value < 0.0 {
            Some(Sign::Negative)
        } else {
            None
        }
    }

    /// Returns the other side of zero.
    pub(crate) fn opposite(self) -> Self {
        match self {
            Sign::NonNegative => Sign::Negative,
            Sign::Negative => Sign::NonNegative,
        }
    }
}

/// Returns the sides of zero for a pair of endpoint values that bracket a root.
///
/// An endpoint value of exactly zero is a root, and takes the side opposite
/// its partner. Returns `None` if either value is `NaN`, both are zero, or
/// both fall on the same side.
pub(crate) fn bracket_sides(left: f64, right: f64) -> Option<(Sign, Sign)> {
    let left_sign = Sign::of(left)?;
    let right_sign = Sign::of(right)?;

    match (left == 0.0, right == 0.0) {
        (true, true) => None,
        (true, false) => Some((right_sign.opposite(), right_sign)),
        (false, true) => Some((left_sign, left_sign.opposite())),
        (false, false) => (left_sign != right_sign).then_some((left_sign, right_sign)),
    }
}

/// Returns true if `x` and `y` are both non-zero with opposite signs.
///
/// This is `x * y < 0` without the underflow and overflow of the product.
pub(crate) fn strictly_opposite(x: f64, y: f64) -> bool {
    (x < 0.0 && y > 0.0) || (x > 0.0 && y < 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_values() {
        assert_eq!(Sign::of(2.0), Some(Sign::NonNegative));
        assert_eq!(Sign::of(0.0), Some(Sign::NonNegative));
        assert_eq!(Sign::of(-0.0), Some(Sign::NonNegative));
        assert_eq!(Sign::of(-1e-300), Some(Sign::Negative));
        assert_eq!(Sign::of(f64::NEG_INFINITY), Some(Sign::Negative));
        assert_eq!(Sign::of(f64::NAN), None);
    }

    #[test]
    fn bracket_sides_of_a_sign_change() {
        assert_eq!(
            bracket_sides(-3.0, 5.0),
            Some((Sign::Negative, Sign::NonNegative))
        );
        assert_eq!(
            bracket_sides(5.0, -3.0),
            Some((Sign::NonNegative, Sign::Negative))
        );
        assert_eq!(bracket_sides(-1.0, -2.0), None);
        assert_eq!(bracket_sides(1.0, 2.0), None);
    }

    #[test]
    fn zero_endpoint_takes_the_opposite_side() {
        assert_eq!(
            bracket_sides(0.0, 5.0),
            Some((Sign::Negative, Sign::NonNegative))
        );
        assert_eq!(
            bracket_sides(0.0, -5.0),
            Some((Sign::NonNegative, Sign::Negative))
        );
        assert_eq!(
            bracket_sides(3.0, 0.0),
            Some((Sign::NonNegative, Sign::Negative))
        );
        assert_eq!(
            bracket_sides(-3.0, -0.0),
            Some((Sign::Negative, Sign::NonNegative))
        );
    }

    #[test]
    fn bracket_sides_rejects_nan_and_double_zero() {
        assert_eq!(bracket_sides(0.0, 0.0), None);
        assert_eq!(bracket_sides(f64::NAN, 1.0), None);
        assert_eq!(bracket_sides(0.0, f64::NAN), None);
    }

    #[test]
    fn strictly_opposite_excludes_zero_and_nan() {
        assert!(strictly_opposite(-3.0, 5.0));
        assert!(strictly_opposite(5.0, -3.0));
        assert!(!strictly_opposite(-3.0, 0.0));
        assert!(!strictly_opposite(0.0, 0.0));
        assert!(!strictly_opposite(f64::NAN, -1.0));
    }

    #[test]
    fn strictly_opposite_survives_product_underflow() {
        // The product of these underflows to -0.0.
        assert!(strictly_opposite(1e-200, -1e-200));
    }
}
