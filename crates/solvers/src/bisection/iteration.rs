/// One row of the bisection trace.
///
/// `left` and `right` are the bracket at the start of the step, `midpoint` is
/// the point evaluated during the step, and `value` is the function value
/// there.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Iteration {
    /// Step number, starting at 1.
    pub index: usize,

    /// Left end of the bracket.
    pub left: f64,

    /// Right end of the bracket.
    pub right: f64,

    /// Midpoint of the bracket.
    pub midpoint: f64,

    /// Function value at the midpoint.
    pub value: f64,
}

impl Iteration {
    /// Returns the bracket width at the start of this step.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}
