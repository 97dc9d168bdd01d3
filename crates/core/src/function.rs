/// A real-valued function of one real variable.
///
/// The scanner and solvers are written against this trait rather than a
/// concrete [`Polynomial`](crate::Polynomial), so any `Fn(f64) -> f64` closure
/// can be searched and refined as well.
///
/// Implementations follow IEEE-754 semantics: overflow yields infinities and
/// invalid operations yield `NaN`. Callers are expected to treat `NaN` as
/// "no sign information".
pub trait Function {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

/// Blanket implementation for closures and function pointers.
impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
