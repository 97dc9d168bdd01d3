use super::Iteration;

/// Event emitted by the bisection solver after each midpoint evaluation.
///
/// The event is emitted before the convergence check, so observers see every
/// row that ends up in the trace.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The trace row just recorded.
    pub iteration: &'a Iteration,

    /// Function value at `iteration.left`.
    pub left_value: f64,

    /// Function value at `iteration.right`.
    pub right_value: f64,
}
