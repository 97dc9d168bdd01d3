/// Receives solver events and decides whether the solver keeps going.
///
/// A solver emits one event per step. The observer can record it (to build a
/// table, log progress, or plot convergence) and can return `Some(action)` to
/// steer the solver. Returning `None` leaves the solver unchanged.
///
/// Closures of the form `FnMut(&E) -> Option<A>` are observers, and `()` is the
/// no-op observer used by the `*_unobserved` entry points.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Stop {
        Now,
    }

    fn drive<O: Observer<usize, Stop>>(mut observer: O, steps: usize) -> usize {
        for step in 1..=steps {
            if observer.observe(&step).is_some() {
                return step;
            }
        }
        steps
    }

    #[test]
    fn unit_observer_never_acts() {
        assert_eq!(drive((), 5), 5);
    }

    #[test]
    fn closure_observer_can_stop() {
        let mut seen = Vec::new();
        let stopped_at = drive(
            |step: &usize| {
                seen.push(*step);
                (*step == 3).then_some(Stop::Now)
            },
            10,
        );

        assert_eq!(stopped_at, 3);
        assert_eq!(seen, vec![1, 2, 3]);
    }
}
