/// Sees each iterate of a numkit solver and may stop it early.
///
/// Newton's method and gradient descent hand every evaluation (iteration
/// index, current `x`, function value, derivative) to their observer before
/// deciding whether to continue. This is how the iteration trace is produced:
/// `numkit-observers` provides a `tracing` logger and an in-memory recorder,
/// and callers can stop a run by returning the solver's `StopEarly` action.
///
/// Any `FnMut(&E) -> Option<A>` closure is an observer. The `()` observer
/// never acts and is what the `*_unobserved` entry points pass.
pub trait Observer<E, A> {
    /// Observes a solver event and optionally returns a control action.
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

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}
