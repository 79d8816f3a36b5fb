/// Watches a solver iterate and optionally steers it.
///
/// A solver calls [`Observer::observe`] once per iteration with an event
/// describing that step. Returning `Some(action)` asks the solver to act on it
/// (the available actions are solver-specific); returning `None` lets the
/// iteration carry on untouched.
///
/// Observers are purely additive: a solver run with an observer that always
/// returns `None` produces the same result as an unobserved run.
///
/// `FnMut(&E) -> Option<A>` closures are observers, and `()` is the observer
/// that never acts.
pub trait Observer<E, A> {
    /// Receives an event and optionally returns a control action.
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
