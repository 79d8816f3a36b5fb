use std::fmt;

use super::Iteration;

/// Event emitted by the bisection solver once per iteration.
///
/// The event is emitted after the midpoint is evaluated and before the
/// bracket is shrunk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The step that was just evaluated.
    pub iteration: Iteration,

    /// Whether this step meets the stopping criteria.
    ///
    /// A converged step is the last one unless the observer stops first.
    pub converged: bool,
}

impl Event {
    /// Returns the evaluated midpoint.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.iteration.x()
    }

    /// Returns the function value at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.iteration.fx()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.iteration.fmt(f)
    }
}
