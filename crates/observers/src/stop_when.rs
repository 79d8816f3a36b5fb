use bisect_core::Observer;

use crate::traits::{CanStopEarly, HasResidual};

/// Stops the solver as soon as a predicate on the residual holds.
///
/// Useful when a caller-specific acceptance test is looser than the solver's
/// own tolerance, for example stopping once `|f(x)| < 1e-3` while keeping a
/// tight tolerance for the bracket width.
///
/// # Example
///
/// ```rust
/// use bisect_observers::StopWhen;
/// use bisect_solvers::bisection::{self, Config, Status};
///
/// let solution = bisection::solve(
///     |x: f64| x.exp() - 5.0,
///     [1.0, 2.0],
///     &Config::default(),
///     StopWhen::residual_below(1e-2),
/// )
/// .unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert!(solution.residual.unwrap().abs() < 1e-2);
/// ```
#[derive(Debug, Clone)]
pub struct StopWhen<F> {
    predicate: F,
}

impl<F> StopWhen<F>
where
    F: FnMut(f64) -> bool,
{
    /// Creates an observer that stops once `predicate(residual)` is true.
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl StopWhen<fn(f64) -> bool> {
    /// Stops once `|residual| < threshold`.
    pub fn residual_below(threshold: f64) -> StopWhen<impl FnMut(f64) -> bool> {
        StopWhen::new(move |residual: f64| residual.abs() < threshold)
    }
}

impl<E, A, F> Observer<E, A> for StopWhen<F>
where
    E: HasResidual,
    A: CanStopEarly,
    F: FnMut(f64) -> bool,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (self.predicate)(event.residual()).then(A::stop_early)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use bisect_solvers::bisection::{self, Config, Status};

    #[test]
    fn never_firing_predicate_matches_unobserved() {
        let f = |x: f64| x * x - 2.0;
        let config = Config::default();

        let observed = bisection::solve(f, [0.0, 2.0], &config, StopWhen::new(|_: f64| false))
            .expect("should solve");
        let plain = bisection::solve_unobserved(f, [0.0, 2.0], &config).expect("should solve");

        assert_eq!(observed, plain);
        assert_eq!(observed.status, Status::Converged);
    }

    #[test]
    fn stops_on_positive_residual() {
        // Midpoints of [0, 4] for x - 1: 2.0 (f = 1), 1.0 (f = 0).
        let solution = bisection::solve(
            |x: f64| x - 1.0,
            [0.0, 4.0],
            &Config::default(),
            StopWhen::new(|residual: f64| residual > 0.0),
        )
        .expect("should stop");

        assert_eq!(solution.status, Status::StoppedByObserver);
        assert_eq!(solution.iters, 1);
        assert_relative_eq!(solution.x, 2.0);
    }
}
