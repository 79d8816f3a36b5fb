//! Bisection method for single-variable root finding.
//!
//! # Algorithm
//!
//! Given a continuous function `f` and an interval `[a, b]` where `f(a)` and
//! `f(b)` have opposite signs, the intermediate value theorem guarantees a
//! root in between. Each iteration evaluates the midpoint `x = (a + b) / 2`
//! and keeps the half whose endpoints still differ in sign, so the bracket
//! width halves every step.
//!
//! The solver stops at the first midpoint where either `|f(x)|` or the
//! bracket half-width drops below the configured tolerance. Since the
//! reported root is a midpoint, its absolute error after `k` iterations is at
//! most `|b - a| / 2^(k + 1)`.
//!
//! If `|f|` is already below the tolerance at `a` (checked first) or `b`, that
//! endpoint is returned without iterating.
//!
//! The endpoints may be given in either order. The half-width is measured as
//! `|b - a| / 2`, so a reversed interval such as `[2.0, 1.0]` bisects exactly
//! like `[1.0, 2.0]` rather than stopping after the first midpoint. Recorded
//! iterations keep the caller's orientation.
//!
//! # When to Use
//!
//! Bisection is appropriate when:
//! - A sign-changing bracket is known
//! - Derivatives are unavailable or unreliable
//! - Guaranteed convergence matters more than speed
//!
//! # Limitations
//!
//! - **Linear convergence**: one bit of accuracy per function evaluation
//! - **Needs a sign change**: roots of even multiplicity cannot be bracketed
//! - **Continuity is assumed**: a sign change across a pole is reported as a
//!   root
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating the
//! midpoint and before shrinking the bracket. Observers can return
//! [`Action::StopEarly`] to end the solve at that midpoint.
//!
//! # Logging
//!
//! Solves are logged through `tracing`: start and finish at `debug` level,
//! each iteration at `trace` level, or at `info` level when
//! [`Config::with_verbose`] is set.

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod history;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use history::{History, Iteration};
pub use solution::{Solution, Status};

use bisect_core::{Function, Observer};
use tracing::{debug, info, trace};

use bracket::Bracket;

/// Finds a root of `f` in `bracket` using the bisection method.
///
/// The observer receives an [`Event`] for every iteration.
/// See the [module docs](self) for the stopping rules.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if `f` has the same sign at both ends of
/// the bracket and neither end is already within tolerance of a root.
///
/// # Example
///
/// ```rust
/// use bisect_solvers::bisection::{self, Action, Config, Event, Status};
///
/// let mut seen = 0;
/// let observer = |_event: &Event| {
///     seen += 1;
///     (seen == 5).then_some(Action::StopEarly)
/// };
///
/// let solution = bisection::solve(
///     |x: f64| x * x - 2.0,
///     [0.0, 2.0],
///     &Config::default(),
///     observer,
/// )
/// .unwrap();
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.iters, 5);
/// ```
pub fn solve<F, Obs>(
    f: F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: Observer<Event, Action>,
{
    let [a, b] = bracket;
    let tolerance = config.tolerance();
    debug!(a, b, tolerance, max_iters = config.max_iters(), "starting bisection");

    let mut history = config.collect_history().then(History::default);

    let fa = f.eval(a);
    let fb = f.eval(b);

    for (x, fx) in [(a, fa), (b, fb)] {
        if fx.abs() < tolerance {
            debug!(x, fx, "endpoint is within tolerance of a root");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual: Some(fx),
                bracket,
                iters: 0,
                history,
            });
        }
    }

    let mut current = Bracket::new(a, b, fa, fb).inspect_err(|error| {
        debug!(%error, "bracket rejected");
    })?;

    for iter in 1..=config.max_iters() {
        let x = current.midpoint();
        let fx = f.eval(x);

        let iteration = Iteration::new(iter, current.as_array(), x, fx);
        if let Some(history) = history.as_mut() {
            history.push(iteration);
        }

        if config.verbose() {
            info!("{iteration}");
        } else {
            trace!("{iteration}");
        }

        let converged = fx.abs() < tolerance || current.half_width() < tolerance;
        let event = Event {
            iteration,
            converged,
        };

        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    debug!(iter, x, fx, "stopped by observer");
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x,
                        residual: Some(fx),
                        bracket: current.as_array(),
                        iters: iter,
                        history,
                    });
                }
            }
        }

        if converged {
            debug!(iter, x, fx, "bisection converged");
            return Ok(Solution {
                status: Status::Converged,
                x,
                residual: Some(fx),
                bracket: current.as_array(),
                iters: iter,
                history,
            });
        }

        current.shrink(x, fx);
    }

    let x = current.midpoint();
    debug!(
        x,
        half_width = current.half_width(),
        "bisection reached the iteration limit"
    );

    Ok(Solution {
        status: Status::MaxIters,
        x,
        residual: None,
        bracket: current.as_array(),
        iters: config.max_iters(),
        history,
    })
}

/// Runs bisection without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if `f` has the same sign at both ends of
/// the bracket and neither end is already within tolerance of a root.
///
/// # Example
///
/// ```rust
/// use bisect_solvers::bisection::{self, Config};
///
/// let config = Config::new(1e-6, 100).unwrap();
/// let solution = bisection::solve_unobserved(|x: f64| x * x - x - 1.0, [1.0, 2.0], &config).unwrap();
///
/// let golden = (1.0 + 5.0_f64.sqrt()) / 2.0;
/// assert!((solution.x - golden).abs() < 1e-6);
/// assert!(solution.iters <= 21);
/// ```
pub fn solve_unobserved<F>(f: F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: Function,
{
    solve(f, bracket, config, ())
}
