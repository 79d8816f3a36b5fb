use thiserror::Error;

/// Configuration for the bisection solver.
///
/// The tolerance drives both stopping criteria: the solver stops once
/// `|f(x)|` or the bracket half-width drops below it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
    collect_history: bool,
    verbose: bool,
}

/// Errors that can occur when validating a bisection solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("tolerance must be finite and positive")]
    Tolerance,

    #[error("max_iters must be at least 1")]
    MaxIters,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(1e-6, 100).unwrap()
    }
}

impl Config {
    /// Creates a new config with history collection and verbose output off.
    ///
    /// # Errors
    ///
    /// Returns an error if `tolerance` is not finite and strictly positive,
    /// or if `max_iters` is zero.
    pub fn new(tolerance: f64, max_iters: usize) -> Result<Self, ConfigError> {
        if !tolerance.is_finite() || tolerance <= 0.0 {
            return Err(ConfigError::Tolerance);
        }
        if max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }

        Ok(Self {
            tolerance,
            max_iters,
            collect_history: false,
            verbose: false,
        })
    }

    /// Keeps a record of every iteration in the returned solution.
    #[must_use]
    pub fn with_history(mut self, collect_history: bool) -> Self {
        self.collect_history = collect_history;
        self
    }

    /// Logs one line per iteration at `info` level.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of bisection steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns true if iteration history is collected.
    #[must_use]
    pub fn collect_history(&self) -> bool {
        self.collect_history
    }

    /// Returns true if each iteration is logged at `info` level.
    #[must_use]
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
