use super::History;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    ///
    /// The reported `x` is the midpoint of the final bracket, so its error is
    /// bounded by [`Solution::error_bound`], which may exceed the tolerance.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: f64,

    /// Function value at `x`.
    ///
    /// `None` when the iteration limit was reached, since the midpoint of the
    /// final bracket is reported without being evaluated.
    pub residual: Option<f64>,

    /// Bracket the reported `x` was taken from.
    pub bracket: [f64; 2],

    /// Number of iterations performed.
    pub iters: usize,

    /// Per-iteration record, present only when requested in the config.
    pub history: Option<History>,
}

impl Solution {
    /// Returns true if the solver met its stopping criteria.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Half the width of `bracket`.
    ///
    /// Whenever `x` is the midpoint of `bracket` (every case except a root
    /// found at an endpoint before iterating), a root lies within this
    /// distance of `x`.
    #[must_use]
    pub fn error_bound(&self) -> f64 {
        let [a, b] = self.bracket;
        0.5 * (b - a).abs()
    }
}
