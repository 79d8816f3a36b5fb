use std::{fmt, ops::Index, slice};

/// A single bisection step: the bracket it started from and the midpoint it
/// evaluated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Iteration {
    iter: usize,
    a: f64,
    b: f64,
    x: f64,
    fx: f64,
}

impl Iteration {
    pub(super) fn new(iter: usize, bracket: [f64; 2], x: f64, fx: f64) -> Self {
        let [a, b] = bracket;
        Self { iter, a, b, x, fx }
    }

    /// Iteration counter, starting at 1.
    #[must_use]
    pub fn iter(&self) -> usize {
        self.iter
    }

    /// Bracket endpoint `a` at the start of this step.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Bracket endpoint `b` at the start of this step.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Midpoint evaluated in this step.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Function value at the midpoint.
    #[must_use]
    pub fn fx(&self) -> f64 {
        self.fx
    }

    /// Width of the bracket at the start of this step.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}

impl fmt::Display for Iteration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Iter {:>3}: a={:.6}, b={:.6}, x={:.6}, f(x)={:.6e}",
            self.iter, self.a, self.b, self.x, self.fx
        )
    }
}

/// Ordered record of the iterations performed by a solve.
///
/// Entries are appended in iteration order, so `history[k]` is iteration
/// `k + 1`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    iterations: Vec<Iteration>,
}

impl History {
    pub(super) fn push(&mut self, iteration: Iteration) {
        debug_assert_eq!(iteration.iter, self.iterations.len() + 1);
        self.iterations.push(iteration);
    }

    /// Number of recorded iterations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    /// Returns true if no iterations were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    /// The most recent iteration, if any.
    #[must_use]
    pub fn last(&self) -> Option<&Iteration> {
        self.iterations.last()
    }

    /// Iterates over the recorded iterations in order.
    pub fn iter(&self) -> slice::Iter<'_, Iteration> {
        self.iterations.iter()
    }

    /// Returns the recorded iterations as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Iteration] {
        &self.iterations
    }
}

impl Index<usize> for History {
    type Output = Iteration;

    fn index(&self, index: usize) -> &Iteration {
        &self.iterations[index]
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Iteration;
    type IntoIter = slice::Iter<'a, Iteration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for History {
    type Item = Iteration;
    type IntoIter = std::vec::IntoIter<Iteration>;

    fn into_iter(self) -> Self::IntoIter {
        self.iterations.into_iter()
    }
}

/// Renders one diagnostic line per iteration.
impl fmt::Display for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for iteration in &self.iterations {
            writeln!(f, "{iteration}")?;
        }
        Ok(())
    }
}
