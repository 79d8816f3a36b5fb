use std::{
    fmt::Display,
    io::{self, Write},
};

use bisect_core::Observer;

/// Writes one line per event to a writer.
///
/// Each event is rendered with its `Display` impl; bisection events render
/// as `Iter   k: a=…, b=…, x=…, f(x)=…`. Tracing never returns an action,
/// so it has no effect on the solve.
///
/// If a write fails, later events are skipped and [`Trace::failed`] reports
/// it.
///
/// # Example
///
/// ```rust
/// use bisect_observers::Trace;
/// use bisect_solvers::bisection::{self, Config};
///
/// let mut out = Vec::new();
/// bisection::solve(|x: f64| x - 0.25, [0.0, 1.0], &Config::default(), Trace::new(&mut out))
///     .unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert_eq!(text.lines().count(), 2);
/// assert!(text.starts_with("Iter   1: a=0.000000, b=1.000000, x=0.500000"));
/// ```
#[derive(Debug)]
pub struct Trace<W> {
    writer: W,
    failed: bool,
}

impl Trace<io::Stdout> {
    /// Creates a trace that prints to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Trace<W> {
    /// Creates a trace that writes to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            failed: false,
        }
    }

    /// Returns true if a write has failed.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Consumes the trace and returns the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<E, A, W> Observer<E, A> for Trace<W>
where
    E: Display,
    W: Write,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if !self.failed && writeln!(self.writer, "{event}").is_err() {
            self.failed = true;
        }
        None
    }
}
