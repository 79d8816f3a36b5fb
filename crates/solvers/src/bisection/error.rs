use thiserror::Error;

/// Errors that can occur during bisection solving.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The function has the same sign at both ends of the interval, so the
    /// interval is not known to contain a root.
    #[error("no sign change in [{a}, {b}]: f(a)={fa}, f(b)={fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },
}
