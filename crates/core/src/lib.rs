//! Core traits for the bisection workspace.
//!
//! Solvers and observers meet at two seams:
//!
//! - [`Function`] — the scalar function whose root is sought
//! - [`Observer`] — receives per-iteration events and may return a control action
//!
//! Both traits are implemented for plain closures, so most callers never name
//! them directly.

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
