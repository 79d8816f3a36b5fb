//! Bracketing root finders.
//!
//! A root finder in this crate takes a [`Function`], an interval on which the
//! function changes sign, and a config, and returns a solution describing the
//! root estimate and how it was reached.
//!
//! # Solvers
//!
//! - [`bisection`] — halves the bracket every step; slow but guaranteed to
//!   converge for continuous functions
//!
//! [`Function`]: bisect_core::Function

pub mod bisection;
