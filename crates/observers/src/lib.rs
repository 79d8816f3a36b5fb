//! Reusable observers for the bisection solver.
//!
//! This crate provides [`Observer`] implementations and the capability traits
//! they are written against.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for observers ([`HasResidual`],
//!   [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`Trace`] — writes one diagnostic line per event to any writer
//! - [`StopWhen`] — stops the solver once a residual predicate holds
//!
//! [`Observer`]: bisect_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod stop_when;
mod trace;

pub use stop_when::StopWhen;
pub use trace::Trace;
