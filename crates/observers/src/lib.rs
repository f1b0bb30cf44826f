//! Reusable observers for geoinv solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`LogObserver`] — writes one `debug` record per iteration via [`log`]
//! - [`ResidualThreshold`] — stops once the residual is small enough
//!
//! [`Observer`]: geoinv_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod log_observer;
mod threshold;

pub use log_observer::LogObserver;
pub use threshold::ResidualThreshold;
