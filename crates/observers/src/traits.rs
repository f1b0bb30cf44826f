//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasResidual`] — events that carry a residual
//! - [`HasIteration`] — events that carry an iteration counter
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use geoinv_core::Observer;
//! use geoinv_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use geoinv_core::Coord;
use geoinv_solvers::inverse::newton;

/// An event that carries a residual.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> Coord;

    /// Returns the largest residual component magnitude.
    fn residual_norm(&self) -> f64 {
        self.residual().max_abs()
    }
}

/// An event that carries a 1-based iteration counter.
pub trait HasIteration {
    /// Returns the iteration counter.
    fn iter(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> Coord {
        self.residual
    }
}

impl HasIteration for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
