use geoinv_core::Observer;

use crate::traits::{CanStopEarly, HasIteration, HasResidual};

/// Stops a solver once the residual is below a threshold.
///
/// Useful when the caller's accuracy needs are looser than the solver's own
/// tolerance. The check is skipped until `min_iters` iterations have run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResidualThreshold {
    threshold: f64,
    min_iters: usize,
}

impl ResidualThreshold {
    /// Creates an observer that stops when every residual component is below
    /// `threshold`.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            min_iters: 1,
        }
    }

    /// Requires at least `min_iters` iterations before stopping.
    #[must_use]
    pub fn min_iters(mut self, min_iters: usize) -> Self {
        self.min_iters = min_iters;
        self
    }
}

impl<E, A> Observer<E, A> for ResidualThreshold
where
    E: HasResidual + HasIteration,
    A: CanStopEarly,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.iter() < self.min_iters {
            return None;
        }
        (event.residual_norm() < self.threshold).then(A::stop_early)
    }
}
