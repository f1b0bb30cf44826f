use std::error::Error as StdError;

use geoinv_core::Coord;

/// Errors that can occur during an inverse solve.
///
/// Every variant carries the estimate the solver held when it gave up. It is
/// reported for diagnostics only and should not be used as a result.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The forward transform failed, either at the estimate itself or at one
    /// of the finite-difference probes around it.
    #[error("forward transform failed at {at}: {source}")]
    Model {
        /// The point passed to the forward transform.
        at: Coord,

        /// The estimate at the time of failure.
        estimate: Coord,

        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },

    /// The estimated Jacobian had a determinant of exactly zero.
    #[error("singular jacobian at {at}")]
    SingularJacobian {
        /// The estimate where the Jacobian was evaluated.
        at: Coord,
    },

    /// The iteration budget ran out before either tolerance was met.
    #[error("no convergence after {iters} iterations, last estimate {last}")]
    DidNotConverge {
        /// The estimate after the final step.
        last: Coord,

        /// Iterations performed.
        iters: usize,
    },
}

impl Error {
    pub(crate) fn model<E: StdError + Send + Sync + 'static>(
        at: Coord,
        estimate: Coord,
        err: E,
    ) -> Self {
        Self::Model {
            at,
            estimate,
            source: Box::new(err),
        }
    }

    /// Returns the estimate the solver held when it failed.
    #[must_use]
    pub fn last_estimate(&self) -> Coord {
        match self {
            Self::Model { estimate, .. } => *estimate,
            Self::SingularJacobian { at } => *at,
            Self::DidNotConverge { last, .. } => *last,
        }
    }
}
