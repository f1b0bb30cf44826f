use geoinv_core::{Coord, Snapshot};

/// Indicates which criterion ended the solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Both residual components fell below the residual tolerance.
    ResidualConverged,

    /// Both components of the last Newton step fell below the step tolerance.
    StepConverged,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a successful inverse solve.
#[derive(Debug, Clone, Copy)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// The input-space estimate whose forward image approximates the target.
    pub x: Coord,

    /// Residual `output - target` at the last evaluated estimate.
    ///
    /// For [`Status::StepConverged`] this describes the estimate before the
    /// final step, since the stepped estimate is not evaluated again.
    pub residual: Coord,

    /// Last forward-transform evaluation.
    pub snapshot: Snapshot<Coord, Coord>,

    /// Number of iterations (forward evaluations of the estimate) performed.
    pub iters: usize,
}
