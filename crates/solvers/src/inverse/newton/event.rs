use geoinv_core::Coord;

/// Iteration event emitted by the Newton inverse solver.
///
/// Emitted once per iteration, right after the forward transform has been
/// evaluated at the current estimate and before any convergence check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Current estimate in input space.
    pub x: Coord,

    /// Forward image of the current estimate.
    pub output: Coord,

    /// `output - target`.
    pub residual: Coord,
}
