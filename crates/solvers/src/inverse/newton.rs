//! Newton-Raphson inversion of a 2D forward transform.
//!
//! # Algorithm
//!
//! Starting from a caller-supplied guess, each iteration:
//!
//! 1. Evaluates the forward transform at the current estimate and forms the
//!    residual `forward(estimate) - target`.
//! 2. Returns if both residual components are below the residual tolerance.
//! 3. Estimates the Jacobian by forward differences (every iteration, or only
//!    on the first one, see [`JacobianUpdate`]) and inverts it analytically.
//! 4. Subtracts `J⁻¹ · residual` from the estimate.
//! 5. Returns if a step tolerance is set and both step components are below it.
//!
//! The finite-difference step is derived once from the initial guess and kept
//! for the whole solve.
//!
//! # Failure
//!
//! The solve fails, with no local recovery, when the forward transform fails
//! at any point, when a Jacobian determinant is exactly zero, or when
//! [`MAX_ITERS`] iterations pass without convergence. Callers with domain
//! knowledge can retry with a better guess.
//!
//! # Cost
//!
//! At most `3 * MAX_ITERS` forward calls with [`JacobianUpdate::EveryIteration`],
//! and `MAX_ITERS + 2` with [`JacobianUpdate::FirstIterationOnly`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after evaluating the estimate
//! and before checking convergence. Observers can return
//! [`Action::StopEarly`] to halt and receive the current estimate with
//! [`Status::StoppedByObserver`].

mod action;
mod config;
mod error;
mod event;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError, JacobianUpdate};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use geoinv_core::{Coord, Model, Observer, Snapshot};
use log::{debug, trace};

use super::jacobian::{InverseJacobian, Jacobian, finite_difference_step};

/// Maximum number of Newton iterations.
pub const MAX_ITERS: usize = 15;

/// Finds the input whose forward image is `target`, starting from `guess`.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for the algorithm and failure policy.
///
/// # Errors
///
/// Returns an error if the forward transform fails, if the estimated Jacobian
/// is singular, or if the solver does not converge within [`MAX_ITERS`]
/// iterations.
pub fn solve<M, Obs>(
    model: &M,
    target: Coord,
    guess: Coord,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    M: Model<Input = Coord, Output = Coord>,
    Obs: Observer<Event, Action>,
{
    let eps = finite_difference_step(guess);
    let residual_tol = config.residual_tol_for(target);
    let step_tol = config.step_tol();

    let mut x = guess;
    let mut cached: Option<InverseJacobian> = None;

    for iter in 1..=MAX_ITERS {
        let output = model.call(&x).map_err(|e| Error::model(x, x, e))?;
        let residual = output - target;

        let solution = move |status: Status| Solution {
            status,
            x,
            residual,
            snapshot: Snapshot::new(x, output),
            iters: iter,
        };

        let event = Event {
            iter,
            x,
            output,
            residual,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            debug!("stopped by observer at {x} after {iter} iterations");
            return Ok(solution(Status::StoppedByObserver));
        }

        if residual.is_within(residual_tol) {
            debug!("converged to {x} after {iter} iterations");
            return Ok(solution(Status::ResidualConverged));
        }

        let inverse = match (config.jacobian(), cached) {
            (JacobianUpdate::FirstIterationOnly, Some(inverse)) => inverse,
            _ => {
                let jacobian = Jacobian::estimate(model, x, output, eps)
                    .map_err(|e| Error::model(e.at, x, e.source))?;
                trace!("jacobian at {x}: {jacobian:?}");

                let inverse = jacobian.inverse().ok_or_else(|| {
                    debug!("singular jacobian at {x}");
                    Error::SingularJacobian { at: x }
                })?;
                cached = Some(inverse);
                inverse
            }
        };

        let step = inverse.apply(residual);
        x = x - step;

        if step_tol > 0.0 && step.is_within(step_tol) {
            debug!("step converged to {x} after {iter} iterations");
            return Ok(Solution {
                x,
                ..solution(Status::StepConverged)
            });
        }
    }

    debug!("no convergence after {MAX_ITERS} iterations, last estimate {x}");
    Err(Error::DidNotConverge {
        last: x,
        iters: MAX_ITERS,
    })
}

/// Runs the Newton inverse solver without observation.
///
/// # Errors
///
/// Returns an error if the forward transform fails, if the estimated Jacobian
/// is singular, or if the solver does not converge within [`MAX_ITERS`]
/// iterations.
pub fn solve_unobserved<M>(
    model: &M,
    target: Coord,
    guess: Coord,
    config: &Config,
) -> Result<Solution, Error>
where
    M: Model<Input = Coord, Output = Coord>,
{
    solve(model, target, guess, config, ())
}

/// Inverts many points independently.
///
/// Each item is a `(target, guess)` pair. Results are returned in input order,
/// one per pair; a failing point does not affect the others.
pub fn solve_batch<M, I>(model: &M, points: I, config: &Config) -> Vec<Result<Solution, Error>>
where
    M: Model<Input = Coord, Output = Coord>,
    I: IntoIterator<Item = (Coord, Coord)>,
{
    points
        .into_iter()
        .map(|(target, guess)| solve_unobserved(model, target, guess, config))
        .collect()
}
