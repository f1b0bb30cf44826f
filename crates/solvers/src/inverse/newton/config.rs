use geoinv_core::Coord;
use thiserror::Error;

/// Relative residual tolerance used when none is configured.
const AUTO_RESIDUAL_SCALE: f64 = 1e-12;

/// When the Jacobian is (re)estimated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JacobianUpdate {
    /// Re-estimate at every iteration from the current estimate.
    #[default]
    EveryIteration,

    /// Estimate once, on the first iteration, and reuse it afterwards.
    ///
    /// Saves two forward calls per iteration. Suited to transforms that are
    /// close to affine over the search region.
    FirstIterationOnly,
}

/// Configuration for the Newton inverse solver.
///
/// The iteration budget is fixed at [`MAX_ITERS`](super::MAX_ITERS).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    residual_tol: f64,
    step_tol: f64,
    jacobian: JacobianUpdate,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,

    #[error("step_tol must be finite and non-negative")]
    StepTol,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: 0.0,
            step_tol: 0.0,
            jacobian: JacobianUpdate::EveryIteration,
        }
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// - `residual_tol`: convergence threshold on each component of
    ///   `forward(estimate) - target`. Zero derives it from the target, see
    ///   [`Config::residual_tol_for`].
    /// - `step_tol`: convergence threshold on each component of a Newton step.
    ///   Zero disables the check.
    ///
    /// # Errors
    ///
    /// Returns an error if either tolerance is negative or non-finite.
    pub fn new(
        residual_tol: f64,
        step_tol: f64,
        jacobian: JacobianUpdate,
    ) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if !step_tol.is_finite() || step_tol < 0.0 {
            return Err(ConfigError::StepTol);
        }

        Ok(Self {
            residual_tol,
            step_tol,
            jacobian,
        })
    }

    /// Returns the configured residual tolerance (zero means automatic).
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the step tolerance (zero means disabled).
    #[must_use]
    pub fn step_tol(&self) -> f64 {
        self.step_tol
    }

    /// Returns the Jacobian update policy.
    #[must_use]
    pub fn jacobian(&self) -> JacobianUpdate {
        self.jacobian
    }

    /// Returns the residual tolerance to use for `target`.
    ///
    /// A configured tolerance is returned unchanged. Otherwise it is
    /// `max(|x|, |y|) * 1e-12` of the target, or `1e-12` for the origin.
    #[must_use]
    pub fn residual_tol_for(&self, target: Coord) -> f64 {
        if self.residual_tol > 0.0 {
            return self.residual_tol;
        }
        let tol = target.max_abs() * AUTO_RESIDUAL_SCALE;
        if tol == 0.0 { AUTO_RESIDUAL_SCALE } else { tol }
    }
}
