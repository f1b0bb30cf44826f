//! Finite-difference Jacobian of a 2D forward transform.

use geoinv_core::{Coord, Model};
use thiserror::Error;

/// Relative size of the finite-difference step.
const STEP_SCALE: f64 = 1e-6;

/// A forward-difference probe failed.
#[derive(Debug, Error)]
#[error("forward transform failed at probe point {at}")]
pub struct ProbeError<E> {
    /// The probe point passed to the forward transform.
    pub at: Coord,

    /// The forward transform's error.
    #[source]
    pub source: E,
}

/// Returns the finite-difference step for an estimate near `guess`.
///
/// The step is `max(|x|, |y|) * 1e-6`, or `1e-6` when both components are zero.
#[must_use]
pub fn finite_difference_step(guess: Coord) -> f64 {
    let eps = guess.max_abs() * STEP_SCALE;
    if eps == 0.0 { STEP_SCALE } else { eps }
}

/// A 2x2 matrix of partial derivatives of a forward transform.
///
/// ```text
/// | dx_dx  dx_dy |     | ∂out_x/∂in_x  ∂out_x/∂in_y |
/// | dy_dx  dy_dy |  =  | ∂out_y/∂in_x  ∂out_y/∂in_y |
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jacobian {
    pub dx_dx: f64,
    pub dx_dy: f64,
    pub dy_dx: f64,
    pub dy_dy: f64,
}

impl Jacobian {
    /// Estimates the Jacobian at `at` by forward differences.
    ///
    /// `output` must be the forward image of `at`. The transform is probed at
    /// `(at.x + eps, at.y)` and then `(at.x, at.y + eps)`.
    ///
    /// # Errors
    ///
    /// Returns the first probe failure. The second probe is not attempted if
    /// the first one fails.
    pub fn estimate<M>(
        model: &M,
        at: Coord,
        output: Coord,
        eps: f64,
    ) -> Result<Self, ProbeError<M::Error>>
    where
        M: Model<Input = Coord, Output = Coord>,
    {
        let probe = |p: Coord| model.call(&p).map_err(|source| ProbeError { at: p, source });

        let along_x = probe(Coord::new(at.x + eps, at.y))?;
        let along_y = probe(Coord::new(at.x, at.y + eps))?;

        Ok(Self {
            dx_dx: (along_x.x - output.x) / eps,
            dx_dy: (along_y.x - output.x) / eps,
            dy_dx: (along_x.y - output.y) / eps,
            dy_dy: (along_y.y - output.y) / eps,
        })
    }

    /// Returns the determinant.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        self.dx_dx * self.dy_dy - self.dx_dy * self.dy_dx
    }

    /// Returns the analytic inverse (cofactors over determinant).
    ///
    /// Returns `None` only when the determinant is exactly zero. Near-singular
    /// matrices are inverted as-is.
    #[must_use]
    pub fn inverse(&self) -> Option<InverseJacobian> {
        let det = self.determinant();
        #[allow(clippy::float_cmp)]
        if det == 0.0 {
            return None;
        }

        Some(InverseJacobian {
            m00: self.dy_dy / det,
            m01: -self.dx_dy / det,
            m10: -self.dy_dx / det,
            m11: self.dx_dx / det,
        })
    }
}

/// The inverse of a [`Jacobian`], mapping output-space offsets to input space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InverseJacobian {
    pub m00: f64,
    pub m01: f64,
    pub m10: f64,
    pub m11: f64,
}

impl InverseJacobian {
    /// Maps an output-space offset to the matching input-space offset.
    #[must_use]
    pub fn apply(&self, offset: Coord) -> Coord {
        Coord::new(
            self.m00 * offset.x + self.m01 * offset.y,
            self.m10 * offset.x + self.m11 * offset.y,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cell::Cell;
    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use geoinv_core::from_fn;
    use thiserror::Error;

    #[derive(Debug, Error)]
    #[error("probe rejected")]
    struct Rejected;

    #[test]
    fn step_scales_with_guess() {
        assert_relative_eq!(finite_difference_step(Coord::new(135.0, -35.0)), 1.35e-4);
        assert_relative_eq!(finite_difference_step(Coord::new(0.0, -2.0)), 2e-6);
        assert_eq!(finite_difference_step(Coord::ZERO), 1e-6);
    }

    #[test]
    fn estimates_linear_map() {
        // out = (2x + y, -x + 3y)
        let model = from_fn(|c: Coord| {
            Ok::<_, Infallible>(Coord::new(2.0 * c.x + c.y, -c.x + 3.0 * c.y))
        });
        let at = Coord::new(1.0, 2.0);
        let output = model.call(&at).unwrap();

        let jac = Jacobian::estimate(&model, at, output, 1e-6).unwrap();

        assert_relative_eq!(jac.dx_dx, 2.0, epsilon = 1e-8);
        assert_relative_eq!(jac.dx_dy, 1.0, epsilon = 1e-8);
        assert_relative_eq!(jac.dy_dx, -1.0, epsilon = 1e-8);
        assert_relative_eq!(jac.dy_dy, 3.0, epsilon = 1e-8);
    }

    #[test]
    fn probes_x_then_y() {
        let probes = Cell::new(Vec::new());
        let model = from_fn(|c: Coord| {
            let mut seen = probes.take();
            seen.push(c);
            probes.set(seen);
            Ok::<_, Infallible>(c)
        });

        Jacobian::estimate(&model, Coord::new(1.0, 1.0), Coord::new(1.0, 1.0), 0.5).unwrap();

        assert_eq!(
            probes.take(),
            vec![Coord::new(1.5, 1.0), Coord::new(1.0, 1.5)]
        );
    }

    #[test]
    fn first_probe_failure_stops_estimate() {
        let calls = Cell::new(0);
        let model = from_fn(|_c: Coord| {
            calls.set(calls.get() + 1);
            Err::<Coord, _>(Rejected)
        });

        let err = Jacobian::estimate(&model, Coord::ZERO, Coord::ZERO, 1e-6).unwrap_err();

        assert_eq!(calls.get(), 1);
        assert_eq!(err.at, Coord::new(1e-6, 0.0));
    }

    #[test]
    fn inverse_times_jacobian_is_identity() {
        let jac = Jacobian {
            dx_dx: 2.0,
            dx_dy: 1.0,
            dy_dx: -1.0,
            dy_dy: 3.0,
        };
        assert_relative_eq!(jac.determinant(), 7.0);

        let inv = jac.inverse().expect("non-singular");

        // J * J⁻¹ applied to unit vectors.
        let e1 = inv.apply(Coord::new(1.0, 0.0));
        assert_relative_eq!(jac.dx_dx * e1.x + jac.dx_dy * e1.y, 1.0, epsilon = 1e-15);
        assert_relative_eq!(jac.dy_dx * e1.x + jac.dy_dy * e1.y, 0.0, epsilon = 1e-15);

        let e2 = inv.apply(Coord::new(0.0, 1.0));
        assert_relative_eq!(jac.dx_dx * e2.x + jac.dx_dy * e2.y, 0.0, epsilon = 1e-15);
        assert_relative_eq!(jac.dy_dx * e2.x + jac.dy_dy * e2.y, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn exactly_singular_has_no_inverse() {
        let jac = Jacobian {
            dx_dx: 1.0,
            dx_dy: 0.0,
            dy_dx: 1.0,
            dy_dy: 0.0,
        };
        assert!(jac.inverse().is_none());
    }

    #[test]
    fn nearly_singular_is_still_inverted() {
        let jac = Jacobian {
            dx_dx: 1.0,
            dx_dy: 1.0,
            dy_dx: 1.0,
            dy_dy: 1.0 + 1e-15,
        };
        assert!(jac.determinant() != 0.0);
        assert!(jac.inverse().is_some());
    }
}
