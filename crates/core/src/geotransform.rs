use std::convert::Infallible;

use crate::{Coord, Model};

/// An affine transform with six coefficients.
///
/// Maps `(x, y)` to
///
/// ```text
/// x' = c[0] + c[1] * x + c[2] * y
/// y' = c[3] + c[4] * x + c[5] * y
/// ```
///
/// This is the usual pixel/line to georeferenced mapping of a raster. Its
/// closed-form inverse makes it a cheap source of initial guesses for the
/// iterative inverse of a non-linear transform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoTransform {
    coefficients: [f64; 6],
}

impl Default for GeoTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl GeoTransform {
    /// The identity transform.
    pub const IDENTITY: Self = Self::new([0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);

    /// Creates a transform from its six coefficients.
    #[must_use]
    pub const fn new(coefficients: [f64; 6]) -> Self {
        Self { coefficients }
    }

    /// Returns the six coefficients.
    #[must_use]
    pub const fn coefficients(&self) -> [f64; 6] {
        self.coefficients
    }

    /// Returns the determinant of the linear part.
    #[must_use]
    pub fn determinant(&self) -> f64 {
        let [_, a, b, _, c, d] = self.coefficients;
        a * d - b * c
    }

    /// Applies the transform to a coordinate.
    #[must_use]
    pub fn apply(&self, coord: Coord) -> Coord {
        let [x0, a, b, y0, c, d] = self.coefficients;
        Coord::new(x0 + a * coord.x + b * coord.y, y0 + c * coord.x + d * coord.y)
    }

    /// Returns the inverse transform.
    ///
    /// Returns `None` when the determinant of the linear part is exactly zero.
    #[must_use]
    pub fn invert(&self) -> Option<Self> {
        let [x0, a, b, y0, c, d] = self.coefficients;

        let det = self.determinant();
        #[allow(clippy::float_cmp)]
        if det == 0.0 {
            return None;
        }

        let inv_det = 1.0 / det;
        let ia = d * inv_det;
        let ib = -b * inv_det;
        let ic = -c * inv_det;
        let id = a * inv_det;

        Some(Self::new([
            -(ia * x0 + ib * y0),
            ia,
            ib,
            -(ic * x0 + id * y0),
            ic,
            id,
        ]))
    }
}

impl Model for GeoTransform {
    type Input = Coord;
    type Output = Coord;
    type Error = Infallible;

    fn call(&self, input: &Coord) -> Result<Coord, Infallible> {
        Ok(self.apply(*input))
    }
}
