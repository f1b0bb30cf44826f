use std::fmt;
use std::ops::{Add, Neg, Sub};

/// A coordinate pair `(x, y)`.
///
/// Used for points in both the domain (input space) and the range (output
/// space) of a forward transform. Copied by value everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    /// The origin `(0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a coordinate from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the larger of `|x|` and `|y|`.
    #[must_use]
    pub fn max_abs(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }

    /// Returns true if both components are strictly below `tol` in magnitude.
    #[must_use]
    pub fn is_within(&self, tol: f64) -> bool {
        self.x.abs() < tol && self.y.abs() < tol
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Coord {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Coord> for (f64, f64) {
    fn from(coord: Coord) -> Self {
        (coord.x, coord.y)
    }
}

impl Add for Coord {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Coord {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_abs_picks_larger_magnitude() {
        assert_eq!(Coord::new(-3.0, 2.0).max_abs(), 3.0);
        assert_eq!(Coord::new(0.5, -7.25).max_abs(), 7.25);
        assert_eq!(Coord::ZERO.max_abs(), 0.0);
    }

    #[test]
    fn is_within_is_strict() {
        let c = Coord::new(1e-3, -1e-3);
        assert!(c.is_within(2e-3));
        assert!(!c.is_within(1e-3));
        assert!(!Coord::new(f64::NAN, 0.0).is_within(1.0));
    }

    #[test]
    fn arithmetic() {
        let a = Coord::new(1.0, 2.0);
        let b = Coord::new(0.5, -1.0);

        assert_eq!(a + b, Coord::new(1.5, 1.0));
        assert_eq!(a - b, Coord::new(0.5, 3.0));
        assert_eq!(-a, Coord::new(-1.0, -2.0));
    }

    #[test]
    fn conversions() {
        assert_eq!(Coord::from((1.0, 2.0)), Coord::new(1.0, 2.0));
        assert_eq!(Coord::from([3.0, 4.0]), Coord::new(3.0, 4.0));

        let (x, y): (f64, f64) = Coord::new(5.0, 6.0).into();
        assert_eq!((x, y), (5.0, 6.0));
    }

    #[test]
    fn displays_as_pair() {
        assert_eq!(Coord::new(1.5, -2.0).to_string(), "(1.5, -2)");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_json_round_trip() {
        let c = Coord::new(135.0, 35.0);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, r#"{"x":135.0,"y":35.0}"#);
        assert_eq!(serde_json::from_str::<Coord>(&json).unwrap(), c);
    }
}
