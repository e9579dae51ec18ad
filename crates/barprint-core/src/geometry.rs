//! Geometric primitives.
//!
//! Everything here is a small `Copy` value. Comparisons that need slack take
//! a [`Tolerance`] argument instead of a hard-coded epsilon.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Comparison epsilon for coordinates.
///
/// Two coordinates are coincident when they differ by strictly less than the
/// tolerance value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Tolerance(f64);

impl Tolerance {
    /// Default tolerance for merging rectangle geometry.
    pub const MERGE: Tolerance = Tolerance(1e-2);
    /// Tolerance for point identity checks.
    pub const POINT_IDENTITY: Tolerance = Tolerance(1e-6);

    pub fn new(value: f64) -> Result<Self, GeometryError> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(GeometryError::InvalidTolerance { value })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns true when `a` and `b` differ by less than the tolerance.
    pub fn coincident(self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::MERGE
    }
}

impl TryFrom<f64> for Tolerance {
    type Error = GeometryError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Tolerance> for f64 {
    fn from(tol: Tolerance) -> Self {
        tol.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub z: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: 0.0 }
    }

    pub fn new_3d(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same point moved onto the plane at height `z`.
    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Coordinate-wise comparison: every axis must differ by less than `tol`.
    pub fn approx_eq(&self, other: &Point, tol: Tolerance) -> bool {
        tol.coincident(self.x, other.x)
            && tol.coincident(self.y, other.y)
            && tol.coincident(self.z, other.z)
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

/// Closed range `[min, max]` on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Creates an interval from two bounds in either order.
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    pub fn union(&self, other: &Interval) -> Interval {
        Interval {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// True when the two intervals share an interior longer than `tol`.
    ///
    /// Intervals that only touch, or overlap by less than the tolerance,
    /// are not overlapping. A larger `tol` therefore merges less: two spans
    /// sharing 0.005 overlap at `tol = 0.001` but not at `tol = 0.01`.
    pub fn overlaps(&self, other: &Interval, tol: Tolerance) -> bool {
        self.max - other.min > tol.value() && other.max - self.min > tol.value()
    }

    /// True when `self` lies inside `outer`, allowing `tol` slack at both ends.
    pub fn within(&self, outer: &Interval, tol: Tolerance) -> bool {
        self.min > outer.min - tol.value() && self.max < outer.max + tol.value()
    }
}

/// Axis-aligned rectangle.
///
/// Corners are normalized on construction, so `min` holds the smallest
/// coordinate on every axis and `max` the largest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self::from_corners(Point::new(x0, y0), Point::new(x1, y1))
    }

    pub fn from_corners(c0: Point, c1: Point) -> Self {
        Self {
            min: Point::new_3d(c0.x.min(c1.x), c0.y.min(c1.y), c0.z.min(c1.z)),
            max: Point::new_3d(c0.x.max(c1.x), c0.y.max(c1.y), c0.z.max(c1.z)),
        }
    }

    /// Builds a rectangle from a corner list as handed over by a host
    /// application. Anything other than exactly two finite corners is rejected.
    pub fn from_corner_list(corners: &[Point]) -> Result<Self, GeometryError> {
        match corners {
            [c0, c1] => {
                for c in [c0, c1] {
                    if !c.is_finite() {
                        return Err(GeometryError::NonFiniteCoordinate {
                            x: c.x,
                            y: c.y,
                            z: c.z,
                        });
                    }
                }
                Ok(Self::from_corners(*c0, *c1))
            }
            _ => Err(GeometryError::WrongCornerCount {
                count: corners.len(),
            }),
        }
    }

    pub fn x_span(&self) -> Interval {
        Interval::new(self.min.x, self.max.x)
    }

    pub fn y_span(&self) -> Interval {
        Interval::new(self.min.y, self.max.y)
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Height of the plane the rectangle is projected onto.
    pub fn plane_z(&self) -> f64 {
        self.max.z
    }

    /// A rectangle collapsed to a line or a point within `tol`.
    pub fn is_degenerate(&self, tol: Tolerance) -> bool {
        self.width() < tol.value() || self.height() < tol.value()
    }
}
