//! Point type and point-like input coercion.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// An immutable 2D location.
///
/// Points carry no identity beyond their coordinates; several points in one
/// input may coincide. Serializes as a two-element array `[x, y]`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b = Point::new(3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// assert_eq!(b.x(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// A value that can be read as a 2D point.
///
/// Route search accepts any slice of point-like values so that loosely typed
/// front-end data (e.g. `Vec<Vec<f64>>` decoded from JSON) goes through the
/// same entry points as typed [`Point`]s. Coercion fails with
/// [`TourError::InvalidInput`] when the value does not hold exactly two
/// finite coordinates.
///
/// # Examples
///
/// ```
/// use u_tour::models::{AsPoint, Point};
///
/// assert_eq!((1.0, 2.0).to_point().unwrap(), Point::new(1.0, 2.0));
/// assert!(vec![1.0, 2.0, 3.0].to_point().is_err());
/// ```
pub trait AsPoint {
    /// Reads this value as a point.
    fn to_point(&self) -> Result<Point>;
}

fn checked(p: Point) -> Result<Point> {
    if p.is_finite() {
        Ok(p)
    } else {
        Err(TourError::invalid_input(format!(
            "coordinates must be finite, got ({}, {})",
            p.x, p.y
        )))
    }
}

impl AsPoint for Point {
    fn to_point(&self) -> Result<Point> {
        checked(*self)
    }
}

impl AsPoint for (f64, f64) {
    fn to_point(&self) -> Result<Point> {
        checked(Point::from(*self))
    }
}

impl AsPoint for [f64; 2] {
    fn to_point(&self) -> Result<Point> {
        checked(Point::from(*self))
    }
}

impl AsPoint for [f64] {
    fn to_point(&self) -> Result<Point> {
        match *self {
            [x, y] => checked(Point::new(x, y)),
            _ => Err(TourError::invalid_input(format!(
                "expected an (x, y) pair, got {} coordinates",
                self.len()
            ))),
        }
    }
}

impl AsPoint for Vec<f64> {
    fn to_point(&self) -> Result<Point> {
        self.as_slice().to_point()
    }
}

impl<T: AsPoint + ?Sized> AsPoint for &T {
    fn to_point(&self) -> Result<Point> {
        (**self).to_point()
    }
}

/// Copies a point-like sequence into owned [`Point`]s.
///
/// The returned vector is the working copy for a single solve call, so later
/// mutation of the caller's collection cannot affect it. The error names the
/// index of the first offending point.
pub fn coerce_points<P: AsPoint>(points: &[P]) -> Result<Vec<Point>> {
    points
        .iter()
        .enumerate()
        .map(|(idx, p)| {
            p.to_point().map_err(|e| match e {
                TourError::InvalidInput(msg) => {
                    TourError::invalid_input(format!("point {idx}: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}
