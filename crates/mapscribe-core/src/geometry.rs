//! Geometric primitives for captured diagram coordinates.
//!
//! Captured mind maps use the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - [`Point`] - A position in diagram space, as read from a `transform`
//! - [`Size`] - Width and height of a node box
//! - [`EdgePoint`] - A rounded integer coordinate used to attach links to boxes
//!
//! Rounding uses [`round_half_up`], so the same coordinate read from a node
//! box and from a link path lands on the same [`EdgePoint`].

use std::fmt;

/// Rounds `value` to the nearest integer, with halves rounded towards positive infinity.
///
/// This differs from [`f64::round`] for negative halves: `-2.5` becomes `-2`.
///
/// # Examples
///
/// ```
/// # use mapscribe_core::geometry::round_half_up;
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(-2.6), -3);
/// ```
pub fn round_half_up(value: f64) -> i64 {
    (value + 0.5).floor() as i64
}

/// A 2D point in diagram coordinate space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }
}

/// Width and height of a node box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    /// Creates a new size
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> f64 {
        self.width
    }

    pub fn height(self) -> f64 {
        self.height
    }
}

/// A rounded integer coordinate where a link attaches to a node box.
///
/// Edge points are compared exactly (they are used as map keys by the
/// endpoint matcher) and measured against each other with Euclidean
/// [`distance`](EdgePoint::distance) when no exact match exists.
///
/// # Examples
///
/// ```
/// # use mapscribe_core::geometry::{EdgePoint, Point};
/// let p = EdgePoint::from_point(Point::new(99.5, 19.4));
/// assert_eq!(p, EdgePoint::new(100, 19));
/// assert_eq!(p.to_string(), "100,19");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgePoint {
    x: i64,
    y: i64,
}

impl EdgePoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    /// Rounds both coordinates of `point` with [`round_half_up`].
    pub fn from_point(point: Point) -> Self {
        Self::new(round_half_up(point.x()), round_half_up(point.y()))
    }

    pub fn x(self) -> i64 {
        self.x
    }

    pub fn y(self) -> i64 {
        self.y
    }

    /// Euclidean distance between two edge points.
    pub fn distance(self, other: EdgePoint) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }
}

impl fmt::Display for EdgePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}


#[cfg(test)]
mod proptest_tests {
    use float_cmp::approx_eq;
    use proptest::prelude::*;

    use super::*;

    // ===================
    // Strategies
    // ===================

    fn coordinate_strategy() -> impl Strategy<Value = f64> {
        -100_000.0f64..100_000.0
    }

    fn edge_point_strategy() -> impl Strategy<Value = EdgePoint> {
        (-10_000i64..10_000, -10_000i64..10_000).prop_map(|(x, y)| EdgePoint::new(x, y))
    }

    // ===================
    // Property Test Functions
    // ===================

    /// Rounding never moves a value by more than half a unit.
    fn check_rounding_is_nearest(value: f64) -> Result<(), TestCaseError> {
        let rounded = round_half_up(value) as f64;
        prop_assert!((rounded - value).abs() <= 0.5);
        Ok(())
    }

    /// Distance is symmetric and zero only for identical points.
    fn check_distance_is_symmetric(a: EdgePoint, b: EdgePoint) -> Result<(), TestCaseError> {
        prop_assert!(approx_eq!(f64, a.distance(b), b.distance(a)));
        prop_assert_eq!(a.distance(b) == 0.0, a == b);
        Ok(())
    }

    // ===================
    // Proptest Wrappers
    // ===================

    proptest! {
        #[test]
        fn rounding_is_nearest(value in coordinate_strategy()) {
            check_rounding_is_nearest(value)?;
        }

        #[test]
        fn distance_is_symmetric(a in edge_point_strategy(), b in edge_point_strategy()) {
            check_distance_is_symmetric(a, b)?;
        }
    }
}
