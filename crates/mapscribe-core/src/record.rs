//! Records produced by a single extraction pass.
//!
//! - [`NodeRecord`] - one labeled, positioned node box
//! - [`LinkEndpoints`] - the rounded start and end of one link path
//!
//! Both are immutable once created.

use crate::{
    geometry::{EdgePoint, Point, Size},
    name::NodeName,
};

/// A labeled node box with its link-attachment anchors.
///
/// The left and right edge points sit at the vertical centre of the box.
/// Links leave a parent from its right edge and enter a child at its left edge.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    name: NodeName,
    position: Point,
    size: Size,
    left_edge: EdgePoint,
    right_edge: EdgePoint,
    fill: Option<String>,
}

impl NodeRecord {
    /// Creates a node record from its top-left `position` and `size`.
    ///
    /// Edge points are computed as `(round(x), round(y + h/2))` and
    /// `(round(x + w), round(y + h/2))`.
    pub fn new(name: NodeName, position: Point, size: Size) -> Self {
        let center_y = position.y() + size.height() / 2.0;
        let left_edge = EdgePoint::from_point(Point::new(position.x(), center_y));
        let right_edge = EdgePoint::from_point(Point::new(position.x() + size.width(), center_y));

        Self {
            name,
            position,
            size,
            left_edge,
            right_edge,
            fill: None,
        }
    }

    /// Attaches the box fill colour (builder style).
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    pub fn name(&self) -> NodeName {
        self.name
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Anchor where links enter this node.
    pub fn left_edge(&self) -> EdgePoint {
        self.left_edge
    }

    /// Anchor where links leave this node.
    pub fn right_edge(&self) -> EdgePoint {
        self.right_edge
    }

    /// Fill colour of the node box, if the box declared one.
    pub fn fill(&self) -> Option<&str> {
        self.fill.as_deref()
    }
}

/// Start and end of a link path, rounded to edge-point precision.
///
/// The start is expected near the parent's right edge and the end near the
/// child's left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LinkEndpoints {
    start: EdgePoint,
    end: EdgePoint,
}

impl LinkEndpoints {
    pub fn new(start: EdgePoint, end: EdgePoint) -> Self {
        Self { start, end }
    }

    /// Builds endpoints from the numeric tokens of a path.
    ///
    /// The first two tokens are the start and the last two the end; anything
    /// in between (curve control points) is ignored. Returns `None` for fewer
    /// than four tokens.
    ///
    /// # Examples
    ///
    /// ```
    /// # use mapscribe_core::{geometry::EdgePoint, record::LinkEndpoints};
    /// let link = LinkEndpoints::from_tokens(&[100.0, 20.0, 150.0, 20.0, 199.6, 60.2]).unwrap();
    /// assert_eq!(link.start(), EdgePoint::new(100, 20));
    /// assert_eq!(link.end(), EdgePoint::new(200, 60));
    ///
    /// assert!(LinkEndpoints::from_tokens(&[1.0, 2.0, 3.0]).is_none());
    /// ```
    pub fn from_tokens(tokens: &[f64]) -> Option<Self> {
        match tokens {
            [x1, y1, .., x2, y2] => Some(Self::new(
                EdgePoint::from_point(Point::new(*x1, *y1)),
                EdgePoint::from_point(Point::new(*x2, *y2)),
            )),
            _ => None,
        }
    }

    pub fn start(&self) -> EdgePoint {
        self.start
    }

    pub fn end(&self) -> EdgePoint {
        self.end
    }
}
