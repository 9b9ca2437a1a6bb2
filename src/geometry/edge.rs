use crate::math::{Point2, Vector2};

use super::Rect;

/// The side of the rectangle that bears the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaretEdge {
    #[default]
    Top,
    Right,
    Bottom,
    Left,
}

/// Local coordinate frame of a rectangle edge.
///
/// `tangent` is the direction of travel along the edge when the outline is
/// traversed clockwise; `outward_normal` points away from the interior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeFrame {
    pub tangent: Vector2,
    pub outward_normal: Vector2,
}

/// Frames indexed by [`CaretEdge::index`].
const FRAMES: [EdgeFrame; 4] = [
    EdgeFrame {
        tangent: Vector2::new(1.0, 0.0),
        outward_normal: Vector2::new(0.0, -1.0),
    },
    EdgeFrame {
        tangent: Vector2::new(0.0, 1.0),
        outward_normal: Vector2::new(1.0, 0.0),
    },
    EdgeFrame {
        tangent: Vector2::new(-1.0, 0.0),
        outward_normal: Vector2::new(0.0, 1.0),
    },
    EdgeFrame {
        tangent: Vector2::new(0.0, -1.0),
        outward_normal: Vector2::new(-1.0, 0.0),
    },
];

impl CaretEdge {
    /// All edges in clockwise traversal order.
    pub const CLOCKWISE: [Self; 4] = [Self::Top, Self::Right, Self::Bottom, Self::Left];

    /// Position of this edge in [`CaretEdge::CLOCKWISE`].
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Self::Top => 0,
            Self::Right => 1,
            Self::Bottom => 2,
            Self::Left => 3,
        }
    }

    /// Returns the local frame of this edge.
    #[must_use]
    pub fn frame(self) -> EdgeFrame {
        FRAMES[self.index()]
    }

    /// Returns the edge that follows this one in clockwise order.
    #[must_use]
    pub fn next_clockwise(self) -> Self {
        Self::CLOCKWISE[(self.index() + 1) % 4]
    }

    /// Returns the edge that precedes this one in clockwise order.
    #[must_use]
    pub fn previous_clockwise(self) -> Self {
        Self::CLOCKWISE[(self.index() + 3) % 4]
    }

    /// Returns the opposite edge.
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::CLOCKWISE[(self.index() + 2) % 4]
    }

    /// Returns `true` for the top and bottom edges.
    #[must_use]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Returns the `(min, max)` extent of the edge along its own axis.
    ///
    /// This is the x range for horizontal edges and the y range for
    /// vertical ones, independent of the traversal direction.
    #[must_use]
    pub fn span(self, rect: &Rect) -> (f64, f64) {
        if self.is_horizontal() {
            (rect.min_x(), rect.max_x())
        } else {
            (rect.min_y(), rect.max_y())
        }
    }

    /// Returns the point on this edge at axis coordinate `along`.
    #[must_use]
    pub fn point_at(self, rect: &Rect, along: f64) -> Point2 {
        match self {
            Self::Top => Point2::new(along, rect.min_y()),
            Self::Right => Point2::new(rect.max_x(), along),
            Self::Bottom => Point2::new(along, rect.max_y()),
            Self::Left => Point2::new(rect.min_x(), along),
        }
    }

    /// Returns the coordinate of `point` along this edge's axis.
    #[must_use]
    pub fn coordinate_of(self, point: &Point2) -> f64 {
        if self.is_horizontal() {
            point.x
        } else {
            point.y
        }
    }

    /// Returns the rectangle corner where this edge begins in clockwise
    /// traversal.
    #[must_use]
    pub fn start_corner(self, rect: &Rect) -> Point2 {
        rect.corners()[self.index()]
    }
}
