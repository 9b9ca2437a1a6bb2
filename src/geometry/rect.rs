use crate::math::Point2;

/// An axis-aligned rectangle in the y-down screen frame.
///
/// No normalization is performed: insetting past the center produces a
/// rectangle whose `min` exceeds its `max`, and the outline builder keeps
/// working with it arithmetically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Minimum (top-left) corner.
    pub min: Point2,
    /// Maximum (bottom-right) corner.
    pub max: Point2,
}

impl Rect {
    /// Creates a rectangle from its extreme coordinates.
    #[must_use]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min: Point2::new(min_x, min_y),
            max: Point2::new(max_x, max_y),
        }
    }

    /// Creates a rectangle from an origin (top-left) and a size.
    #[must_use]
    pub fn from_origin_size(origin: Point2, width: f64, height: f64) -> Self {
        Self {
            min: origin,
            max: Point2::new(origin.x + width, origin.y + height),
        }
    }

    #[must_use]
    pub fn min_x(&self) -> f64 {
        self.min.x
    }

    #[must_use]
    pub fn min_y(&self) -> f64 {
        self.min.y
    }

    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.max.x
    }

    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.max.y
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> Point2 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Returns the four corners in clockwise order starting at the
    /// top-left: top-left, top-right, bottom-right, bottom-left.
    #[must_use]
    pub fn corners(&self) -> [Point2; 4] {
        [
            self.min,
            Point2::new(self.max.x, self.min.y),
            self.max,
            Point2::new(self.min.x, self.max.y),
        ]
    }

    /// Shrinks the rectangle by `dx` on the left and right and by `dy` on
    /// the top and bottom. Negative amounts grow it.
    #[must_use]
    pub fn inset_by(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.min.x + dx,
            self.min.y + dy,
            self.max.x - dx,
            self.max.y - dy,
        )
    }

    /// Grows the rectangle so it contains `point`.
    #[must_use]
    pub fn including(&self, point: &Point2) -> Self {
        Self::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.max.x.max(point.x),
            self.max.y.max(point.y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn size_accessors() {
        let r = Rect::new(10.0, 20.0, 310.0, 170.0);
        assert_relative_eq!(r.width(), 300.0);
        assert_relative_eq!(r.height(), 150.0);
        assert_eq!(r.center(), Point2::new(160.0, 95.0));
    }

    #[test]
    fn from_origin_size_matches_new() {
        let a = Rect::from_origin_size(Point2::new(0.0, 0.0), 300.0, 150.0);
        assert_eq!(a, Rect::new(0.0, 0.0, 300.0, 150.0));
    }

    #[test]
    fn inset_shrinks_every_side() {
        let r = Rect::new(0.0, 0.0, 300.0, 150.0).inset_by(4.0, 2.0);
        assert_eq!(r, Rect::new(4.0, 2.0, 296.0, 148.0));
    }

    #[test]
    fn negative_inset_grows() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0).inset_by(-1.0, -1.0);
        assert_eq!(r, Rect::new(-1.0, -1.0, 11.0, 11.0));
    }

    #[test]
    fn corners_run_clockwise_from_top_left() {
        let c = Rect::new(0.0, 0.0, 2.0, 1.0).corners();
        assert_eq!(c[0], Point2::new(0.0, 0.0));
        assert_eq!(c[1], Point2::new(2.0, 0.0));
        assert_eq!(c[2], Point2::new(2.0, 1.0));
        assert_eq!(c[3], Point2::new(0.0, 1.0));
    }

    #[test]
    fn including_expands() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0).including(&Point2::new(3.0, -2.0));
        assert_eq!(r, Rect::new(0.0, -2.0, 3.0, 1.0));
    }
}
