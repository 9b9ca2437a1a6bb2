mod config;

pub use config::{CaretPositionType, ShapeConfig, SAFE_DISTANCE_FACTOR};

use crate::geometry::{Path, Rect};
use crate::operations::creation::MakeBubble;

/// A resolution-independent outline that can be traced inside any rectangle.
///
/// This is the contract a host renderer consumes: it calls [`Shape::path`]
/// once per layout pass with the rectangle it assigned to the shape.
pub trait Shape {
    /// Returns the outline of this shape fitted to `rect`.
    fn path(&self, rect: &Rect) -> Path;
}

/// A shape that can produce a uniformly shrunk copy of itself, used to
/// stroke a border inside the fill bounds.
pub trait InsettableShape: Shape + Sized {
    /// Returns a copy whose outline is shrunk by a further `amount` on every
    /// side. `self` is left untouched.
    #[must_use]
    fn inset(&self, amount: f64) -> Self;
}

impl Shape for ShapeConfig {
    fn path(&self, rect: &Rect) -> Path {
        MakeBubble::new(*rect, *self).execute().path
    }
}

impl InsettableShape for ShapeConfig {
    fn inset(&self, amount: f64) -> Self {
        self.with_inset(self.inset_amount() + amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::CaretEdge;
    use approx::assert_relative_eq;

    #[test]
    fn inset_accumulates_without_mutating() {
        let base = ShapeConfig::default();
        let once = base.inset(2.0);
        let twice = once.inset(3.0);
        assert_relative_eq!(base.inset_amount(), 0.0);
        assert_relative_eq!(once.inset_amount(), 2.0);
        assert_relative_eq!(twice.inset_amount(), 5.0);
    }

    #[test]
    fn path_matches_builder() {
        let rect = Rect::new(0.0, 0.0, 300.0, 150.0);
        let config = ShapeConfig::inset_from_end(16.0, 24.0, 6.0, 50.0, CaretEdge::Bottom);
        assert_eq!(config.path(&rect), crate::build(&rect, &config));
    }

    #[test]
    fn shape_is_usable_as_trait_object() {
        let shapes: Vec<Box<dyn Shape>> = vec![
            Box::new(ShapeConfig::default()),
            Box::new(ShapeConfig::default().inset(1.0)),
        ];
        let rect = Rect::new(0.0, 0.0, 200.0, 100.0);
        for shape in &shapes {
            assert!(shape.path(&rect).is_closed());
        }
    }
}
