//! Speech bubble outlines: a rounded rectangle with a single caret
//! protruding from one edge.
//!
//! [`ShapeConfig`] describes the bubble once; [`Shape::path`] (or [`build`])
//! traces it inside any rectangle as a closed [`Path`] of lines, quarter-circle
//! corner arcs and, for a rounded caret tip, one quadratic curve.

pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod shape;

pub use error::{BubbleError, GeometryError, Result};
pub use geometry::{CaretEdge, Path, PathCommand, Rect};
pub use math::{Angle, Point2};
pub use operations::creation::{build, BubbleOutline, CaretGeometry, CaretOutcome, MakeBubble};
pub use shape::{CaretPositionType, InsettableShape, Shape, ShapeConfig};
