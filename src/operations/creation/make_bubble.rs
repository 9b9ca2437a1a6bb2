use std::f64::consts::FRAC_PI_2;

use tracing::{debug, trace};

use crate::geometry::{CaretEdge, Path, Rect};
use crate::math::Point2;
use crate::shape::ShapeConfig;

use super::caret::{is_clear_of_corners, resolve_base_center, CaretGeometry, CaretOutcome};

/// Result of [`MakeBubble::execute`].
#[derive(Debug, Clone, PartialEq)]
pub struct BubbleOutline {
    /// The closed outline.
    pub path: Path,
    /// Whether the caret was drawn, and where.
    pub caret: CaretOutcome,
}

/// Builds the outline of a speech bubble: a rounded rectangle with one caret.
///
/// # Algorithm
///
/// 1. Shrink the rectangle by the configured inset; the corner radius shrinks
///    by the same amount (floored at zero).
/// 2. Resolve the caret's base center on its edge.
/// 3. Suppress the caret if the base center lies within `1.5 × corner_radius`
///    of either end of the edge.
/// 4. Trace the outline clockwise (y-down), starting with the corner arc that
///    leads into the caret edge, so the caret lies on the first straight run.
///
/// The operation is total: every input yields a closed contour. Degenerate
/// parameters (negative radii, zero-sized carets) are not rejected; use
/// [`ShapeConfig::validate`] beforehand if that matters.
#[derive(Debug)]
pub struct MakeBubble {
    rect: Rect,
    config: ShapeConfig,
}

impl MakeBubble {
    /// Creates a new `MakeBubble` operation.
    #[must_use]
    pub fn new(rect: Rect, config: ShapeConfig) -> Self {
        Self { rect, config }
    }

    /// Executes the operation.
    #[must_use]
    pub fn execute(&self) -> BubbleOutline {
        let inset = self.config.inset_amount();
        let rect = self.rect.inset_by(inset, inset);
        let radius = self.config.effective_corner_radius();
        let edge = self.config.edge();

        let caret = self.resolve_caret(&rect);
        let path = trace_outline(&rect, radius, edge, caret.geometry());

        BubbleOutline { path, caret }
    }

    /// Steps 2 and 3: place the caret on `rect` or decide to drop it.
    fn resolve_caret(&self, rect: &Rect) -> CaretOutcome {
        let edge = self.config.edge();
        let base_center = resolve_base_center(rect, &self.config);
        let safe_distance = self.config.safe_distance();

        if !is_clear_of_corners(rect, edge, &base_center, safe_distance) {
            let (span_min, span_max) = edge.span(rect);
            debug!(
                ?edge,
                along = edge.coordinate_of(&base_center),
                safe_distance,
                span_min,
                span_max,
                "caret suppressed near corner"
            );
            return CaretOutcome::Suppressed { edge, base_center };
        }

        let tip_radius = (self.config.caret_corner_radius() > 0.0)
            .then(|| self.config.effective_caret_corner_radius());
        let geometry = CaretGeometry::new(
            edge,
            base_center,
            self.config.caret_width(),
            self.config.caret_height(),
            tip_radius,
        );
        trace!(
            ?edge,
            base_x = base_center.x,
            base_y = base_center.y,
            tip_x = geometry.tip.x,
            tip_y = geometry.tip.y,
            tip_radius = ?geometry.tip_radius,
            "caret placed"
        );
        CaretOutcome::Drawn(geometry)
    }
}

/// Builds the outline of `config` inside `rect`.
///
/// Shorthand for `MakeBubble::new(*rect, *config).execute().path`.
#[must_use]
pub fn build(rect: &Rect, config: &ShapeConfig) -> Path {
    MakeBubble::new(*rect, *config).execute().path
}

/// Traces the rounded rectangle clockwise, beginning with the corner that
/// leads into `first`, and splices `caret` into the run along `first`.
fn trace_outline(
    rect: &Rect,
    radius: f64,
    first: CaretEdge,
    caret: Option<&CaretGeometry>,
) -> Path {
    let mut path = Path::new();
    path.move_to(edge_end(rect, radius, first.previous_clockwise()));

    let mut edge = first;
    for _ in 0..4 {
        let center = corner_center(rect, radius, edge);
        let n = edge.previous_clockwise().frame().outward_normal;
        path.arc(center, radius, n.y.atan2(n.x), FRAC_PI_2);

        if edge == first {
            if let Some(caret) = caret {
                caret.append_to(&mut path);
            }
        }

        path.line_to(edge_end(rect, radius, edge));
        edge = edge.next_clockwise();
    }

    path.close();
    path
}

/// Center of the corner arc at the start of `edge`.
fn corner_center(rect: &Rect, radius: f64, edge: CaretEdge) -> Point2 {
    let frame = edge.frame();
    edge.start_corner(rect) + (frame.tangent - frame.outward_normal) * radius
}

/// Point where the straight run along `edge` meets the next corner arc.
fn edge_end(rect: &Rect, radius: f64, edge: CaretEdge) -> Point2 {
    corner_center(rect, radius, edge.next_clockwise()) + edge.frame().outward_normal * radius
}
