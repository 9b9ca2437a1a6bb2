use crate::geometry::{CaretEdge, Path, Rect};
use crate::math::Point2;
use crate::shape::{CaretPositionType, ShapeConfig};

/// Points where a rounded tip leaves the caret flanks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TipRounding {
    /// End of the straight run on the start flank; the curve begins here.
    pub start: Point2,
    /// Beginning of the straight run on the end flank; the curve ends here.
    pub end: Point2,
}

/// The resolved caret triangle on one edge.
///
/// `start`, `tip` and `end` are listed in the clockwise traversal order of
/// the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CaretGeometry {
    pub edge: CaretEdge,
    /// Center of the caret's base, on the edge.
    pub base_center: Point2,
    pub start: Point2,
    pub tip: Point2,
    pub end: Point2,
    /// Clamped tip radius, `None` for a sharp tip. May be zero or negative
    /// for degenerate carets.
    pub tip_radius: Option<f64>,
    /// Present exactly when `tip_radius` is.
    pub rounding: Option<TipRounding>,
}

/// Whether the requested caret made it into the outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CaretOutcome {
    /// The caret is part of the outline.
    Drawn(CaretGeometry),
    /// The base center fell too close to a corner (or outside the edge);
    /// the outline is a plain rounded rectangle.
    Suppressed {
        edge: CaretEdge,
        base_center: Point2,
    },
}

impl CaretOutcome {
    /// Returns `true` if the caret was drawn.
    #[must_use]
    pub fn is_honored(&self) -> bool {
        matches!(self, Self::Drawn(_))
    }

    /// Returns the caret geometry if it was drawn.
    #[must_use]
    pub fn geometry(&self) -> Option<&CaretGeometry> {
        match self {
            Self::Drawn(geometry) => Some(geometry),
            Self::Suppressed { .. } => None,
        }
    }

    /// Returns the requested base center, drawn or not.
    #[must_use]
    pub fn base_center(&self) -> Point2 {
        match self {
            Self::Drawn(geometry) => geometry.base_center,
            Self::Suppressed { base_center, .. } => *base_center,
        }
    }
}

impl CaretGeometry {
    /// Derives the caret triangle from its base center.
    ///
    /// The base spans `width` along the edge and the tip protrudes `height`
    /// along the outward normal. `Some(tip_radius)` rounds the tip with that
    /// radius as given, without further clamping.
    #[must_use]
    pub fn new(
        edge: CaretEdge,
        base_center: Point2,
        width: f64,
        height: f64,
        tip_radius: Option<f64>,
    ) -> Self {
        let frame = edge.frame();
        let half_width = width / 2.0;

        let start = base_center - frame.tangent * half_width;
        let tip = base_center + frame.outward_normal * height;
        let end = base_center + frame.tangent * half_width;

        let rounding = tip_radius.map(|radius| round_tip(&start, &tip, &end, radius));

        Self {
            edge,
            base_center,
            start,
            tip,
            end,
            tip_radius,
            rounding,
        }
    }

    /// Appends the caret to `path`, which must already be positioned on the
    /// caret's edge before `start`. The path ends at `end`.
    pub(crate) fn append_to(&self, path: &mut Path) {
        path.line_to(self.start);
        match self.rounding {
            Some(rounding) => {
                path.line_to(rounding.start);
                path.quad_to(self.tip, rounding.end);
            }
            None => path.line_to(self.tip),
        }
        path.line_to(self.end);
    }
}

/// Backs off from `tip` by `radius` along both flanks.
///
/// A quadratic curve from `start` to `end` of the result with the tip as
/// its control point is tangent to both flanks.
fn round_tip(start: &Point2, tip: &Point2, end: &Point2, radius: f64) -> TipRounding {
    let angle_in = (tip.y - start.y).atan2(tip.x - start.x);
    let angle_out = (tip.y - end.y).atan2(tip.x - end.x);

    TipRounding {
        start: Point2::new(
            tip.x - radius * angle_in.cos(),
            tip.y - radius * angle_in.sin(),
        ),
        end: Point2::new(
            tip.x - radius * angle_out.cos(),
            tip.y - radius * angle_out.sin(),
        ),
    }
}

/// Resolves the caret's base center on its edge of `rect`.
///
/// Normalized positions are clamped to the edge; inset positions are not.
#[must_use]
pub fn resolve_base_center(rect: &Rect, config: &ShapeConfig) -> Point2 {
    let edge = config.edge();
    let (min, max) = edge.span(rect);
    let position = config.caret_position();

    let along = match config.caret_position_type() {
        CaretPositionType::Normalized => min + (max - min) * position.clamp(0.0, 1.0),
        CaretPositionType::InsetFromStart => min + position,
        CaretPositionType::InsetFromEnd => max - position,
    };

    edge.point_at(rect, along)
}

/// Returns `true` if `base_center` is at least `safe_distance` away from
/// both ends of its edge. Boundaries are inclusive.
#[must_use]
pub fn is_clear_of_corners(
    rect: &Rect,
    edge: CaretEdge,
    base_center: &Point2,
    safe_distance: f64,
) -> bool {
    let (min, max) = edge.span(rect);
    let along = edge.coordinate_of(base_center);
    along >= min + safe_distance && along <= max - safe_distance
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-9;

    fn rect() -> Rect {
        Rect::new(0.0, 0.0, 300.0, 150.0)
    }

    fn assert_point(actual: &Point2, x: f64, y: f64) {
        assert_abs_diff_eq!(actual.x, x, epsilon = TOL);
        assert_abs_diff_eq!(actual.y, y, epsilon = TOL);
    }

    #[test]
    fn base_center_normalized_top() {
        let c = ShapeConfig::normalized(16.0, 24.0, 6.0, 0.5, CaretEdge::Top);
        assert_point(&resolve_base_center(&rect(), &c), 150.0, 0.0);
    }

    #[test]
    fn base_center_normalized_is_clamped() {
        let over = ShapeConfig::normalized(16.0, 24.0, 6.0, 1.5, CaretEdge::Right);
        let under = ShapeConfig::normalized(16.0, 24.0, 6.0, -0.3, CaretEdge::Right);
        assert_point(&resolve_base_center(&rect(), &over), 300.0, 150.0);
        assert_point(&resolve_base_center(&rect(), &under), 300.0, 0.0);
    }

    #[test]
    fn base_center_insets_are_measured_from_axis_ends() {
        let start = ShapeConfig::inset_from_start(16.0, 24.0, 6.0, 50.0, CaretEdge::Bottom);
        let end = ShapeConfig::inset_from_end(16.0, 24.0, 6.0, 50.0, CaretEdge::Bottom);
        let left = ShapeConfig::inset_from_end(16.0, 24.0, 6.0, 50.0, CaretEdge::Left);
        assert_point(&resolve_base_center(&rect(), &start), 50.0, 150.0);
        assert_point(&resolve_base_center(&rect(), &end), 250.0, 150.0);
        assert_point(&resolve_base_center(&rect(), &left), 0.0, 100.0);
    }

    #[test]
    fn inset_positions_are_not_clamped() {
        let c = ShapeConfig::inset_from_start(16.0, 24.0, 6.0, 400.0, CaretEdge::Top);
        assert_point(&resolve_base_center(&rect(), &c), 400.0, 0.0);
    }

    #[test]
    fn corner_clearance_is_inclusive() {
        let r = rect();
        let at = |x: f64| Point2::new(x, 0.0);
        assert!(is_clear_of_corners(&r, CaretEdge::Top, &at(24.0), 24.0));
        assert!(is_clear_of_corners(&r, CaretEdge::Top, &at(276.0), 24.0));
        assert!(!is_clear_of_corners(&r, CaretEdge::Top, &at(23.9), 24.0));
        assert!(!is_clear_of_corners(&r, CaretEdge::Top, &at(276.1), 24.0));
        assert!(is_clear_of_corners(&r, CaretEdge::Left, &Point2::new(0.0, 100.0), 24.0));
        assert!(!is_clear_of_corners(&r, CaretEdge::Left, &Point2::new(0.0, 130.0), 24.0));
    }

    #[test]
    fn triangle_points_per_edge() {
        let c = Point2::new(10.0, 20.0);
        let top = CaretGeometry::new(CaretEdge::Top, c, 8.0, 5.0, None);
        assert_point(&top.start, 6.0, 20.0);
        assert_point(&top.tip, 10.0, 15.0);
        assert_point(&top.end, 14.0, 20.0);

        let right = CaretGeometry::new(CaretEdge::Right, c, 8.0, 5.0, None);
        assert_point(&right.start, 10.0, 16.0);
        assert_point(&right.tip, 15.0, 20.0);
        assert_point(&right.end, 10.0, 24.0);

        let bottom = CaretGeometry::new(CaretEdge::Bottom, c, 8.0, 5.0, None);
        assert_point(&bottom.start, 14.0, 20.0);
        assert_point(&bottom.tip, 10.0, 25.0);
        assert_point(&bottom.end, 6.0, 20.0);

        let left = CaretGeometry::new(CaretEdge::Left, c, 8.0, 5.0, None);
        assert_point(&left.start, 10.0, 24.0);
        assert_point(&left.tip, 5.0, 20.0);
        assert_point(&left.end, 10.0, 16.0);
    }

    #[test]
    fn sharp_tip_has_no_rounding() {
        let g = CaretGeometry::new(CaretEdge::Top, Point2::new(150.0, 0.0), 24.0, 24.0, None);
        assert!(g.rounding.is_none());
        assert!(g.tip_radius.is_none());
    }

    #[test]
    fn rounding_points_sit_on_flanks_at_tip_radius() {
        let g = CaretGeometry::new(CaretEdge::Top, Point2::new(150.0, 0.0), 24.0, 24.0, Some(6.0));
        let r = g.rounding.unwrap();
        assert_abs_diff_eq!((g.tip - r.start).norm(), 6.0, epsilon = TOL);
        assert_abs_diff_eq!((g.tip - r.end).norm(), 6.0, epsilon = TOL);

        // Collinear with their flanks.
        let flank_in = g.tip - g.start;
        let flank_out = g.tip - g.end;
        assert_abs_diff_eq!(flank_in.perp(&(r.start - g.start)), 0.0, epsilon = TOL);
        assert_abs_diff_eq!(flank_out.perp(&(r.end - g.end)), 0.0, epsilon = TOL);

        // Symmetric about the caret axis.
        assert_abs_diff_eq!(r.start.x + r.end.x, 300.0, epsilon = TOL);
        assert_abs_diff_eq!(r.start.y, r.end.y, epsilon = TOL);
    }

    #[test]
    fn non_positive_tip_radius_still_rounds() {
        // A negative radius backs off past the tip, onto the flank extensions.
        let base = Point2::new(150.0, 0.0);
        let g = CaretGeometry::new(CaretEdge::Top, base, -8.0, 24.0, Some(-2.0));
        let r = g.rounding.unwrap();
        let along_in = (g.tip - g.start).normalize();
        let along_out = (g.tip - g.end).normalize();
        assert_abs_diff_eq!((r.start - g.tip).dot(&along_in), 2.0, epsilon = TOL);
        assert_abs_diff_eq!((r.end - g.tip).dot(&along_out), 2.0, epsilon = TOL);

        let flat = CaretGeometry::new(CaretEdge::Top, base, 0.0, 24.0, Some(0.0));
        let r = flat.rounding.unwrap();
        assert_point(&r.start, 150.0, -24.0);
        assert_point(&r.end, 150.0, -24.0);
    }

    #[test]
    fn append_emits_curve_for_rounded_tip() {
        let g = CaretGeometry::new(CaretEdge::Top, Point2::new(150.0, 0.0), 24.0, 24.0, Some(6.0));
        let mut path = Path::new();
        path.move_to(Point2::new(16.0, 0.0));
        g.append_to(&mut path);
        assert_eq!(path.len(), 5);
        assert_eq!(path.end_point(), Some(g.end));
    }

    #[test]
    fn outcome_accessors() {
        let g = CaretGeometry::new(CaretEdge::Top, Point2::new(150.0, 0.0), 24.0, 24.0, Some(6.0));
        let drawn = CaretOutcome::Drawn(g);
        assert!(drawn.is_honored());
        assert_eq!(drawn.geometry(), Some(&g));

        let suppressed = CaretOutcome::Suppressed {
            edge: CaretEdge::Top,
            base_center: Point2::new(10.0, 0.0),
        };
        assert!(!suppressed.is_honored());
        assert!(suppressed.geometry().is_none());
        assert_eq!(suppressed.base_center(), Point2::new(10.0, 0.0));
    }
}
