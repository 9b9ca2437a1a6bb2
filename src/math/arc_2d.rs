//! 2D arc and quadratic curve utilities.
//!
//! Angles are measured from the +X axis toward +Y. In the y-down screen
//! frame a positive sweep therefore turns visually clockwise.

use std::f64::consts::PI;

use super::Point2;

/// Upper bound on the segments produced for a single curve, however small
/// the requested tolerance.
pub const MAX_SUBDIVISIONS: u32 = 4096;

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin(),
    )
}

/// Computes the number of line segments needed to approximate an arc
/// within the given tolerance.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // Sagitta: s = r * (1 - cos(θ/2)), so θ = 2 * acos(1 - s/r).
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle)
        .ceil()
        .min(f64::from(MAX_SUBDIVISIONS)) as u32;
    n.max(1)
}

/// Evaluates a quadratic Bézier curve at parameter `t` in `[0, 1]`.
#[must_use]
pub fn quad_point_at(from: &Point2, control: &Point2, to: &Point2, t: f64) -> Point2 {
    let mt = 1.0 - t;
    Point2::from(from.coords * (mt * mt) + control.coords * (2.0 * mt * t) + to.coords * (t * t))
}

/// Computes the number of line segments needed to approximate a quadratic
/// Bézier curve within the given tolerance.
///
/// With `n` uniform segments the chord error is bounded by
/// `|p0 - 2c + p1| / (4n²)`.
#[must_use]
pub fn quad_subdivision_count(from: &Point2, control: &Point2, to: &Point2, tolerance: f64) -> u32 {
    let dd = (from.coords - control.coords * 2.0 + to.coords).norm();
    if dd < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (dd / (4.0 * tolerance))
        .sqrt()
        .ceil()
        .min(f64::from(MAX_SUBDIVISIONS)) as u32;
    n.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn quarter_arc_endpoints() {
        // Top-left corner arc of a rounded rectangle: from π to 3π/2.
        let center = Point2::new(16.0, 16.0);
        let p0 = arc_point_at(&center, 16.0, PI, PI / 2.0, 0.0);
        let p1 = arc_point_at(&center, 16.0, PI, PI / 2.0, 1.0);
        assert_abs_diff_eq!(p0.x, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(p0.y, 16.0, epsilon = TOL);
        assert_abs_diff_eq!(p1.x, 16.0, epsilon = TOL);
        assert_abs_diff_eq!(p1.y, 0.0, epsilon = TOL);
    }

    #[test]
    fn arc_subdivision_count_large_tolerance() {
        let n = arc_subdivision_count(1.0, PI, 10.0);
        assert_eq!(n, 1);
    }

    #[test]
    fn arc_subdivision_count_small_tolerance() {
        let n = arc_subdivision_count(1.0, PI, 0.001);
        assert!(n > 10, "expected many subdivisions, got {n}");
    }

    #[test]
    fn subdivision_counts_are_capped_for_tiny_tolerance() {
        assert_eq!(arc_subdivision_count(16.0, PI / 2.0, 1e-300), MAX_SUBDIVISIONS);
        let n = quad_subdivision_count(
            &Point2::new(0.0, 0.0),
            &Point2::new(5.0, 10.0),
            &Point2::new(10.0, 0.0),
            1e-300,
        );
        assert_eq!(n, MAX_SUBDIVISIONS);
    }

    #[test]
    fn quad_midpoint() {
        let p = quad_point_at(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 2.0),
            &Point2::new(2.0, 0.0),
            0.5,
        );
        assert_abs_diff_eq!(p.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(p.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn quad_subdivision_count_straight_is_one() {
        let n = quad_subdivision_count(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(2.0, 0.0),
            0.01,
        );
        assert_eq!(n, 1);
    }

    #[test]
    fn quad_subdivision_count_meets_tolerance() {
        let from = Point2::new(0.0, 0.0);
        let control = Point2::new(5.0, 10.0);
        let to = Point2::new(10.0, 0.0);
        let tolerance = 0.05;
        let n = quad_subdivision_count(&from, &control, &to, tolerance);
        let dd = (from.coords - control.coords * 2.0 + to.coords).norm();
        assert!(dd / (4.0 * f64::from(n * n)) <= tolerance);
    }
}
