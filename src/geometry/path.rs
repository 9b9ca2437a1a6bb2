use std::f64::consts::PI;
use std::fmt;

use crate::math::arc_2d::{
    arc_point_at, arc_subdivision_count, quad_point_at, quad_subdivision_count,
};
use crate::math::{points_coincide, Point2};

use super::Rect;

/// Tolerance used by [`Path::bounding_box`] when flattening curves.
const BOUNDS_TOLERANCE: f64 = 1e-3;

/// A single drawing operation of a [`Path`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts a new contour at the given point.
    MoveTo(Point2),
    /// Straight segment from the current point.
    LineTo(Point2),
    /// Circular arc around `center`, from `start_angle` through `sweep`
    /// radians. A positive sweep increases the angle, which is visually
    /// clockwise in the y-down frame. If the current point is not the arc's
    /// start point, a connecting line is implied.
    Arc {
        center: Point2,
        radius: f64,
        start_angle: f64,
        sweep: f64,
    },
    /// Quadratic Bézier curve from the current point.
    QuadTo { control: Point2, to: Point2 },
    /// Closes the current contour back to its starting point.
    Close,
}

impl PathCommand {
    /// Returns the point this command ends at, or `None` for [`PathCommand::Close`].
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        match *self {
            Self::MoveTo(p) | Self::LineTo(p) | Self::QuadTo { to: p, .. } => Some(p),
            Self::Arc {
                center,
                radius,
                start_angle,
                sweep,
            } => Some(arc_point_at(&center, radius, start_angle, sweep, 1.0)),
            Self::Close => None,
        }
    }
}

/// An ordered sequence of drawing commands.
///
/// Outlines produced by this crate consist of exactly one closed contour.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Creates an empty path.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the drawing commands in order.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns the number of commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the path has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn move_to(&mut self, point: Point2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Point2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn arc(&mut self, center: Point2, radius: f64, start_angle: f64, sweep: f64) {
        self.commands.push(PathCommand::Arc {
            center,
            radius,
            start_angle,
            sweep,
        });
    }

    pub fn quad_to(&mut self, control: Point2, to: Point2) {
        self.commands.push(PathCommand::QuadTo { control, to });
    }

    pub fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }

    /// Returns the first point of the path.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        self.commands.first().and_then(PathCommand::end_point)
    }

    /// Returns the end point of the last drawing command, ignoring a
    /// trailing [`PathCommand::Close`].
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// Returns `true` if the path ends with [`PathCommand::Close`] and its
    /// last drawn point coincides with its first.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        if !matches!(self.commands.last(), Some(PathCommand::Close)) {
            return false;
        }
        match (self.start_point(), self.end_point()) {
            (Some(start), Some(end)) => points_coincide(&start, &end),
            _ => false,
        }
    }

    /// Counts the commands matching `predicate`.
    #[must_use]
    pub fn count(&self, predicate: impl Fn(&PathCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// Approximates the path by a polyline.
    ///
    /// Arcs and quadratic curves are subdivided so that no chord deviates
    /// from the curve by more than `tolerance`, up to
    /// [`MAX_SUBDIVISIONS`](crate::math::arc_2d::MAX_SUBDIVISIONS) segments
    /// per curve. Consecutive duplicate points are dropped.
    #[must_use]
    pub fn flatten(&self, tolerance: f64) -> Vec<Point2> {
        let mut points: Vec<Point2> = Vec::with_capacity(self.commands.len() * 4);
        let mut contour_start: Option<Point2> = None;

        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    contour_start = Some(p);
                    push_distinct(&mut points, p);
                }
                PathCommand::LineTo(p) => push_distinct(&mut points, p),
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    push_distinct(
                        &mut points,
                        arc_point_at(&center, radius, start_angle, sweep, 0.0),
                    );
                    let n = arc_subdivision_count(radius.abs(), sweep.abs(), tolerance);
                    for j in 1..=n {
                        let t = f64::from(j) / f64::from(n);
                        push_distinct(
                            &mut points,
                            arc_point_at(&center, radius, start_angle, sweep, t),
                        );
                    }
                }
                PathCommand::QuadTo { control, to } => {
                    let from = points.last().copied().unwrap_or(control);
                    let n = quad_subdivision_count(&from, &control, &to, tolerance);
                    for j in 1..=n {
                        let t = f64::from(j) / f64::from(n);
                        push_distinct(&mut points, quad_point_at(&from, &control, &to, t));
                    }
                }
                PathCommand::Close => {
                    if let Some(start) = contour_start {
                        push_distinct(&mut points, start);
                    }
                }
            }
        }

        points
    }

    /// Computes the axis-aligned bounds of the flattened path.
    ///
    /// Returns `None` for an empty path.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let points = self.flatten(BOUNDS_TOLERANCE);
        let first = points.first()?;
        let seed = Rect {
            min: *first,
            max: *first,
        };
        Some(points.iter().fold(seed, |acc, p| acc.including(p)))
    }

    /// Serializes the path as SVG path data (`M`, `L`, `A`, `Q`, `Z`).
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        self.to_string()
    }
}

/// Appends `p` unless it coincides with the last point.
fn push_distinct(points: &mut Vec<Point2>, p: Point2) {
    if points.last().is_none_or(|last| !points_coincide(last, &p)) {
        points.push(p);
    }
}

/// SVG coordinate, snapped to 1e-9 so trigonometric noise does not leak
/// into the output.
struct Coord(f64);

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapped = (self.0 * 1e9).round() / 1e9;
        // Adding zero turns -0 into 0.
        write!(f, "{}", snapped + 0.0)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current: Option<Point2> = None;
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match *cmd {
                PathCommand::MoveTo(p) => write!(f, "M{} {}", Coord(p.x), Coord(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L{} {}", Coord(p.x), Coord(p.y))?,
                PathCommand::Arc {
                    center,
                    radius,
                    start_angle,
                    sweep,
                } => {
                    let from = arc_point_at(&center, radius, start_angle, sweep, 0.0);
                    if current.is_none_or(|c| !points_coincide(&c, &from)) {
                        write!(f, "L{} {} ", Coord(from.x), Coord(from.y))?;
                    }
                    let to = arc_point_at(&center, radius, start_angle, sweep, 1.0);
                    let large_arc = u8::from(sweep.abs() > PI);
                    let sweep_flag = u8::from(sweep > 0.0);
                    write!(
                        f,
                        "A{r} {r} 0 {large_arc} {sweep_flag} {} {}",
                        Coord(to.x),
                        Coord(to.y),
                        r = Coord(radius.abs())
                    )?;
                }
                PathCommand::QuadTo { control, to } => {
                    write!(
                        f,
                        "Q{} {} {} {}",
                        Coord(control.x),
                        Coord(control.y),
                        Coord(to.x),
                        Coord(to.y)
                    )?;
                }
                PathCommand::Close => f.write_str("Z")?,
            }
            if let Some(p) = cmd.end_point() {
                current = Some(p);
            }
        }
        Ok(())
    }
}
