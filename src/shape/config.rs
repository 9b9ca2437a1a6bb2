use crate::error::{GeometryError, Result};
use crate::geometry::CaretEdge;
use crate::math::Angle;

/// Multiplier applied to the corner radius to obtain the minimum distance
/// between a caret's base center and either end of its edge.
pub const SAFE_DISTANCE_FACTOR: f64 = 1.5;

/// How [`ShapeConfig::caret_position`] is interpreted along the edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CaretPositionType {
    /// Fraction of the edge length, clamped to `[0, 1]`.
    #[default]
    Normalized,
    /// Absolute distance from the minimum end of the edge (left or top).
    InsetFromStart,
    /// Absolute distance from the maximum end of the edge (right or bottom).
    InsetFromEnd,
}

/// Parameters of a speech bubble outline.
///
/// Built once through one of the named constructors and evaluated against
/// any number of rectangles. Inset positions are not clamped, so a caret may
/// land outside its edge (and will then be suppressed).
///
/// ```
/// use bubble_path::{CaretEdge, Rect, Shape, ShapeConfig};
///
/// let bubble = ShapeConfig::normalized(16.0, 24.0, 6.0, 0.5, CaretEdge::Top);
/// let path = bubble.path(&Rect::new(0.0, 0.0, 300.0, 150.0));
/// assert!(path.is_closed());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeConfig {
    corner_radius: f64,
    caret_width: f64,
    caret_height: f64,
    caret_corner_radius: f64,
    caret_position: f64,
    caret_position_type: CaretPositionType,
    edge: CaretEdge,
    caret_angle: Angle,
    inset_amount: f64,
}

impl Default for ShapeConfig {
    fn default() -> Self {
        Self::normalized(16.0, 24.0, 6.0, 0.5, CaretEdge::Top)
    }
}

impl ShapeConfig {
    fn from_parts(
        corner_radius: f64,
        caret_width: f64,
        caret_height: f64,
        caret_corner_radius: f64,
        caret_position: f64,
        caret_position_type: CaretPositionType,
        edge: CaretEdge,
    ) -> Self {
        Self {
            corner_radius,
            caret_width,
            caret_height,
            caret_corner_radius,
            caret_position,
            caret_position_type,
            edge,
            caret_angle: Angle::ZERO,
            inset_amount: 0.0,
        }
    }

    /// Square caret placed at a fraction of the edge length.
    #[must_use]
    pub fn normalized(
        corner_radius: f64,
        caret_size: f64,
        caret_corner_radius: f64,
        position: f64,
        edge: CaretEdge,
    ) -> Self {
        Self::normalized_rect(
            corner_radius,
            caret_size,
            caret_size,
            caret_corner_radius,
            position,
            edge,
        )
    }

    /// Caret with independent width and height placed at a fraction of the
    /// edge length.
    #[must_use]
    pub fn normalized_rect(
        corner_radius: f64,
        caret_width: f64,
        caret_height: f64,
        caret_corner_radius: f64,
        position: f64,
        edge: CaretEdge,
    ) -> Self {
        Self::from_parts(
            corner_radius,
            caret_width,
            caret_height,
            caret_corner_radius,
            position,
            CaretPositionType::Normalized,
            edge,
        )
    }

    /// Caret with independent width and height placed `inset` units from
    /// the left (horizontal edges) or top (vertical edges).
    #[must_use]
    pub fn inset_from_start_rect(
        corner_radius: f64,
        caret_width: f64,
        caret_height: f64,
        caret_corner_radius: f64,
        inset: f64,
        edge: CaretEdge,
    ) -> Self {
        Self::from_parts(
            corner_radius,
            caret_width,
            caret_height,
            caret_corner_radius,
            inset,
            CaretPositionType::InsetFromStart,
            edge,
        )
    }

    /// Square caret placed `inset` units from the left or top.
    #[must_use]
    pub fn inset_from_start(
        corner_radius: f64,
        caret_size: f64,
        caret_corner_radius: f64,
        inset: f64,
        edge: CaretEdge,
    ) -> Self {
        Self::inset_from_start_rect(
            corner_radius,
            caret_size,
            caret_size,
            caret_corner_radius,
            inset,
            edge,
        )
    }

    /// Caret with independent width and height placed `inset` units from
    /// the right (horizontal edges) or bottom (vertical edges).
    #[must_use]
    pub fn inset_from_end_rect(
        corner_radius: f64,
        caret_width: f64,
        caret_height: f64,
        caret_corner_radius: f64,
        inset: f64,
        edge: CaretEdge,
    ) -> Self {
        Self::from_parts(
            corner_radius,
            caret_width,
            caret_height,
            caret_corner_radius,
            inset,
            CaretPositionType::InsetFromEnd,
            edge,
        )
    }

    /// Square caret placed `inset` units from the right or bottom.
    #[must_use]
    pub fn inset_from_end(
        corner_radius: f64,
        caret_size: f64,
        caret_corner_radius: f64,
        inset: f64,
        edge: CaretEdge,
    ) -> Self {
        Self::inset_from_end_rect(
            corner_radius,
            caret_size,
            caret_size,
            caret_corner_radius,
            inset,
            edge,
        )
    }

    /// Returns a copy with the caret angle set.
    ///
    /// The angle is stored for interface compatibility only; it does not
    /// affect the generated outline.
    #[must_use]
    pub fn with_caret_angle(self, caret_angle: Angle) -> Self {
        Self {
            caret_angle,
            ..self
        }
    }

    /// Returns a copy whose outline is shrunk by exactly `inset_amount` on
    /// every side.
    #[must_use]
    pub fn with_inset(self, inset_amount: f64) -> Self {
        Self {
            inset_amount,
            ..self
        }
    }

    #[must_use]
    pub fn corner_radius(&self) -> f64 {
        self.corner_radius
    }

    #[must_use]
    pub fn caret_width(&self) -> f64 {
        self.caret_width
    }

    #[must_use]
    pub fn caret_height(&self) -> f64 {
        self.caret_height
    }

    #[must_use]
    pub fn caret_corner_radius(&self) -> f64 {
        self.caret_corner_radius
    }

    #[must_use]
    pub fn caret_position(&self) -> f64 {
        self.caret_position
    }

    #[must_use]
    pub fn caret_position_type(&self) -> CaretPositionType {
        self.caret_position_type
    }

    #[must_use]
    pub fn edge(&self) -> CaretEdge {
        self.edge
    }

    /// Returns the caret angle. Currently has no geometric effect.
    #[must_use]
    pub fn caret_angle(&self) -> Angle {
        self.caret_angle
    }

    #[must_use]
    pub fn inset_amount(&self) -> f64 {
        self.inset_amount
    }

    /// Tip radius actually used: never more than a quarter of the caret's
    /// width or height, so the rounding stays clear of the caret base.
    #[must_use]
    pub fn effective_caret_corner_radius(&self) -> f64 {
        self.caret_corner_radius
            .min(self.caret_width / 4.0)
            .min(self.caret_height / 4.0)
    }

    /// Corner radius of the inset outline, floored at zero.
    #[must_use]
    pub fn effective_corner_radius(&self) -> f64 {
        (self.corner_radius - self.inset_amount).max(0.0)
    }

    /// Minimum distance between the caret's base center and either end of
    /// its edge. Based on the corner radius before insetting.
    #[must_use]
    pub fn safe_distance(&self) -> f64 {
        self.corner_radius * SAFE_DISTANCE_FACTOR
    }

    /// Checks that every parameter is finite and geometrically meaningful.
    ///
    /// The outline builder never calls this; it accepts any input and
    /// produces whatever the arithmetic yields.
    ///
    /// # Errors
    ///
    /// - `GeometryError::NonFinite` if any parameter is NaN or infinite
    /// - `GeometryError::ParameterOutOfRange` if a radius is negative or a
    ///   caret dimension is not positive
    pub fn validate(&self) -> Result<()> {
        let values = [
            ("corner_radius", self.corner_radius),
            ("caret_width", self.caret_width),
            ("caret_height", self.caret_height),
            ("caret_corner_radius", self.caret_corner_radius),
            ("caret_position", self.caret_position),
            ("caret_angle", self.caret_angle.as_radians()),
            ("inset_amount", self.inset_amount),
        ];
        if let Some(&(parameter, value)) = values.iter().find(|(_, v)| !v.is_finite()) {
            return Err(GeometryError::NonFinite { parameter, value }.into());
        }

        let non_negative = [
            ("corner_radius", self.corner_radius),
            ("caret_corner_radius", self.caret_corner_radius),
        ];
        for (parameter, value) in non_negative {
            if value < 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: 0.0,
                    max: f64::INFINITY,
                }
                .into());
            }
        }

        let positive = [
            ("caret_width", self.caret_width),
            ("caret_height", self.caret_height),
        ];
        for (parameter, value) in positive {
            if value <= 0.0 {
                return Err(GeometryError::ParameterOutOfRange {
                    parameter,
                    value,
                    min: f64::MIN_POSITIVE,
                    max: f64::INFINITY,
                }
                .into());
            }
        }

        Ok(())
    }
}
