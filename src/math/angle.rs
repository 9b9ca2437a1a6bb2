use std::f64::consts::PI;

/// A planar angle, stored in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f64,
}

impl Angle {
    /// The zero angle.
    pub const ZERO: Self = Self { radians: 0.0 };

    /// Creates an angle from radians.
    #[must_use]
    pub fn radians(radians: f64) -> Self {
        Self { radians }
    }

    /// Creates an angle from degrees.
    #[must_use]
    pub fn degrees(degrees: f64) -> Self {
        Self {
            radians: degrees * PI / 180.0,
        }
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn as_radians(&self) -> f64 {
        self.radians
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn as_degrees(&self) -> f64 {
        self.radians * 180.0 / PI
    }
}
