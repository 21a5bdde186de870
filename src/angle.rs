//! Angle utilities used by the intersection gates.

/// Converts a slope `dy/dx` to the signed line angle in degrees, in (-90, 90).
#[inline]
pub fn slope_angle_deg(slope: f64) -> f64 {
    slope.atan().to_degrees()
}

/// Symmetric open angular band `(min, max) ∪ (-max, -min)` in degrees.
///
/// Lines inside the band are neither too shallow (near horizontal) nor too
/// steep (near vertical). Bounds are exclusive on both sides.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AngleBand {
    pub min_deg: f64,
    pub max_deg: f64,
}

impl AngleBand {
    pub fn new(min_deg: f64, max_deg: f64) -> Self {
        Self { min_deg, max_deg }
    }

    #[inline]
    pub fn contains(&self, angle_deg: f64) -> bool {
        (angle_deg > self.min_deg && angle_deg < self.max_deg)
            || (angle_deg < -self.min_deg && angle_deg > -self.max_deg)
    }

    /// Band test applied directly to a slope.
    #[inline]
    pub fn contains_slope(&self, slope: f64) -> bool {
        self.contains(slope_angle_deg(slope))
    }
}
