use crate::angle::AngleBand;
use serde::{Deserialize, Serialize};

/// Gates applied to each segment pair before intersecting.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntersectionParams {
    /// Lower (exclusive) bound of the accepted line angle, degrees.
    pub min_angle_deg: f64,
    /// Upper (exclusive) bound of the accepted line angle, degrees.
    pub max_angle_deg: f64,
    /// Slopes closer than this are treated as parallel. `0.0` keeps the
    /// exact equality check.
    pub parallel_tolerance: f64,
}

impl Default for IntersectionParams {
    fn default() -> Self {
        Self {
            min_angle_deg: 10.0,
            max_angle_deg: 80.0,
            parallel_tolerance: 0.0,
        }
    }
}

impl IntersectionParams {
    pub fn angle_band(&self) -> AngleBand {
        AngleBand::new(self.min_angle_deg, self.max_angle_deg)
    }

    pub fn validate(&self) -> Result<(), String> {
        let in_range = |v: f64| (0.0..=90.0).contains(&v);
        if !in_range(self.min_angle_deg) || !in_range(self.max_angle_deg) {
            return Err(format!(
                "angle band must lie within [0, 90] degrees, got ({}, {})",
                self.min_angle_deg, self.max_angle_deg
            ));
        }
        if self.min_angle_deg >= self.max_angle_deg {
            return Err(format!(
                "min_angle_deg ({}) must be below max_angle_deg ({})",
                self.min_angle_deg, self.max_angle_deg
            ));
        }
        if !(self.parallel_tolerance.is_finite() && self.parallel_tolerance >= 0.0) {
            return Err(format!(
                "parallel_tolerance must be finite and non-negative, got {}",
                self.parallel_tolerance
            ));
        }
        Ok(())
    }
}
