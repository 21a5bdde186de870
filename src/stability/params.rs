use crate::types::Point2D;
use serde::{Deserialize, Serialize};

/// Axis-aligned region of trusted intersections, in pixels (inclusive).
///
/// Defaults target a 1280x720 sensor with the region of interest centred
/// slightly below the image centre.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpatialRegion {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for SpatialRegion {
    fn default() -> Self {
        Self {
            x_min: 540.0,
            x_max: 740.0,
            y_min: 400.0,
            y_max: 600.0,
        }
    }
}

impl SpatialRegion {
    /// Non-finite coordinates are never contained.
    #[inline]
    pub fn contains(&self, p: &Point2D) -> bool {
        (self.x_min..=self.x_max).contains(&p.x) && (self.y_min..=self.y_max).contains(&p.y)
    }

    pub fn validate(&self) -> Result<(), String> {
        let finite = [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite());
        if !finite {
            return Err("spatial region bounds must be finite".to_string());
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(format!(
                "spatial region is empty: x=[{}, {}] y=[{}, {}]",
                self.x_min, self.x_max, self.y_min, self.y_max
            ));
        }
        Ok(())
    }
}

/// Parameters of the stability filter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StabilityParams {
    pub region: SpatialRegion,
    /// Maximum number of accepted points retained in the history window.
    pub capacity: usize,
    /// Upper bound on the per-axis population standard deviation (pixels).
    pub desired_std_dev: f64,
}

impl Default for StabilityParams {
    fn default() -> Self {
        Self {
            region: SpatialRegion::default(),
            capacity: 100,
            desired_std_dev: 1000.0,
        }
    }
}

impl StabilityParams {
    pub fn validate(&self) -> Result<(), String> {
        self.region.validate()?;
        if self.capacity == 0 {
            return Err("history capacity must be at least 1".to_string());
        }
        if self.desired_std_dev.is_nan() || self.desired_std_dev < 0.0 {
            return Err(format!(
                "desired_std_dev must be non-negative, got {}",
                self.desired_std_dev
            ));
        }
        Ok(())
    }
}
