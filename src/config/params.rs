use crate::intersection::IntersectionParams;
use crate::listener::ListenerParams;
use crate::output::OutputParams;
use crate::stability::{SpatialRegion, StabilityParams};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct IntersectionConfig {
    pub min_angle_deg: Option<f64>,
    pub max_angle_deg: Option<f64>,
    pub parallel_tolerance: Option<f64>,
}

impl IntersectionConfig {
    pub fn resolve(&self) -> IntersectionParams {
        let mut params = IntersectionParams::default();
        if let Some(v) = self.min_angle_deg {
            params.min_angle_deg = v;
        }
        if let Some(v) = self.max_angle_deg {
            params.max_angle_deg = v;
        }
        if let Some(v) = self.parallel_tolerance {
            params.parallel_tolerance = v;
        }
        params
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RegionConfig {
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
    pub y_min: Option<f64>,
    pub y_max: Option<f64>,
}

impl RegionConfig {
    pub fn resolve(&self) -> SpatialRegion {
        let d = SpatialRegion::default();
        SpatialRegion {
            x_min: self.x_min.unwrap_or(d.x_min),
            x_max: self.x_max.unwrap_or(d.x_max),
            y_min: self.y_min.unwrap_or(d.y_min),
            y_max: self.y_max.unwrap_or(d.y_max),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct StabilityConfig {
    pub region: RegionConfig,
    /// History window capacity.
    pub capacity: Option<usize>,
    pub desired_std_dev: Option<f64>,
}

impl StabilityConfig {
    pub fn resolve(&self) -> StabilityParams {
        let d = StabilityParams::default();
        StabilityParams {
            region: self.region.resolve(),
            capacity: self.capacity.unwrap_or(d.capacity),
            desired_std_dev: self.desired_std_dev.unwrap_or(d.desired_std_dev),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    pub rate_hz: Option<f64>,
    pub initial_value: Option<f64>,
}

impl OutputConfig {
    pub fn resolve(&self) -> OutputParams {
        let d = OutputParams::default();
        OutputParams {
            rate_hz: self.rate_hz.unwrap_or(d.rate_hz),
            initial_value: self.initial_value.unwrap_or(d.initial_value),
        }
    }
}

/// Overrides for [`ListenerParams`].
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ListenerConfig {
    pub intersection: IntersectionConfig,
    pub stability: StabilityConfig,
    pub output: OutputConfig,
}

impl ListenerConfig {
    /// Overlays the configured values onto the defaults and validates them.
    pub fn resolve(&self) -> Result<ListenerParams, String> {
        let params = ListenerParams {
            intersection: self.intersection.resolve(),
            stability: self.stability.resolve(),
            output: self.output.resolve(),
        };
        params.validate()?;
        Ok(params)
    }
}

pub fn load_config(path: &Path) -> Result<ListenerConfig, String> {
    super::load_json(path)
}
