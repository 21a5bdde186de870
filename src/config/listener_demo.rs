use super::params::ListenerConfig;
use super::resolve_path;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration of the `listener_demo` replay tool.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListenerDemoConfig {
    /// Frame file, see [`crate::io::load_frames`].
    pub frames: PathBuf,
    #[serde(default)]
    pub params: ListenerConfig,
    /// Rate at which frames are fed to the listener. `None` feeds them as
    /// fast as they are consumed.
    #[serde(default)]
    pub replay_hz: Option<f64>,
    pub output: DemoOutputConfig,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoOutputConfig {
    #[serde(default)]
    pub dir: PathBuf,
    pub result_json: PathBuf,
}

impl DemoOutputConfig {
    pub fn result_path(&self) -> PathBuf {
        resolve_path(&self.dir, &self.result_json)
    }
}

pub fn load_config(path: &Path) -> Result<ListenerDemoConfig, String> {
    let config: ListenerDemoConfig = super::load_json(path)?;
    if let Some(hz) = config.replay_hz {
        if !(hz.is_finite() && hz > 0.0) {
            return Err(format!(
                "replayHz must be positive in {}, got {hz}",
                path.display()
            ));
        }
    }
    Ok(config)
}
