//! File I/O for recorded frames and JSON reports.
//!
//! - `load_frames`: read a recorded sequence of segment batches.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::types::LineSegment;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// On-disk frame recording: one array of segments per frame.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct FrameFile {
    pub frames: Vec<Vec<LineSegment>>,
}

pub fn load_frames(path: &Path) -> Result<Vec<Vec<LineSegment>>, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read frames {}: {e}", path.display()))?;
    let file: FrameFile = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse frames {}: {e}", path.display()))?;
    Ok(file.frames)
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
