//! Tunables for extrusion, walking and the orbit view, loadable from JSON.

use crate::explore::FirstPersonConfig;
use crate::extrusion::ExtrusionConfig;
use crate::io::MazeIoResult;
use crate::view::OrbitConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every section is optional; missing sections and fields keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeConfig {
    pub extrusion: ExtrusionConfig,
    pub first_person: FirstPersonConfig,
    pub orbit: OrbitConfig,
}

impl MazeConfig {
    pub fn from_json_str(text: &str) -> MazeIoResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> MazeIoResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn to_json_string(&self) -> MazeIoResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
