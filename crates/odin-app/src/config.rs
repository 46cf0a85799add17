//! Host configuration, loaded from a JSON file and overridden from the command line.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use odin_core::catalog::BASELINE_TRAJECTORY_ID;
use odin_core::constants::{DEFAULT_TIME_SCALE, TICK_RATE};
use odin_sim::config::SimConfig;

use crate::error::AppError;

/// Mission host settings. Missing fields fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog id of the trajectory the mission starts on.
    pub trajectory: String,
    /// Simulated hours per real second.
    pub time_scale: f64,
    /// Host frames per second.
    pub tick_rate: u32,
    /// Seed for the mission log's response selection.
    pub seed: u64,
    /// Catalog hazard ids injected before launch.
    pub hazards: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            trajectory: BASELINE_TRAJECTORY_ID.to_string(),
            time_scale: DEFAULT_TIME_SCALE,
            tick_rate: TICK_RATE,
            seed: 0,
            hazards: Vec::new(),
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path).map_err(|source| AppError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Wall time of one host frame. A zero tick rate is treated as 1 Hz.
    pub fn frame_duration(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_rate.max(1)))
    }

    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            time_scale: self.time_scale,
        }
    }
}
