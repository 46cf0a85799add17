//! Engine configuration.

use serde::{Deserialize, Serialize};

use odin_core::constants::DEFAULT_TIME_SCALE;
use odin_core::types::TimeScale;

/// Configuration for constructing a new engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Initial simulated hours per real second. Clamped like `set_time_scale`.
    pub time_scale: f64,
}

impl SimConfig {
    pub fn time_scale(&self) -> TimeScale {
        TimeScale::new(self.time_scale)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            time_scale: DEFAULT_TIME_SCALE,
        }
    }
}
