//! Mission log entries recorded by the host in response to control actions.

use serde::{Deserialize, Serialize};

use crate::enums::{LogPriority, LogSource};

/// One line of the mission log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionLogEntry {
    pub id: String,
    /// Mission elapsed time, `T+HH:MM:SS`.
    pub timestamp: String,
    pub source: LogSource,
    pub message: String,
    pub priority: LogPriority,
}

/// Format mission hours as `T+HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_mission_time(hours: f64) -> String {
    let total_secs = (hours.max(0.0) * 3600.0).round() as u64;
    let h = total_secs / 3600;
    let m = (total_secs % 3600) / 60;
    let s = total_secs % 60;
    format!("T+{h:02}:{m:02}:{s:02}")
}
