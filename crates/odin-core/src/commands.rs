//! Control commands sent from a host to the simulation.
//!
//! Commands take effect immediately when applied; there is no tick-boundary queue.

use serde::{Deserialize, Serialize};

use crate::hazard::Hazard;
use crate::trajectory::Trajectory;

/// All possible control operations on a mission engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ControlCommand {
    // --- Lifecycle ---
    /// Begin stepping. No-op if already running.
    Start,
    /// Stop stepping until resumed.
    Pause,
    /// Continue stepping. No-op unless running.
    Resume,
    /// Restore pre-launch state, keeping trajectory and time scale.
    Reset,

    // --- Mission profile ---
    /// Swap the active trajectory.
    SetTrajectory { trajectory: Trajectory },
    /// Inject a hazard into the active set.
    AddHazard { hazard: Hazard },
    /// Remove every active hazard with this id.
    RemoveHazard { hazard_id: String },

    // --- Simulation control ---
    /// Set simulated hours per real second (clamped to 0.1 - 10).
    SetTimeScale { scale: f64 },
}
