//! State snapshots: what the engine publishes to every observer.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::MissionLogEntry;
use crate::hazard::Hazard;
use crate::trajectory::Trajectory;
use crate::types::{FuelLevel, Position, TimeScale};

/// The authoritative mission state. One per engine.
///
/// Readers only ever receive borrows or clones; changing a clone has no effect on the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationState {
    pub is_running: bool,
    pub is_paused: bool,
    /// Elapsed mission hours, within `[0, trajectory.travel_time]`.
    pub current_time: f64,
    pub time_scale: TimeScale,
    /// Interpolated along the active trajectory's waypoints.
    pub current_position: Position,
    pub current_velocity: f64,
    pub fuel_remaining: FuelLevel,
    /// Insertion order.
    pub active_hazards: Vec<Hazard>,
    pub current_phase: MissionPhase,
    pub trajectory: Trajectory,
}

impl SimulationState {
    /// Fresh pre-launch state on the given trajectory.
    pub fn new(trajectory: Trajectory, time_scale: TimeScale) -> Self {
        Self {
            is_running: false,
            is_paused: false,
            current_time: 0.0,
            time_scale,
            current_position: Position::default(),
            current_velocity: 0.0,
            fuel_remaining: FuelLevel::FULL,
            active_hazards: Vec::new(),
            current_phase: MissionPhase::PreLaunch,
            trajectory,
        }
    }

    /// `current_time / travel_time`, clamped to `[0, 1]`.
    pub fn progress(&self) -> f64 {
        self.trajectory.progress_at(self.current_time)
    }

    /// Running and not paused: the only condition under which ticks advance time.
    pub fn is_advancing(&self) -> bool {
        self.is_running && !self.is_paused
    }
}

/// Derived performance and risk figures. Never stored; recomputed on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveMetrics {
    /// Nominal delta-V plus hazard penalties (m/s).
    pub delta_v: f64,
    /// Hours, from the active trajectory.
    pub travel_time: f64,
    /// Percent, capped at 100.
    pub radiation_exposure: f64,
    /// Nominal propellant mass plus hazard penalty (kg).
    pub fuel_consumption: f64,
    /// km to the lunar reference point.
    pub distance_to_target: f64,
    pub current_velocity: f64,
    pub systems_status: SystemsStatus,
    pub hazard_level: HazardLevel,
}

/// One crew consumable reading.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResourceReading {
    /// Percent remaining.
    pub level: f64,
    pub status: ResourceStatus,
}

impl ResourceReading {
    pub fn new(level: f64) -> Self {
        Self {
            level,
            status: ResourceStatus::from_level(level),
        }
    }
}

/// Crew consumables derived from mission time and hazard load.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CrewResources {
    pub oxygen: ResourceReading,
    pub water: ResourceReading,
    pub food: ResourceReading,
    pub power: ResourceReading,
}

impl CrewResources {
    /// Consumables that have dropped into the critical band.
    pub fn critical(&self) -> Vec<&'static str> {
        [
            ("oxygen", self.oxygen),
            ("water", self.water),
            ("food", self.food),
            ("power", self.power),
        ]
        .into_iter()
        .filter(|(_, r)| r.status == ResourceStatus::Critical)
        .map(|(name, _)| name)
        .collect()
    }
}

/// A decision-support advisory for the flight controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    pub action: Option<String>,
    /// Catalog id of the trajectory this advisory proposes switching to, if any.
    pub suggested_trajectory: Option<String>,
    /// 0 - 100.
    pub confidence: u8,
}

/// Everything a display needs for one frame, assembled by the host after a notification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionSnapshot {
    pub state: SimulationState,
    pub metrics: LiveMetrics,
    pub crew: CrewResources,
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub log: Vec<MissionLogEntry>,
}
