//! Crew consumables derived from mission time and hazard load. Read-only.

use odin_core::constants::*;
use odin_core::state::{CrewResources, ResourceReading, SimulationState};

/// Consumable levels for the current state.
///
/// Usage is normalised against the baseline mission length, not the active trajectory,
/// so longer profiles run consumables lower.
pub fn derive(state: &SimulationState) -> CrewResources {
    let progress = state.current_time / CREW_BASELINE_HOURS;
    let rate = 1.0 + state.active_hazards.len() as f64 * CREW_HAZARD_RATE;
    let used = |per_mission: f64| progress * per_mission * rate;

    CrewResources {
        oxygen: ResourceReading::new((100.0 - used(OXYGEN_USE_PER_MISSION)).max(0.0)),
        water: ResourceReading::new((100.0 - used(WATER_USE_PER_MISSION)).max(0.0)),
        food: ResourceReading::new((100.0 - used(FOOD_USE_PER_MISSION)).max(0.0)),
        power: ResourceReading::new((100.0 - used(POWER_USE_PER_MISSION)).max(POWER_FLOOR)),
    }
}
