//! Propellant decay with mission progress and hazard load.

use odin_core::constants::{HAZARD_FUEL_FRACTION, NOMINAL_FUEL_FRACTION};
use odin_core::state::SimulationState;

/// Lower `fuel_remaining` to the level implied by progress and active hazards.
///
/// The level only ever goes down here; removing a hazard or switching to a longer
/// trajectory does not give fuel back. Only a reset refills the tank.
pub fn run(state: &mut SimulationState) {
    let target = target_level(state.progress(), state.active_hazards.len());
    state.fuel_remaining.drain_to(target);
}

/// Fuel percentage implied by a progress fraction and hazard count, floored at 0.
pub fn target_level(progress: f64, hazard_count: usize) -> f64 {
    let burned = progress * NOMINAL_FUEL_FRACTION + hazard_count as f64 * HAZARD_FUEL_FRACTION;
    (100.0 - burned * 100.0).max(0.0)
}
