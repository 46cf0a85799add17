//! Mission clock advance, phase derivation and the terminal check.

use odin_core::enums::MissionPhase;
use odin_core::state::SimulationState;

/// Advance mission time by `delta_secs` of wall time at the active time scale.
/// Negative deltas are ignored so mission time never runs backwards.
pub fn advance(state: &mut SimulationState, delta_secs: f64) {
    if delta_secs > 0.0 {
        state.current_time += delta_secs * state.time_scale.get();
    }
}

/// Recompute the phase label from the unclamped progress fraction.
pub fn update_phase(state: &mut SimulationState) {
    let progress = state.current_time / state.trajectory.travel_time;
    state.current_phase = MissionPhase::from_progress(progress);
}

/// Clamp to arrival and mark the mission complete once travel time is reached.
/// Returns `true` on the tick the mission completes.
pub fn check_completion(state: &mut SimulationState) -> bool {
    if state.current_time < state.trajectory.travel_time {
        return false;
    }
    state.current_time = state.trajectory.travel_time;
    state.current_phase = MissionPhase::MissionComplete;
    true
}
