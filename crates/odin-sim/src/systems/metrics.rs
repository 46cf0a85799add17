//! Metrics deriver: maps the state store to a `LiveMetrics` snapshot.
//!
//! This system is read-only. It never modifies the state, and the same state
//! always yields the same metrics.

use odin_core::constants::{
    EARTH_MOON_DISTANCE_KM, FUEL_MASS_PER_DELTA_V_PENALTY, MAX_RADIATION_EXPOSURE,
};
use odin_core::enums::{HazardLevel, SystemsStatus};
use odin_core::hazard::Hazard;
use odin_core::state::{LiveMetrics, SimulationState};

/// Combined effect of the active hazard set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HazardAssessment {
    /// Product of per-hazard radiation multipliers.
    pub radiation_multiplier: f64,
    /// Sum of per-hazard delta-V penalties (m/s).
    pub delta_v_penalty: f64,
    pub systems_status: SystemsStatus,
    pub hazard_level: HazardLevel,
}

impl Default for HazardAssessment {
    fn default() -> Self {
        Self {
            radiation_multiplier: 1.0,
            delta_v_penalty: 0.0,
            systems_status: SystemsStatus::Green,
            hazard_level: HazardLevel::Nominal,
        }
    }
}

/// Fold the active hazards into one assessment.
///
/// Classifications only move up: each hazard raises status and level to at least its own
/// floor, so the result does not depend on hazard order.
pub fn assess_hazards(hazards: &[Hazard]) -> HazardAssessment {
    hazards
        .iter()
        .fold(HazardAssessment::default(), |acc, hazard| HazardAssessment {
            radiation_multiplier: acc.radiation_multiplier * hazard.severity.radiation_multiplier(),
            delta_v_penalty: acc.delta_v_penalty + hazard.severity.delta_v_penalty(),
            systems_status: acc.systems_status.max(hazard.severity.systems_floor()),
            hazard_level: acc.hazard_level.max(hazard.severity.hazard_floor()),
        })
}

/// Build the live metrics for the current state.
pub fn derive(state: &SimulationState) -> LiveMetrics {
    let trajectory = &state.trajectory;
    let assessment = assess_hazards(&state.active_hazards);
    let progress = (state.current_time / trajectory.travel_time).min(1.0);

    LiveMetrics {
        delta_v: trajectory.delta_v + assessment.delta_v_penalty,
        travel_time: trajectory.travel_time,
        radiation_exposure: (trajectory.radiation_exposure * assessment.radiation_multiplier)
            .min(MAX_RADIATION_EXPOSURE),
        fuel_consumption: trajectory.fuel_consumption
            + assessment.delta_v_penalty * FUEL_MASS_PER_DELTA_V_PENALTY,
        distance_to_target: EARTH_MOON_DISTANCE_KM * (1.0 - progress),
        current_velocity: state.current_velocity,
        systems_status: assessment.systems_status,
        hazard_level: assessment.hazard_level,
    }
}
