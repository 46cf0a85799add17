//! Decision support: advisories derived from the current state and metrics.
//!
//! Pure functions over plain data, no engine dependency. The host decides whether to
//! act on an advisory; nothing here mutates the mission.

use odin_core::catalog::{BASELINE_TRAJECTORY_ID, FUEL_EFFICIENT_ID, SAFE_ROUTE_ALPHA_ID};
use odin_core::enums::{HazardLevel, RecommendationKind, RecommendationPriority};
use odin_core::state::{LiveMetrics, Recommendation, SimulationState};

const LOW_FUEL_PERCENT: f64 = 60.0;
const HIGH_RADIATION_PERCENT: f64 = 80.0;
const LONG_MISSION_ELAPSED_HOURS: f64 = 24.0;
const LONG_MISSION_TRAVEL_HOURS: f64 = 85.0;
const HIGH_DELTA_V: f64 = 3500.0;

/// Advisories for the current frame, most urgent concerns first.
/// Nothing is recommended unless the mission is running.
pub fn recommend(state: &SimulationState, metrics: &LiveMetrics) -> Vec<Recommendation> {
    if !state.is_running {
        return Vec::new();
    }

    let on = |id: &str| state.trajectory.id == id;
    let mut out = Vec::new();

    if metrics.hazard_level == HazardLevel::Critical {
        out.push(advise(
            RecommendationKind::Hazard,
            RecommendationPriority::Critical,
            "Critical Hazard Response",
            "Multiple hazards detected. Immediate trajectory change recommended.",
            Some("Switch to Safe Route Alpha"),
            Some(SAFE_ROUTE_ALPHA_ID),
            95,
        ));
    } else if metrics.hazard_level == HazardLevel::Warning && on(BASELINE_TRAJECTORY_ID) {
        out.push(advise(
            RecommendationKind::Trajectory,
            RecommendationPriority::Medium,
            "Safety Optimization",
            "Current trajectory has elevated risk. Consider safer alternative.",
            Some("Switch to Safe Route Alpha"),
            Some(SAFE_ROUTE_ALPHA_ID),
            78,
        ));
    }

    if state.fuel_remaining.percent() < LOW_FUEL_PERCENT && !on(FUEL_EFFICIENT_ID) {
        out.push(advise(
            RecommendationKind::Resource,
            RecommendationPriority::High,
            "Fuel Conservation",
            "Fuel consumption higher than optimal. Switch to fuel-efficient trajectory.",
            Some("Switch to Fuel Efficient Route"),
            Some(FUEL_EFFICIENT_ID),
            85,
        ));
    }

    if metrics.radiation_exposure > HIGH_RADIATION_PERCENT {
        out.push(advise(
            RecommendationKind::Hazard,
            RecommendationPriority::High,
            "Radiation Mitigation",
            "Radiation exposure approaching dangerous levels. Route adjustment advised.",
            Some("Implement radiation shielding protocol"),
            None,
            90,
        ));
    }

    if state.current_time > LONG_MISSION_ELAPSED_HOURS
        && metrics.travel_time > LONG_MISSION_TRAVEL_HOURS
    {
        out.push(advise(
            RecommendationKind::Timing,
            RecommendationPriority::Medium,
            "Mission Duration Optimization",
            "Extended mission duration may impact crew resources.",
            Some("Consider faster trajectory option"),
            None,
            72,
        ));
    }

    if metrics.delta_v > HIGH_DELTA_V && !on(FUEL_EFFICIENT_ID) {
        out.push(advise(
            RecommendationKind::Trajectory,
            RecommendationPriority::Low,
            "Delta-V Optimization",
            "Current trajectory requires high delta-V. More efficient options available.",
            Some("Optimize for fuel efficiency"),
            None,
            68,
        ));
    }

    out
}

fn advise(
    kind: RecommendationKind,
    priority: RecommendationPriority,
    title: &str,
    description: &str,
    action: Option<&str>,
    suggested_trajectory: Option<&str>,
    confidence: u8,
) -> Recommendation {
    Recommendation {
        kind,
        priority,
        title: title.to_string(),
        description: description.to_string(),
        action: action.map(str::to_string),
        suggested_trajectory: suggested_trajectory.map(str::to_string),
        confidence,
    }
}

#[cfg(test)]
mod tests {
    use odin_core::catalog;
    use odin_core::types::{FuelLevel, TimeScale};

    use super::*;
    use crate::systems::metrics;

    fn running_on(id: &str) -> SimulationState {
        let mut state = SimulationState::new(catalog::trajectory(id).unwrap(), TimeScale::default());
        state.is_running = true;
        state
    }

    fn titles(state: &SimulationState) -> Vec<String> {
        recommend(state, &metrics::derive(state))
            .into_iter()
            .map(|r| r.title)
            .collect()
    }

    #[test]
    fn test_silent_when_not_running() {
        let mut state = running_on(BASELINE_TRAJECTORY_ID);
        state.is_running = false;
        state.active_hazards = catalog::hazards();
        assert!(titles(&state).is_empty());
    }

    /// Baseline nominal radiation is 85%, above the mitigation threshold.
    #[test]
    fn test_baseline_radiation_advisory() {
        let state = running_on(BASELINE_TRAJECTORY_ID);
        assert_eq!(titles(&state), vec!["Radiation Mitigation"]);
    }

    #[test]
    fn test_critical_hazard_suggests_safe_route() {
        let mut state = running_on(BASELINE_TRAJECTORY_ID);
        state.active_hazards.push(catalog::hazard("haz-003").unwrap());
        let recs = recommend(&state, &metrics::derive(&state));
        assert_eq!(recs[0].priority, RecommendationPriority::Critical);
        assert_eq!(recs[0].suggested_trajectory.as_deref(), Some(SAFE_ROUTE_ALPHA_ID));
        // 3100 + 200 delta-V is still under the optimisation threshold.
        assert!(recs.iter().all(|r| r.title != "Delta-V Optimization"));
    }

    #[test]
    fn test_warning_only_flags_baseline() {
        let mut state = running_on(catalog::LUNAR_POLAR_ID);
        state.active_hazards.push(catalog::hazard("haz-006").unwrap());
        assert!(titles(&state).iter().all(|t| t != "Safety Optimization"));

        let mut state = running_on(BASELINE_TRAJECTORY_ID);
        state.active_hazards.push(catalog::hazard("haz-006").unwrap());
        assert!(titles(&state).iter().any(|t| t == "Safety Optimization"));
    }

    #[test]
    fn test_fuel_and_duration_advisories() {
        let mut state = running_on(SAFE_ROUTE_ALPHA_ID);
        state.fuel_remaining = FuelLevel::new(55.0);
        assert_eq!(titles(&state), vec!["Fuel Conservation"]);

        let mut state = running_on(FUEL_EFFICIENT_ID);
        state.current_time = 30.0;
        state.fuel_remaining = FuelLevel::new(10.0);
        assert_eq!(titles(&state), vec!["Mission Duration Optimization"]);
    }

    #[test]
    fn test_emergency_route_delta_v_advisory() {
        let state = running_on(catalog::EMERGENCY_FAST_ID);
        let t = titles(&state);
        assert!(t.iter().any(|t| t == "Delta-V Optimization"));
        assert!(t.iter().any(|t| t == "Radiation Mitigation"));
    }
}
