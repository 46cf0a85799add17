//! Catalog of the fixed trajectory profiles and hazard reports a host offers.

use crate::enums::{HazardType, RiskLevel, Severity};
use crate::hazard::Hazard;
use crate::trajectory::Trajectory;
use crate::types::{GeoCoordinate, Waypoint};

/// Trajectory a new mission starts on.
pub const BASELINE_TRAJECTORY_ID: &str = "baseline";
pub const SAFE_ROUTE_ALPHA_ID: &str = "safe-route-alpha";
pub const EMERGENCY_FAST_ID: &str = "emergency-fast";
pub const FUEL_EFFICIENT_ID: &str = "fuel-efficient";
pub const LUNAR_POLAR_ID: &str = "lunar-polar";

/// All catalog trajectories, baseline first.
pub fn trajectories() -> Vec<Trajectory> {
    vec![
        profile(
            BASELINE_TRAJECTORY_ID,
            "Baseline Hohmann Transfer",
            [3100.0, 72.0, 85.0, 2450.0],
            RiskLevel::Medium,
            [(50.0, 20.0, 5.0), (120.0, 45.0, 8.0), (200.0, 60.0, 12.0)],
        ),
        profile(
            SAFE_ROUTE_ALPHA_ID,
            "Safe Route Alpha",
            [3280.0, 84.0, 25.0, 2680.0],
            RiskLevel::Low,
            [(45.0, 35.0, 15.0), (110.0, 65.0, 25.0), (200.0, 60.0, 12.0)],
        ),
        profile(
            EMERGENCY_FAST_ID,
            "Emergency Fast Transit",
            [4200.0, 48.0, 95.0, 3200.0],
            RiskLevel::High,
            [(80.0, 15.0, 3.0), (160.0, 40.0, 8.0), (200.0, 60.0, 12.0)],
        ),
        profile(
            FUEL_EFFICIENT_ID,
            "Fuel Efficient Route",
            [2850.0, 96.0, 45.0, 2200.0],
            RiskLevel::Low,
            [(35.0, 25.0, 8.0), (85.0, 50.0, 15.0), (200.0, 60.0, 12.0)],
        ),
        profile(
            LUNAR_POLAR_ID,
            "Lunar Polar Approach",
            [3350.0, 78.0, 65.0, 2750.0],
            RiskLevel::Medium,
            [(55.0, 30.0, 20.0), (125.0, 55.0, 35.0), (200.0, 60.0, 45.0)],
        ),
    ]
}

/// Look up a catalog trajectory by id.
pub fn trajectory(id: &str) -> Option<Trajectory> {
    trajectories().into_iter().find(|t| t.id == id)
}

/// The baseline profile.
pub fn baseline() -> Trajectory {
    let mut all = trajectories();
    all.swap_remove(0)
}

/// All catalog hazard reports.
pub fn hazards() -> Vec<Hazard> {
    vec![
        report(
            "haz-001",
            "T+72:14:30",
            HazardType::Cme,
            Severity::High,
            "Coronal Mass Ejection detected. Velocity: 1,200 km/s. Expected arrival: T+74:00:00",
            Some(GeoCoordinate { lat: 15.2, lon: -45.8 }),
        ),
        report(
            "haz-002",
            "T+156:45:12",
            HazardType::DebrisConjunction,
            Severity::Medium,
            "Space debris cluster detected in lunar approach corridor. Risk of collision: 12%",
            None,
        ),
        report(
            "haz-003",
            "T+48:30:00",
            HazardType::SolarFlare,
            Severity::Critical,
            "X-class solar flare in progress. Radiation levels exceeding safety thresholds",
            None,
        ),
        report(
            "haz-004",
            "T+24:15:45",
            HazardType::RadiationStorm,
            Severity::High,
            "Geomagnetic storm detected. Proton flux levels: 1000 pfu. Crew shelter advised.",
            None,
        ),
        report(
            "haz-005",
            "T+96:22:33",
            HazardType::DebrisConjunction,
            Severity::Low,
            "Micrometeorite cloud detected 500km ahead. Minor course adjustment recommended.",
            None,
        ),
        report(
            "haz-006",
            "T+12:44:12",
            HazardType::Cme,
            Severity::Medium,
            "Minor coronal mass ejection. Velocity: 600 km/s. Minimal mission impact expected.",
            None,
        ),
        report(
            "haz-007",
            "T+144:18:55",
            HazardType::SolarFlare,
            Severity::High,
            "M-class solar flare detected. Communication blackout possible for 2-4 hours.",
            None,
        ),
        report(
            "haz-008",
            "T+36:11:28",
            HazardType::RadiationStorm,
            Severity::Critical,
            "Solar energetic particle event in progress. Immediate shelter protocol required.",
            None,
        ),
    ]
}

/// Look up a catalog hazard by id.
pub fn hazard(id: &str) -> Option<Hazard> {
    hazards().into_iter().find(|h| h.id == id)
}

/// Build a four-waypoint profile. Waypoints are evenly spaced in time from the origin.
/// `nominal` is `[delta_v, travel_time, radiation_exposure, fuel_consumption]`.
fn profile(
    id: &str,
    name: &str,
    nominal: [f64; 4],
    risk: RiskLevel,
    legs: [(f64, f64, f64); 3],
) -> Trajectory {
    let [delta_v, travel_time, radiation_exposure, fuel_consumption] = nominal;
    let leg_time = travel_time / legs.len() as f64;

    let mut points = Vec::with_capacity(legs.len() + 1);
    points.push(Waypoint::new(0.0, 0.0, 0.0, 0.0));
    for (i, (x, y, z)) in legs.into_iter().enumerate() {
        points.push(Waypoint::new(x, y, z, leg_time * (i + 1) as f64));
    }

    Trajectory {
        id: id.to_string(),
        name: name.to_string(),
        delta_v,
        travel_time,
        radiation_exposure,
        fuel_consumption,
        risk,
        points,
    }
}

fn report(
    id: &str,
    timestamp: &str,
    kind: HazardType,
    severity: Severity,
    description: &str,
    coordinates: Option<GeoCoordinate>,
) -> Hazard {
    Hazard {
        id: id.to_string(),
        timestamp: timestamp.to_string(),
        kind,
        severity,
        description: description.to_string(),
        coordinates,
    }
}
