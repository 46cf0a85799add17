#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use crate::catalog;
    use crate::commands::ControlCommand;
    use crate::enums::*;
    use crate::error::TrajectoryError;
    use crate::events::format_mission_time;
    use crate::hazard::Hazard;
    use crate::state::SimulationState;
    use crate::types::{FuelLevel, Position, TimeScale, Waypoint};

    /// Phase labels are the wire format; they must round-trip unchanged.
    #[test]
    fn test_mission_phase_labels_serde() {
        let variants = vec![
            (MissionPhase::PreLaunch, "\"Pre-Launch\""),
            (MissionPhase::Launch, "\"Launch Phase\""),
            (MissionPhase::EarthDeparture, "\"Earth Departure\""),
            (MissionPhase::TransLunarInjection, "\"Trans-Lunar Injection\""),
            (MissionPhase::LunarApproach, "\"Lunar Approach\""),
            (MissionPhase::LunarOrbitInsertion, "\"Lunar Orbit Insertion\""),
            (MissionPhase::MissionComplete, "\"Mission Complete\""),
        ];
        for (phase, expected) in variants {
            let json = serde_json::to_string(&phase).unwrap();
            assert_eq!(json, expected);
            assert_eq!(format!("\"{}\"", phase.label()), expected);
            let back: MissionPhase = serde_json::from_str(&json).unwrap();
            assert_eq!(phase, back);
        }
    }

    #[test]
    fn test_phase_breakpoints() {
        assert_eq!(MissionPhase::from_progress(0.0), MissionPhase::Launch);
        assert_eq!(MissionPhase::from_progress(0.099), MissionPhase::Launch);
        assert_eq!(MissionPhase::from_progress(0.10), MissionPhase::EarthDeparture);
        assert_eq!(MissionPhase::from_progress(0.30), MissionPhase::TransLunarInjection);
        assert_eq!(MissionPhase::from_progress(0.69), MissionPhase::TransLunarInjection);
        assert_eq!(MissionPhase::from_progress(0.70), MissionPhase::LunarApproach);
        assert_eq!(MissionPhase::from_progress(0.90), MissionPhase::LunarOrbitInsertion);
        assert_eq!(MissionPhase::from_progress(1.4), MissionPhase::LunarOrbitInsertion);
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Low < Severity::Medium);
        assert!(Severity::Medium < Severity::High);
        assert!(Severity::High < Severity::Critical);
        assert!(SystemsStatus::Green < SystemsStatus::Yellow);
        assert!(SystemsStatus::Yellow < SystemsStatus::Red);
        assert!(HazardLevel::Warning < HazardLevel::Critical);
    }

    #[test]
    fn test_severity_floors() {
        assert_eq!(Severity::Low.systems_floor(), SystemsStatus::Green);
        assert_eq!(Severity::Medium.hazard_floor(), HazardLevel::Warning);
        assert_eq!(Severity::High.systems_floor(), SystemsStatus::Yellow);
        assert_eq!(Severity::Critical.systems_floor(), SystemsStatus::Red);
        assert_eq!(Severity::Critical.hazard_floor(), HazardLevel::Critical);
    }

    #[test]
    fn test_time_scale_clamps() {
        assert_relative_eq!(TimeScale::new(50.0).get(), 10.0);
        assert_relative_eq!(TimeScale::new(0.0001).get(), 0.1);
        assert_relative_eq!(TimeScale::new(2.5).get(), 2.5);
        assert_relative_eq!(TimeScale::new(f64::NAN).get(), 0.1);
        assert_relative_eq!(TimeScale::new(f64::INFINITY).get(), 10.0);
        assert_relative_eq!(TimeScale::default().get(), 1.0);
    }

    /// Deserialising goes through the clamp too.
    #[test]
    fn test_time_scale_deserialize_clamps() {
        let scale: TimeScale = serde_json::from_str("42.0").unwrap();
        assert_relative_eq!(scale.get(), 10.0);
        assert_eq!(serde_json::to_string(&scale).unwrap(), "10.0");
    }

    #[test]
    fn test_fuel_level_never_refills() {
        let mut fuel = FuelLevel::FULL;
        fuel.drain_to(80.0);
        assert_relative_eq!(fuel.percent(), 80.0);
        fuel.drain_to(90.0);
        assert_relative_eq!(fuel.percent(), 80.0);
        fuel.drain_to(-15.0);
        assert_relative_eq!(fuel.percent(), 0.0);
        assert_relative_eq!(FuelLevel::new(250.0).percent(), 100.0);
    }

    #[test]
    fn test_position_distance() {
        let a = Position::new(0.0, 0.0, 0.0);
        let b = Position::new(3.0, 4.0, 12.0);
        assert_relative_eq!(a.distance_to(&b), 13.0);
        assert_eq!(Position::from(b.to_dvec3()), b);
    }

    #[test]
    fn test_catalog_trajectories_valid() {
        let all = catalog::trajectories();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].id, catalog::BASELINE_TRAJECTORY_ID);
        for t in &all {
            t.validate().unwrap();
            assert_eq!(t.points.len(), 4);
            assert_relative_eq!(t.points[0].time, 0.0);
            assert_relative_eq!(t.points[3].time, t.travel_time);
        }
        let polar = catalog::trajectory(catalog::LUNAR_POLAR_ID).unwrap();
        assert_relative_eq!(polar.points[3].z, 45.0);
        assert!(catalog::trajectory("warp-drive").is_none());
    }

    #[test]
    fn test_catalog_hazards() {
        let all = catalog::hazards();
        assert_eq!(all.len(), 8);
        let cme = catalog::hazard("haz-001").unwrap();
        assert_eq!(cme.kind, HazardType::Cme);
        assert_eq!(cme.severity, Severity::High);
        assert!(cme.coordinates.is_some());
        let critical = all.iter().filter(|h| h.severity == Severity::Critical).count();
        assert_eq!(critical, 2);
    }

    #[test]
    fn test_validate_rejects_degenerate_trajectories() {
        let mut t = catalog::baseline();
        t.points.truncate(1);
        assert!(matches!(
            t.validate(),
            Err(TrajectoryError::TooFewWaypoints { count: 1, .. })
        ));

        let mut t = catalog::baseline();
        t.travel_time = 0.0;
        assert!(matches!(
            t.validate(),
            Err(TrajectoryError::NonPositiveTravelTime { .. })
        ));

        let mut t = catalog::baseline();
        t.points[2] = Waypoint::new(f64::NAN, 0.0, 0.0, 48.0);
        assert!(matches!(
            t.validate(),
            Err(TrajectoryError::NonFiniteParameter { .. })
        ));
    }

    /// Hazard JSON uses the `type` key and display labels.
    #[test]
    fn test_hazard_serde() {
        let hazard = catalog::hazard("haz-003").unwrap();
        let json = serde_json::to_string(&hazard).unwrap();
        assert!(json.contains("\"type\":\"Solar Flare\""));
        assert!(!json.contains("coordinates"));
        let back: Hazard = serde_json::from_str(&json).unwrap();
        assert_eq!(hazard, back);
    }

    /// Verify ControlCommand round-trips through serde (tagged union).
    #[test]
    fn test_control_command_serde() {
        let commands = vec![
            ControlCommand::Start,
            ControlCommand::Pause,
            ControlCommand::Resume,
            ControlCommand::Reset,
            ControlCommand::SetTrajectory {
                trajectory: catalog::baseline(),
            },
            ControlCommand::AddHazard {
                hazard: catalog::hazard("haz-008").unwrap(),
            },
            ControlCommand::RemoveHazard {
                hazard_id: "haz-008".into(),
            },
            ControlCommand::SetTimeScale { scale: 2.0 },
        ];
        for cmd in &commands {
            let json = serde_json::to_string(cmd).unwrap();
            let back: ControlCommand = serde_json::from_str(&json).unwrap();
            assert_eq!(json, serde_json::to_string(&back).unwrap());
        }
        let pause: ControlCommand = serde_json::from_str(r#"{"type":"Pause"}"#).unwrap();
        assert!(matches!(pause, ControlCommand::Pause));
    }

    #[test]
    fn test_initial_state() {
        let state = SimulationState::new(catalog::baseline(), TimeScale::default());
        assert!(!state.is_running);
        assert!(!state.is_paused);
        assert!(!state.is_advancing());
        assert_eq!(state.current_phase, MissionPhase::PreLaunch);
        assert_relative_eq!(state.fuel_remaining.percent(), 100.0);
        assert_relative_eq!(state.progress(), 0.0);

        let json = serde_json::to_string(&state).unwrap();
        let back: SimulationState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_mission_time_format() {
        assert_eq!(format_mission_time(0.0), "T+00:00:00");
        assert_eq!(format_mission_time(72.0 + 14.0 / 60.0 + 30.0 / 3600.0), "T+72:14:30");
        assert_eq!(format_mission_time(-3.0), "T+00:00:00");
        assert_eq!(format_mission_time(1.5), "T+01:30:00");
    }

    #[test]
    fn test_log_priority_from_severity() {
        assert_eq!(LogPriority::from(Severity::Critical), LogPriority::Critical);
        assert_eq!(LogPriority::from(Severity::High), LogPriority::Warning);
        assert_eq!(LogPriority::from(Severity::Medium), LogPriority::Info);
        assert_eq!(LogPriority::from(Severity::Low), LogPriority::Info);
    }

    #[test]
    fn test_resource_status_bands() {
        assert_eq!(ResourceStatus::from_level(51.0), ResourceStatus::Good);
        assert_eq!(ResourceStatus::from_level(50.0), ResourceStatus::Warning);
        assert_eq!(ResourceStatus::from_level(20.0), ResourceStatus::Critical);
    }
}
