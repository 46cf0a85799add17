//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Hazard severity. Ordered: `Low < Medium < High < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Factor applied to nominal radiation exposure per hazard of this severity.
    pub fn radiation_multiplier(self) -> f64 {
        match self {
            Severity::Low => LOW_RADIATION_MULTIPLIER,
            Severity::Medium => MEDIUM_RADIATION_MULTIPLIER,
            Severity::High => HIGH_RADIATION_MULTIPLIER,
            Severity::Critical => CRITICAL_RADIATION_MULTIPLIER,
        }
    }

    /// Delta-V penalty (m/s) per hazard of this severity.
    pub fn delta_v_penalty(self) -> f64 {
        match self {
            Severity::Low => LOW_DELTA_V_PENALTY,
            Severity::Medium => MEDIUM_DELTA_V_PENALTY,
            Severity::High => HIGH_DELTA_V_PENALTY,
            Severity::Critical => CRITICAL_DELTA_V_PENALTY,
        }
    }

    /// Lowest systems status a hazard of this severity forces.
    pub fn systems_floor(self) -> SystemsStatus {
        match self {
            Severity::Low => SystemsStatus::Green,
            Severity::Medium | Severity::High => SystemsStatus::Yellow,
            Severity::Critical => SystemsStatus::Red,
        }
    }

    /// Lowest hazard level a hazard of this severity forces.
    pub fn hazard_floor(self) -> HazardLevel {
        match self {
            Severity::Low => HazardLevel::Nominal,
            Severity::Medium | Severity::High => HazardLevel::Warning,
            Severity::Critical => HazardLevel::Critical,
        }
    }
}

/// Kind of space-weather or debris event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HazardType {
    #[serde(rename = "CME")]
    Cme,
    #[serde(rename = "Solar Flare")]
    SolarFlare,
    #[serde(rename = "Debris Conjunction")]
    DebrisConjunction,
    #[serde(rename = "Radiation Storm")]
    RadiationStorm,
}

impl HazardType {
    pub fn label(self) -> &'static str {
        match self {
            HazardType::Cme => "CME",
            HazardType::SolarFlare => "Solar Flare",
            HazardType::DebrisConjunction => "Debris Conjunction",
            HazardType::RadiationStorm => "Radiation Storm",
        }
    }
}

/// Risk classification of a trajectory profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

/// Mission phase, derived from progress along the active trajectory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MissionPhase {
    #[default]
    #[serde(rename = "Pre-Launch")]
    PreLaunch,
    #[serde(rename = "Launch Phase")]
    Launch,
    #[serde(rename = "Earth Departure")]
    EarthDeparture,
    #[serde(rename = "Trans-Lunar Injection")]
    TransLunarInjection,
    #[serde(rename = "Lunar Approach")]
    LunarApproach,
    #[serde(rename = "Lunar Orbit Insertion")]
    LunarOrbitInsertion,
    #[serde(rename = "Mission Complete")]
    MissionComplete,
}

impl MissionPhase {
    /// Phase for a progress fraction (`current_time / travel_time`).
    pub fn from_progress(progress: f64) -> Self {
        if progress < PHASE_LAUNCH_END {
            MissionPhase::Launch
        } else if progress < PHASE_EARTH_DEPARTURE_END {
            MissionPhase::EarthDeparture
        } else if progress < PHASE_TLI_END {
            MissionPhase::TransLunarInjection
        } else if progress < PHASE_LUNAR_APPROACH_END {
            MissionPhase::LunarApproach
        } else {
            MissionPhase::LunarOrbitInsertion
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MissionPhase::PreLaunch => "Pre-Launch",
            MissionPhase::Launch => "Launch Phase",
            MissionPhase::EarthDeparture => "Earth Departure",
            MissionPhase::TransLunarInjection => "Trans-Lunar Injection",
            MissionPhase::LunarApproach => "Lunar Approach",
            MissionPhase::LunarOrbitInsertion => "Lunar Orbit Insertion",
            MissionPhase::MissionComplete => "Mission Complete",
        }
    }

    pub fn is_terminal(self) -> bool {
        self == MissionPhase::MissionComplete
    }
}

impl std::fmt::Display for MissionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse vehicle health. Ordered so that `max` is an upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SystemsStatus {
    #[default]
    Green,
    Yellow,
    Red,
}

/// Coarse hazard environment classification. Ordered so that `max` is an upgrade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum HazardLevel {
    #[default]
    Nominal,
    Warning,
    Critical,
}

/// Originator of a mission log entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogSource {
    #[serde(rename = "ODIN-AI")]
    OdinAi,
    #[serde(rename = "Flight Controller")]
    FlightController,
    Navigation,
    #[serde(rename = "Hazard Detection")]
    HazardDetection,
}

impl LogSource {
    pub fn label(self) -> &'static str {
        match self {
            LogSource::OdinAi => "ODIN-AI",
            LogSource::FlightController => "Flight Controller",
            LogSource::Navigation => "Navigation",
            LogSource::HazardDetection => "Hazard Detection",
        }
    }
}

/// Mission log priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogPriority {
    Info,
    Warning,
    Critical,
}

impl From<Severity> for LogPriority {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Critical => LogPriority::Critical,
            Severity::High => LogPriority::Warning,
            Severity::Medium | Severity::Low => LogPriority::Info,
        }
    }
}

/// Category of a decision-support advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Trajectory,
    Hazard,
    Resource,
    Timing,
}

/// Urgency of a decision-support advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    Low,
    Medium,
    High,
    Critical,
}

/// Crew consumable status band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceStatus {
    Good,
    Warning,
    Critical,
}

impl ResourceStatus {
    pub fn from_level(level: f64) -> Self {
        if level > RESOURCE_GOOD_ABOVE {
            ResourceStatus::Good
        } else if level > RESOURCE_WARNING_ABOVE {
            ResourceStatus::Warning
        } else {
            ResourceStatus::Critical
        }
    }
}
