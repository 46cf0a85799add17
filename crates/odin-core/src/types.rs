//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{MAX_TIME_SCALE, MIN_TIME_SCALE};

/// 3D position in trajectory space (abstract distance units, Cartesian).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Straight-line distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.to_dvec3().distance(other.to_dvec3())
    }

    pub fn to_dvec3(self) -> DVec3 {
        DVec3::new(self.x, self.y, self.z)
    }
}

impl From<DVec3> for Position {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

/// A trajectory vertex tagged with its nominal mission-time offset (hours).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub time: f64,
}

impl Waypoint {
    pub const fn new(x: f64, y: f64, z: f64, time: f64) -> Self {
        Self { x, y, z, time }
    }

    pub fn position(&self) -> Position {
        Position::new(self.x, self.y, self.z)
    }
}

/// Surface location attached to some hazard reports (degrees).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Simulated hours per real second, always within `[MIN_TIME_SCALE, MAX_TIME_SCALE]`.
///
/// Construction clamps rather than rejects, so an out-of-range value can never be stored.
/// NaN maps to the minimum.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct TimeScale(f64);

impl TimeScale {
    pub fn new(scale: f64) -> Self {
        if scale.is_nan() {
            return Self(MIN_TIME_SCALE);
        }
        Self(scale.clamp(MIN_TIME_SCALE, MAX_TIME_SCALE))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self(crate::constants::DEFAULT_TIME_SCALE)
    }
}

impl From<f64> for TimeScale {
    fn from(scale: f64) -> Self {
        Self::new(scale)
    }
}

impl From<TimeScale> for f64 {
    fn from(scale: TimeScale) -> Self {
        scale.0
    }
}

/// Propellant remaining as a percentage in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct FuelLevel(f64);

impl FuelLevel {
    pub const FULL: FuelLevel = FuelLevel(100.0);
    pub const EMPTY: FuelLevel = FuelLevel(0.0);

    pub fn new(percent: f64) -> Self {
        if percent.is_nan() {
            return Self::EMPTY;
        }
        Self(percent.clamp(0.0, 100.0))
    }

    pub fn percent(self) -> f64 {
        self.0
    }

    /// Lower the level to `candidate` if it is below the current level.
    /// Fuel is never replenished this way.
    pub fn drain_to(&mut self, candidate: f64) {
        let next = Self::new(candidate);
        if next.0 < self.0 {
            *self = next;
        }
    }
}

impl Default for FuelLevel {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<f64> for FuelLevel {
    fn from(percent: f64) -> Self {
        Self::new(percent)
    }
}

impl From<FuelLevel> for f64 {
    fn from(level: FuelLevel) -> Self {
        level.0
    }
}
