//! Trajectory profiles: fixed waypoints plus nominal performance figures.

use serde::{Deserialize, Serialize};

use crate::enums::RiskLevel;
use crate::error::TrajectoryError;
use crate::types::Waypoint;

/// An immutable mission profile. The engine only ever swaps which one is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub id: String,
    pub name: String,
    /// Nominal delta-V budget (m/s).
    pub delta_v: f64,
    /// Nominal travel time (hours).
    pub travel_time: f64,
    /// Nominal crew radiation exposure (percent).
    pub radiation_exposure: f64,
    /// Nominal propellant consumption (kg).
    pub fuel_consumption: f64,
    pub risk: RiskLevel,
    /// Ordered waypoints spanning `[0, travel_time]`.
    pub points: Vec<Waypoint>,
}

impl Trajectory {
    /// Check the preconditions the stepper relies on.
    pub fn validate(&self) -> Result<(), TrajectoryError> {
        if self.points.len() < 2 {
            return Err(TrajectoryError::TooFewWaypoints {
                id: self.id.clone(),
                count: self.points.len(),
            });
        }
        let scalars = [
            ("travel time", self.travel_time),
            ("delta-V", self.delta_v),
            ("radiation exposure", self.radiation_exposure),
            ("fuel consumption", self.fuel_consumption),
        ];
        for (field, value) in scalars {
            if !value.is_finite() {
                return Err(TrajectoryError::NonFiniteParameter {
                    id: self.id.clone(),
                    field,
                });
            }
        }
        if self.travel_time <= 0.0 {
            return Err(TrajectoryError::NonPositiveTravelTime {
                id: self.id.clone(),
                travel_time: self.travel_time,
            });
        }
        let coordinates_finite = self
            .points
            .iter()
            .all(|p| p.x.is_finite() && p.y.is_finite() && p.z.is_finite());
        if !coordinates_finite {
            return Err(TrajectoryError::NonFiniteParameter {
                id: self.id.clone(),
                field: "waypoint coordinate",
            });
        }
        Ok(())
    }

    /// Progress fraction for a mission time, clamped to `[0, 1]`.
    pub fn progress_at(&self, current_time: f64) -> f64 {
        (current_time / self.travel_time).clamp(0.0, 1.0)
    }

    /// Nominal duration of one waypoint segment (hours).
    ///
    /// Divides by the waypoint count rather than the segment count; the reported velocity
    /// figure is defined against this duration.
    pub fn segment_duration(&self) -> f64 {
        self.travel_time / self.points.len() as f64
    }
}
