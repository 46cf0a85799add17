//! Contract violations on externally supplied mission data.

use thiserror::Error;

/// A trajectory that cannot be flown by the stepper.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrajectoryError {
    #[error("trajectory `{id}` has {count} waypoint(s); at least 2 are required")]
    TooFewWaypoints { id: String, count: usize },

    #[error("trajectory `{id}` has non-positive travel time {travel_time}")]
    NonPositiveTravelTime { id: String, travel_time: f64 },

    #[error("trajectory `{id}` has a non-finite {field}")]
    NonFiniteParameter { id: String, field: &'static str },
}
