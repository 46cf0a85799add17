//! Position and velocity interpolation along the active trajectory's waypoints.
//!
//! No orbital mechanics: the vehicle moves linearly between consecutive waypoints.

use glam::DVec3;

use odin_core::constants::VELOCITY_SCALE;
use odin_core::state::SimulationState;
use odin_core::trajectory::Trajectory;
use odin_core::types::Position;

/// Recompute `current_position` and `current_velocity` from mission time.
pub fn run(state: &mut SimulationState) {
    let progress = state.progress();
    let (position, velocity) = interpolate(&state.trajectory, progress);
    state.current_position = position;
    state.current_velocity = velocity;
}

/// Position and velocity figure at a progress fraction in `[0, 1]`.
///
/// The segment is found by scaling progress over `N - 1` segments. At progress 1 the
/// segment collapses onto the final waypoint and the velocity is zero. Trajectories with
/// fewer than two waypoints yield the origin at rest.
pub fn interpolate(trajectory: &Trajectory, progress: f64) -> (Position, f64) {
    let points = &trajectory.points;
    if points.len() < 2 {
        return (Position::default(), 0.0);
    }

    let last = points.len() - 1;
    let scaled = progress.clamp(0.0, 1.0) * last as f64;
    let segment = (scaled.floor() as usize).min(last);
    let next = (segment + 1).min(last);
    let fraction = scaled - segment as f64;

    let from: DVec3 = points[segment].position().to_dvec3();
    let to: DVec3 = points[next].position().to_dvec3();

    let position = Position::from(from.lerp(to, fraction));
    let velocity = from.distance(to) / trajectory.segment_duration() * VELOCITY_SCALE;
    (position, velocity)
}
