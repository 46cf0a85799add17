//! The mission engine.
//!
//! `MissionEngine` owns the state store, applies control operations, steps the
//! mission once per host tick, and notifies subscribers after every mutation.
//! Completely headless: the host decides when ticks arrive.

use std::time::Duration;

use tracing::{debug, info, warn};

use odin_core::commands::ControlCommand;
use odin_core::enums::MissionPhase;
use odin_core::error::TrajectoryError;
use odin_core::hazard::Hazard;
use odin_core::state::{LiveMetrics, SimulationState};
use odin_core::trajectory::Trajectory;
use odin_core::types::{FuelLevel, Position, TimeScale};

use crate::clock::{MissionClock, SystemClock};
use crate::config::SimConfig;
use crate::observers::{ObserverRegistry, Subscription};
use crate::systems;

/// The mission engine. Single writer; every reader sees a fully updated state.
pub struct MissionEngine<C: MissionClock = SystemClock> {
    state: SimulationState,
    clock: C,
    /// Clock reading at the previous tick (or at start/resume).
    last_update: Duration,
    /// Whether the next host tick should run the stepper.
    armed: bool,
    observers: ObserverRegistry,
}

impl MissionEngine<SystemClock> {
    /// Create an engine on the wall clock.
    pub fn new(trajectory: Trajectory, config: SimConfig) -> Result<Self, TrajectoryError> {
        Self::with_clock(trajectory, config, SystemClock::new())
    }
}

impl<C: MissionClock> MissionEngine<C> {
    /// Create an engine on the given clock. The trajectory must be flyable.
    pub fn with_clock(
        trajectory: Trajectory,
        config: SimConfig,
        clock: C,
    ) -> Result<Self, TrajectoryError> {
        trajectory.validate()?;
        Ok(Self {
            state: SimulationState::new(trajectory, config.time_scale()),
            last_update: clock.now(),
            clock,
            armed: false,
            observers: ObserverRegistry::new(),
        })
    }

    /// Register an observer called with `(state, metrics)` after every mutation.
    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&SimulationState, &LiveMetrics) + 'static,
    {
        self.observers.subscribe(callback)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Apply a control command immediately.
    pub fn apply(&mut self, command: ControlCommand) -> Result<(), TrajectoryError> {
        match command {
            ControlCommand::Start => self.start(),
            ControlCommand::Pause => self.pause(),
            ControlCommand::Resume => self.resume(),
            ControlCommand::Reset => self.reset(),
            ControlCommand::SetTrajectory { trajectory } => self.set_trajectory(trajectory)?,
            ControlCommand::AddHazard { hazard } => self.add_hazard(hazard),
            ControlCommand::RemoveHazard { hazard_id } => self.remove_hazard(&hazard_id),
            ControlCommand::SetTimeScale { scale } => self.set_time_scale(scale),
        }
        Ok(())
    }

    /// Begin stepping from the current clock reading. No-op if already running.
    pub fn start(&mut self) {
        if self.state.is_running {
            return;
        }
        self.state.is_running = true;
        self.state.is_paused = false;
        self.arm();
        debug!(trajectory = %self.state.trajectory.id, "mission started");
        self.notify();
    }

    /// Stop stepping. Valid even when not running.
    pub fn pause(&mut self) {
        self.state.is_paused = true;
        self.armed = false;
        debug!(time = self.state.current_time, "mission paused");
        self.notify();
    }

    /// Continue stepping. The paused interval is not counted. No-op unless running.
    pub fn resume(&mut self) {
        if !self.state.is_running {
            return;
        }
        self.state.is_paused = false;
        self.arm();
        debug!(time = self.state.current_time, "mission resumed");
        self.notify();
    }

    /// Restore pre-launch state. Trajectory and time scale are kept.
    pub fn reset(&mut self) {
        let state = &mut self.state;
        state.is_running = false;
        state.is_paused = false;
        state.current_time = 0.0;
        state.current_position = Position::default();
        state.current_velocity = 0.0;
        state.fuel_remaining = FuelLevel::FULL;
        state.active_hazards.clear();
        state.current_phase = MissionPhase::PreLaunch;
        self.armed = false;
        debug!("mission reset");
        self.notify();
    }

    /// Swap the active trajectory without resetting mission time.
    ///
    /// If mission time is past the new trajectory's travel time it is clamped to it, so the
    /// time invariant holds immediately; the next tick then completes the mission. Position
    /// and velocity are re-interpolated against the new waypoints.
    pub fn set_trajectory(&mut self, trajectory: Trajectory) -> Result<(), TrajectoryError> {
        if let Err(err) = trajectory.validate() {
            warn!(%err, "trajectory rejected");
            return Err(err);
        }
        self.state.trajectory = trajectory;
        if self.state.current_time > self.state.trajectory.travel_time {
            self.state.current_time = self.state.trajectory.travel_time;
        }
        systems::kinematics::run(&mut self.state);
        debug!(trajectory = %self.state.trajectory.id, "trajectory switched");
        self.notify();
        Ok(())
    }

    /// Append a hazard to the active set. Duplicates are kept.
    pub fn add_hazard(&mut self, hazard: Hazard) {
        debug!(id = %hazard.id, severity = ?hazard.severity, "hazard added");
        self.state.active_hazards.push(hazard);
        self.notify();
    }

    /// Remove every active hazard with this id. Unknown ids are a silent no-op.
    pub fn remove_hazard(&mut self, hazard_id: &str) {
        self.state.active_hazards.retain(|h| h.id != hazard_id);
        debug!(id = hazard_id, "hazard removed");
        self.notify();
    }

    /// Set simulated hours per real second, clamped to `[0.1, 10]`.
    pub fn set_time_scale(&mut self, scale: f64) {
        self.state.time_scale = TimeScale::new(scale);
        debug!(scale = self.state.time_scale.get(), "time scale set");
        self.notify();
    }

    /// Host tick. Steps by the wall time since the previous tick if armed.
    /// Returns whether a step ran.
    pub fn tick(&mut self) -> bool {
        if !self.is_armed() {
            return false;
        }
        let now = self.clock.now();
        let delta = now.saturating_sub(self.last_update);
        self.last_update = now;
        self.step(delta.as_secs_f64());
        true
    }

    /// Step by an explicit wall-time delta, for hosts that measure time themselves.
    /// Returns whether a step ran.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if !self.is_armed() {
            return false;
        }
        self.last_update = self.clock.now();
        self.step(delta.as_secs_f64());
        true
    }

    /// Whether the next tick will step the mission.
    pub fn is_armed(&self) -> bool {
        self.armed && self.state.is_advancing()
    }

    /// Read-only view of the state store.
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Live metrics for the current state.
    pub fn metrics(&self) -> LiveMetrics {
        systems::metrics::derive(&self.state)
    }

    /// Owned copies of state and metrics.
    pub fn snapshot(&self) -> (SimulationState, LiveMetrics) {
        (self.state.clone(), self.metrics())
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn arm(&mut self) {
        self.last_update = self.clock.now();
        self.armed = true;
    }

    /// One stepper pass followed by exactly one notification.
    fn step(&mut self, delta_secs: f64) {
        let previous_phase = self.state.current_phase;
        let completed = self.run_systems(delta_secs);

        if completed {
            self.state.is_paused = true;
            self.armed = false;
            info!(
                trajectory = %self.state.trajectory.id,
                time = self.state.current_time,
                fuel = self.state.fuel_remaining.percent(),
                "mission complete"
            );
        } else if self.state.current_phase != previous_phase {
            info!(
                phase = %self.state.current_phase,
                time = self.state.current_time,
                "phase transition"
            );
        }

        self.notify();
    }

    /// Run all systems in order. Returns `true` if the mission completed on this pass.
    fn run_systems(&mut self, delta_secs: f64) -> bool {
        // 1. Mission clock
        systems::timeline::advance(&mut self.state, delta_secs);
        // 2. Phase from progress
        systems::timeline::update_phase(&mut self.state);
        // 3. Position and velocity
        systems::kinematics::run(&mut self.state);
        // 4. Propellant
        systems::fuel::run(&mut self.state);
        // 5. Arrival
        systems::timeline::check_completion(&mut self.state)
    }

    fn notify(&self) {
        let metrics = systems::metrics::derive(&self.state);
        self.observers.notify(&self.state, &metrics);
    }
}

impl<C: MissionClock> std::fmt::Debug for MissionEngine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MissionEngine")
            .field("state", &self.state)
            .field("armed", &self.armed)
            .field("observers", &self.observers)
            .finish()
    }
}
