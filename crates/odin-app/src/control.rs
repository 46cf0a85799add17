//! Mission control: the host-side action layer.
//!
//! `MissionControl` forwards control actions to the engine, resolves catalog ids,
//! and records a mission log entry for each action. Snapshots bundle engine state
//! with crew consumables, advisories and the log.

use odin_core::catalog;
use odin_core::commands::ControlCommand;
use odin_core::enums::{LogPriority, LogSource};
use odin_core::events::MissionLogEntry;
use odin_core::hazard::Hazard;
use odin_core::state::{LiveMetrics, MissionSnapshot, Recommendation, SimulationState};
use odin_core::trajectory::Trajectory;
use odin_sim::clock::{MissionClock, SystemClock};
use odin_sim::engine::MissionEngine;
use odin_sim::observers::Subscription;
use odin_sim::{advisory, systems};

use crate::config::AppConfig;
use crate::error::AppError;
use crate::mission_log::MissionLog;

pub struct MissionControl<C: MissionClock = SystemClock> {
    engine: MissionEngine<C>,
    log: MissionLog,
}

impl MissionControl<SystemClock> {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Self::with_clock(config, SystemClock::new())
    }
}

impl<C: MissionClock> MissionControl<C> {
    /// Build a mission from config: catalog trajectory, time scale, pre-launch hazards.
    pub fn with_clock(config: &AppConfig, clock: C) -> Result<Self, AppError> {
        let trajectory = lookup_trajectory(&config.trajectory)?;
        let engine = MissionEngine::with_clock(trajectory, config.sim_config(), clock)?;
        let mut control = Self {
            engine,
            log: MissionLog::new(config.seed),
        };
        for id in &config.hazards {
            control.inject_hazard(id)?;
        }
        Ok(control)
    }

    pub fn engine(&self) -> &MissionEngine<C> {
        &self.engine
    }

    pub fn subscribe<F>(&mut self, callback: F) -> Subscription
    where
        F: FnMut(&SimulationState, &LiveMetrics) + 'static,
    {
        self.engine.subscribe(callback)
    }

    /// Apply a command with the same logging as the named operations.
    pub fn apply(&mut self, command: ControlCommand) -> Result<(), AppError> {
        match command {
            ControlCommand::Start => self.start(),
            ControlCommand::Pause => self.pause(),
            ControlCommand::Resume => self.resume(),
            ControlCommand::Reset => self.reset(),
            ControlCommand::SetTrajectory { trajectory } => self.set_trajectory(trajectory)?,
            ControlCommand::AddHazard { hazard } => self.add_hazard(hazard),
            ControlCommand::RemoveHazard { hazard_id } => self.clear_hazard(&hazard_id),
            ControlCommand::SetTimeScale { scale } => self.set_time_scale(scale),
        }
        Ok(())
    }

    pub fn start(&mut self) {
        self.engine.start();
        self.note(
            LogSource::FlightController,
            "Mission simulation started. All systems nominal.",
        );
    }

    pub fn pause(&mut self) {
        self.engine.pause();
        self.note(
            LogSource::FlightController,
            "Simulation paused. Maintaining current status.",
        );
    }

    pub fn resume(&mut self) {
        self.engine.resume();
        self.note(
            LogSource::FlightController,
            "Simulation resumed. Continuing mission profile.",
        );
    }

    /// Reset the mission and start a fresh log.
    pub fn reset(&mut self) {
        self.engine.reset();
        self.log.clear();
        self.note(
            LogSource::FlightController,
            "Simulation reset to baseline parameters.",
        );
    }

    /// Switch to a catalog trajectory. Unknown ids never reach the engine.
    pub fn select_trajectory(&mut self, id: &str) -> Result<(), AppError> {
        let trajectory = lookup_trajectory(id)?;
        self.set_trajectory(trajectory)
    }

    pub fn set_trajectory(&mut self, trajectory: Trajectory) -> Result<(), AppError> {
        let name = trajectory.name.clone();
        self.engine.set_trajectory(trajectory)?;
        self.note(
            LogSource::OdinAi,
            format!("Trajectory switched to {name}. Recalculating mission parameters..."),
        );
        Ok(())
    }

    /// Inject a catalog hazard by id.
    pub fn inject_hazard(&mut self, id: &str) -> Result<(), AppError> {
        let hazard = catalog::hazard(id).ok_or_else(|| AppError::UnknownHazard(id.to_string()))?;
        self.add_hazard(hazard);
        Ok(())
    }

    pub fn add_hazard(&mut self, hazard: Hazard) {
        let hours = self.engine.state().current_time;
        self.log.record_hazard(hours, &hazard);
        self.engine.add_hazard(hazard);
    }

    pub fn clear_hazard(&mut self, id: &str) {
        self.engine.remove_hazard(id);
        self.log.record(
            self.engine.state().current_time,
            LogSource::HazardDetection,
            format!("Hazard {id} cleared. Threat level reduced."),
            LogPriority::Info,
        );
    }

    pub fn set_time_scale(&mut self, scale: f64) {
        self.engine.set_time_scale(scale);
        let applied = self.engine.state().time_scale.get();
        self.note(
            LogSource::FlightController,
            format!("Simulation time scale adjusted to {applied}x real-time."),
        );
    }

    /// Act on an advisory. Returns whether it switched trajectory.
    pub fn accept_recommendation(
        &mut self,
        recommendation: &Recommendation,
    ) -> Result<bool, AppError> {
        match recommendation.suggested_trajectory.as_deref() {
            Some(id) => {
                self.select_trajectory(id)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Forward a host frame to the engine.
    pub fn tick(&mut self) -> bool {
        self.engine.tick()
    }

    pub fn recommendations(&self) -> Vec<Recommendation> {
        advisory::recommend(self.engine.state(), &self.engine.metrics())
    }

    pub fn log(&self) -> &[MissionLogEntry] {
        self.log.entries()
    }

    pub fn snapshot(&self) -> MissionSnapshot {
        let (state, metrics) = self.engine.snapshot();
        MissionSnapshot {
            crew: systems::crew::derive(&state),
            recommendations: advisory::recommend(&state, &metrics),
            log: self.log.entries().to_vec(),
            state,
            metrics,
        }
    }

    fn note(&mut self, source: LogSource, message: impl Into<String>) {
        let hours = self.engine.state().current_time;
        self.log.record(hours, source, message, LogPriority::Info);
    }
}

fn lookup_trajectory(id: &str) -> Result<Trajectory, AppError> {
    catalog::trajectory(id).ok_or_else(|| AppError::UnknownTrajectory(id.to_string()))
}
