//! Core types and definitions for the ODIN mission simulator.
//!
//! This crate defines the vocabulary shared across all other crates:
//! trajectories, hazards, state snapshots, commands, log events, and constants.
//! It has no dependency on any runtime or scheduling framework.

pub mod catalog;
pub mod commands;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod hazard;
pub mod state;
pub mod trajectory;
pub mod types;

pub use error::TrajectoryError;
pub use hazard::Hazard;
pub use state::{LiveMetrics, MissionSnapshot, SimulationState};
pub use trajectory::Trajectory;

#[cfg(test)]
mod tests;
